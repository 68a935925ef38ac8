//! Check command: evaluate the ORCID checksum policy against one value.

use anyhow::Result;
use orcid_core::policy::OrcidPolicy;
use orcid_core::report::Verdict;
use orcid_core::value::Term;

/// Evaluate `raw` and print the outcome. Returns false when the failure is blocking.
pub fn run_check(policy: &OrcidPolicy, raw: &str, literal: bool, json: bool) -> Result<bool> {
    let term = if literal {
        Term::Literal(raw.to_string())
    } else {
        Term::classify(raw)
    };
    tracing::debug!(kind = term.kind(), "checking {}", raw);

    let verdict = policy.evaluate(&term);
    tracing::info!(
        policy = %policy.name,
        conforms = verdict.conforms(),
        blocking = verdict.is_blocking(),
        "checked {}",
        raw
    );
    println!("{}", render(&verdict, raw, json)?);
    Ok(!verdict.is_blocking())
}

pub(crate) fn render(verdict: &Verdict, raw: &str, json: bool) -> Result<String> {
    let out = match (verdict, json) {
        (Verdict::Conforms, false) => format!("ok  {}", raw),
        (Verdict::Conforms, true) => {
            serde_json::json!({ "conforms": true, "focus": raw }).to_string()
        }
        (Verdict::Fails(result), false) => result.to_string(),
        (Verdict::Fails(result), true) => {
            let mut value = serde_json::to_value(result)?;
            value["conforms"] = serde_json::Value::Bool(false);
            value.to_string()
        }
    };
    Ok(out)
}
