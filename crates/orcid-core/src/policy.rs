//! The ORCID checksum rule as a named, configurable policy.

use crate::config::PolicyConfig;
use crate::orcid::{self, OrcidId};
use crate::report::{Severity, ValidationResult, Verdict};
use crate::value::UriValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrcidPolicy {
    pub name: String,
    pub severity: Severity,
    pub message: String,
}

impl Default for OrcidPolicy {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl OrcidPolicy {
    pub fn from_config(cfg: &PolicyConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            severity: cfg.severity,
            message: cfg.message.clone(),
        }
    }

    /// Evaluates the checksum rule against `value`.
    ///
    /// The failure message is the configured one followed by the concrete reason.
    pub fn evaluate<V: UriValue + ?Sized>(&self, value: &V) -> Verdict {
        if orcid::checksum_matches(value) {
            tracing::debug!(policy = %self.name, uri = value.uri(), "conforms");
            return Verdict::Conforms;
        }

        let reason = if !value.is_uri() {
            "value is not an IRI".to_string()
        } else {
            match value.uri().parse::<OrcidId>() {
                Err(e) => e.to_string(),
                Ok(_) => "checksum does not match".to_string(),
            }
        };
        tracing::debug!(policy = %self.name, uri = value.uri(), %reason, "fails");

        Verdict::Fails(ValidationResult {
            policy: self.name.clone(),
            severity: self.severity,
            message: format!("{}: {}", self.message, reason),
            focus: value.uri().to_string(),
        })
    }
}
