//! Rule outcomes in the shape a validation report expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a failed rule is. Only violations block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    #[default]
    Violation,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Violation => "Violation",
        };
        f.write_str(s)
    }
}

/// One failed rule against one focus value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Name of the policy that produced this result.
    pub policy: String,
    pub severity: Severity,
    pub message: String,
    /// The value that was checked, as given.
    pub focus: String,
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.severity, self.message, self.policy, self.focus
        )
    }
}

/// Outcome of evaluating a policy against a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Conforms,
    Fails(ValidationResult),
}

impl Verdict {
    pub fn conforms(&self) -> bool {
        matches!(self, Verdict::Conforms)
    }

    /// True when the value fails with violation severity.
    pub fn is_blocking(&self) -> bool {
        match self {
            Verdict::Conforms => false,
            Verdict::Fails(r) => r.severity == Severity::Violation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(severity: Severity) -> ValidationResult {
        ValidationResult {
            policy: "orcid-checksum".into(),
            severity,
            message: "bad checksum".into(),
            focus: "https://orcid.org/0000-0002-1825-0098".into(),
        }
    }

    #[test]
    fn display_result() {
        assert_eq!(
            result(Severity::Warning).to_string(),
            "Warning: bad checksum [orcid-checksum] https://orcid.org/0000-0002-1825-0098"
        );
    }

    #[test]
    fn only_violation_blocks() {
        assert!(!Verdict::Conforms.is_blocking());
        assert!(Verdict::Conforms.conforms());
        assert!(!Verdict::Fails(result(Severity::Info)).is_blocking());
        assert!(!Verdict::Fails(result(Severity::Warning)).is_blocking());
        assert!(Verdict::Fails(result(Severity::Violation)).is_blocking());
    }

    #[test]
    fn severity_serde_lowercase() {
        let json = serde_json::to_string(&result(Severity::Info)).unwrap();
        assert!(json.contains(r#""severity":"info""#));
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.severity, Severity::Info);
    }
}
