//! ORCID identifier checksum validation.
//!
//! An identifier URI looks like `https://orcid.org/0000-0002-1825-0097`: fifteen
//! payload digits in hyphenated blocks of four, followed by a check symbol
//! computed with ISO 7064 MOD 11-2 (`0`..`9`, or `X` for ten).

mod error;
mod id;
pub mod mod11_2;

pub use error::ParseOrcidError;
pub use id::{OrcidId, ORCID_PREFIX, PAYLOAD_LEN};

use crate::value::UriValue;

/// Returns true iff `value` is a URI of ORCID identifier shape whose check
/// symbol matches its payload.
///
/// Total: non-URI values, malformed URIs and checksum mismatches all yield
/// `false`. Nothing is raised.
///
/// # Examples
///
/// - `https://orcid.org/0000-0002-1825-0097` → `true`
/// - `https://orcid.org/0000-0002-1825-0098` → `false`
pub fn checksum_matches<V: UriValue + ?Sized>(value: &V) -> bool {
    if !value.is_uri() {
        tracing::trace!("orcid checksum: value is not a URI");
        return false;
    }
    match value.uri().parse::<OrcidId>() {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!(uri = value.uri(), "orcid checksum: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Term;

    struct Raw {
        is_uri: bool,
        uri: &'static str,
    }

    impl UriValue for Raw {
        fn is_uri(&self) -> bool {
            self.is_uri
        }

        fn uri(&self) -> &str {
            self.uri
        }
    }

    #[test]
    fn valid_iri() {
        assert!(checksum_matches(&Term::Iri(
            "https://orcid.org/0000-0002-1825-0097".into()
        )));
    }

    #[test]
    fn non_uri_rejected_even_with_valid_text() {
        let v = Raw {
            is_uri: false,
            uri: "https://orcid.org/0000-0002-1825-0097",
        };
        assert!(!checksum_matches(&v));
        assert!(!checksum_matches(&Term::Literal(
            "https://orcid.org/0000-0002-1825-0097".into()
        )));
    }

    #[test]
    fn wrong_check_symbol() {
        let v = Raw {
            is_uri: true,
            uri: "https://orcid.org/0000-0002-1825-0098",
        };
        assert!(!checksum_matches(&v));
    }

    #[test]
    fn works_through_trait_objects() {
        let v: &dyn UriValue = &Raw {
            is_uri: true,
            uri: "https://orcid.org/0000-0002-1694-233X",
        };
        assert!(checksum_matches(v));
    }
}
