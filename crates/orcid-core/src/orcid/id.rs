//! Parsed, checksum-verified ORCID identifiers.

use super::error::ParseOrcidError;
use super::mod11_2;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Scheme, host and path prefix of every identifier URI.
pub const ORCID_PREFIX: &str = "https://orcid.org/";

/// Number of payload digits preceding the check symbol.
pub const PAYLOAD_LEN: usize = 15;

/// Full-string identifier URI pattern. Groups 1-4 capture the payload digits,
/// group 5 the check symbol.
static ORCID_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://orcid\.org/([0-9]{4})-([0-9]{4})-([0-9]{4})-([0-9]{3})([0-9X])$")
        .unwrap()
});

/// An ORCID identifier whose check symbol matches its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrcidId {
    digits: [u8; PAYLOAD_LEN],
    check: u8,
}

impl OrcidId {
    /// Builds an identifier from 15 payload digits, computing its check symbol.
    pub fn from_payload(digits: [u8; PAYLOAD_LEN]) -> Result<OrcidId, ParseOrcidError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(ParseOrcidError::InvalidDigit(bad));
        }
        Ok(OrcidId {
            digits,
            check: mod11_2::check_value(&digits),
        })
    }

    /// Check value in 0..=10.
    pub fn check_value(&self) -> u8 {
        self.check
    }

    pub fn check_symbol(&self) -> char {
        mod11_2::check_symbol(&self.digits)
    }

    /// The `XXXX-XXXX-XXXX-XXXY` form, without the URI prefix.
    pub fn path(&self) -> String {
        let mut out = String::with_capacity(19);
        for (i, d) in self.digits.iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push('-');
            }
            out.push(char::from(b'0' + d));
        }
        out.push(self.check_symbol());
        out
    }
}

impl FromStr for OrcidId {
    type Err = ParseOrcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ORCID_URI.captures(s).ok_or(ParseOrcidError::Shape)?;

        let mut digits = [0u8; PAYLOAD_LEN];
        let payload = (1..=4)
            .filter_map(|i| caps.get(i))
            .flat_map(|m| m.as_str().bytes());
        for (slot, b) in digits.iter_mut().zip(payload) {
            *slot = b - b'0';
        }

        let found = caps
            .get(5)
            .and_then(|m| m.as_str().chars().next())
            .ok_or(ParseOrcidError::Shape)?;
        let provided = mod11_2::value_of(found).ok_or(ParseOrcidError::Shape)?;

        let id = OrcidId::from_payload(digits)?;
        if id.check != provided {
            return Err(ParseOrcidError::ChecksumMismatch {
                expected: id.check_symbol(),
                found,
            });
        }
        Ok(id)
    }
}

impl fmt::Display for OrcidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ORCID_PREFIX, self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let id: OrcidId = "https://orcid.org/0000-0002-1825-0097".parse().unwrap();
        assert_eq!(id.check_value(), 7);
        assert_eq!(id.path(), "0000-0002-1825-0097");
        assert_eq!(id.to_string(), "https://orcid.org/0000-0002-1825-0097");
    }

    #[test]
    fn parse_x_check() {
        let id: OrcidId = "https://orcid.org/0000-0002-1694-233X".parse().unwrap();
        assert_eq!(id.check_value(), 10);
        assert_eq!(id.check_symbol(), 'X');
    }

    #[test]
    fn parse_mismatch_reports_expected() {
        let err = "https://orcid.org/0000-0002-1825-0098"
            .parse::<OrcidId>()
            .unwrap_err();
        assert_eq!(
            err,
            ParseOrcidError::ChecksumMismatch {
                expected: '7',
                found: '8'
            }
        );
        assert_eq!(err.to_string(), "check symbol is 8, expected 7");
    }

    #[test]
    fn parse_shape_errors() {
        for s in [
            "",
            "https://orcid.org/",
            "http://orcid.org/0000-0002-1825-0097",
            "https://orcid.org/0000-0002-1825-009x",
            "https://orcid.org/0000000218250097",
            "https://orcid.org/0000-0002-1825-00097",
            "https://orcidXorg/0000-0002-1825-0097",
            "https://orcid.org/0000-0002-1825-0097/",
            " https://orcid.org/0000-0002-1825-0097",
            "https://orcid.org/0000-0002-1825-0097\n",
            "https://orcid.org/0000-0002-1825-X097",
        ] {
            assert_eq!(s.parse::<OrcidId>(), Err(ParseOrcidError::Shape), "{s:?}");
        }
    }

    #[test]
    fn from_payload_rejects_non_digits() {
        let mut digits = [0u8; PAYLOAD_LEN];
        digits[3] = 12;
        assert_eq!(
            OrcidId::from_payload(digits),
            Err(ParseOrcidError::InvalidDigit(12))
        );
    }

    #[test]
    fn from_payload_renders_parseable_uri() {
        let digits = [0, 0, 0, 0, 0, 0, 0, 2, 1, 6, 9, 4, 2, 3, 3];
        let id = OrcidId::from_payload(digits).unwrap();
        assert_eq!(id.to_string(), "https://orcid.org/0000-0002-1694-233X");
        assert_eq!(id.to_string().parse::<OrcidId>(), Ok(id));
    }
}
