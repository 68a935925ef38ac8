//! Error type for ORCID identifier parsing.

use thiserror::Error;

/// Why a string is not a valid ORCID identifier URI.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseOrcidError {
    /// Does not match `https://orcid.org/XXXX-XXXX-XXXX-XXXY`.
    #[error("not an ORCID identifier URI (expected https://orcid.org/XXXX-XXXX-XXXX-XXXX)")]
    Shape,
    /// Well-formed, but the check symbol disagrees with the payload digits.
    #[error("check symbol is {found}, expected {expected}")]
    ChecksumMismatch { expected: char, found: char },
    /// A payload digit passed to the generator was not a decimal digit.
    #[error("payload digit out of range: {0}")]
    InvalidDigit(u8),
}
