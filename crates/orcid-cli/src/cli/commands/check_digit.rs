//! Check-digit command: compute the check symbol for a payload.

use anyhow::{anyhow, Context, Result};
use orcid_core::orcid::{OrcidId, PAYLOAD_LEN};

/// Print the check symbol and the full identifier URI for `raw` payload digits.
pub fn run_check_digit(raw: &str) -> Result<()> {
    let id = OrcidId::from_payload(parse_payload(raw)?)?;
    println!("{}  {}", id.check_symbol(), id);
    Ok(())
}

/// Parses exactly 15 decimal digits, ignoring hyphens.
pub(crate) fn parse_payload(raw: &str) -> Result<[u8; PAYLOAD_LEN]> {
    let digits = raw
        .chars()
        .filter(|&c| c != '-')
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .with_context(|| format!("not a decimal digit: {:?}", c))
        })
        .collect::<Result<Vec<u8>>>()?;
    let len = digits.len();
    digits
        .try_into()
        .map_err(|_| anyhow!("expected {} payload digits, got {}", PAYLOAD_LEN, len))
}
