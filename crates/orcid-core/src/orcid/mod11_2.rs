//! ISO 7064 MOD 11-2 check characters.

const MODULUS: u32 = 11;

/// Computes the MOD 11-2 check value (0..=10) over `digits`, most significant first.
///
/// Each step is `total = 2 * (total + d)`; the running total is kept reduced
/// mod 11, which leaves the final residue unchanged. Order matters: swapping
/// two digits generally changes the result.
pub fn check_value(digits: &[u8]) -> u8 {
    let total = digits
        .iter()
        .fold(0u32, |t, &d| (2 * (t + u32::from(d))) % MODULUS);
    ((MODULUS + 1 - total) % MODULUS) as u8
}

/// Check symbol for `digits`: `0`..`9`, or `X` for 10.
pub fn check_symbol(digits: &[u8]) -> char {
    symbol(check_value(digits))
}

/// Value to symbol; `value` is at most 10 here.
fn symbol(value: u8) -> char {
    match value {
        10 => 'X',
        v => char::from(b'0' + v),
    }
}

/// Maps a check symbol to its value. Only uppercase `X` stands for 10.
pub fn value_of(symbol: char) -> Option<u8> {
    match symbol {
        'X' => Some(10),
        c => c.to_digit(10).map(|d| d as u8),
    }
}
