//! CLI command handlers, one per file.

mod check;
mod check_digit;

pub use check::run_check;
pub use check_digit::run_check_digit;

#[cfg(test)]
pub(crate) use check::render;
#[cfg(test)]
pub(crate) use check_digit::parse_payload;
