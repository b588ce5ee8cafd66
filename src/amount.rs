//! Money is represented by a whole number of pence in [`i128`]. Amounts are
//! only ever shown to the user as pounds with [`DECIMALS`] decimal places.

use crate::prelude::*;
use std::fmt;

const DECIMALS: usize = 2;
const DECIMAL_MULTIPLIER: u128 = 10_u128.pow(DECIMALS as u32);

/// Formatted [`Pence`] of zero, which is also what any invalid input
/// formats as.
pub const ZERO: &str = "0.00";

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pence(pub i128);

impl Pence {
    /// Reads a count of pence, dropping any fractional pence. Anything that
    /// does not parse as an integer counts as zero pence.
    pub fn from_raw(value: &RawValue) -> Self {
        Self(value.integer().unwrap_or(0))
    }
}

/// Formats a count of pence as pounds. Non-finite amounts are zero pence.
///
/// ```rust
/// assert_eq!(format_amount(173), "1.73");
/// assert_eq!(format_amount("not a number"), "0.00");
/// ```
pub fn format_amount(value: impl Into<RawValue>) -> String {
    Pence::from_raw(&value.into()).to_string()
}

impl fmt::Display for Pence {
    /// ```rust
    /// assert_eq!(&Pence(10_85).to_string(), "10.85");
    /// assert_eq!(&Pence(-5).to_string(), "-0.05");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let decimal_part = magnitude % DECIMAL_MULTIPLIER;
        let integer_part = magnitude / DECIMAL_MULTIPLIER;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            integer_part,
            decimal_part,
            width = DECIMALS
        )
    }
}
