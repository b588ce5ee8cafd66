//! Normalizes whatever the giver typed as their tax band into a whole
//! percentage.

use crate::prelude::*;
use std::fmt;

/// Rates above this are not a percentage of anything.
const MAX_PERCENT: i128 = 100;

/// A whole-number percentage which has passed [`TaxRate::normalize`]. It is
/// never above 100, but zero and negative rates are let through untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaxRate(i64);

impl TaxRate {
    /// Standard income tax rate. The charity reclaims tax up to this rate and
    /// anything above it is for the giver to reclaim.
    pub const BASIC: TaxRate = TaxRate(20);

    /// Returns [`None`] if the input doesn't start with an integer or if
    /// it's above 100%.
    ///
    /// A genuine number strictly between 0 and 1 is taken to be a fraction,
    /// so `0.45` is 45%. Text is never scaled, hence `"0.45"` is 0%.
    pub fn normalize(raw: &RawValue) -> Option<Self> {
        let percent = match raw {
            RawValue::Number(fraction)
                if 0.0 < *fraction && *fraction < 1.0 =>
            {
                RawValue::Number(fraction * 100.0).integer()
            }
            _ => raw.integer(),
        }?;

        if percent > MAX_PERCENT {
            return None;
        }

        // only a negative rate can be out of range here
        Some(Self(i64::try_from(percent).unwrap_or(i64::MIN)))
    }

    pub fn percent(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
