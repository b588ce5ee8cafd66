pub use crate::raw::RawValue;
pub use crate::tax_rate::TaxRate;
pub use anyhow::{anyhow, Context, Result};
