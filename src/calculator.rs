//! Works out how much tax the charity and the giver can each reclaim on a
//! gift. Never fails: anything that can't be read as a gift is no gift, and
//! anything that can't be read as a rate is the basic rate.

use crate::amount::{self, format_amount, Pence};
use crate::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Every monetary field is already formatted for display as pounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftAid {
    gross_gift: String,
    tax_rate: i64,
    charity_claims: String,
    giver_claims: String,
    net_gift_given: String,
    net_gift_received: String,
}

impl GiftAid {
    pub fn gross_gift(&self) -> &str {
        &self.gross_gift
    }

    /// The rate the gift was calculated at, after any fallback.
    pub fn tax_rate(&self) -> i64 {
        self.tax_rate
    }

    pub fn charity_claims(&self) -> &str {
        &self.charity_claims
    }

    pub fn giver_claims(&self) -> &str {
        &self.giver_claims
    }

    /// What the gift costs the giver after their own reclaim.
    pub fn net_gift_given(&self) -> &str {
        &self.net_gift_given
    }

    /// What the gift is worth to the charity after its reclaim.
    pub fn net_gift_received(&self) -> &str {
        &self.net_gift_received
    }

    /// Only higher rate payers have anything to claim for themselves.
    pub fn giver_can_claim(&self) -> bool {
        self.giver_claims != amount::ZERO
    }
}

/// Given the gross gift in pounds and the giver's tax band, calculates what
/// each party can reclaim.
pub fn calculate_gift_aid(
    gross_gift: &RawValue,
    tax_rate: &RawValue,
) -> GiftAid {
    let tax_rate = match TaxRate::normalize(tax_rate) {
        Some(rate) if !rate.is_zero() => rate,
        // a rate of exactly zero falls back as well
        _ => {
            debug!(?tax_rate, "Falling back to the basic rate");
            TaxRate::BASIC
        }
    };

    // the charity can reclaim tax only up to the basic rate
    let charity_claim_tax_rate = tax_rate.min(TaxRate::BASIC);

    let gross_pence =
        RawValue::Number(gross_gift.number() * 100.0).integer().unwrap_or(0);

    let gross = gross_pence as f64;
    let charity_percent = charity_claim_tax_rate.percent() as f64;
    let giver_percent = tax_rate.percent() as f64;

    // grosses up the gift by the tax which was deducted at the charity's rate
    let charity_claim = gross * charity_percent / (100.0 - charity_percent);
    let net_gift_received = gross + charity_claim;

    let giver_claim = if charity_claim_tax_rate < tax_rate {
        net_gift_received * giver_percent / 100.0 - charity_claim
    } else {
        0.0
    };
    let net_gift_given = gross - giver_claim;

    debug!(
        gross_pence,
        tax_rate = %tax_rate,
        charity_claim,
        giver_claim,
        "Calculated gift aid"
    );

    GiftAid {
        gross_gift: Pence(gross_pence).to_string(),
        tax_rate: tax_rate.percent(),
        charity_claims: format_amount(charity_claim),
        giver_claims: format_amount(giver_claim),
        net_gift_given: format_amount(net_gift_given),
        net_gift_received: format_amount(net_gift_received),
    }
}
