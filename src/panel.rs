//! The calculator panel shown to the giver. Each field of a [`GiftAid`] is
//! written into its own named output slot, and the giver's claim is only
//! shown when there is something to claim.

use crate::calculator::{calculate_gift_aid, GiftAid};
use crate::prelude::*;
use std::fmt;
use tracing::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    GrossGift,
    TaxRate,
    CharityClaims,
    /// Hidden unless the giver pays tax above the basic rate.
    GiverClaims,
    NetGiftGiven,
    NetGiftReceived,
}

impl Slot {
    /// In the order the panel lists them.
    pub const ALL: [Slot; 6] = [
        Slot::GrossGift,
        Slot::TaxRate,
        Slot::CharityClaims,
        Slot::GiverClaims,
        Slot::NetGiftGiven,
        Slot::NetGiftReceived,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::GrossGift => "gross-gift",
            Slot::TaxRate => "taxrate",
            Slot::CharityClaims => "charity-claims",
            Slot::GiverClaims => "giver-claims",
            Slot::NetGiftGiven => "net-gift-given",
            Slot::NetGiftReceived => "net-gift-received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    gift: GiftAid,
    show_giver_claims: bool,
}

impl Panel {
    pub fn render(gift: GiftAid) -> Self {
        // the toggle is settled before any slot is read
        let show_giver_claims = gift.giver_can_claim();

        Self {
            gift,
            show_giver_claims,
        }
    }

    /// Recalculates the panel after either input has been edited.
    pub fn update(&mut self, gross_gift: &RawValue, tax_rate: &RawValue) {
        *self = Self::render(calculate_gift_aid(gross_gift, tax_rate));

        debug!(
            show_giver_claims = self.show_giver_claims,
            "Panel updated"
        );
    }

    pub fn show_giver_claims(&self) -> bool {
        self.show_giver_claims
    }

    /// What the slot displays, whether or not it is currently shown.
    pub fn text(&self, slot: Slot) -> String {
        match slot {
            Slot::GrossGift => self.gift.gross_gift().to_owned(),
            Slot::TaxRate => self.gift.tax_rate().to_string(),
            Slot::CharityClaims => self.gift.charity_claims().to_owned(),
            Slot::GiverClaims => self.gift.giver_claims().to_owned(),
            Slot::NetGiftGiven => self.gift.net_gift_given().to_owned(),
            Slot::NetGiftReceived => self.gift.net_gift_received().to_owned(),
        }
    }

    /// Slots that are currently shown, along with their text.
    pub fn visible_slots(&self) -> impl Iterator<Item = (Slot, String)> + '_ {
        Slot::ALL
            .into_iter()
            .filter(move |slot| {
                *slot != Slot::GiverClaims || self.show_giver_claims()
            })
            .map(move |slot| (slot, self.text(slot)))
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, text) in self.visible_slots() {
            writeln!(f, "{:<18} {}", format!("{}:", slot.name()), text)?;
        }

        Ok(())
    }
}
