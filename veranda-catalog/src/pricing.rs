use serde::Serialize;

use crate::room::{OccupancyTier, Room};

/// Resolve the nightly rate for a room at the given occupancy tier.
///
/// Lookup order: the tier entry in the room's pricing table, then the flat
/// base price. Defined for every tier; an unpriced tier is never an error.
pub fn nightly_rate(room: &Room, tier: OccupancyTier) -> f64 {
    room.pricing
        .as_ref()
        .and_then(|p| p.rate(tier))
        .unwrap_or(room.base_price)
}

/// Cost breakdown for a stay. Values are plain amounts in the hotel's single
/// currency; no rounding is applied.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StayQuote {
    pub nightly_rate: f64,
    pub nights: i64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute the quote for `nights` nights at `nightly_rate`, with tax applied
/// on top of the subtotal.
pub fn stay_quote(nightly_rate: f64, nights: i64, tax_rate: f64) -> StayQuote {
    let subtotal = nightly_rate * nights as f64;
    let tax = subtotal * tax_rate;
    StayQuote {
        nightly_rate,
        nights,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
