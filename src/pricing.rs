//! Prices

use rust_decimal::Decimal;

use crate::items::Item;

/// Calculates the total price of a list of items.
///
/// Prices are summed in order; an empty list totals to zero.
#[must_use]
pub fn total_price(items: &[Item]) -> Decimal {
    items.iter().map(Item::price).sum()
}
