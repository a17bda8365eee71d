//! Discounts
//!
//! The two checkout strategies: a tiered policy honoring a fixed set of
//! percentage codes, and a coupon strategy applying whatever percentage it
//! was built with.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{items::Item, pricing::total_price};

/// Discount codes recognized by the tiered checkout, in percent points.
pub const TIER_CODES: [u32; 3] = [10, 20, 50];

/// Looks up the discount rate for a tiered checkout code.
///
/// Only codes numerically equal to one of [`TIER_CODES`] carry a rate; any
/// other value (zero included) returns `None`.
#[must_use]
pub fn tiered_rate(code: Decimal) -> Option<Percentage> {
    TIER_CODES
        .into_iter()
        .find(|&tier| code == Decimal::from(tier))
        .map(|tier| Percentage::from(Decimal::from(tier) / Decimal::ONE_HUNDRED))
}

/// Totals a list of items under the tiered discount policy.
///
/// A recognized code subtracts its percentage from the total; an
/// unrecognized code is silently ignored and the undiscounted total comes
/// back.
#[must_use]
pub fn tiered_total(items: &[Item], code: Decimal) -> Decimal {
    let total = total_price(items);

    match tiered_rate(code) {
        Some(rate) => total - rate * total,
        None => total,
    }
}

/// A coupon checkout strategy holding an arbitrary percentage.
///
/// Unlike the tiered policy there is no recognized-code filter; whatever
/// value the coupon was built with comes off the total.
#[derive(Clone, Copy, Debug)]
pub struct CouponCheckout {
    coupon: Percentage,
}

impl CouponCheckout {
    /// Creates a strategy from a coupon value in percent points (15 is 15%).
    #[must_use]
    pub fn new(points: Decimal) -> Self {
        CouponCheckout {
            coupon: Percentage::from(points / Decimal::ONE_HUNDRED),
        }
    }

    /// Returns the coupon rate held by this strategy.
    #[must_use]
    pub fn coupon(&self) -> Percentage {
        self.coupon
    }

    /// Totals a list of items with the coupon applied.
    #[must_use]
    pub fn total(&self, items: &[Item]) -> Decimal {
        let total = total_price(items);

        total - self.coupon * total
    }
}
