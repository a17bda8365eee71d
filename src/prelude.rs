//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    discounts::{CouponCheckout, TIER_CODES, tiered_rate, tiered_total},
    fixtures::{Fixture, FixtureError},
    items::Item,
    pricing::total_price,
    receipt::{Receipt, ReceiptError, ReceiptLine},
    session::{Selection, Session, SessionError},
    users::User,
};
