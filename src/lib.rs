//! Tally
//!
//! Tally is a small, deterministic shopping-cart and checkout library written in Rust.

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod session;
pub mod users;
