//! Carts

use rust_decimal::Decimal;

use crate::{items::Item, pricing::total_price};

/// An ordered collection of items pending checkout.
///
/// Items keep their insertion order and may appear more than once; within a
/// session the cart only ever grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a new cart with the given items.
    #[must_use]
    pub fn with_items(items: impl Into<Vec<Item>>) -> Self {
        Cart {
            items: items.into(),
        }
    }

    /// Appends an item to the end of the cart.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Calculates the subtotal of the cart.
    ///
    /// An empty cart subtotals to zero.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Returns the items in the cart, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
