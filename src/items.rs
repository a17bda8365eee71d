//! Items

use rust_decimal::Decimal;

/// An unprocessed item with a price.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    label: Option<String>,
    price: Decimal,
}

impl Item {
    /// Creates a new item with the given price.
    #[must_use]
    pub fn new(price: Decimal) -> Self {
        Item { label: None, price }
    }

    /// Creates a new item with a display label and a price.
    #[must_use]
    pub fn with_label(label: impl Into<String>, price: Decimal) -> Self {
        Item {
            label: Some(label.into()),
            price,
        }
    }

    /// Returns the label of the item, if the caller supplied one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the price of the item.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
