//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// One line of a receipt: a cart item's label and price.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptLine {
    label: Option<String>,
    price: Decimal,
}

impl ReceiptLine {
    /// Returns the label of the line, if the item carried one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the price of the line.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Final receipt for a checked-out cart.
#[derive(Clone, Debug)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    subtotal: Decimal,
    total: Decimal,
}

impl Receipt {
    /// Builds a receipt from a cart and the total its checkout produced.
    #[must_use]
    pub fn from_cart(cart: &Cart, total: Decimal) -> Self {
        let lines = cart
            .iter()
            .map(|item| ReceiptLine {
                label: item.label().map(str::to_string),
                price: item.price(),
            })
            .collect();

        Receipt {
            lines,
            subtotal: cart.subtotal(),
            total,
        }
    }

    /// Receipt lines in cart order.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any discount.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total amount payable.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Calculates the savings the discount produced.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.subtotal - self.total
    }

    /// Calculates the savings as a percentage of the subtotal.
    ///
    /// A zero subtotal reports zero savings.
    #[must_use]
    pub fn savings_percent(&self) -> Percentage {
        if self.subtotal == Decimal::ZERO {
            return Percentage::from(Decimal::ZERO);
        }

        Percentage::from(self.savings() / self.subtotal)
    }

    /// Writes the receipt as an itemized table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::IO`] if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Price"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.label().unwrap_or("Item").to_string(),
                line.price().to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let savings_points = percent_points(self.savings_percent());

        writeln!(out, " Subtotal: {}", self.subtotal).map_err(|_err| ReceiptError::IO)?;

        writeln!(out, "  Savings: ({savings_points:.2}%) {}", self.savings())
            .map_err(|_err| ReceiptError::IO)?;

        writeln!(out, "    Total: {}", self.total).map_err(|_err| ReceiptError::IO)
    }
}

/// Converts a fractional percentage to percent points for display.
fn percent_points(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    (percentage * Decimal::ONE_HUNDRED).round_dp(2)
}
