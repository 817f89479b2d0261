//! Quote

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{catalog::Catalog, products::Product, solvers::SelectorResult};

/// Errors that can occur when building or writing a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// The best combination of products for a budget, ready for display.
#[derive(Debug, Clone)]
pub struct Quote<'c, 'a> {
    /// Selected products, in catalog order
    products: SmallVec<[&'c Product<'a>; 10]>,

    /// Spending limit the selection was made for
    budget: Money<'a, Currency>,

    /// Combined price of the selected products
    total: Money<'a, Currency>,
}

impl<'c, 'a> Quote<'c, 'a> {
    /// Build a quote from a selector result.
    pub fn from_selection(
        catalog: &'c Catalog<'a>,
        budget: Money<'a, Currency>,
        result: SelectorResult<'c, 'a>,
    ) -> Self {
        Quote {
            total: result.total(catalog.currency()),
            products: result.selected,
            budget,
        }
    }

    /// Selected products, in catalog order.
    pub fn products(&self) -> &[&'c Product<'a>] {
        &self.products
    }

    /// Spending limit.
    pub fn budget(&self) -> Money<'a, Currency> {
        self.budget
    }

    /// Combined price of the selected products.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Budget left over after buying the selection.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn remaining(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.budget.sub(self.total)
    }

    /// Share of the budget spent by the selection.
    ///
    /// A budget of zero or less reports 0%.
    pub fn utilisation(&self) -> Percentage {
        if !self.budget.is_positive() {
            return Percentage::from(0.0);
        }

        let share = self
            .total
            .amount()
            .checked_div(*self.budget.amount())
            .unwrap_or(Decimal::ZERO);

        Percentage::from(share)
    }

    /// Writes the quote as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), QuoteError> {
        if self.products.is_empty() {
            writeln!(out, "\nNo combination of products fits a budget of {}", self.budget)
                .map_err(|_err| QuoteError::IO)?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Product", "Price"]);

        for (idx, product) in self.products.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                product.name.clone(),
                product.price.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| QuoteError::IO)?;

        let remaining = self.remaining()?;
        let utilisation_points = percent_points(self.utilisation());

        writeln!(out, " Budget:    {}", self.budget).map_err(|_err| QuoteError::IO)?;
        writeln!(out, " \x1b[1mTotal:     {}\x1b[0m", self.total).map_err(|_err| QuoteError::IO)?;
        writeln!(out, " Remaining: {remaining} ({utilisation_points:.2}% spent)")
            .map_err(|_err| QuoteError::IO)?;

        Ok(())
    }
}

/// Convert a fractional percentage (0.25) into percentage points (25.00).
fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}
