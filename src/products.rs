//! Products

use std::fmt;

use rust_decimal::RoundingStrategy;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::pricing::minor_units_rounded;

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Creates a new product.
    pub fn new(id: u32, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
        }
    }

    /// Returns the price in minor units (pence, cents).
    ///
    /// A fraction of a minor unit rounds up, so the price is never understated.
    pub fn price_minor(&self) -> i64 {
        minor_units_rounded(&self.price, RoundingStrategy::ToPositiveInfinity)
    }
}
