//! Cart

use std::collections::BTreeMap;

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

/// Errors related to cart quantities and totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A quantity or line total is too large to represent.
    #[error("Quantity or line total for product {product} overflows")]
    QuantityOverflow {
        /// Product on the overflowing line
        product: ProductId,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A cart line: a catalog product and the quantity chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine<'c, 'a> {
    /// The product on this line
    pub product: &'c Product<'a>,

    /// Chosen quantity, always positive
    pub quantity: u32,
}

impl<'a> CartLine<'_, 'a> {
    /// Price of the line (unit price times quantity).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the total does not fit in minor units.
    pub fn total(&self) -> Result<Money<'a, Currency>, CartError> {
        let minor = self
            .product
            .price_minor()
            .checked_mul(i64::from(self.quantity))
            .ok_or(CartError::QuantityOverflow {
                product: self.product.id,
            })?;

        Ok(Money::from_minor(minor, self.product.price.currency()))
    }
}

/// In-memory cart holding a positive quantity per product id.
///
/// A product with no quantity is simply absent from the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    quantities: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, returning the new quantity.
    pub fn add(&mut self, product: ProductId) -> u32 {
        let quantity = self.quantities.entry(product).or_insert(0);

        *quantity = quantity.saturating_add(1);

        debug!(%product, quantity = *quantity, "added product to cart");

        *quantity
    }

    /// Set the quantity of a product. A quantity of zero or less removes it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity does not fit in a `u32`; the cart
    /// is left unchanged.
    pub fn update_quantity(&mut self, product: ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove(product);

            return Ok(());
        }

        let quantity =
            u32::try_from(quantity).map_err(|_err| CartError::QuantityOverflow { product })?;

        self.quantities.insert(product, quantity);

        debug!(%product, quantity, "updated cart quantity");

        Ok(())
    }

    /// Remove a product entirely, returning the quantity it had.
    pub fn remove(&mut self, product: ProductId) -> Option<u32> {
        let removed = self.quantities.remove(&product);

        if removed.is_some() {
            debug!(%product, "removed product from cart");
        }

        removed
    }

    /// Quantity held for a product, if any.
    pub fn quantity(&self, product: ProductId) -> Option<u32> {
        self.quantities.get(&product).copied()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Resolve the cart against a catalog, in ascending product id order.
    ///
    /// Ids that are not in the catalog are skipped.
    pub fn lines<'c, 'a>(&self, catalog: &'c Catalog<'a>) -> Vec<CartLine<'c, 'a>> {
        self.quantities
            .iter()
            .filter_map(|(&id, &quantity)| {
                catalog
                    .get(id)
                    .map(|product| CartLine { product, quantity })
            })
            .collect()
    }

    /// Total price of every resolvable line.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if a line overflows or the money arithmetic fails.
    pub fn subtotal<'a>(&self, catalog: &Catalog<'a>) -> Result<Money<'a, Currency>, CartError> {
        self.lines(catalog)
            .iter()
            .try_fold(Money::from_minor(0, catalog.currency()), |acc, line| {
                Ok(acc.add(line.total()?)?)
            })
    }
}
