//! Catalog

use rust_decimal::RoundingStrategy;
use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::minor_units_rounded,
    products::{Product, ProductId},
    solvers::{
        Selector, SelectorResult, bounded::BoundedSelector, exhaustive::ExhaustiveSelector,
    },
};

/// Errors related to catalog construction or queries.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A product's currency differs from the catalog currency (index, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Two products share the same id.
    #[error("Product id {0} appears more than once")]
    DuplicateId(ProductId),

    /// A product's price includes a fraction of the currency's minor unit.
    #[error("Product {0} has a price finer than the currency's minor unit")]
    FractionalPrice(ProductId),

    /// A product's price does not fit in minor units.
    #[error("Product {0} has a price too large to represent in minor units")]
    PriceOutOfRange(ProductId),

    /// The budget is expressed in a currency other than the catalog's.
    #[error("Budget has currency {budget}, but catalog has currency {catalog}")]
    BudgetCurrencyMismatch {
        /// Budget currency code
        budget: &'static str,

        /// Catalog currency code
        catalog: &'static str,
    },
}

/// An ordered, single-currency list of purchasable products.
///
/// The order of products is significant: it is the order in which a selector decides on each
/// product, and therefore which of several equally priced combinations it returns.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    positions: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a new, empty catalog.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: Vec::new(),
            positions: FxHashMap::default(),
            currency,
        }
    }

    /// Create a new catalog with the given products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if a product has a different currency, reuses an id, or has a
    /// price that is not a whole number of minor units.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut positions = FxHashMap::default();

        for (i, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    i,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            product.price.try_to_minor_units().map_err(|err| match err {
                MoneyError::PrecisionLoss => CatalogError::FractionalPrice(product.id),
                _ => CatalogError::PriceOutOfRange(product.id),
            })?;

            if positions.insert(product.id, i).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Catalog {
            products,
            positions,
            currency,
        })
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.positions
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// The products in catalog order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Find the most expensive combination of products that fits within `budget`.
    ///
    /// A budget with a fraction of a minor unit is rounded down to whole minor units.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BudgetCurrencyMismatch`] if the budget is not in the catalog currency.
    pub fn best_combination(
        &self,
        budget: &Money<'_, Currency>,
    ) -> Result<SelectorResult<'_, 'a>, CatalogError> {
        self.best_combination_with::<ExhaustiveSelector>(budget)
    }

    /// Find the best combination with the branch-and-bound selector.
    ///
    /// Returns the same combination as [`Catalog::best_combination`], usually after visiting far
    /// fewer candidates.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BudgetCurrencyMismatch`] if the budget is not in the catalog currency.
    pub fn best_combination_bounded(
        &self,
        budget: &Money<'_, Currency>,
    ) -> Result<SelectorResult<'_, 'a>, CatalogError> {
        self.best_combination_with::<BoundedSelector>(budget)
    }

    /// Find the best combination with the given selector.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BudgetCurrencyMismatch`] if the budget is not in the catalog currency.
    pub fn best_combination_with<S: Selector>(
        &self,
        budget: &Money<'_, Currency>,
    ) -> Result<SelectorResult<'_, 'a>, CatalogError> {
        let budget_currency = budget.currency();

        if budget_currency != self.currency {
            return Err(CatalogError::BudgetCurrencyMismatch {
                budget: budget_currency.iso_alpha_code,
                catalog: self.currency.iso_alpha_code,
            });
        }

        let budget_minor = minor_units_rounded(budget, RoundingStrategy::ToNegativeInfinity);

        Ok(S::select(&self.products, budget_minor))
    }
}
