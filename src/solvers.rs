//! Selectors for budget-constrained product combinations
//!
//! Given an ordered catalog and a spending limit, a selector finds the subset of products whose
//! combined price is as large as possible without exceeding the limit.
//!
//! Candidate subsets are visited depth-first with the "include" decision for each product tried
//! before the "exclude" decision. Only a strictly greater total replaces the incumbent, so among
//! several optimal subsets the one visited first wins: the one that keeps the earliest-indexed
//! products. Every selector in this module returns that same winner.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    products::Product,
    solvers::observer::{NoopObserver, SearchObserver},
};

pub mod bounded;
pub mod exhaustive;
pub mod observer;

mod state;

/// The winning combination of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorResult<'c, 'a> {
    /// Selected products, in catalog order
    pub selected: SmallVec<[&'c Product<'a>; 10]>,

    /// Catalog positions of the selected products, ascending
    pub indices: SmallVec<[usize; 10]>,

    /// Combined price of the selected products in minor units
    pub total_minor: i64,
}

impl<'c, 'a> SelectorResult<'c, 'a> {
    /// Number of selected products.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing was selected.
    ///
    /// This is the case both when no product fits the budget and when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over the selected products.
    pub fn iter(&self) -> impl Iterator<Item = &'c Product<'a>> + '_ {
        self.selected.iter().copied()
    }

    /// Combined price expressed in `currency`.
    pub fn total(&self, currency: &'a Currency) -> Money<'a, Currency> {
        Money::from_minor(self.total_minor, currency)
    }

    /// Clone the selected products out of the catalog.
    pub fn to_products(&self) -> Vec<Product<'a>> {
        self.iter().cloned().collect()
    }
}

/// Trait for choosing the best affordable combination of products
pub trait Selector {
    /// Select the best combination of `products` whose total does not exceed `budget_minor`.
    fn select<'c, 'a>(products: &'c [Product<'a>], budget_minor: i64) -> SelectorResult<'c, 'a> {
        Self::select_with_observer(products, budget_minor, &mut NoopObserver)
    }

    /// Select the best combination, reporting each search step to `observer`.
    fn select_with_observer<'c, 'a, O: SearchObserver>(
        products: &'c [Product<'a>],
        budget_minor: i64,
        observer: &mut O,
    ) -> SelectorResult<'c, 'a>;
}

/// Select the best combination of `products` for `budget_minor` with the exhaustive selector.
pub fn select<'c, 'a>(products: &'c [Product<'a>], budget_minor: i64) -> SelectorResult<'c, 'a> {
    exhaustive::ExhaustiveSelector::select(products, budget_minor)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn empty_catalog_selects_nothing_with_zero_total() {
        let products: [Product<'static>; 0] = [];

        let result = select(&products, 500);

        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.total(USD), Money::from_minor(0, USD));
    }

    #[test]
    fn to_products_clones_in_catalog_order() {
        let products = [
            Product::new(1, "A", Money::from_minor(100, USD)),
            Product::new(2, "B", Money::from_minor(150, USD)),
            Product::new(3, "C", Money::from_minor(200, USD)),
        ];

        let result = select(&products, 300);
        let ids: Vec<u32> = result.to_products().iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 3]);
        assert_eq!(result.total(USD), Money::from_minor(300, USD));
    }
}
