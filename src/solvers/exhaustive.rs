//! Exhaustive Selector

use crate::{
    products::Product,
    solvers::{
        Selector, SelectorResult,
        observer::SearchObserver,
        state::{Pruning, search},
    },
};

/// Visits every affordable combination of products.
///
/// The only pruning is refusing to include a product that would push the running total over
/// the budget, so the search costs `O(2^n)` in the worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSelector;

impl Selector for ExhaustiveSelector {
    fn select_with_observer<'c, 'a, O: SearchObserver>(
        products: &'c [Product<'a>],
        budget_minor: i64,
        observer: &mut O,
    ) -> SelectorResult<'c, 'a> {
        search(products, budget_minor, Pruning::IncludeGate, observer)
    }
}
