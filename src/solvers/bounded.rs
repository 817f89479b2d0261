//! Branch-and-bound Selector

use crate::{
    products::Product,
    solvers::{
        Selector, SelectorResult,
        observer::SearchObserver,
        state::{Pruning, search},
    },
};

/// Include-first search that skips branches which cannot strictly beat the incumbent.
///
/// A branch is discarded when its running total plus the price of every undecided product is
/// no greater than the best total found so far, and the search stops as soon as the best total
/// equals the budget. Neither rule can discard a strictly better combination, so the result is
/// the same combination [`ExhaustiveSelector`](super::exhaustive::ExhaustiveSelector) returns,
/// ties included.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedSelector;

impl Selector for BoundedSelector {
    fn select_with_observer<'c, 'a, O: SearchObserver>(
        products: &'c [Product<'a>],
        budget_minor: i64,
        observer: &mut O,
    ) -> SelectorResult<'c, 'a> {
        search(products, budget_minor, Pruning::BranchAndBound, observer)
    }
}
