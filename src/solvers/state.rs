//! Depth-first search state shared by the selectors

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    products::Product,
    solvers::{SelectorResult, observer::SearchObserver},
};

/// How aggressively the search discards branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pruning {
    /// Only refuse to include a product that would exceed the budget.
    IncludeGate,

    /// Additionally skip branches that cannot strictly beat the incumbent, and stop once the
    /// incumbent spends the whole budget.
    BranchAndBound,
}

/// The edge taken to reach a pending decision.
#[derive(Debug, Clone, Copy)]
enum Branch {
    Root,
    Include(usize),
    Exclude(usize),
}

/// A pending decision about the product at `index`.
#[derive(Debug, Clone, Copy)]
struct Decision {
    index: usize,
    total: i64,
    depth: usize,
    branch: Branch,
}

/// Best combination found so far.
#[derive(Debug, Default)]
struct Incumbent {
    total: i64,
    indices: SmallVec<[usize; 10]>,
}

/// Run the include-first depth-first search over `products`.
///
/// Pending decisions live on an explicit stack; the exclude child is pushed before the include
/// child so the include branch is always popped (visited) first.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(products = products.len(), budget = budget, pruning = ?pruning)
)]
pub(super) fn search<'c, 'a, O: SearchObserver>(
    products: &'c [Product<'a>],
    budget: i64,
    pruning: Pruning,
    observer: &mut O,
) -> SelectorResult<'c, 'a> {
    let prices: SmallVec<[i64; 10]> = products.iter().map(Product::price_minor).collect();
    let remaining = remaining_totals(&prices);

    let mut best = Incumbent::default();
    let mut path: SmallVec<[usize; 10]> = SmallVec::new();
    let mut stack: Vec<Decision> = Vec::with_capacity(2 * prices.len() + 1);

    stack.push(Decision {
        index: 0,
        total: 0,
        depth: 0,
        branch: Branch::Root,
    });

    while let Some(decision) = stack.pop() {
        let Decision {
            index,
            total,
            depth,
            branch,
        } = decision;

        path.truncate(depth);

        match branch {
            Branch::Root => {}
            Branch::Include(product) => {
                path.push(product);
                observer.on_include(product, total);
            }
            Branch::Exclude(product) => observer.on_exclude(product, total),
        }

        let Some(&price) = prices.get(index) else {
            observer.on_candidate(&path, total);

            if total <= budget && total > best.total {
                best.total = total;
                best.indices.clone_from(&path);

                observer.on_improvement(&path, total);
            }

            continue;
        };

        if pruning == Pruning::BranchAndBound {
            if best.total == budget {
                break;
            }

            let ceiling = remaining
                .get(index)
                .map_or(total, |rest| total.saturating_add(*rest));

            if ceiling <= best.total {
                observer.on_prune(index, total);

                continue;
            }
        }

        let depth = path.len();

        stack.push(Decision {
            index: index + 1,
            total,
            depth,
            branch: Branch::Exclude(index),
        });

        if let Some(next) = total.checked_add(price).filter(|next| *next <= budget) {
            stack.push(Decision {
                index: index + 1,
                total: next,
                depth,
                branch: Branch::Include(index),
            });
        }
    }

    debug!(
        selected = best.indices.len(),
        total = best.total,
        "selection complete"
    );

    let selected = best
        .indices
        .iter()
        .filter_map(|&index| products.get(index))
        .collect();

    SelectorResult {
        selected,
        indices: best.indices,
        total_minor: best.total,
    }
}

/// `remaining[i]` is the combined price of `prices[i..]`, saturating on overflow.
fn remaining_totals(prices: &[i64]) -> SmallVec<[i64; 10]> {
    let mut remaining: SmallVec<[i64; 10]> = prices
        .iter()
        .rev()
        .scan(0_i64, |acc, price| {
            *acc = acc.saturating_add(*price);
            Some(*acc)
        })
        .collect();

    remaining.reverse();

    remaining
}
