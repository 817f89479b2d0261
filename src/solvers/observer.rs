//! Search Observer

/// Observer trait for following a selector's search as it runs.
///
/// Callbacks fire in visitation order, so an observer sees the exact include-first traversal
/// that decides which of several equally good combinations is returned. All callbacks default
/// to doing nothing.
///
/// Totals are running totals in minor units (e.g., pence, cents).
pub trait SearchObserver {
    /// Called when the search enters the branch that includes the product at `index`.
    fn on_include(&mut self, _index: usize, _total_minor: i64) {}

    /// Called when the search enters the branch that excludes the product at `index`.
    fn on_exclude(&mut self, _index: usize, _total_minor: i64) {}

    /// Called for every complete combination (all products decided).
    ///
    /// `indices` are the catalog positions of the included products, ascending.
    fn on_candidate(&mut self, _indices: &[usize], _total_minor: i64) {}

    /// Called when a candidate replaces the incumbent best combination.
    fn on_improvement(&mut self, _indices: &[usize], _total_minor: i64) {}

    /// Called when a branch is discarded before the product at `index` is decided.
    fn on_prune(&mut self, _index: usize, _total_minor: i64) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that counts search events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Include branches entered
    pub includes: u64,

    /// Exclude branches entered
    pub excludes: u64,

    /// Complete combinations evaluated
    pub candidates: u64,

    /// Times the incumbent was replaced
    pub improvements: u64,

    /// Branches discarded by bounding
    pub prunes: u64,
}

impl SearchObserver for SearchStats {
    fn on_include(&mut self, _index: usize, _total_minor: i64) {
        self.includes += 1;
    }

    fn on_exclude(&mut self, _index: usize, _total_minor: i64) {
        self.excludes += 1;
    }

    fn on_candidate(&mut self, _indices: &[usize], _total_minor: i64) {
        self.candidates += 1;
    }

    fn on_improvement(&mut self, _indices: &[usize], _total_minor: i64) {
        self.improvements += 1;
    }

    fn on_prune(&mut self, _index: usize, _total_minor: i64) {
        self.prunes += 1;
    }
}
