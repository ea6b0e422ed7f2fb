// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! No-op search monitor
//!
//! `NoOperationMonitor` implements `SearchMonitor` with empty callbacks and
//! never stops the search. It is the default when no monitoring is wanted.

use crate::{
    monitor::search_monitor::{PruneReason, SearchMonitor},
    num::SolverFloat,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{allocation::Allocation, valuation::Valuation};

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOperationMonitor
where
    T: SolverFloat,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _valuation: &Valuation<T>, _statistics: &BnbStatistics<T>) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &BnbStatistics<T>) {}

    #[inline(always)]
    fn on_level_expanded(
        &mut self,
        _depth: usize,
        _level: &[AllocationState<T>],
        _statistics: &BnbStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        _depth: usize,
        _reason: PruneReason,
        _removed: usize,
        _statistics: &BnbStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_fallback(&mut self, _depth: usize, _statistics: &BnbStatistics<T>) {}

    #[inline(always)]
    fn on_solution_found(&mut self, _allocation: &Allocation<T>, _statistics: &BnbStatistics<T>) {}
}
