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

//! State limit monitor
//!
//! Without pruning a level doubles at every item, so memory is the first
//! budget a large instance runs into. `StateLimitMonitor` stops the search
//! before an expansion whose output could exceed `max_states`.

use crate::{
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    num::SolverFloat,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{allocation::Allocation, valuation::Valuation};

/// A monitor that terminates the search when the next level could hold more
/// than `max_states` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateLimitMonitor {
    max_states: usize,
}

impl StateLimitMonitor {
    #[inline(always)]
    pub fn new(max_states: usize) -> Self {
        Self { max_states }
    }

    #[inline(always)]
    pub fn max_states(&self) -> usize {
        self.max_states
    }
}

impl<T> SearchMonitor<T> for StateLimitMonitor
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "StateLimitMonitor"
    }

    fn on_enter_search(&mut self, _valuation: &Valuation<T>, _statistics: &BnbStatistics<T>) {}

    fn on_exit_search(&mut self, _statistics: &BnbStatistics<T>) {}

    fn search_command(
        &mut self,
        _depth: usize,
        level: &[AllocationState<T>],
        _statistics: &BnbStatistics<T>,
    ) -> SearchCommand {
        let next_width = level.len().saturating_mul(2);
        if next_width > self.max_states {
            return SearchCommand::Terminate(format!(
                "state limit of {} exceeded",
                self.max_states
            ));
        }
        SearchCommand::Continue
    }

    fn on_level_expanded(
        &mut self,
        _depth: usize,
        _level: &[AllocationState<T>],
        _statistics: &BnbStatistics<T>,
    ) {
    }

    fn on_prune(
        &mut self,
        _depth: usize,
        _reason: PruneReason,
        _removed: usize,
        _statistics: &BnbStatistics<T>,
    ) {
    }

    fn on_fallback(&mut self, _depth: usize, _statistics: &BnbStatistics<T>) {}

    fn on_solution_found(&mut self, _allocation: &Allocation<T>, _statistics: &BnbStatistics<T>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_before_doubling_past_limit() {
        let mut monitor = StateLimitMonitor::new(4);
        let stats = BnbStatistics::<f64>::default();
        let two = vec![AllocationState::<f64>::root(3); 2];
        let three = vec![AllocationState::<f64>::root(3); 3];

        assert_eq!(monitor.search_command(1, &two, &stats), SearchCommand::Continue);
        assert_eq!(
            monitor.search_command(2, &three, &stats),
            SearchCommand::Terminate("state limit of 4 exceeded".into())
        );
    }
}
