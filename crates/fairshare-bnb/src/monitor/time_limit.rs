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

//! Time limit monitor
//!
//! `TimeLimitMonitor` enforces a wall-clock budget. The clock is reset when
//! the search starts and read before every level, which is coarse enough
//! that no step mask is needed: each level is a full sweep over its states.

use crate::{
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    num::SolverFloat,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{allocation::Allocation, valuation::Valuation};
use std::time::{Duration, Instant};

/// A monitor that terminates the search once `time_limit` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
}

impl TimeLimitMonitor {
    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
        }
    }

    #[inline(always)]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _valuation: &Valuation<T>, _statistics: &BnbStatistics<T>) {
        self.start_time = Instant::now();
    }

    fn on_exit_search(&mut self, _statistics: &BnbStatistics<T>) {}

    fn search_command(
        &mut self,
        _depth: usize,
        _level: &[AllocationState<T>],
        _statistics: &BnbStatistics<T>,
    ) -> SearchCommand {
        if self.start_time.elapsed() >= self.time_limit {
            return SearchCommand::Terminate("time limit exceeded".to_string());
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
    fn test_zero_limit_terminates_immediately() {
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        let stats = BnbStatistics::<f64>::default();
        let valuation = Valuation::new(vec![1.0], vec![2.0]).unwrap();
        monitor.on_enter_search(&valuation, &stats);
        assert_eq!(
            monitor.search_command(0, &[], &stats),
            SearchCommand::Terminate("time limit exceeded".into())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600));
        let stats = BnbStatistics::<f64>::default();
        assert_eq!(
            SearchMonitor::<f64>::search_command(&mut monitor, 0, &[], &stats),
            SearchCommand::Continue
        );
        assert_eq!(monitor.time_limit(), Duration::from_secs(3600));
    }
}
