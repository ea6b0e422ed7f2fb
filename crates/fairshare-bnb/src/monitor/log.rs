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

//! Progress logging through `tracing`
//!
//! `LogMonitor` emits `info` events at the start and end of a run and, at most
//! once per `log_interval`, after a level has been expanded. Prune and
//! fallback events are reported at `debug` level.

use crate::{
    monitor::search_monitor::{PruneReason, SearchMonitor},
    num::SolverFloat,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{allocation::Allocation, index::Agent, valuation::Valuation};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    num_items: usize,
}

impl LogMonitor {
    pub fn new(log_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            num_items: 0,
        }
    }

    #[inline(always)]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {:.1}s)",
            self.log_interval.as_secs_f32()
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, valuation: &Valuation<T>, statistics: &BnbStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.num_items = valuation.num_items();
        info!(
            items = valuation.num_items(),
            baseline = %statistics.baseline_value,
            "search started"
        );
    }

    fn on_exit_search(&mut self, statistics: &BnbStatistics<T>) {
        info!(
            elapsed = ?self.start_time.elapsed(),
            levels = statistics.levels_completed,
            generated = statistics.states_generated,
            pruned = statistics.prunings_total(),
            "search finished"
        );
    }

    fn on_level_expanded(
        &mut self,
        depth: usize,
        level: &[AllocationState<T>],
        statistics: &BnbStatistics<T>,
    ) {
        let now = Instant::now();
        if now.duration_since(self.last_log_time) < self.log_interval {
            return;
        }
        self.last_log_time = now;
        info!(
            elapsed = ?now.duration_since(self.start_time),
            item = depth,
            of = self.num_items,
            width = level.len(),
            generated = statistics.states_generated,
            pruned = statistics.prunings_total(),
            "level expanded"
        );
    }

    fn on_prune(
        &mut self,
        depth: usize,
        reason: PruneReason,
        removed: usize,
        _statistics: &BnbStatistics<T>,
    ) {
        debug!(item = depth, %reason, removed, "states pruned");
    }

    fn on_fallback(&mut self, depth: usize, statistics: &BnbStatistics<T>) {
        info!(
            item = depth,
            baseline = %statistics.baseline_value,
            "level emptied, falling back to baseline allocation"
        );
    }

    fn on_solution_found(&mut self, allocation: &Allocation<T>, _statistics: &BnbStatistics<T>) {
        info!(
            total0 = %allocation.total(Agent::First),
            total1 = %allocation.total(Agent::Second),
            "allocation chosen"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_display_and_default_interval() {
        let monitor = LogMonitor::default();
        assert_eq!(monitor.log_interval(), Duration::from_secs(1));
        assert_eq!(monitor.to_string(), "LogMonitor(log_interval: 1.0s)");
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_callbacks_emit_events() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut monitor = LogMonitor::new(Duration::ZERO);
        let stats = BnbStatistics::<f64>::default();
        let valuation = Valuation::new(vec![1.0, 2.0], vec![2.0, 1.0]).unwrap();
        let level = vec![AllocationState::root(2)];

        tracing::subscriber::with_default(subscriber, || {
            monitor.on_enter_search(&valuation, &stats);
            monitor.on_level_expanded(0, &level, &stats);
            monitor.on_prune(0, PruneReason::BoundDominated, 1, &stats);
            monitor.on_fallback(1, &stats);
            monitor.on_solution_found(&Allocation::empty(), &stats);
            monitor.on_exit_search(&stats);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("search started"));
        assert!(output.contains("items=2"));
        assert!(output.contains("level expanded"));
        assert!(output.contains("width=1"));
        assert!(output.contains("states pruned"));
        assert!(output.contains("falling back to baseline allocation"));
        assert!(output.contains("allocation chosen"));
        assert!(output.contains("search finished"));
    }

    #[test]
    fn test_level_events_are_throttled() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut monitor = LogMonitor::new(Duration::from_secs(3600));
        let stats = BnbStatistics::<f64>::default();
        let valuation = Valuation::new(vec![1.0], vec![1.0]).unwrap();
        let level = vec![AllocationState::root(1)];

        tracing::subscriber::with_default(subscriber, || {
            monitor.on_enter_search(&valuation, &stats);
            monitor.on_level_expanded(0, &level, &stats);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("search started"));
        assert!(!output.contains("level expanded"));
    }
}
