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

use num_traits::Float;
use std::time::Duration;

/// Statistics collected during one run of the level-wise search.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbStatistics<T> {
    /// Items whose level was fully expanded and pruned.
    pub levels_completed: u64,
    /// Child states created by branching.
    pub states_generated: u64,
    /// States removed because an earlier state had the same totals.
    pub prunings_dominance: u64,
    /// States removed because their projection could not beat the baseline.
    pub prunings_bound: u64,
    /// The widest level seen after pruning.
    pub peak_level_width: u64,
    /// Times a level was emptied and the baseline allocation took over.
    pub fallbacks: u64,
    /// Objective value of the baseline allocation.
    pub baseline_value: T,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl<T> Default for BnbStatistics<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            levels_completed: 0,
            states_generated: 0,
            prunings_dominance: 0,
            prunings_bound: 0,
            peak_level_width: 0,
            fallbacks: 0,
            baseline_value: T::zero(),
            time_total: Duration::ZERO,
        }
    }
}

impl<T> BnbStatistics<T> {
    #[inline]
    pub fn on_states_generated(&mut self, count: usize) {
        self.states_generated = self.states_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_level_completed(&mut self, width: usize) {
        self.levels_completed = self.levels_completed.saturating_add(1);
        self.peak_level_width = self.peak_level_width.max(width as u64);
    }

    #[inline]
    pub fn on_pruning_dominance(&mut self, count: usize) {
        self.prunings_dominance = self.prunings_dominance.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self, count: usize) {
        self.prunings_bound = self.prunings_bound.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_fallback(&mut self) {
        self.fallbacks = self.fallbacks.saturating_add(1);
    }

    #[inline]
    pub fn set_baseline_value(&mut self, value: T) {
        self.baseline_value = value;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Total number of states removed by either pruner.
    #[inline]
    pub fn prunings_total(&self) -> u64 {
        self.prunings_dominance.saturating_add(self.prunings_bound)
    }
}

impl<T> std::fmt::Display for BnbStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fairshare-BnB Solver Statistics:")?;
        writeln!(f, "  Levels completed:     {}", self.levels_completed)?;
        writeln!(f, "  States generated:     {}", self.states_generated)?;
        writeln!(f, "  Peak level width:     {}", self.peak_level_width)?;
        writeln!(f, "  Prunings (dominance): {}", self.prunings_dominance)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Fallbacks:            {}", self.fallbacks)?;
        writeln!(f, "  Baseline value:       {}", self.baseline_value)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = BnbStatistics::<f64>::default();
        stats.on_states_generated(4);
        stats.on_states_generated(8);
        stats.on_pruning_dominance(3);
        stats.on_pruning_bound(2);
        stats.on_level_completed(5);
        stats.on_level_completed(3);
        stats.on_fallback();
        stats.set_baseline_value(1.5);

        assert_eq!(stats.states_generated, 12);
        assert_eq!(stats.prunings_total(), 5);
        assert_eq!(stats.levels_completed, 2);
        assert_eq!(stats.peak_level_width, 5);
        assert_eq!(stats.fallbacks, 1);
        assert_eq!(stats.baseline_value, 1.5);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbStatistics::<f64> {
            states_generated: u64::MAX - 1,
            ..Default::default()
        };
        stats.on_states_generated(10);
        assert_eq!(stats.states_generated, u64::MAX);
    }

    #[test]
    fn test_display_lists_all_counters() {
        let stats = BnbStatistics::<f64>::default();
        let text = stats.to_string();
        assert!(text.starts_with("Fairshare-BnB Solver Statistics:"));
        assert!(text.contains("Prunings (dominance): 0"));
        assert!(text.contains("Baseline value:       0"));
    }
}
