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

//! Monitoring combinators
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every event
//! to its children. This lets logging and early stopping be combined without
//! coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    num::SolverFloat,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{allocation::Allocation, valuation::Valuation};

/// A monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the contained monitors.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SearchMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: SolverFloat,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, valuation: &Valuation<T>, statistics: &BnbStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(valuation, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        depth: usize,
        level: &[AllocationState<T>],
        statistics: &BnbStatistics<T>,
    ) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(depth, level, statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_level_expanded(
        &mut self,
        depth: usize,
        level: &[AllocationState<T>],
        statistics: &BnbStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_level_expanded(depth, level, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        depth: usize,
        reason: PruneReason,
        removed: usize,
        statistics: &BnbStatistics<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_prune(depth, reason, removed, statistics);
        }
    }

    #[inline(always)]
    fn on_fallback(&mut self, depth: usize, statistics: &BnbStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_fallback(depth, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, allocation: &Allocation<T>, statistics: &BnbStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(allocation, statistics);
        }
    }
}
