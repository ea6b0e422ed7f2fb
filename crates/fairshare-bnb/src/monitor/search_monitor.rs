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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait, `SearchCommand`, and `PruneReason`
//! for observing and controlling the level-wise search. Callbacks follow the
//! lifecycle of a run, and a monitor can stop it via `SearchCommand`
//! (default: Continue).
//!
//! Lifecycle
//! - enter → per level {command → expand → prune} → solution → exit
//! - A fallback event replaces the per-level events once a level empties.
//! - `BnbStatistics` is passed to every callback.

use crate::{num::SolverFloat, state::AllocationState, stats::BnbStatistics};
use fairshare_model::{allocation::Allocation, valuation::Valuation};

/// Command returned by a monitor to control the search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchCommand {
    /// Keep going.
    #[default]
    Continue,
    /// Stop before expanding the next level. The string carries the reason.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for removing states from a level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// An earlier state in the level has the same totals.
    Dominated,
    /// The optimistic projection does not exceed the baseline.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Dominated => write!(f, "Dominated"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling a run of the solver.
pub trait SearchMonitor<T>
where
    T: SolverFloat,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the root level is built.
    fn on_enter_search(&mut self, valuation: &Valuation<T>, statistics: &BnbStatistics<T>);
    /// Called once after the result has been chosen.
    fn on_exit_search(&mut self, statistics: &BnbStatistics<T>);
    /// Called before the level at `depth` is expanded.
    fn search_command(
        &mut self,
        _depth: usize,
        _level: &[AllocationState<T>],
        _statistics: &BnbStatistics<T>,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called after item `depth` has been branched on and the level pruned.
    fn on_level_expanded(
        &mut self,
        depth: usize,
        level: &[AllocationState<T>],
        statistics: &BnbStatistics<T>,
    );
    /// Called when a pruner removed `removed` states from the level at `depth`.
    fn on_prune(
        &mut self,
        depth: usize,
        reason: PruneReason,
        removed: usize,
        statistics: &BnbStatistics<T>,
    );
    /// Called when the level at `depth` became empty and the baseline
    /// allocation took over.
    fn on_fallback(&mut self, depth: usize, statistics: &BnbStatistics<T>);
    /// Called once with the allocation that will be reported.
    fn on_solution_found(&mut self, allocation: &Allocation<T>, statistics: &BnbStatistics<T>);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SearchCommand::Continue.to_string(), "Continue");
        assert_eq!(
            SearchCommand::Terminate("budget".into()).to_string(),
            "Terminate: budget"
        );
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
        assert_eq!(PruneReason::Dominated.to_string(), "Dominated");
        assert_eq!(PruneReason::BoundDominated.to_string(), "BoundDominated");
    }
}
