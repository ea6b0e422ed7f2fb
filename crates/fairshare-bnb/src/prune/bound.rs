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

//! Bound pruning against the pessimistic baseline.
//!
//! A state at depth `d` has decided items `0..d`. Its optimistic projection is
//! an estimate of the best objective any completion could reach; if that
//! estimate is no larger than the baseline (a value already known to be
//! achievable) the state is dropped.
//!
//! Two projections exist:
//!
//! - `OptimisticProjection::Additive` credits every remaining item to both
//!   agents at once: `objective(total0 + rest0, total1 + rest1)` where `restN`
//!   is agent N's value of the undecided items. A real completion gives each
//!   item to only one agent, so with nonnegative values and a monotone
//!   objective this never underestimates. It is admissible.
//! - `OptimisticProjection::Capped { cap }` uses `min(cap, total1 + rest1)`.
//!   It ignores agent 0's side and the objective, and is admissible only when
//!   `cap` is at least the optimum. It is kept as an alternative rule; with a
//!   small cap it discards optimal branches.
//!
//! Remaining values come from suffix sums computed once per valuation.

use crate::{num::SolverFloat, objective::Objective, state::AllocationState};
use fairshare_model::{index::Agent, valuation::Valuation};

/// How the undecided items are projected onto a partial state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OptimisticProjection<T> {
    /// Add every remaining item to both totals. Admissible.
    #[default]
    Additive,
    /// `min(cap, total1 + rest1)`. Admissible only if `cap` bounds the optimum.
    Capped { cap: T },
}

impl<T> OptimisticProjection<T>
where
    T: SolverFloat,
{
    /// Returns `true` if the projection never underestimates, regardless of
    /// the instance.
    #[inline]
    pub fn is_admissible(&self) -> bool {
        matches!(self, OptimisticProjection::Additive)
    }

    /// Projects `state` given the remaining values `(rest0, rest1)`.
    #[inline]
    pub fn project<O>(&self, objective: &O, state: &AllocationState<T>, rest: (T, T)) -> T
    where
        O: Objective<T> + ?Sized,
    {
        let (total0, total1) = state.totals();
        match *self {
            OptimisticProjection::Additive => objective.value(total0 + rest.0, total1 + rest.1),
            OptimisticProjection::Capped { cap } => cap.min(total1 + rest.1),
        }
    }
}

impl<T> std::fmt::Display for OptimisticProjection<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimisticProjection::Additive => write!(f, "Additive"),
            OptimisticProjection::Capped { cap } => write!(f, "Capped({})", cap),
        }
    }
}

/// Per-agent value of the items from a given depth onwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemainingValues<T> {
    /// `suffix[a][d]` is agent `a`'s value of items `d..n`; `suffix[a][n]` is zero.
    suffix: [Vec<T>; 2],
}

impl<T> RemainingValues<T>
where
    T: SolverFloat,
{
    /// Computes the suffix sums of `valuation`.
    pub fn new(valuation: &Valuation<T>) -> Self {
        let suffix = Agent::ALL.map(|agent| {
            let values = valuation.values(agent);
            let mut sums = vec![T::zero(); values.len() + 1];
            for i in (0..values.len()).rev() {
                sums[i] = sums[i + 1] + values[i];
            }
            sums
        });
        Self { suffix }
    }

    /// Both agents' value of the items not yet decided at `depth`.
    ///
    /// # Panics
    ///
    /// Panics if `depth` exceeds the number of items.
    #[inline(always)]
    pub fn after(&self, depth: usize) -> (T, T) {
        (self.suffix[0][depth], self.suffix[1][depth])
    }
}

/// Removes states that cannot beat the baseline.
#[derive(Clone, Debug)]
pub struct BoundPruner<T> {
    remaining: RemainingValues<T>,
    projection: OptimisticProjection<T>,
    baseline: T,
}

impl<T> BoundPruner<T>
where
    T: SolverFloat,
{
    /// Creates a pruner for `valuation` with the given projection and cutoff.
    pub fn new(valuation: &Valuation<T>, projection: OptimisticProjection<T>, baseline: T) -> Self {
        Self {
            remaining: RemainingValues::new(valuation),
            projection,
            baseline,
        }
    }

    /// The cutoff value.
    #[inline(always)]
    pub fn baseline(&self) -> T {
        self.baseline
    }

    /// The projection in use.
    #[inline(always)]
    pub fn projection(&self) -> OptimisticProjection<T> {
        self.projection
    }

    /// The optimistic projection of `state`.
    #[inline]
    pub fn upper_bound<O>(&self, objective: &O, state: &AllocationState<T>) -> T
    where
        O: Objective<T> + ?Sized,
    {
        self.projection
            .project(objective, state, self.remaining.after(state.depth()))
    }

    /// Returns `true` if `state` cannot exceed the baseline.
    #[inline]
    pub fn is_dominated<O>(&self, objective: &O, state: &AllocationState<T>) -> bool
    where
        O: Objective<T> + ?Sized,
    {
        self.upper_bound(objective, state) <= self.baseline
    }

    /// Filters `level` in place and returns the number of removed states.
    pub fn prune<O>(&self, objective: &O, level: &mut Vec<AllocationState<T>>) -> usize
    where
        O: Objective<T> + ?Sized,
    {
        let before = level.len();
        level.retain(|state| !self.is_dominated(objective, state));
        before - level.len()
    }
}
