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

//! Pessimistic baselines for bound pruning.
//!
//! Before the enumeration starts, a `BaselineEstimator` produces one complete
//! allocation. Its score is a value the search knows to be achievable, and the
//! bound pruner discards every branch whose optimistic projection cannot beat
//! it. The sampled allocation itself is kept too: it is the fallback result
//! when pruning empties a level, and the incumbent compared against the final
//! level in strict mode.
//!
//! Estimators:
//! - `RandomBaseline`: each item goes to a uniformly random agent. The random
//!   source is injected, so runs are reproducible from a seed.
//! - `GreedyBaseline`: each item goes to the agent that is currently worse off.
//!   Deterministic, and usually a much tighter baseline.

use crate::{num::SolverFloat, objective::Objective, state::AllocationState};
use fairshare_model::{index::Agent, valuation::Valuation};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A complete allocation together with its score.
#[derive(Clone, Debug, PartialEq)]
pub struct Baseline<T> {
    value: T,
    state: AllocationState<T>,
}

impl<T> Baseline<T>
where
    T: SolverFloat,
{
    /// Scores `state` under `objective`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not complete.
    #[inline]
    pub fn new<O>(state: AllocationState<T>, objective: &O) -> Self
    where
        O: Objective<T> + ?Sized,
    {
        assert!(
            state.is_complete(),
            "called `Baseline::new` with a partial state of depth {}",
            state.depth()
        );

        Self {
            value: state.score(objective),
            state,
        }
    }

    /// The achievable objective value.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.value
    }

    /// The complete allocation achieving `value`.
    #[inline(always)]
    pub fn state(&self) -> &AllocationState<T> {
        &self.state
    }

    #[inline(always)]
    pub fn into_state(self) -> AllocationState<T> {
        self.state
    }
}

/// A strategy producing one complete allocation before the search starts.
pub trait BaselineEstimator<T>
where
    T: SolverFloat,
{
    /// Returns the name of the estimator.
    fn name(&self) -> &str;

    /// Produces a complete allocation of every item in `valuation`.
    fn sample(&mut self, valuation: &Valuation<T>) -> AllocationState<T>;

    /// Samples an allocation and scores it under `objective`.
    #[inline]
    fn estimate(&mut self, valuation: &Valuation<T>, objective: &dyn Objective<T>) -> Baseline<T> {
        Baseline::new(self.sample(valuation), objective)
    }
}

impl<T> std::fmt::Debug for dyn BaselineEstimator<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BaselineEstimator({})", self.name())
    }
}

/// Hands every item to a uniformly random agent.
#[derive(Clone, Debug)]
pub struct RandomBaseline<R> {
    rng: R,
}

impl<R> RandomBaseline<R>
where
    R: Rng,
{
    /// Creates an estimator drawing from `rng`.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBaseline<StdRng> {
    /// Creates an estimator backed by a `StdRng` seeded with `seed`.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<T, R> BaselineEstimator<T> for RandomBaseline<R>
where
    T: SolverFloat,
    R: Rng,
{
    fn name(&self) -> &str {
        "RandomBaseline"
    }

    fn sample(&mut self, valuation: &Valuation<T>) -> AllocationState<T> {
        valuation
            .items()
            .fold(AllocationState::root(valuation.num_items()), |state, item| {
                let agent = if self.rng.random_bool(0.5) {
                    Agent::Second
                } else {
                    Agent::First
                };
                state.child(agent, valuation.value(agent, item))
            })
    }
}

/// Hands every item to the agent with the lower running total.
///
/// Ties go to the agent valuing the item more, then to agent 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedyBaseline;

impl<T> BaselineEstimator<T> for GreedyBaseline
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "GreedyBaseline"
    }

    fn sample(&mut self, valuation: &Valuation<T>) -> AllocationState<T> {
        valuation
            .items()
            .fold(AllocationState::root(valuation.num_items()), |state, item| {
                let (total0, total1) = state.totals();
                let agent = if total1 < total0 {
                    Agent::Second
                } else if total0 < total1 {
                    Agent::First
                } else if valuation.value(Agent::Second, item)
                    > valuation.value(Agent::First, item)
                {
                    Agent::Second
                } else {
                    Agent::First
                };
                state.child(agent, valuation.value(agent, item))
            })
    }
}
