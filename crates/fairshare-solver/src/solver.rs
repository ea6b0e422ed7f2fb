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

//! # Configured Solver
//!
//! A thin layer over `fairshare_bnb::bnb::BnbSolver` that owns a search
//! configuration, builds the baseline estimator for each run from a seed, and
//! assembles a monitor stack from optional limits.
//!
//! ## Highlights
//!
//! - Builder pattern: `SolverBuilder` toggles the two pruners, picks the
//!   projection and pruning mode, and sets the seed, limits, and logging.
//! - Monitor stack: a `CompositeMonitor` with the state limit first, then the
//!   time limit, then the optional `LogMonitor`.
//! - Reproducibility: the random baseline is reseeded on every run, so solving
//!   the same valuation twice gives the same outcome.
//! - One-call functions: `solve` and `solve_nash` validate plain `f64`
//!   slices and run the default configuration.
//!
//! ## Usage
//!
//! ```rust
//! use fairshare_model::{index::Agent, valuation::Valuation};
//! use fairshare_solver::solver::SolverBuilder;
//!
//! let valuation = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();
//! let mut solver = SolverBuilder::<f64>::new()
//!     .with_seed(7)
//!     .with_state_limit(1 << 20)
//!     .build();
//!
//! let outcome = solver.solve(&valuation);
//! assert!(outcome.result().is_optimal());
//! assert_eq!(outcome.allocation().total(Agent::Second), 6.0);
//! ```

use fairshare_bnb::{
    baseline::{BaselineEstimator, GreedyBaseline, RandomBaseline},
    bnb::BnbSolver,
    config::{BnbConfig, PruningMode},
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, state_limit::StateLimitMonitor,
        time_limit::TimeLimitMonitor,
    },
    num::SolverFloat,
    objective::{Egalitarian, NashWelfare, Objective},
    prune::bound::OptimisticProjection,
    result::BnbOutcome,
};
use fairshare_model::{
    allocation::Allocation,
    valuation::{Valuation, ValuationError},
};
use std::time::Duration;
use tracing::debug;

/// Seed of the random baseline when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_FA1E;

/// Which estimator produces the baseline allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaselineStrategy {
    /// Every item goes to a uniformly random agent, drawn from the seed.
    #[default]
    Random,
    /// Every item goes to the agent that is currently worse off.
    Greedy,
}

impl std::fmt::Display for BaselineStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineStrategy::Random => write!(f, "Random"),
            BaselineStrategy::Greedy => write!(f, "Greedy"),
        }
    }
}

/// A configured, reusable solver.
#[derive(Clone, Debug)]
pub struct Solver<T> {
    engine: BnbSolver<T>,
    config: BnbConfig<T>,
    baseline: BaselineStrategy,
    seed: u64,
    time_limit: Option<Duration>,
    state_limit: Option<usize>,
    log_interval: Option<Duration>,
}

impl<T> Solver<T>
where
    T: SolverFloat,
{
    #[inline]
    pub fn config(&self) -> &BnbConfig<T> {
        &self.config
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn baseline_strategy(&self) -> BaselineStrategy {
        self.baseline
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn state_limit(&self) -> Option<usize> {
        self.state_limit
    }

    /// Maximizes the egalitarian value `min(total0, total1)`.
    #[inline]
    pub fn solve(&mut self, valuation: &Valuation<T>) -> BnbOutcome<T> {
        self.solve_with(valuation, &Egalitarian)
    }

    /// Maximizes `objective`.
    pub fn solve_with<O>(&mut self, valuation: &Valuation<T>, objective: &O) -> BnbOutcome<T>
    where
        O: Objective<T>,
    {
        let mut estimator = self.estimator();
        let monitor = self.monitor();

        debug!(
            config = %self.config,
            baseline = %self.baseline,
            seed = self.seed,
            monitors = monitor.len(),
            "solving"
        );

        self.engine.solve(
            valuation,
            &self.config,
            objective,
            estimator.as_mut(),
            monitor,
        )
    }

    fn estimator(&self) -> Box<dyn BaselineEstimator<T>> {
        match self.baseline {
            BaselineStrategy::Random => Box::new(RandomBaseline::seeded(self.seed)),
            BaselineStrategy::Greedy => Box::new(GreedyBaseline),
        }
    }

    fn monitor(&self) -> CompositeMonitor<'static, T> {
        let mut monitor = CompositeMonitor::with_capacity(3);
        if let Some(limit) = self.state_limit {
            monitor.add_monitor(StateLimitMonitor::new(limit));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(interval) = self.log_interval {
            monitor.add_monitor(LogMonitor::new(interval));
        }
        monitor
    }
}

/// Builder for `Solver`.
#[derive(Clone, Debug)]
pub struct SolverBuilder<T> {
    config: BnbConfig<T>,
    baseline: BaselineStrategy,
    seed: u64,
    time_limit: Option<Duration>,
    state_limit: Option<usize>,
    log_interval: Option<Duration>,
}

impl<T> Default for SolverBuilder<T>
where
    T: SolverFloat,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SolverBuilder<T>
where
    T: SolverFloat,
{
    /// Both pruners on, additive projection, strict mode, random baseline
    /// with `DEFAULT_SEED`, no limits, no logging.
    #[inline]
    pub fn new() -> Self {
        Self {
            config: BnbConfig::new(),
            baseline: BaselineStrategy::Random,
            seed: DEFAULT_SEED,
            time_limit: None,
            state_limit: None,
            log_interval: None,
        }
    }

    #[inline]
    pub fn with_dominance_pruning(mut self, enabled: bool) -> Self {
        self.config = self.config.with_dominance_pruning(enabled);
        self
    }

    #[inline]
    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.config = self.config.with_bound_pruning(enabled);
        self
    }

    #[inline]
    pub fn with_projection(mut self, projection: OptimisticProjection<T>) -> Self {
        self.config = self.config.with_projection(projection);
        self
    }

    #[inline]
    pub fn with_pruning_mode(mut self, mode: PruningMode) -> Self {
        self.config = self.config.with_pruning_mode(mode);
        self
    }

    #[inline]
    pub fn with_baseline(mut self, baseline: BaselineStrategy) -> Self {
        self.baseline = baseline;
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stops the search before a level that could hold more than `limit`
    /// states.
    #[inline]
    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.state_limit = Some(limit);
        self
    }

    /// Emits progress through `tracing` at most once per `interval`.
    #[inline]
    pub fn with_logging(mut self, interval: Duration) -> Self {
        self.log_interval = Some(interval);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<T> {
        Solver {
            engine: BnbSolver::new(),
            config: self.config,
            baseline: self.baseline,
            seed: self.seed,
            time_limit: self.time_limit,
            state_limit: self.state_limit,
            log_interval: self.log_interval,
        }
    }
}

/// Splits the items between two agents maximizing `min(total0, total1)`.
///
/// `values0[i]` and `values1[i]` are the two agents' values of item `i`.
/// The pruners can be switched off individually; the result is the same
/// either way, only the running time differs.
///
/// # Errors
///
/// Returns `ValuationError` if the slices differ in length or hold a
/// negative or non-finite value.
pub fn solve(
    values0: &[f64],
    values1: &[f64],
    use_dominance_pruning: bool,
    use_bound_pruning: bool,
) -> Result<Allocation<f64>, ValuationError> {
    solve_for(
        values0,
        values1,
        use_dominance_pruning,
        use_bound_pruning,
        &Egalitarian,
    )
}

/// Like `solve`, but maximizes the Nash welfare `total0 * total1`.
///
/// # Errors
///
/// Returns `ValuationError` if the slices differ in length or hold a
/// negative or non-finite value.
pub fn solve_nash(
    values0: &[f64],
    values1: &[f64],
    use_dominance_pruning: bool,
    use_bound_pruning: bool,
) -> Result<Allocation<f64>, ValuationError> {
    solve_for(
        values0,
        values1,
        use_dominance_pruning,
        use_bound_pruning,
        &NashWelfare,
    )
}

fn solve_for<O>(
    values0: &[f64],
    values1: &[f64],
    use_dominance_pruning: bool,
    use_bound_pruning: bool,
    objective: &O,
) -> Result<Allocation<f64>, ValuationError>
where
    O: Objective<f64>,
{
    let valuation = Valuation::from_slices(values0, values1)?;
    let mut solver = SolverBuilder::new()
        .with_dominance_pruning(use_dominance_pruning)
        .with_bound_pruning(use_bound_pruning)
        .build();
    Ok(solver.solve_with(&valuation, objective).into_allocation())
}
