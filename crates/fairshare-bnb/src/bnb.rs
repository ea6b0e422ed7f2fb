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

//! Level-wise branch-and-bound solver for two-agent allocation.
//!
//! Items are decided in index order. Level `i` holds every surviving partial
//! assignment of items `0..i`; expanding it gives each state two children,
//! one per agent receiving item `i`. The new level is then filtered by the
//! enabled pruners (dominance first, then bound), and the old level is
//! dropped. After the last item the first state with the highest objective
//! value is the result.
//!
//! Before the first level a `BaselineEstimator` samples one complete
//! allocation. Its score is the cutoff for bound pruning, and the sample
//! itself is the fallback result when pruning empties a level. In
//! `PruningMode::Strict` the sample also competes with the best final state,
//! which makes `<=` pruning exact for admissible projections.
//!
//! The `BnbSolver` owns the two level buffers and the dominance hash set so
//! repeated solves reuse their allocations. A search session object carries
//! the per-run state, statistics, and timing.

use crate::{
    baseline::{Baseline, BaselineEstimator},
    config::{BnbConfig, PruningMode},
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    num::SolverFloat,
    objective::Objective,
    prune::{bound::BoundPruner, dominance::DominancePruner},
    result::BnbOutcome,
    state::AllocationState,
    stats::BnbStatistics,
};
use fairshare_model::{
    allocation::Allocation,
    index::{Agent, ItemIndex},
    valuation::Valuation,
};
use tracing::{debug, trace};

/// The level-wise search engine.
///
/// This is only the execution engine: what is maximized is decided by an
/// `Objective`, and the cutoff comes from a `BaselineEstimator`.
#[derive(Clone, Debug)]
pub struct BnbSolver<T> {
    current: Vec<AllocationState<T>>,
    next: Vec<AllocationState<T>>,
    dominance: DominancePruner,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverFloat,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            next: Vec::new(),
            dominance: DominancePruner::new(),
        }
    }

    /// Creates a new solver instance whose level buffers hold `width` states
    /// before reallocating.
    ///
    /// # Note
    ///
    /// This only moves the cost of the allocations to construction time; the
    /// buffers still grow when a level gets wider.
    #[inline]
    pub fn preallocated(width: usize) -> Self {
        Self {
            current: Vec::with_capacity(width),
            next: Vec::with_capacity(width),
            dominance: DominancePruner::preallocated(width),
        }
    }

    /// Solves `valuation` for `objective` under `config`.
    ///
    /// The `estimator` supplies the baseline allocation and `monitor` observes
    /// the run and may stop it before any level.
    pub fn solve<O, B, S>(
        &mut self,
        valuation: &Valuation<T>,
        config: &BnbConfig<T>,
        objective: &O,
        estimator: &mut B,
        mut monitor: S,
    ) -> BnbOutcome<T>
    where
        O: Objective<T>,
        B: BaselineEstimator<T> + ?Sized,
        S: SearchMonitor<T>,
    {
        let baseline = estimator.estimate(valuation, objective);
        debug!(
            estimator = estimator.name(),
            objective = objective.name(),
            value = %baseline.value(),
            "baseline sampled"
        );

        let session =
            BnbSearchSession::new(self, valuation, config, objective, &mut monitor, baseline);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Clears the level buffers while keeping their capacity.
    #[inline]
    fn reset(&mut self) {
        self.current.clear();
        self.next.clear();
    }
}

/// Per-run state of one search.
struct BnbSearchSession<'a, T, O, S>
where
    T: SolverFloat,
{
    solver: &'a mut BnbSolver<T>,
    valuation: &'a Valuation<T>,
    config: &'a BnbConfig<T>,
    objective: &'a O,
    monitor: &'a mut S,
    baseline: Baseline<T>,
    bound: Option<BoundPruner<T>>,
    stats: BnbStatistics<T>,
    start_time: std::time::Instant,
}

impl<'a, T, O, S> std::fmt::Debug for BnbSearchSession<'a, T, O, S>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BnbSearchSession")
            .field("valuation", &self.valuation)
            .field("config", &self.config)
            .field("baseline", &self.baseline.value())
            .field("stats", &self.stats)
            .finish()
    }
}

/// How the level loop ended.
enum LevelLoopExit {
    Completed,
    Emptied,
    Aborted(String),
}

impl<'a, T, O, S> BnbSearchSession<'a, T, O, S>
where
    T: SolverFloat,
    O: Objective<T>,
    S: SearchMonitor<T>,
{
    #[inline]
    fn new(
        solver: &'a mut BnbSolver<T>,
        valuation: &'a Valuation<T>,
        config: &'a BnbConfig<T>,
        objective: &'a O,
        monitor: &'a mut S,
        baseline: Baseline<T>,
    ) -> Self {
        let bound = config
            .bound_pruning()
            .then(|| BoundPruner::new(valuation, config.projection(), baseline.value()));

        let mut stats = BnbStatistics::default();
        stats.set_baseline_value(baseline.value());

        Self {
            solver,
            valuation,
            config,
            objective,
            monitor,
            baseline,
            bound,
            stats,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> BnbOutcome<T> {
        self.monitor.on_enter_search(self.valuation, &self.stats);

        self.solver.reset();
        self.solver
            .current
            .push(AllocationState::root(self.valuation.num_items()));

        let exit = self.expand_levels();

        let allocation = match &exit {
            LevelLoopExit::Completed => self.select_final(),
            LevelLoopExit::Emptied | LevelLoopExit::Aborted(_) => {
                self.baseline.state().to_allocation()
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_solution_found(&allocation, &self.stats);
        self.monitor.on_exit_search(&self.stats);

        debug!(
            value = %self.objective.value(
                allocation.total(Agent::First),
                allocation.total(Agent::Second)
            ),
            elapsed = ?self.stats.time_total,
            "search finished"
        );

        match exit {
            LevelLoopExit::Aborted(reason) => BnbOutcome::aborted(allocation, reason, self.stats),
            _ if self.config.proves_optimality() => BnbOutcome::optimal(allocation, self.stats),
            _ => BnbOutcome::best_effort(allocation, self.stats),
        }
    }

    /// Expands one level per item until the items run out, a level empties,
    /// or a monitor stops the search.
    fn expand_levels(&mut self) -> LevelLoopExit {
        for item in self.valuation.items() {
            let depth = item.get();

            if let SearchCommand::Terminate(reason) =
                self.monitor
                    .search_command(depth, &self.solver.current, &self.stats)
            {
                debug!(item = depth, %reason, "search terminated by monitor");
                return LevelLoopExit::Aborted(reason);
            }

            self.branch(item);
            self.prune(depth);

            if self.solver.current.is_empty() {
                self.stats.on_fallback();
                self.monitor.on_fallback(depth, &self.stats);
                debug!(item = depth, "level emptied, using baseline allocation");
                return LevelLoopExit::Emptied;
            }

            self.stats.on_level_completed(self.solver.current.len());
            self.monitor
                .on_level_expanded(depth, &self.solver.current, &self.stats);
            trace!(
                item = depth,
                width = self.solver.current.len(),
                "level expanded"
            );
        }

        LevelLoopExit::Completed
    }

    /// Replaces the current level by the children of its states.
    /// Children are pushed agent 0 first.
    #[inline]
    fn branch(&mut self, item: ItemIndex) {
        let value0 = self.valuation.value(Agent::First, item);
        let value1 = self.valuation.value(Agent::Second, item);

        let solver = &mut *self.solver;
        solver.next.clear();
        solver.next.reserve(solver.current.len() * 2);
        for state in &solver.current {
            solver.next.push(state.child(Agent::First, value0));
            solver.next.push(state.child(Agent::Second, value1));
        }
        std::mem::swap(&mut solver.current, &mut solver.next);
        solver.next.clear();

        self.stats.on_states_generated(self.solver.current.len());
    }

    /// Runs the enabled pruners on the freshly expanded level.
    #[inline]
    fn prune(&mut self, depth: usize) {
        if self.config.dominance_pruning() {
            let removed = self.solver.dominance.prune(&mut self.solver.current);
            if removed > 0 {
                self.stats.on_pruning_dominance(removed);
                self.monitor
                    .on_prune(depth, PruneReason::Dominated, removed, &self.stats);
                trace!(item = depth, removed, "dominated states pruned");
            }
        }

        if let Some(bound) = &self.bound {
            let removed = bound.prune(self.objective, &mut self.solver.current);
            if removed > 0 {
                self.stats.on_pruning_bound(removed);
                self.monitor
                    .on_prune(depth, PruneReason::BoundDominated, removed, &self.stats);
                trace!(item = depth, removed, "bound-dominated states pruned");
            }
        }
    }

    /// Picks the first state with the highest objective value in the final
    /// level. In strict mode the baseline replaces it if strictly better.
    fn select_final(&self) -> Allocation<T> {
        let mut best: Option<(&AllocationState<T>, T)> = None;
        for state in &self.solver.current {
            let score = state.score(self.objective);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((state, score)),
            }
        }

        match best {
            Some((_, score))
                if self.config.pruning_mode() == PruningMode::Strict
                    && self.baseline.value() > score =>
            {
                self.baseline.state().to_allocation()
            }
            Some((state, _)) => state.to_allocation(),
            None => self.baseline.state().to_allocation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        baseline::{GreedyBaseline, RandomBaseline},
        monitor::{no_op::NoOperationMonitor, state_limit::StateLimitMonitor},
        objective::{Egalitarian, NashWelfare},
        prune::bound::OptimisticProjection,
        result::TerminationReason,
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// Returns a fixed, precomputed allocation.
    struct FixedBaseline(Vec<Agent>);

    impl BaselineEstimator<f64> for FixedBaseline {
        fn name(&self) -> &str {
            "FixedBaseline"
        }

        fn sample(&mut self, valuation: &Valuation<f64>) -> AllocationState<f64> {
            AllocationState::from_owners(valuation, &self.0)
        }
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn brute_force<O>(valuation: &Valuation<f64>, objective: &O) -> f64
    where
        O: Objective<f64>,
    {
        let n = valuation.num_items();
        (0u32..1 << n)
            .map(|mask| {
                let (mut total0, mut total1) = (0.0, 0.0);
                for item in valuation.items() {
                    if mask & (1 << item.get()) != 0 {
                        total1 += valuation.value(Agent::Second, item);
                    } else {
                        total0 += valuation.value(Agent::First, item);
                    }
                }
                objective.value(total0, total1)
            })
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn random_valuation(rng: &mut StdRng, n: usize) -> Valuation<f64> {
        let values0 = (0..n).map(|_| rng.random_range(0..=20) as f64).collect();
        let values1 = (0..n).map(|_| rng.random_range(0..=20) as f64).collect();
        Valuation::new(values0, values1).unwrap()
    }

    fn solve_with(
        valuation: &Valuation<f64>,
        config: &BnbConfig<f64>,
        seed: u64,
    ) -> BnbOutcome<f64> {
        BnbSolver::new().solve(
            valuation,
            config,
            &Egalitarian,
            &mut RandomBaseline::seeded(seed),
            NoOperationMonitor,
        )
    }

    fn all_configs() -> [BnbConfig<f64>; 4] {
        [
            BnbConfig::exhaustive(),
            BnbConfig::exhaustive().with_dominance_pruning(true),
            BnbConfig::exhaustive().with_bound_pruning(true),
            BnbConfig::new(),
        ]
    }

    fn egalitarian(allocation: &Allocation<f64>) -> f64 {
        allocation.egalitarian_value()
    }

    #[test]
    fn test_three_item_scenario_under_every_config() {
        let v = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();

        for config in all_configs() {
            let outcome = solve_with(&v, &config, 7);
            let allocation = outcome.allocation();
            assert!(outcome.result().is_optimal(), "{config}");
            assert_eq!(egalitarian(allocation), 6.0, "{config}");
            assert_eq!(allocation.items(Agent::First), &[ii(1), ii(2)], "{config}");
            assert_eq!(allocation.total(Agent::First), 7.0);
            assert_eq!(allocation.items(Agent::Second), &[ii(0)], "{config}");
            assert_eq!(allocation.total(Agent::Second), 6.0);
        }
    }

    #[test]
    fn test_unit_items_split_evenly() {
        let v = Valuation::identical(vec![1.0; 4]).unwrap();

        for config in all_configs() {
            let allocation = solve_with(&v, &config, 3).into_allocation();
            assert_eq!(allocation.items(Agent::First).len(), 2, "{config}");
            assert_eq!(allocation.items(Agent::Second).len(), 2, "{config}");
            assert_eq!(egalitarian(&allocation), 2.0, "{config}");
        }
    }

    #[test]
    fn test_unit_items_tie_break_prefers_agent_zero_early() {
        let v = Valuation::identical(vec![1.0; 4]).unwrap();
        let allocation = solve_with(&v, &BnbConfig::exhaustive(), 0).into_allocation();
        // Scan order is agent-0-first, so the first balanced split is 0,1 | 2,3.
        assert_eq!(allocation.items(Agent::First), &[ii(0), ii(1)]);
        assert_eq!(allocation.items(Agent::Second), &[ii(2), ii(3)]);
    }

    #[test]
    fn test_empty_instance() {
        let v = Valuation::<f64>::new(vec![], vec![]).unwrap();

        for config in all_configs() {
            let outcome = solve_with(&v, &config, 1);
            assert!(outcome.result().is_optimal());
            assert_eq!(outcome.allocation(), &Allocation::empty());
            assert_eq!(outcome.statistics().levels_completed, 0);
        }
    }

    #[test]
    fn test_single_item_scores_zero() {
        let v = Valuation::new(vec![5.0], vec![5.0]).unwrap();

        for config in all_configs() {
            let allocation = solve_with(&v, &config, 11).into_allocation();
            assert_eq!(egalitarian(&allocation), 0.0, "{config}");
            assert!(allocation.is_partition_of(1));
        }
    }

    #[test]
    fn test_exhaustive_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for n in 0..=12 {
            for _ in 0..3 {
                let v = random_valuation(&mut rng, n);
                let outcome = solve_with(&v, &BnbConfig::exhaustive(), 5);
                assert_eq!(egalitarian(outcome.allocation()), brute_force(&v, &Egalitarian));
                assert_eq!(outcome.statistics().prunings_total(), 0);
            }
        }
    }

    #[test]
    fn test_pruning_never_changes_the_optimum() {
        let mut rng = StdRng::seed_from_u64(2024);
        for n in 1..=12 {
            for trial in 0..4 {
                let v = random_valuation(&mut rng, n);
                let expected = brute_force(&v, &Egalitarian);
                for config in all_configs() {
                    let outcome = solve_with(&v, &config, trial);
                    assert_eq!(
                        egalitarian(outcome.allocation()),
                        expected,
                        "n = {n}, {config}"
                    );
                    assert!(outcome.result().is_optimal());
                }
            }
        }
    }

    #[test]
    fn test_fractional_values_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 1..=10 {
            let values0: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 10.0).collect();
            let values1: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 10.0).collect();
            let v = Valuation::new(values0, values1).unwrap();
            let outcome = solve_with(&v, &BnbConfig::new(), 17);
            assert_eq!(egalitarian(outcome.allocation()), brute_force(&v, &Egalitarian));
        }
    }

    #[test]
    fn test_result_is_a_partition_with_consistent_totals() {
        let mut rng = StdRng::seed_from_u64(31);
        for n in 0..=10 {
            let v = random_valuation(&mut rng, n);
            for config in all_configs() {
                let allocation = solve_with(&v, &config, 2).into_allocation();
                assert!(allocation.is_partition_of(n));

                let rebuilt = Allocation::from_items(
                    &v,
                    allocation.items(Agent::First).to_vec(),
                    allocation.items(Agent::Second).to_vec(),
                )
                .unwrap();
                assert_eq!(rebuilt, allocation);
            }
        }
    }

    #[test]
    fn test_strict_result_never_below_baseline() {
        let mut rng = StdRng::seed_from_u64(8);
        for n in 1..=12 {
            let v = random_valuation(&mut rng, n);
            for seed in 0..3 {
                let outcome = solve_with(&v, &BnbConfig::new(), seed);
                assert!(
                    egalitarian(outcome.allocation()) >= outcome.statistics().baseline_value
                );
            }
        }
    }

    #[test]
    fn test_nash_welfare_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(77);
        for n in 1..=10 {
            let v = random_valuation(&mut rng, n);
            for config in all_configs() {
                let outcome = BnbSolver::new().solve(
                    &v,
                    &config,
                    &NashWelfare,
                    &mut GreedyBaseline,
                    NoOperationMonitor,
                );
                assert_eq!(
                    outcome.allocation().nash_welfare(),
                    brute_force(&v, &NashWelfare),
                    "n = {n}, {config}"
                );
            }
        }
    }

    #[test]
    fn test_capped_projection_in_best_effort_mode_loses_the_optimum() {
        let v = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();
        // The baseline is already optimal: agent 1 takes item 0, value 6.
        let optimal_owners = vec![Agent::Second, Agent::First, Agent::First];
        let capped = BnbConfig::new()
            .with_dominance_pruning(false)
            .with_projection(OptimisticProjection::Capped { cap: 100.0 });

        // Only states with agent 1 above 6 survive, and the best of them
        // leaves agent 0 with item 1 alone.
        let outcome = BnbSolver::new().solve(
            &v,
            &capped.with_pruning_mode(PruningMode::BestEffort),
            &Egalitarian,
            &mut FixedBaseline(optimal_owners.clone()),
            NoOperationMonitor,
        );
        assert_eq!(outcome.termination_reason(), &TerminationReason::BestEffort);
        assert_eq!(egalitarian(outcome.allocation()), 4.0);
        assert_eq!(outcome.allocation().items(Agent::First), &[ii(1)]);

        // Keeping the baseline as an incumbent recovers it.
        let outcome = BnbSolver::new().solve(
            &v,
            &capped,
            &Egalitarian,
            &mut FixedBaseline(optimal_owners),
            NoOperationMonitor,
        );
        assert_eq!(outcome.termination_reason(), &TerminationReason::BestEffort);
        assert_eq!(egalitarian(outcome.allocation()), 6.0);
    }

    #[test]
    fn test_tight_cap_empties_a_level_and_falls_back() {
        let v = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();
        let owners = vec![Agent::First, Agent::Second, Agent::First];
        let config = BnbConfig::new()
            .with_projection(OptimisticProjection::Capped { cap: 4.0 })
            .with_pruning_mode(PruningMode::BestEffort);

        let outcome = BnbSolver::new().solve(
            &v,
            &config,
            &Egalitarian,
            &mut FixedBaseline(owners),
            NoOperationMonitor,
        );

        // The baseline sample scores 4 and the cap never exceeds it.
        assert_eq!(outcome.statistics().fallbacks, 1);
        assert_eq!(outcome.statistics().levels_completed, 0);
        assert_eq!(outcome.allocation().items(Agent::First), &[ii(0), ii(2)]);
        assert_eq!(outcome.allocation().items(Agent::Second), &[ii(1)]);
        assert_eq!(egalitarian(outcome.allocation()), 4.0);
    }

    #[test]
    fn test_optimal_baseline_prunes_everything_and_is_returned() {
        let v = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();
        let outcome = BnbSolver::new().solve(
            &v,
            &BnbConfig::new(),
            &Egalitarian,
            &mut GreedyBaseline,
            NoOperationMonitor,
        );

        // No completion can score strictly above 6, so the search empties.
        assert!(outcome.result().is_optimal());
        assert_eq!(outcome.statistics().fallbacks, 1);
        assert_eq!(egalitarian(outcome.allocation()), 6.0);
        assert!(outcome.allocation().is_partition_of(3));
    }

    #[test]
    fn test_monitor_abort_returns_baseline() {
        let v = Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap();
        let outcome = BnbSolver::new().solve(
            &v,
            &BnbConfig::exhaustive(),
            &Egalitarian,
            &mut GreedyBaseline,
            StateLimitMonitor::new(0),
        );

        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("state limit of 0 exceeded".into())
        );
        assert!(!outcome.result().is_optimal());
        assert_eq!(outcome.allocation().items(Agent::First), &[ii(1), ii(2)]);
        assert_eq!(outcome.allocation().items(Agent::Second), &[ii(0)]);
        assert_eq!(outcome.statistics().states_generated, 0);
    }

    #[test]
    fn test_statistics_are_coherent() {
        let mut rng = StdRng::seed_from_u64(123);
        let v = random_valuation(&mut rng, 10);

        let exhaustive = solve_with(&v, &BnbConfig::exhaustive(), 4);
        let stats = exhaustive.statistics();
        assert_eq!(stats.levels_completed, 10);
        assert_eq!(stats.peak_level_width, 1 << 10);
        assert_eq!(stats.states_generated, (1 << 11) - 2);

        // Unit values: level i holds exactly i + 1 distinct total pairs.
        let units = Valuation::identical(vec![1.0; 10]).unwrap();
        let pruned = solve_with(
            &units,
            &BnbConfig::exhaustive().with_dominance_pruning(true),
            4,
        );
        let stats = pruned.statistics();
        assert_eq!(stats.peak_level_width, 11);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(
            stats.states_generated,
            stats.prunings_dominance + (2..=11).sum::<u64>()
        );
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = BnbSolver::preallocated(64);
        let mut rng = StdRng::seed_from_u64(55);
        for n in [6, 2, 9, 0, 4] {
            let v = random_valuation(&mut rng, n);
            let outcome = solver.solve(
                &v,
                &BnbConfig::new(),
                &Egalitarian,
                &mut GreedyBaseline,
                NoOperationMonitor,
            );
            assert_eq!(egalitarian(outcome.allocation()), brute_force(&v, &Egalitarian));
            assert!(solver.current.is_empty());
            assert!(solver.next.is_empty());
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut rng = StdRng::seed_from_u64(6);
        let v = random_valuation(&mut rng, 9);
        let config = BnbConfig::new().with_pruning_mode(PruningMode::BestEffort);

        let first = solve_with(&v, &config, 42);
        let second = solve_with(&v, &config, 42);
        assert_eq!(first.allocation(), second.allocation());
        assert_eq!(
            first.statistics().states_generated,
            second.statistics().states_generated
        );
    }
}
