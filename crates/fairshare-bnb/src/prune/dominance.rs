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

//! Dominance pruning of value-equivalent states.
//!
//! Everything downstream of a level depends only on a state's totals: the
//! objective reads them, and every continuation adds the same item values to
//! any state at that depth. Two states with identical `(total0, total1)` can
//! therefore reach exactly the same set of final totals, and one of them is
//! enough. The pruner keeps the first state of each total pair in level order
//! and drops the others, which never changes the optimal objective value.
//!
//! Equality is exact float equality. The filter runs in linear time over the
//! level using a hash set of bit patterns that is reused across levels.

use crate::{num::SolverFloat, num::exact_bits, state::AllocationState};
use rustc_hash::FxHashSet;

/// Removes states whose totals equal those of an earlier state in the level.
#[derive(Clone, Debug, Default)]
pub struct DominancePruner {
    seen: FxHashSet<(u64, u64)>,
}

impl DominancePruner {
    /// Creates a new pruner.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pruner that can hold `capacity` distinct total pairs before
    /// reallocating.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Filters `level` in place and returns the number of removed states.
    /// The relative order of the survivors is preserved.
    pub fn prune<T>(&mut self, level: &mut Vec<AllocationState<T>>) -> usize
    where
        T: SolverFloat,
    {
        self.seen.clear();
        let before = level.len();

        level.retain(|state| {
            let (total0, total1) = state.totals();
            self.seen.insert((exact_bits(total0), exact_bits(total1)))
        });

        before - level.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairshare_model::index::{Agent, ItemIndex};

    fn state(owners: &[Agent], values0: &[f64], values1: &[f64]) -> AllocationState<f64> {
        owners
            .iter()
            .enumerate()
            .fold(AllocationState::root(owners.len()), |s, (i, &a)| {
                let value = if a == Agent::First { values0[i] } else { values1[i] };
                s.child(a, value)
            })
    }

    #[test]
    fn test_keeps_first_of_each_total_pair() {
        use Agent::{First as A, Second as B};
        let v0 = [1.0, 1.0];
        let v1 = [1.0, 1.0];

        let mut level = vec![
            state(&[A, A], &v0, &v1), // (2, 0)
            state(&[A, B], &v0, &v1), // (1, 1)
            state(&[B, A], &v0, &v1), // (1, 1) duplicate
            state(&[B, B], &v0, &v1), // (0, 2)
        ];

        let mut pruner = DominancePruner::new();
        let removed = pruner.prune(&mut level);

        assert_eq!(removed, 1);
        assert_eq!(level.len(), 3);
        assert_eq!(level[0].totals(), (2.0, 0.0));
        assert_eq!(level[1].totals(), (1.0, 1.0));
        // The survivor is the first one: item 0 with agent 0.
        assert_eq!(level[1].owner(ItemIndex::new(0)), Some(Agent::First));
        assert_eq!(level[2].totals(), (0.0, 2.0));
    }

    #[test]
    fn test_distinct_totals_are_untouched() {
        use Agent::{First as A, Second as B};
        let v0 = [1.0, 2.0];
        let v1 = [3.0, 5.0];
        let mut level = vec![
            state(&[A, A], &v0, &v1),
            state(&[A, B], &v0, &v1),
            state(&[B, A], &v0, &v1),
            state(&[B, B], &v0, &v1),
        ];
        let expected = level.clone();

        assert_eq!(DominancePruner::preallocated(4).prune(&mut level), 0);
        assert_eq!(level, expected);
    }

    #[test]
    fn test_pruner_is_reusable_across_levels() {
        let mut pruner = DominancePruner::new();
        let mut first = vec![AllocationState::<f64>::root(0), AllocationState::root(0)];
        assert_eq!(pruner.prune(&mut first), 1);

        // A fresh level must not remember the totals of the previous one.
        let mut second = vec![AllocationState::<f64>::root(0)];
        assert_eq!(pruner.prune(&mut second), 0);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_same_totals_from_different_items_collapse() {
        use Agent::{First as A, Second as B};
        let v0 = [2.0, 3.0, 5.0];
        let v1 = [1.0, 1.0, 2.0];
        // Agent 0 gets {0, 1} or {2}, worth 5 either way; agent 1 ends at 2 in both.
        let mut level = vec![state(&[A, A, B], &v0, &v1), state(&[B, B, A], &v0, &v1)];
        assert_eq!(level[0].totals(), level[1].totals());

        assert_eq!(DominancePruner::new().prune(&mut level), 1);
        assert_eq!(
            level[0].items(Agent::First).collect::<Vec<_>>(),
            vec![ItemIndex::new(0), ItemIndex::new(1)]
        );
    }
}
