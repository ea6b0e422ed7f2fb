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

//! Search states of the level-wise enumeration.
//!
//! An `AllocationState` is a node of the binary decision tree: the first
//! `depth` items have been handed out, the rest are still open. Because items
//! are decided strictly in index order, the assignment is stored as one owner
//! bit per item (set means agent 1), which makes the partition invariant hold
//! by construction: every decided item belongs to exactly one agent, and the
//! per-agent item lists come out in decision order.
//!
//! States are never mutated after creation. Branching builds a new child from
//! its parent, and pruning drops whole states from the level collection.

use crate::{num::SolverFloat, objective::Objective};
use fairshare_model::{
    allocation::Allocation,
    index::{Agent, ItemIndex},
    valuation::Valuation,
};
use fixedbitset::FixedBitSet;

/// A partial assignment of the first `depth` items.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationState<T> {
    totals: [T; 2],
    owners: FixedBitSet,
    depth: usize,
}

impl<T> AllocationState<T>
where
    T: SolverFloat,
{
    /// The root of the search tree: nothing decided, both totals zero.
    #[inline]
    pub fn root(num_items: usize) -> Self {
        Self {
            totals: [T::zero(); 2],
            owners: FixedBitSet::with_capacity(num_items),
            depth: 0,
        }
    }

    /// Builds a complete state from an owner per item.
    ///
    /// # Panics
    ///
    /// Panics if `owners.len()` differs from `valuation.num_items()`.
    pub fn from_owners(valuation: &Valuation<T>, owners: &[Agent]) -> Self {
        assert_eq!(
            owners.len(),
            valuation.num_items(),
            "called `AllocationState::from_owners` with {} owners for {} items",
            owners.len(),
            valuation.num_items()
        );

        owners
            .iter()
            .zip(valuation.items())
            .fold(Self::root(valuation.num_items()), |state, (&agent, item)| {
                state.child(agent, valuation.value(agent, item))
            })
    }

    /// Returns the child that hands the next undecided item to `agent`, which
    /// values it at `value`.
    ///
    /// # Panics
    ///
    /// Panics if every item has already been decided.
    #[inline]
    pub fn child(&self, agent: Agent, value: T) -> Self {
        assert!(
            self.depth < self.owners.len(),
            "called `AllocationState::child` on a complete state with {} items",
            self.depth
        );

        let mut owners = self.owners.clone();
        owners.set(self.depth, agent == Agent::Second);

        let mut totals = self.totals;
        totals[agent.id()] = totals[agent.id()] + value;

        Self {
            totals,
            owners,
            depth: self.depth + 1,
        }
    }

    /// Number of items decided so far; also the index of the next item.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` once every item has been decided.
    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.depth == self.owners.len()
    }

    /// Sum of `agent`'s values over the items it holds.
    #[inline(always)]
    pub fn total(&self, agent: Agent) -> T {
        self.totals[agent.id()]
    }

    /// Both totals as `(total0, total1)`.
    #[inline(always)]
    pub fn totals(&self) -> (T, T) {
        (self.totals[0], self.totals[1])
    }

    /// The holder of `item`, or `None` if it is still undecided.
    #[inline]
    pub fn owner(&self, item: ItemIndex) -> Option<Agent> {
        let index = item.get();
        if index >= self.depth {
            return None;
        }
        Some(if self.owners.contains(index) {
            Agent::Second
        } else {
            Agent::First
        })
    }

    /// Iterates over the items held by `agent` in decision order.
    #[inline]
    pub fn items(&self, agent: Agent) -> impl Iterator<Item = ItemIndex> + '_ {
        (0..self.depth)
            .filter(move |&i| self.owners.contains(i) == (agent == Agent::Second))
            .map(ItemIndex::new)
    }

    /// Scores the state under `objective`.
    #[inline(always)]
    pub fn score<O>(&self, objective: &O) -> T
    where
        O: Objective<T> + ?Sized,
    {
        objective.value(self.totals[0], self.totals[1])
    }

    /// Converts the state into the reported allocation.
    pub fn to_allocation(&self) -> Allocation<T> {
        Allocation::new(
            self.items(Agent::First).collect(),
            self.totals[0],
            self.items(Agent::Second).collect(),
            self.totals[1],
        )
    }
}
