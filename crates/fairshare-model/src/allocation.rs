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

use crate::{
    index::{Agent, ItemIndex},
    valuation::Valuation,
};
use fixedbitset::FixedBitSet;
use num_traits::Float;

/// The error type for assembling an `Allocation` from item lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// An item index does not exist in the valuation.
    #[error("{item} is out of bounds for a valuation with {num_items} items")]
    ItemOutOfBounds { item: ItemIndex, num_items: usize },
    /// An item was handed out more than once.
    #[error("{item} is assigned more than once")]
    DuplicateItem { item: ItemIndex },
    /// An item was not handed out at all.
    #[error("{item} is not assigned to any agent")]
    MissingItem { item: ItemIndex },
}

/// A complete division of the items between the two agents.
///
/// Item lists keep the order in which the search decided them. Each total is
/// measured under the receiving agent's own valuation.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation<T> {
    items: [Vec<ItemIndex>; 2],
    totals: [T; 2],
}

impl<T> Allocation<T>
where
    T: Float,
{
    /// Constructs an allocation from already computed item lists and totals.
    ///
    /// No consistency check is performed; the search engine builds totals
    /// incrementally alongside the lists. Use `from_items` for untrusted input.
    #[inline]
    pub fn new(items0: Vec<ItemIndex>, total0: T, items1: Vec<ItemIndex>, total1: T) -> Self {
        Self {
            items: [items0, items1],
            totals: [total0, total1],
        }
    }

    /// The allocation of zero items.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new(), T::zero(), Vec::new(), T::zero())
    }

    /// Builds an allocation from item lists, checking that they partition the
    /// items of `valuation` and summing each agent's total from it.
    ///
    /// # Errors
    ///
    /// Returns an `AllocationError` for the first out-of-bounds, duplicated or
    /// missing item.
    pub fn from_items(
        valuation: &Valuation<T>,
        items0: Vec<ItemIndex>,
        items1: Vec<ItemIndex>,
    ) -> Result<Self, AllocationError> {
        let num_items = valuation.num_items();
        let mut seen = FixedBitSet::with_capacity(num_items);

        for &item in items0.iter().chain(items1.iter()) {
            if item.get() >= num_items {
                return Err(AllocationError::ItemOutOfBounds { item, num_items });
            }
            if seen.put(item.get()) {
                return Err(AllocationError::DuplicateItem { item });
            }
        }

        if let Some(missing) = seen.zeroes().next() {
            return Err(AllocationError::MissingItem {
                item: ItemIndex::new(missing),
            });
        }

        let sum = |agent: Agent, items: &[ItemIndex]| {
            items
                .iter()
                .fold(T::zero(), |acc, &item| acc + valuation.value(agent, item))
        };
        let total0 = sum(Agent::First, &items0);
        let total1 = sum(Agent::Second, &items1);

        Ok(Self::new(items0, total0, items1, total1))
    }

    /// Returns the items received by `agent` in decision order.
    #[inline]
    pub fn items(&self, agent: Agent) -> &[ItemIndex] {
        &self.items[agent.id()]
    }

    /// Returns the value `agent` derives from its own items.
    #[inline]
    pub fn total(&self, agent: Agent) -> T {
        self.totals[agent.id()]
    }

    /// Returns the agent holding `item`, if any.
    #[inline]
    pub fn owner(&self, item: ItemIndex) -> Option<Agent> {
        Agent::ALL
            .into_iter()
            .find(|agent| self.items(*agent).contains(&item))
    }

    /// Returns the number of allocated items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items[0].len() + self.items[1].len()
    }

    /// The egalitarian value, `min(total0, total1)`.
    #[inline]
    pub fn egalitarian_value(&self) -> T {
        self.totals[0].min(self.totals[1])
    }

    /// The Nash social welfare, `total0 * total1`.
    #[inline]
    pub fn nash_welfare(&self) -> T {
        self.totals[0] * self.totals[1]
    }

    /// Returns `true` if the item lists are disjoint and together cover
    /// exactly the items `0..num_items`.
    pub fn is_partition_of(&self, num_items: usize) -> bool {
        if self.num_items() != num_items {
            return false;
        }

        let mut seen = FixedBitSet::with_capacity(num_items);
        self.items
            .iter()
            .flatten()
            .all(|item| item.get() < num_items && !seen.put(item.get()))
    }
}

impl<T> std::fmt::Display for Allocation<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for agent in Agent::ALL {
            let items = self
                .items(agent)
                .iter()
                .map(|item| item.get().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{} receives items [{}] with value {}",
                agent,
                items,
                self.total(agent)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn valuation() -> Valuation<f64> {
        Valuation::new(vec![1.0, 4.0, 3.0], vec![6.0, 4.0, 6.0]).unwrap()
    }

    #[test]
    fn test_from_items_computes_totals() {
        let allocation = Allocation::from_items(&valuation(), vec![ii(1), ii(2)], vec![ii(0)])
            .expect("valid partition");

        assert_eq!(allocation.total(Agent::First), 7.0);
        assert_eq!(allocation.total(Agent::Second), 6.0);
        assert_eq!(allocation.egalitarian_value(), 6.0);
        assert_eq!(allocation.nash_welfare(), 42.0);
        assert_eq!(allocation.owner(ii(0)), Some(Agent::Second));
        assert_eq!(allocation.owner(ii(2)), Some(Agent::First));
        assert!(allocation.is_partition_of(3));
    }

    #[test]
    fn test_from_items_rejects_invalid_lists() {
        let v = valuation();

        assert_eq!(
            Allocation::from_items(&v, vec![ii(0), ii(3)], vec![ii(1), ii(2)]).unwrap_err(),
            AllocationError::ItemOutOfBounds {
                item: ii(3),
                num_items: 3
            }
        );
        assert_eq!(
            Allocation::from_items(&v, vec![ii(0), ii(1)], vec![ii(1), ii(2)]).unwrap_err(),
            AllocationError::DuplicateItem { item: ii(1) }
        );
        assert_eq!(
            Allocation::from_items(&v, vec![ii(0)], vec![ii(2)]).unwrap_err(),
            AllocationError::MissingItem { item: ii(1) }
        );
    }

    #[test]
    fn test_empty_allocation() {
        let allocation = Allocation::<f64>::empty();
        assert_eq!(allocation.num_items(), 0);
        assert_eq!(allocation.egalitarian_value(), 0.0);
        assert!(allocation.is_partition_of(0));
        assert!(!allocation.is_partition_of(1));
    }

    #[test]
    fn test_is_partition_of_detects_overlap() {
        let allocation = Allocation::new(vec![ii(0), ii(1)], 2.0, vec![ii(1)], 1.0);
        assert!(!allocation.is_partition_of(3));
        assert!(!allocation.is_partition_of(2));
    }

    #[test]
    fn test_display_formatting() {
        let allocation =
            Allocation::from_items(&valuation(), vec![ii(1), ii(2)], vec![ii(0)]).unwrap();

        let expected = "Agent 0 receives items [1, 2] with value 7\n\
                        Agent 1 receives items [0] with value 6\n";
        assert_eq!(format!("{}", allocation), expected);
    }
}
