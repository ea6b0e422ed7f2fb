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

//! Additive valuations of two agents over a common set of items.
//!
//! A `Valuation` holds, for every item, the value each agent assigns to it.
//! The search engine relies on every value being finite and nonnegative: the
//! pessimistic baseline and the optimistic projection only bound the objective
//! under that assumption. Construction therefore validates eagerly and
//! rejects mismatched lengths, negative values and non-finite values with a
//! `ValuationError` that points at the offending entry.

use crate::index::{Agent, ItemIndex};
use num_traits::Float;

/// The error type for constructing a `Valuation`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValuationError {
    /// The two value sequences differ in length.
    #[error(
        "value sequences differ in length: agent 0 values {values0} items but agent 1 values {values1}"
    )]
    InvalidInputLength { values0: usize, values1: usize },
    /// A value is negative, NaN or infinite.
    #[error(
        "{agent} assigns {value} to item {}, but values must be finite and nonnegative",
        .item.get()
    )]
    InvalidValue {
        agent: Agent,
        item: ItemIndex,
        value: f64,
    },
}

/// The values both agents assign to each item.
///
/// Values are stored per agent, so `values(Agent::First)[i]` is what agent 0
/// gets from item `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Valuation<T> {
    values: [Vec<T>; 2],
}

impl<T> Valuation<T>
where
    T: Float,
{
    /// Creates a validated valuation from the per-agent value sequences.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidInputLength` if the sequences differ in
    /// length and `ValuationError::InvalidValue` for the first value (agent 0
    /// first, then agent 1, each in item order) that is negative or non-finite.
    pub fn new(values0: Vec<T>, values1: Vec<T>) -> Result<Self, ValuationError> {
        if values0.len() != values1.len() {
            return Err(ValuationError::InvalidInputLength {
                values0: values0.len(),
                values1: values1.len(),
            });
        }

        for (agent, values) in [(Agent::First, &values0), (Agent::Second, &values1)] {
            if let Some((i, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| !Self::is_admissible(**v))
            {
                return Err(ValuationError::InvalidValue {
                    agent,
                    item: ItemIndex::new(i),
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            values: [values0, values1],
        })
    }

    /// Creates a validated valuation by copying the given slices.
    #[inline]
    pub fn from_slices(values0: &[T], values1: &[T]) -> Result<Self, ValuationError> {
        Self::new(values0.to_vec(), values1.to_vec())
    }

    /// Creates a valuation where both agents agree on every item.
    #[inline]
    pub fn identical(values: Vec<T>) -> Result<Self, ValuationError> {
        Self::new(values.clone(), values)
    }

    #[inline(always)]
    fn is_admissible(value: T) -> bool {
        value.is_finite() && value >= T::zero()
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.values[0].len()
    }

    /// Returns `true` if there are no items to allocate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// Returns the value `agent` assigns to `item`.
    ///
    /// # Panics
    ///
    /// Panics if `item` is not within `0..self.num_items()`.
    #[inline]
    pub fn value(&self, agent: Agent, item: ItemIndex) -> T {
        let index = item.get();
        assert!(
            index < self.num_items(),
            "called `Valuation::value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[agent.id()][index]
    }

    /// Returns all values of `agent` in item order.
    #[inline]
    pub fn values(&self, agent: Agent) -> &[T] {
        &self.values[agent.id()]
    }

    /// Returns the value `agent` would get from receiving every item.
    #[inline]
    pub fn total(&self, agent: Agent) -> T {
        self.values(agent)
            .iter()
            .fold(T::zero(), |acc, &value| acc + value)
    }

    /// Iterates over the item indices in decision order.
    #[inline]
    pub fn items(&self) -> impl Iterator<Item = ItemIndex> + use<T> {
        (0..self.num_items()).map(ItemIndex::new)
    }
}

impl<T> std::fmt::Display for Valuation<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Valuation ({} items)", self.num_items())?;
        writeln!(f, "   {:<8} | {:<12} | {:<12}", "Item", "Agent 0", "Agent 1")?;
        writeln!(f, "   {:-<8}-+-{:-<12}-+-{:-<12}", "", "", "")?;
        for i in 0..self.num_items() {
            writeln!(
                f,
                "   {:<8} | {:<12} | {:<12}",
                i, self.values[0][i], self.values[1][i]
            )?;
        }
        Ok(())
    }
}
