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

//! # Item and Agent Identifiers
//!
//! `ItemIndex` is a transparent wrapper around `usize` so item positions cannot
//! be confused with counts, level depths or other raw integers flowing through
//! the search. `Agent` names one of the two participants; there is no third.
//!
//! ```rust
//! use fairshare_model::index::{Agent, ItemIndex};
//!
//! let item = ItemIndex::new(3);
//! assert_eq!(item.get(), 3);
//! assert_eq!(format!("{}", item), "ItemIndex(3)");
//! assert_eq!(Agent::Second.id(), 1);
//! ```

/// A typed index of an item inside a `Valuation`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates a new `ItemIndex` from a raw position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.0)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.0)
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<ItemIndex> for usize {
    fn from(index: ItemIndex) -> Self {
        index.0
    }
}

/// One of the two agents sharing the items.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Agent {
    /// Agent 0.
    First,
    /// Agent 1.
    Second,
}

impl Agent {
    /// Both agents, in branching order.
    pub const ALL: [Agent; 2] = [Agent::First, Agent::Second];

    /// Returns the zero-based number of the agent.
    #[inline(always)]
    pub const fn id(self) -> usize {
        match self {
            Agent::First => 0,
            Agent::Second => 1,
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_index_new_and_get() {
        let idx = ItemIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_item_index_conversions() {
        let idx: ItemIndex = 42.into();
        assert_eq!(idx.get(), 42);

        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_item_index_debug_and_display() {
        let idx = ItemIndex::new(7);
        assert_eq!(format!("{}", idx), "ItemIndex(7)");
        assert_eq!(format!("{:?}", idx), "ItemIndex(7)");
    }

    #[test]
    fn test_agent_ids_and_display() {
        assert_eq!(Agent::First.id(), 0);
        assert_eq!(Agent::Second.id(), 1);
        assert_eq!(format!("{}", Agent::Second), "Agent 1");
    }
}
