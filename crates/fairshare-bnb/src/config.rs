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

//! Search configuration
//!
//! `BnbConfig` selects which pruners run after each level is expanded and how
//! the baseline allocation is used. The defaults enable both pruners with the
//! admissible projection in strict mode, which keeps the result exact.

use crate::{num::SolverFloat, prune::bound::OptimisticProjection};

/// How the baseline allocation takes part in choosing the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PruningMode {
    /// The baseline allocation is an incumbent: it is returned when a level
    /// empties and replaces the best final state when it is strictly better.
    #[default]
    Strict,
    /// The baseline allocation is returned only when a level empties. The best
    /// final state is taken as is, even if it scores below the baseline.
    BestEffort,
}

impl std::fmt::Display for PruningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruningMode::Strict => write!(f, "Strict"),
            PruningMode::BestEffort => write!(f, "BestEffort"),
        }
    }
}

/// Configuration of one search run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BnbConfig<T> {
    dominance_pruning: bool,
    bound_pruning: bool,
    projection: OptimisticProjection<T>,
    mode: PruningMode,
}

impl<T> Default for BnbConfig<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbConfig<T>
where
    T: SolverFloat,
{
    /// Both pruners on, additive projection, strict mode.
    #[inline]
    pub fn new() -> Self {
        Self {
            dominance_pruning: true,
            bound_pruning: true,
            projection: OptimisticProjection::Additive,
            mode: PruningMode::Strict,
        }
    }

    /// Plain enumeration: no pruner runs.
    #[inline]
    pub fn exhaustive() -> Self {
        Self::new()
            .with_dominance_pruning(false)
            .with_bound_pruning(false)
    }

    #[inline]
    pub fn with_dominance_pruning(mut self, enabled: bool) -> Self {
        self.dominance_pruning = enabled;
        self
    }

    #[inline]
    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }

    #[inline]
    pub fn with_projection(mut self, projection: OptimisticProjection<T>) -> Self {
        self.projection = projection;
        self
    }

    #[inline]
    pub fn with_pruning_mode(mut self, mode: PruningMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline(always)]
    pub fn dominance_pruning(&self) -> bool {
        self.dominance_pruning
    }

    #[inline(always)]
    pub fn bound_pruning(&self) -> bool {
        self.bound_pruning
    }

    #[inline(always)]
    pub fn projection(&self) -> OptimisticProjection<T> {
        self.projection
    }

    #[inline(always)]
    pub fn pruning_mode(&self) -> PruningMode {
        self.mode
    }

    /// Returns `true` if a completed run under this configuration is
    /// guaranteed to return an optimal allocation.
    ///
    /// Dominance pruning is always lossless. Bound pruning is exact only with
    /// an admissible projection and the baseline kept as an incumbent.
    #[inline]
    pub fn proves_optimality(&self) -> bool {
        !self.bound_pruning
            || (self.mode == PruningMode::Strict && self.projection.is_admissible())
    }
}

impl<T> std::fmt::Display for BnbConfig<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbConfig(dominance: {}, bound: {}, projection: {}, mode: {})",
            self.dominance_pruning, self.bound_pruning, self.projection, self.mode
        )
    }
}
