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

use crate::stats::BnbStatistics;
use fairshare_model::allocation::Allocation;
use num_traits::Float;

/// The allocation a run produced, labelled by what is known about it.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<T> {
    /// The allocation is optimal for the objective.
    Optimal(Allocation<T>),
    /// The allocation is feasible, but optimality was not proven.
    Feasible(Allocation<T>),
}

impl<T> SolverResult<T> {
    /// Returns the allocation regardless of the label.
    #[inline]
    pub fn allocation(&self) -> &Allocation<T> {
        match self {
            SolverResult::Optimal(allocation) | SolverResult::Feasible(allocation) => allocation,
        }
    }

    #[inline]
    pub fn into_allocation(self) -> Allocation<T> {
        match self {
            SolverResult::Optimal(allocation) | SolverResult::Feasible(allocation) => allocation,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverResult::Optimal(_))
    }

    /// Returns the allocation if it is proven optimal.
    ///
    /// # Panics
    ///
    /// Panics if the result is not `Optimal`.
    #[inline]
    pub fn unwrap_optimal(&self) -> &Allocation<T> {
        match self {
            SolverResult::Optimal(allocation) => allocation,
            SolverResult::Feasible(_) => {
                panic!("called `SolverResult::unwrap_optimal()` on a `Feasible` value")
            }
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(allocation) => {
                write!(f, "Optimal(egalitarian={})", allocation.egalitarian_value())
            }
            SolverResult::Feasible(allocation) => {
                write!(f, "Feasible(egalitarian={})", allocation.egalitarian_value())
            }
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every pruning step was sound, so the best state found is optimal.
    OptimalityProven,
    /// The search completed with a pruning setup that may lose the optimum.
    BestEffort,
    /// A monitor stopped the search. The string carries its reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::BestEffort => write!(f, "Best Effort"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbStatistics<T>,
}

impl<T> BnbOutcome<T> {
    #[inline]
    pub fn optimal(allocation: Allocation<T>, statistics: BnbStatistics<T>) -> Self {
        Self {
            result: SolverResult::Optimal(allocation),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn best_effort(allocation: Allocation<T>, statistics: BnbStatistics<T>) -> Self {
        Self {
            result: SolverResult::Feasible(allocation),
            termination_reason: TerminationReason::BestEffort,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(allocation: Allocation<T>, reason: R, statistics: BnbStatistics<T>) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(allocation),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the chosen allocation.
    #[inline]
    pub fn allocation(&self) -> &Allocation<T> {
        self.result.allocation()
    }

    /// Consumes the outcome and returns the chosen allocation.
    #[inline]
    pub fn into_allocation(self) -> Allocation<T> {
        self.result.into_allocation()
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbStatistics<T> {
        &self.statistics
    }
}

impl<T> std::fmt::Display for BnbOutcome<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.result, self.termination_reason)?;
        write!(f, "{}", self.result.allocation())?;
        write!(f, "{}", self.statistics)
    }
}
