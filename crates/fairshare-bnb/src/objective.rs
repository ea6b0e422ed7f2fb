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

//! Welfare objectives over the two agents' totals.
//!
//! The search maximizes an `Objective` that depends only on the pair
//! `(total0, total1)`. Both pruning rules rest on two properties every
//! implementation must have:
//!
//! - it is a function of the totals alone, so two states with equal totals are
//!   interchangeable for the rest of the search;
//! - it is non-decreasing in each total over nonnegative inputs, so crediting
//!   every remaining item to both agents yields an upper bound.

use crate::num::SolverFloat;

/// A welfare function the search maximizes.
pub trait Objective<T>
where
    T: SolverFloat,
{
    /// Returns the name of the objective.
    fn name(&self) -> &str;

    /// Scores a pair of totals. Larger is better.
    fn value(&self, total0: T, total1: T) -> T;
}

impl<T> std::fmt::Debug for dyn Objective<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Objective({})", self.name())
    }
}

/// The egalitarian (max-min) objective, `min(total0, total1)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Egalitarian;

impl<T> Objective<T> for Egalitarian
where
    T: SolverFloat,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "Egalitarian"
    }

    #[inline(always)]
    fn value(&self, total0: T, total1: T) -> T {
        total0.min(total1)
    }
}

/// The Nash social welfare objective, `total0 * total1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NashWelfare;

impl<T> Objective<T> for NashWelfare
where
    T: SolverFloat,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NashWelfare"
    }

    #[inline(always)]
    fn value(&self, total0: T, total1: T) -> T {
        total0 * total1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_egalitarian_takes_the_minimum() {
        assert_eq!(Objective::<f64>::value(&Egalitarian, 7.0, 6.0), 6.0);
        assert_eq!(Objective::<f64>::value(&Egalitarian, 0.0, 5.0), 0.0);
        assert_eq!(Objective::<f64>::name(&Egalitarian), "Egalitarian");
    }

    #[test]
    fn test_nash_welfare_takes_the_product() {
        assert_eq!(Objective::<f64>::value(&NashWelfare, 7.0, 6.0), 42.0);
        assert_eq!(Objective::<f64>::value(&NashWelfare, 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_objectives_are_monotone_on_samples() {
        let objectives: [&dyn Objective<f64>; 2] = [&Egalitarian, &NashWelfare];
        let samples = [0.0, 0.5, 1.0, 3.0, 10.0];
        for objective in objectives {
            for &a in &samples {
                for &b in &samples {
                    let base = objective.value(a, b);
                    assert!(objective.value(a + 1.0, b) >= base, "{:?}", objective);
                    assert!(objective.value(a, b + 1.0) >= base, "{:?}", objective);
                }
            }
        }
    }
}
