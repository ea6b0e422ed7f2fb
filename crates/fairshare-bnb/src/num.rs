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

//! # Solver Float Trait
//!
//! Unified numeric bounds for the search engine. Valuations are real-valued,
//! so the engine is generic over floating point types rather than integers.
//! `SolverFloat` collects the bounds every component needs into one alias:
//! `num_traits::Float` for arithmetic and classification, `Into<f64>` so
//! totals can be hashed by their exact bit pattern during dominance pruning,
//! and `Debug + Display` for logging and reporting.
//!
//! `f32` and `f64` both satisfy the alias.

use num_traits::Float;

/// A trait alias for floating point types that can be used in the solver.
pub trait SolverFloat:
    Float + Into<f64> + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> SolverFloat for T where
    T: Float + Into<f64> + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

/// Returns a hashable key that is equal for two values exactly when the
/// values compare equal, for all non-NaN inputs.
#[inline(always)]
pub(crate) fn exact_bits<T>(value: T) -> u64
where
    T: SolverFloat,
{
    let value: f64 = value.into();
    // `-0.0 == 0.0` but their bit patterns differ.
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solver_float<T: SolverFloat>() {}

    #[test]
    fn test_f32_and_f64_are_solver_floats() {
        assert_solver_float::<f32>();
        assert_solver_float::<f64>();
    }

    #[test]
    fn test_exact_bits_matches_float_equality() {
        assert_eq!(exact_bits(0.0f64), exact_bits(-0.0f64));
        assert_eq!(exact_bits(1.5f64), exact_bits(1.5f64));
        assert_ne!(exact_bits(0.1f64 + 0.2), exact_bits(0.3f64));
        assert_eq!(exact_bits(2.5f32), exact_bits(2.5f64));
    }
}
