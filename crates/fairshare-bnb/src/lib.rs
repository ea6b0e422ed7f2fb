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

//! Fairshare-BnB: level-wise branch and bound for two-agent allocation
//!
//! Splits a set of indivisible items between two agents so that a welfare
//! objective of the agents' totals is maximized; by default the egalitarian
//! `min(total0, total1)`. The search enumerates assignments one item per
//! level, and two optional pruners keep the levels narrow.
//!
//! Core flow
//! - Provide a `fairshare_model::valuation::Valuation<T>`.
//! - Choose an `objective::Objective` (egalitarian or Nash welfare).
//! - Choose a `baseline::BaselineEstimator` for the pessimistic cutoff.
//! - Configure pruning with `config::BnbConfig` and pass a monitor.
//! - Run `bnb::BnbSolver` and read the `result::BnbOutcome`.
//!
//! Assumptions and guarantees
//! - Values are finite and nonnegative; `Valuation` enforces this.
//! - Objectives depend on the totals only and are non-decreasing in each.
//! - Dominance pruning is lossless. Bound pruning is exact with the additive
//!   projection in strict mode; other settings are reported as best effort.
//! - Runs are deterministic given the estimator's random source.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `baseline`: random and greedy baseline estimators.
//! - `config`: pruning switches, projection, and pruning mode.
//! - `monitor`: search monitors (log, composite, limits).
//! - `objective`: welfare objectives.
//! - `prune`: dominance and bound pruners.
//! - `result`: solver outcomes with termination reasons.
//! - `state`: immutable partial assignments.
//! - `stats`: lightweight counters and timing.

pub mod baseline;
pub mod bnb;
pub mod config;
pub mod monitor;
pub mod num;
pub mod objective;
pub mod prune;
pub mod result;
pub mod state;
pub mod stats;
