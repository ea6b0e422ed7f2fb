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

//! # Fairshare Model
//!
//! **The core domain model for the Fairshare allocation solver.**
//!
//! This crate defines the data structures used to describe a two-agent
//! indivisible item allocation problem and its solutions. It is the data
//! interchange layer between the problem definition (user input) and the search
//! engine (`fairshare_bnb`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly typed `ItemIndex` and the two-valued `Agent`.
//! * **`valuation`**: The validated `Valuation` (one value per item and agent).
//! * **`allocation`**: The output format, a partition of the items with totals.
//! * **`loading`**: A text loader that turns whitespace separated instances into a `Valuation`.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Items and agents are distinct types; an `Agent` can only be one of two.
//! 2.  **Memory Layout**: Values are stored per agent in flat vectors, which is what the search reads.
//! 3.  **Fail-Fast**: Constructors validate eagerly so the solver never sees negative or non-finite values.

pub mod allocation;
pub mod index;
pub mod loading;
pub mod valuation;
