//! Use Cases Layer: Array Operations
//!
//! Provides deterministic transformations over sequences of dynamic values.
//! Every operation is a stateless associated function that borrows its
//! input and returns a new value; the single exception, `pull_at`, takes its
//! vector by value so the mutation is visible in the signature.
//!
//! ## Modules
//!
//! - **[`shaping`](shaping/index.html)**: chunk, flatten family, compact, fill
//! - **[`access`](access/index.html)**: head/first, last, nth, initial, tail,
//!   take, take_right, drop, drop_right, drop_while
//! - **[`search`](search/index.html)**: index_of, indexes_of, last_index_of,
//!   sorted_index, sorted_index_last
//! - **[`sets`](sets/index.html)**: union, intersect, difference, unique,
//!   sorted_unique, xor, xor_odd
//! - **[`recombine`](recombine/index.html)**: zip, unzip, zip_object,
//!   from_pairs, concat, pull, pull_all, pull_at
//! - **[`ordering`](ordering/index.html)**: sort, reverse_sort, stalin
//! - **[`numeric`](numeric/index.html)**: sum_flat, to_number, mean, median,
//!   range, range_sorted, elementwise arithmetic, pow, is_ascending
//! - **[`misc`](misc/index.html)**: array, join, repeat, times, is_array
//! - **[`predicate`](predicate/index.html)**: the `drop_while` predicate sum type
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for the `Value` model. The
//! API Facades layer exposes these operations as free functions.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 *
 * Creation productivity increased for code in this file by using AALang and GAB.
 * See https://github.com/yenrab/AALang-Gab
 */

pub mod access;
pub mod error;
pub mod misc;
pub mod numeric;
pub mod ordering;
pub mod predicate;
pub mod recombine;
pub mod search;
pub mod sets;
pub mod shaping;

pub use access::AccessOps;
pub use error::{ArrayError, ArrayResult};
pub use misc::MiscOps;
pub use numeric::NumericOps;
pub use ordering::OrderingOps;
pub use predicate::{Predicate, PredicateFn};
pub use recombine::RecombineOps;
pub use search::SearchOps;
pub use sets::SetOps;
pub use shaping::ShapingOps;
