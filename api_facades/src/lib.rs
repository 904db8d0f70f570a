//! API Facades Layer
//!
//! Flat free-function surface over the array operations. Each facade keeps
//! the familiar operation name and fills in the usual default arguments
//! (`chunk` size 1, `nth` index 0, `take` count 1, ...), then calls the
//! use-case layer.
//!
//! Optional arguments are `Option`s; an absent input sequence is
//! `Option<&[Value]>` for the operations that accept one.

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

pub mod array_facades;
pub mod storage_facades;

// Re-export main facade functions
pub use array_facades::*;
pub use storage_facades::*;

pub use entities_data_handling::{values, Callable, Object, Value};
pub use usecases_arrays::{ArrayError, ArrayResult, Predicate};
