//! Array Operation Errors
//!
//! Error type shared by the array operations.

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

use thiserror::Error;

/// Error type for array operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Bad argument (e.g., zero chunk size, unsupported predicate kind)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for array operations
pub type ArrayResult<T> = Result<T, ArrayError>;
