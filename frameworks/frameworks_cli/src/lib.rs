//! Frameworks Layer: Command Line
//!
//! The `arrays` binary: parses arguments, resolves configuration, installs
//! logging, and runs a subcommand.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: clap argument definitions
//! - **[`env`](env/index.html)**: Configuration from flags, environment and defaults
//! - **[`logging`](logging/index.html)**: tracing subscriber setup
//! - **[`showcase`](showcase/index.html)**: Sample invocations
//! - **[`commands`](commands/index.html)**: Subcommand execution

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

pub mod args;
pub mod commands;
pub mod env;
pub mod logging;
pub mod showcase;

pub use args::{ArraysArgs, Command};
pub use commands::{run, CliError};
pub use env::{Backend, CliConfig};
pub use logging::init_logging;
