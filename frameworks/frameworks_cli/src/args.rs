//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

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

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Array utilities command-line arguments
#[derive(Parser, Debug)]
#[command(name = "arrays")]
#[command(about = "Array utilities: sample invocations and value persistence")]
pub struct ArraysArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding stored values (overrides ARRAYS_STORE_DIR)
    #[arg(long, global = true, conflicts_with = "memory")]
    pub store_dir: Option<PathBuf>,

    /// Use an in-memory store (only useful with `showcase`; values stored
    /// this way are gone when the command exits)
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every sample invocation with its result
    Showcase,
    /// Store a JSON value under a key
    Store {
        /// Key to store under
        key: String,
        /// JSON text of the value
        json: String,
    },
    /// Print the JSON value stored under a key
    Get {
        /// Key to read
        key: String,
    },
    /// Remove the value stored under a key
    Remove {
        /// Key to remove
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        ArraysArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_store() {
        let args = ArraysArgs::try_parse_from(["arrays", "store", "k", "[1,2]"]).unwrap();
        assert_eq!(
            args.command,
            Command::Store {
                key: "k".to_string(),
                json: "[1,2]".to_string()
            }
        );
        assert_eq!(args.verbose, 0);
        assert!(!args.memory);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = ArraysArgs::try_parse_from(["arrays", "get", "k", "-vv", "--memory"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.memory);
    }

    #[test]
    fn test_memory_conflicts_with_store_dir() {
        let result =
            ArraysArgs::try_parse_from(["arrays", "--memory", "--store-dir", "/tmp/x", "showcase"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_help_mentions_scope() {
        let command = ArraysArgs::command();
        let memory = command
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == "memory")
            .unwrap();
        let help = memory.get_help().unwrap().to_string();
        assert!(help.contains("showcase"));
        assert!(help.contains("gone when the command exits"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(ArraysArgs::try_parse_from(["arrays"]).is_err());
    }
}
