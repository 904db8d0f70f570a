//! Environment Configuration Module
//!
//! Resolves the effective configuration from arguments, environment
//! variables and defaults, in that order.

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

use crate::args::ArraysArgs;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the store directory
pub const STORE_DIR_ENV: &str = "ARRAYS_STORE_DIR";
/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "ARRAYS_LOG";
/// Directory name used under the system temp dir when nothing is configured
pub const DEFAULT_STORE_DIR_NAME: &str = "arrays-store";

/// Storage backend selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Process-local memory store
    Memory,
    /// One file per key under the directory
    Files(PathBuf),
}

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where stored values live
    pub backend: Backend,
    /// Tracing filter directive
    pub log_filter: String,
    /// `-v` count, used for formatting choices
    pub verbose: u8,
}

impl CliConfig {
    /// Resolve from arguments and the process environment
    pub fn resolve(args: &ArraysArgs) -> Self {
        Self::resolve_with(args, |name| env::var(name).ok())
    }

    /// Resolve using `lookup` for environment variables
    pub fn resolve_with<F>(args: &ArraysArgs, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = if args.memory {
            Backend::Memory
        } else {
            let dir = args
                .store_dir
                .clone()
                .or_else(|| lookup(STORE_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_STORE_DIR_NAME));
            Backend::Files(dir)
        };

        let log_filter = lookup(LOG_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| log_level(args.verbose).to_string());

        Self {
            backend,
            log_filter,
            verbose: args.verbose,
        }
    }
}

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> ArraysArgs {
        ArraysArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "debug");
        assert_eq!(log_level(5), "trace");
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::resolve_with(&parse(&["arrays", "showcase"]), |_| None);
        assert_eq!(
            config.backend,
            Backend::Files(env::temp_dir().join(DEFAULT_STORE_DIR_NAME))
        );
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_store_dir() {
        let config = CliConfig::resolve_with(&parse(&["arrays", "showcase"]), |name| {
            (name == STORE_DIR_ENV).then(|| "/data/arrays".to_string())
        });
        assert_eq!(config.backend, Backend::Files(PathBuf::from("/data/arrays")));
    }

    #[test]
    fn test_flag_beats_env() {
        let args = parse(&["arrays", "--store-dir", "/flag", "showcase"]);
        let config = CliConfig::resolve_with(&args, |_| Some("/env".to_string()));
        assert_eq!(config.backend, Backend::Files(PathBuf::from("/flag")));
    }

    #[test]
    fn test_memory_backend() {
        let args = parse(&["arrays", "--memory", "showcase"]);
        let config = CliConfig::resolve_with(&args, |_| Some("/env".to_string()));
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn test_log_env_beats_verbosity() {
        let args = parse(&["arrays", "-v", "showcase"]);
        let config = CliConfig::resolve_with(&args, |name| {
            (name == LOG_ENV).then(|| "adapters_storage=trace".to_string())
        });
        assert_eq!(config.log_filter, "adapters_storage=trace");
        assert_eq!(config.verbose, 1);
    }
}
