//! Command Execution Module
//!
//! Runs one parsed subcommand against the configured backend and returns the
//! text to print.

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

use crate::args::Command;
use crate::env::{Backend, CliConfig};
use crate::showcase::{render, samples};
use adapters_storage::{FileStore, KeyValueStore, MemoryStore, Persistence, StoreError};
use api_facades::{get_from, store_in};
use infrastructure_external_format::{decode_value, DecodeError};
use thiserror::Error;
use tracing::{info, warn};

/// Errors reported by the command line
#[derive(Debug, Error)]
pub enum CliError {
    /// The JSON argument did not parse
    #[error("invalid JSON argument: {0}")]
    InvalidJson(#[from] DecodeError),
    /// The store could not be opened or read
    #[error(transparent)]
    Store(#[from] StoreError),
    /// `store` reported failure
    #[error("could not store value under '{0}'")]
    NotStored(String),
    /// `remove` found nothing
    #[error("nothing stored under '{0}'")]
    NotRemoved(String),
}

/// Open the configured backend
pub fn open_backend(backend: &Backend) -> Result<Box<dyn KeyValueStore>, CliError> {
    match backend {
        Backend::Memory => Ok(Box::new(MemoryStore::global().clone())),
        Backend::Files(dir) => Ok(Box::new(FileStore::open(dir)?)),
    }
}

/// Execute `command`, returning its output
pub fn run(command: &Command, config: &CliConfig) -> Result<String, CliError> {
    if config.backend == Backend::Memory && *command != Command::Showcase {
        warn!("--memory values are dropped when this process exits");
    }
    match command {
        Command::Showcase => Ok(samples()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Store { key, json } => {
            let value = decode_value(json)?;
            let persistence = Persistence::new(open_backend(&config.backend)?);
            if store_in(&persistence, &value, key) {
                info!(key = %key, "value stored");
                Ok("true".to_string())
            } else {
                Err(CliError::NotStored(key.clone()))
            }
        }
        Command::Get { key } => {
            let persistence = Persistence::new(open_backend(&config.backend)?);
            let value = get_from(&persistence, key)?;
            Ok(render(&value))
        }
        Command::Remove { key } => {
            let persistence = Persistence::new(open_backend(&config.backend)?);
            if persistence.remove(key) {
                Ok("true".to_string())
            } else {
                Err(CliError::NotRemoved(key.clone()))
            }
        }
    }
}
