// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Error types reported by the application manager.
//!
//! None of these are fatal: an `Err` always means the requested transition did
//! not happen and the active application is untouched.

use thiserror::Error;

/// Why a launch request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// The index is past the end of the registry.
    #[error("Invalid app index: {index} ({installed} installed)")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// How many applications are registered.
        installed: usize,
    },
    /// No registered application has this name.
    #[error("App not found: {name}")]
    NotFound {
        /// The requested name.
        name: String,
    },
    /// The registry is empty, so there is no home application.
    #[error("No applications registered")]
    NoApplications,
}
