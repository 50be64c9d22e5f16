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


//! # A-OS Core
//!
//! The runtime nucleus of the shell: a queued publish/subscribe [`EventBus`],
//! the [`App`] lifecycle contract, the [`AppManager`] that keeps exactly one
//! application in the foreground, and the [`Shell`] that sequences input,
//! event delivery, update and render every frame.
//!
//! Everything here runs on a single thread. Platform collaborators (window,
//! input devices, GPU presentation) are reached only through the traits in
//! [`platform`], so the core can be driven headlessly in tests.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod manager;
pub mod math;
pub mod platform;
pub mod shell;
pub mod testing;
pub mod utils;

pub use app::{App, AppHandle, AppInfo, ShellCommand};
pub use config::ShellConfig;
pub use error::LaunchError;
pub use event::{Event, EventBus, EventType};
pub use manager::AppManager;
pub use math::{Color, Rect};
pub use platform::{Display, DrawSurface, InputSource};
pub use shell::{Shell, TickOutcome};
pub use utils::timer::{FrameClock, Stopwatch};
