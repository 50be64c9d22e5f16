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


//! Shell configuration.
//!
//! The core never reads files itself; the bootstrap deserializes a
//! [`ShellConfig`] (every field optional) and hands it to the collaborators.

use crate::math::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the window, presentation and frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Window title.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
    /// Block on vertical sync at present time. This paces the frame loop.
    pub vsync: bool,
    /// Color every frame is cleared to before the active app renders.
    pub clear_color: Color,
    /// Maximum number of events dispatched per drain, `None` for unbounded.
    pub max_events_per_drain: Option<usize>,
    /// How long startup waits for the platform to deliver the window before
    /// giving up, in milliseconds.
    pub window_timeout_ms: u64,
}

impl ShellConfig {
    /// [`window_timeout_ms`](Self::window_timeout_ms) as a `Duration`.
    pub fn window_timeout(&self) -> Duration {
        Duration::from_millis(self.window_timeout_ms)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "A-OS".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            clear_color: Color::BLACK,
            max_events_per_drain: Some(4096),
            window_timeout_ms: 10_000,
        }
    }
}
