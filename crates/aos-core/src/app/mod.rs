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


//! The capability contract every pluggable application implements.
//!
//! Lifecycle flow, driven exclusively by the [`AppManager`](crate::AppManager):
//!
//! ```text
//! on_start -> on_resume -> [update / render / on_event]* -> on_pause -> on_stop
//! ```
//!
//! There is no resident-but-paused state: leaving the foreground always means
//! `on_pause` immediately followed by `on_stop`.

mod handle;

pub use self::handle::{AppHandle, AppInfo, ShellCommand};

use crate::event::Event;
use crate::platform::DrawSurface;

/// A foreground application.
pub trait App {
    /// The application is becoming the foreground application.
    fn on_start(&mut self) {}

    /// The application is about to lose the foreground. Always followed by
    /// [`on_stop`](App::on_stop).
    fn on_pause(&mut self) {}

    /// The application is now in the foreground. Always preceded by
    /// [`on_start`](App::on_start).
    fn on_resume(&mut self) {}

    /// The application has left the foreground and receives nothing more
    /// until its next start.
    fn on_stop(&mut self) {}

    /// Advances the application by `delta_seconds` of wall-clock time.
    fn update(&mut self, _delta_seconds: f32) {}

    /// Draws the current frame.
    fn render(&mut self, _surface: &mut dyn DrawSurface) {}

    /// Handles an input event forwarded by the manager.
    fn on_event(&mut self, _event: &Event) {}

    /// A stable, human-readable name. Assumed unique across the registry.
    fn name(&self) -> &str;

    /// Path or identifier of the application's icon, empty when it has none.
    fn icon(&self) -> &str {
        ""
    }
}
