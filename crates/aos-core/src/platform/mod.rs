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


//! Interfaces to the collaborators the shell drives but does not implement.
//!
//! Concrete backends (a `winit` window, a `wgpu` surface) live in other
//! crates; the headless doubles in [`crate::testing`] implement the same
//! traits for tests.

use crate::event::EventBus;
use crate::math::{Color, Rect};

/// A source of raw input that publishes normalized events onto the bus.
pub trait InputSource {
    /// Collects pending device input and publishes the matching events.
    ///
    /// Called exactly once at the start of every frame.
    fn poll_input(&mut self, bus: &EventBus);

    /// Returns `true` once the user or the platform asked the shell to exit.
    fn is_quit_requested(&self) -> bool;
}

/// The drawing API applications render through.
///
/// Only solid rectangles are mandatory. Text has a default fallback that
/// draws a placeholder bar, which is what backends without a font use.
pub trait DrawSurface {
    /// Current drawable size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a one-pixel outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.w, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.h), color);
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.h), color);
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, size: u32) {
        if text.is_empty() {
            return;
        }
        let width = (text.chars().count() as u32 * size / 2) as i32;
        self.fill_rect(Rect::new(x, y, width, size as i32), color);
    }

    /// Width of the surface as a signed pixel coordinate.
    fn width(&self) -> i32 {
        self.size().0 as i32
    }

    /// Height of the surface as a signed pixel coordinate.
    fn height(&self) -> i32 {
        self.size().1 as i32
    }
}

/// A [`DrawSurface`] that can also start and finish a frame.
pub trait Display: DrawSurface {
    /// Starts a new frame filled with `color`.
    fn clear(&mut self, color: Color);

    /// Shows the frame. May block (vertical sync); this is what paces the
    /// frame loop.
    fn present(&mut self);
}
