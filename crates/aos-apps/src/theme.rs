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


//! Shared layout and palette.

use aos_core::{Color, DrawSurface, Rect};

pub const HEADER_HEIGHT: i32 = 80;
pub const TITLE_SIZE: u32 = 28;
pub const HINT_SIZE: u32 = 18;
pub const HINT_COLOR: Color = Color::rgb(150, 150, 150);
pub const BACK_HINT: &str = "Press ESC to return to Home";

/// Draws the colored header band with its title.
pub fn draw_header(surface: &mut dyn DrawSurface, title: &str, background: Color) {
    surface.fill_rect(Rect::new(0, 0, surface.width(), HEADER_HEIGHT), background);
    surface.draw_text(title, 20, 25, Color::WHITE, TITLE_SIZE);
}

/// Draws a hint line near the bottom edge.
pub fn draw_hint(surface: &mut dyn DrawSurface, hint: &str) {
    let y = surface.height() - 50;
    surface.draw_text(hint, 20, y, HINT_COLOR, HINT_SIZE);
}
