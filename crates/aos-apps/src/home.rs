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


//! The launcher: a vertical list of every other installed application.

use crate::theme::{draw_header, draw_hint};
use aos_core::{App, AppHandle, Color, DrawSurface, Event, EventType, Rect};

const NAME: &str = "Home";

const TILE_WIDTH: i32 = 400;
const TILE_HEIGHT: i32 = 80;
const TILE_LEFT: i32 = 100;
const TILE_TOP: i32 = 120;
const TILE_SPACING: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tile {
    name: String,
    rect: Rect,
}

/// Home screen. Arrow keys move the focus, select launches the focused app.
pub struct HomeApp {
    handle: AppHandle,
    tiles: Vec<Tile>,
    focused: usize,
}

impl HomeApp {
    pub fn new(handle: AppHandle) -> Self {
        Self {
            handle,
            tiles: Vec::new(),
            focused: 0,
        }
    }

    /// Rebuilds the tiles from the installed applications, skipping itself.
    /// The focus survives when still in range.
    fn refresh_tiles(&mut self) {
        self.tiles = self
            .handle
            .installed_apps()
            .into_iter()
            .filter(|app| app.name != NAME)
            .enumerate()
            .map(|(slot, app)| Tile {
                name: app.name,
                rect: Rect::new(
                    TILE_LEFT,
                    TILE_TOP + slot as i32 * (TILE_HEIGHT + TILE_SPACING),
                    TILE_WIDTH,
                    TILE_HEIGHT,
                ),
            })
            .collect();

        if self.focused >= self.tiles.len() {
            self.focused = 0;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if self.tiles.is_empty() {
            return;
        }
        self.focused = if forward {
            (self.focused + 1).min(self.tiles.len() - 1)
        } else {
            self.focused.saturating_sub(1)
        };
    }

    fn launch_focused(&self) {
        if let Some(tile) = self.tiles.get(self.focused) {
            log::info!("Home: Launching {}", tile.name);
            self.handle.launch(tile.name.clone());
        }
    }

    /// Name of the focused tile, if any.
    pub fn focused_app(&self) -> Option<&str> {
        self.tiles.get(self.focused).map(|tile| tile.name.as_str())
    }

    /// Names of the tiles, top to bottom.
    pub fn tile_names(&self) -> Vec<&str> {
        self.tiles.iter().map(|tile| tile.name.as_str()).collect()
    }
}

impl App for HomeApp {
    fn on_start(&mut self) {
        log::debug!("HomeApp: Started");
    }

    fn on_resume(&mut self) {
        self.refresh_tiles();
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        draw_header(
            surface,
            "A-OS v0.2 - Application Operating System",
            Color::rgb(40, 40, 60),
        );

        for (slot, tile) in self.tiles.iter().enumerate() {
            let focused = slot == self.focused;
            let (fill, border, text) = if focused {
                (
                    Color::rgb(80, 120, 200),
                    Color::rgb(120, 180, 255),
                    Color::WHITE,
                )
            } else {
                (
                    Color::rgb(60, 60, 80),
                    Color::rgb(100, 100, 120),
                    Color::rgb(200, 200, 200),
                )
            };

            surface.fill_rect(tile.rect, fill);
            surface.stroke_rect(tile.rect, border);
            if focused {
                surface.stroke_rect(tile.rect.inset(1), border);
            }
            surface.draw_text(
                &tile.name,
                tile.rect.x + 20,
                tile.rect.y + tile.rect.h / 2 - 12,
                text,
                24,
            );
        }

        draw_hint(
            surface,
            "Arrow keys to navigate | Enter to select | ESC to return",
        );
    }

    fn on_event(&mut self, event: &Event) {
        match event.kind() {
            EventType::KeyUp => self.move_focus(false),
            EventType::KeyDown => self.move_focus(true),
            EventType::KeySelect => self.launch_focused(),
            _ => {}
        }
    }

    fn name(&self) -> &str {
        NAME
    }

    fn icon(&self) -> &str {
        "home"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aos_core::testing::{Journal, RecordingApp, RecordingSurface};
    use aos_core::{AppManager, EventBus};
    use std::rc::Rc;

    fn setup(others: &[&str]) -> (Rc<EventBus>, AppManager, Journal) {
        let journal: Journal = Rc::default();
        let bus = Rc::new(EventBus::new());
        let mut manager = AppManager::new(Rc::clone(&bus));
        let handle = manager.handle();
        manager.register(Box::new(HomeApp::new(handle)));
        for name in others {
            manager.register(Box::new(RecordingApp::new(*name, &journal)));
        }
        manager.launch_by_index(0).unwrap();
        (bus, manager, journal)
    }

    fn press(bus: &EventBus, keys: &[EventType]) {
        for key in keys {
            bus.publish(Event::new(*key));
        }
        bus.process_events();
    }

    #[test]
    fn select_launches_first_tile() {
        let (bus, manager, journal) = setup(&["Settings", "System Info"]);

        press(&bus, &[EventType::KeySelect]);

        assert_eq!(manager.active_name().as_deref(), Some("Settings"));
        assert!(journal
            .borrow()
            .iter()
            .any(|entry| entry == "Settings.on_start"));
    }

    #[test]
    fn focus_moves_and_clamps() {
        let (bus, manager, _journal) = setup(&["A", "B"]);

        press(
            &bus,
            &[
                EventType::KeyDown,
                EventType::KeyDown,
                EventType::KeyDown,
                EventType::KeySelect,
            ],
        );
        assert_eq!(manager.active_name().as_deref(), Some("B"));
    }

    #[test]
    fn focus_up_stops_at_top() {
        let (bus, manager, _journal) = setup(&["A", "B"]);

        press(&bus, &[EventType::KeyUp, EventType::KeySelect]);

        assert_eq!(manager.active_name().as_deref(), Some("A"));
    }

    #[test]
    fn home_lists_everything_but_itself() {
        let home = {
            let bus = Rc::new(EventBus::new());
            let mut manager = AppManager::new(bus);
            let journal: Journal = Rc::default();
            let mut home = HomeApp::new(manager.handle());
            manager.register(Box::new(RecordingApp::new("Home", &journal)));
            manager.register(Box::new(RecordingApp::new("A", &journal)));
            home.on_resume();
            home
        };

        assert_eq!(home.tile_names(), vec!["A"]);
        assert_eq!(home.focused_app(), Some("A"));
    }

    #[test]
    fn select_without_tiles_does_nothing() {
        let (bus, manager, _journal) = setup(&[]);

        press(&bus, &[EventType::KeyDown, EventType::KeySelect]);

        assert_eq!(manager.active_name().as_deref(), Some("Home"));
    }

    #[test]
    fn render_draws_a_tile_per_app() {
        let (_bus, mut manager, _journal) = setup(&["A", "B", "C"]);
        let mut surface = RecordingSurface::default();

        manager.render(&mut surface);

        let tile_fills = surface
            .ops()
            .iter()
            .filter(|op| {
                matches!(op, aos_core::testing::DrawOp::FillRect(rect, _)
                    if rect.w == TILE_WIDTH && rect.h == TILE_HEIGHT)
            })
            .count();
        assert_eq!(tile_fills, 3);
    }
}
