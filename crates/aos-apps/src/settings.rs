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


use crate::theme::{draw_header, draw_hint, BACK_HINT};
use aos_core::{App, AppHandle, Color, DrawSurface, Event, EventType, Rect};

const PULSE_DIM: Color = Color::rgb(100, 100, 100);
const PULSE_BRIGHT: Color = Color::rgb(255, 100, 100);

/// Placeholder settings screen with a pulsing box to show it is alive.
pub struct SettingsApp {
    handle: AppHandle,
    animation_time: f32,
}

impl SettingsApp {
    pub fn new(handle: AppHandle) -> Self {
        Self {
            handle,
            animation_time: 0.0,
        }
    }

    /// Pulse phase in `[0, 1]`.
    fn wave(&self) -> f32 {
        (self.animation_time * 2.0).sin() * 0.5 + 0.5
    }

    /// Fades from gray to red with the pulse.
    fn pulse_color(&self) -> Color {
        Color::lerp(PULSE_DIM, PULSE_BRIGHT, self.wave())
    }

    /// The animated box, centered on the surface.
    fn pulse_rect(&self, surface_width: i32, surface_height: i32) -> Rect {
        let size = 50 + (self.wave() * 30.0) as i32;
        Rect::centered(surface_width / 2, surface_height / 2, size, size)
    }
}

impl App for SettingsApp {
    fn on_start(&mut self) {
        log::debug!("SettingsApp: Started");
        self.animation_time = 0.0;
    }

    fn on_stop(&mut self) {
        log::debug!("SettingsApp: Stopped");
    }

    fn update(&mut self, delta_seconds: f32) {
        self.animation_time += delta_seconds;
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        draw_header(surface, "Settings", Color::rgb(60, 40, 40));

        let (cx, cy) = (surface.width() / 2, surface.height() / 2);
        surface.fill_rect(
            self.pulse_rect(surface.width(), surface.height()),
            self.pulse_color(),
        );

        surface.draw_text("Settings Demo", cx - 80, cy - 100, Color::WHITE, 24);
        surface.draw_text(
            "This is a placeholder app",
            cx - 120,
            cy + 80,
            Color::rgb(200, 200, 200),
            20,
        );
        draw_hint(surface, BACK_HINT);
    }

    fn on_event(&mut self, event: &Event) {
        if event.kind() == EventType::KeyBack {
            log::debug!("SettingsApp: Returning to home");
            self.handle.return_to_home();
        }
    }

    fn name(&self) -> &str {
        "Settings"
    }

    fn icon(&self) -> &str {
        "settings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aos_core::testing::{DrawOp, Journal, RecordingApp, RecordingSurface};
    use aos_core::{AppManager, EventBus};
    use std::rc::Rc;

    #[test]
    fn back_returns_home() {
        let journal: Journal = Rc::default();
        let bus = Rc::new(EventBus::new());
        let mut manager = AppManager::new(Rc::clone(&bus));
        manager.register(Box::new(RecordingApp::new("Home", &journal)));
        manager.register(Box::new(SettingsApp::new(manager.handle())));
        manager.launch_by_name("Settings").unwrap();

        bus.publish(Event::new(EventType::KeyBack));
        bus.process_events();

        assert_eq!(manager.active_index(), Some(0));
    }

    #[test]
    fn animation_restarts_on_start() {
        let bus = Rc::new(EventBus::new());
        let manager = AppManager::new(bus);
        let mut app = SettingsApp::new(manager.handle());

        app.update(1.5);
        assert!(app.animation_time > 1.0);

        app.on_start();
        assert_eq!(app.animation_time, 0.0);
    }

    #[test]
    fn pulse_color_follows_the_wave() {
        let bus = Rc::new(EventBus::new());
        let manager = AppManager::new(bus);
        let mut app = SettingsApp::new(manager.handle());

        // sin(0) puts the wave at its midpoint.
        assert_eq!(app.pulse_color(), Color::lerp(PULSE_DIM, PULSE_BRIGHT, 0.5));

        // 2 * t = pi / 2 is the crest.
        app.update(std::f32::consts::FRAC_PI_4);
        assert_eq!(app.pulse_color(), PULSE_BRIGHT);

        let mut surface = RecordingSurface::default();
        app.render(&mut surface);
        assert!(surface
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::FillRect(_, color) if *color == PULSE_BRIGHT)));
    }

    #[test]
    fn pulse_stays_centered_and_bounded() {
        let bus = Rc::new(EventBus::new());
        let manager = AppManager::new(bus);
        let mut app = SettingsApp::new(manager.handle());

        for _ in 0..50 {
            app.update(0.1);
            let rect = app.pulse_rect(1280, 720);
            assert!((50..=80).contains(&rect.w));
            assert_eq!(rect.w, rect.h);
            assert!((rect.x + rect.w / 2 - 640).abs() <= 1);
        }
    }
}
