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


//! The frame loop.
//!
//! Each tick runs, in this fixed order:
//! 1. poll input (and the quit flag),
//! 2. drain the event bus,
//! 3. update the foreground application with the measured delta,
//! 4. clear, render and present.
//!
//! The loop has no timer or frame-rate arithmetic of its own; pacing comes
//! from [`Display::present`] blocking on vertical sync.

use crate::event::{Event, EventBus, EventType};
use crate::manager::AppManager;
use crate::math::Color;
use crate::platform::{Display, InputSource};
use crate::utils::timer::{FrameClock, Stopwatch};
use std::rc::Rc;

/// Frames between two FPS log lines.
const STATS_INTERVAL_FRAMES: u64 = 300;

/// What happened during a call to [`Shell::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The frame completed; keep looping.
    Continue,
    /// Quit was requested at the start of the frame; nothing else ran.
    Quit,
}

/// The single-threaded cooperative scheduler driving the foreground app.
pub struct Shell<I: InputSource, D: Display> {
    bus: Rc<EventBus>,
    manager: AppManager,
    input: I,
    display: D,
    clear_color: Color,
    clock: FrameClock,
    running: bool,
    finished: bool,
    frame_count: u64,
    last_delta: f32,
    stats_window: Stopwatch,
}

impl<I: InputSource, D: Display> Shell<I, D> {
    /// Assembles a shell from its collaborators. Nothing runs until
    /// [`run`](Shell::run) or [`tick`](Shell::tick).
    pub fn new(bus: Rc<EventBus>, manager: AppManager, input: I, display: D) -> Self {
        Self {
            bus,
            manager,
            input,
            display,
            clear_color: Color::BLACK,
            clock: FrameClock::new(),
            running: false,
            finished: false,
            frame_count: 0,
            last_delta: 0.0,
            stats_window: Stopwatch::new(),
        }
    }

    /// Sets the color each frame is cleared to.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Publishes the startup event and loops until quit is requested, then
    /// runs the shutdown sequence.
    ///
    /// A shell runs once. Later calls log a warning and return immediately.
    pub fn run(&mut self) {
        if self.running {
            log::warn!("Shell::run called while already running; ignoring.");
            return;
        }
        if self.finished {
            log::warn!("Shell::run called after shutdown; ignoring.");
            return;
        }

        self.running = true;
        self.clock.reset();
        self.stats_window.restart();
        log::info!("=== A-OS Running ===");

        self.bus.publish(Event::new(EventType::SystemStartup));

        while self.tick() == TickOutcome::Continue {}

        self.shutdown();
        self.running = false;
        self.finished = true;
        log::info!("=== A-OS Stopped ({} frames) ===", self.frame_count);
    }

    /// Runs a single frame.
    pub fn tick(&mut self) -> TickOutcome {
        self.input.poll_input(&self.bus);
        if self.input.is_quit_requested() {
            log::info!("Quit requested.");
            return TickOutcome::Quit;
        }

        self.bus.process_events();

        let delta = self.clock.tick();
        self.last_delta = delta;
        self.manager.update(delta);

        self.display.clear(self.clear_color);
        self.manager.render(&mut self.display);
        self.display.present();

        self.frame_count += 1;
        self.log_frame_stats();
        TickOutcome::Continue
    }

    /// Stops the foreground app first so its pause/stop broadcasts are
    /// delivered by the final drain, ahead of `SystemShutdown`.
    fn shutdown(&mut self) {
        self.manager.shutdown();
        self.bus.publish(Event::new(EventType::SystemShutdown));
        self.bus.process_events();
    }

    fn log_frame_stats(&mut self) {
        if self.frame_count % STATS_INTERVAL_FRAMES != 0 {
            return;
        }
        let elapsed = self.stats_window.restart().as_secs_f64();
        if elapsed > 0.0 {
            log::debug!(
                "Frame {}: {:.1} FPS over the last {STATS_INTERVAL_FRAMES} frames.",
                self.frame_count,
                STATS_INTERVAL_FRAMES as f64 / elapsed
            );
        }
    }

    /// Returns `true` while [`run`](Shell::run) is looping.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `true` once [`run`](Shell::run) has completed its shutdown.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Delta, in seconds, handed to the last update.
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// The shared event bus.
    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    /// The application manager.
    pub fn manager(&self) -> &AppManager {
        &self.manager
    }

    /// Mutable access to the application manager.
    pub fn manager_mut(&mut self) -> &mut AppManager {
        &mut self.manager
    }

    /// The input collaborator.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The presentation collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, Journal, RecordingApp, RecordingSurface, ScriptedInput};

    fn shell_with(
        input: ScriptedInput,
        journal: &Journal,
    ) -> Shell<ScriptedInput, RecordingSurface> {
        let bus = Rc::new(EventBus::new());
        let mut manager = AppManager::new(Rc::clone(&bus));
        manager.register(Box::new(RecordingApp::new("Home", journal)));
        manager.launch_by_index(0).unwrap();
        bus.process_events();
        journal.borrow_mut().clear();
        Shell::new(bus, manager, input, RecordingSurface::default())
    }

    #[test]
    fn tick_runs_phases_in_order() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::new([[EventType::KeyDown]]), &journal);

        assert_eq!(shell.tick(), TickOutcome::Continue);

        assert_eq!(
            *journal.borrow(),
            vec!["Home.on_event:KeyDown", "Home.update", "Home.render"]
        );
        assert_eq!(
            shell.display().ops(),
            &[
                DrawOp::Clear(Color::BLACK),
                DrawOp::FillRect(crate::math::Rect::new(0, 0, 1, 1), Color::WHITE),
                DrawOp::Present,
            ]
        );
        assert_eq!(shell.frame_count(), 1);
        assert!(shell.last_delta() >= 0.0);
    }

    #[test]
    fn quit_skips_the_rest_of_the_frame() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(0), &journal);
        shell.bus().publish(Event::new(EventType::KeyUp));

        assert_eq!(shell.tick(), TickOutcome::Quit);

        assert!(journal.borrow().is_empty());
        assert!(shell.display().ops().is_empty());
        assert_eq!(shell.bus().pending(), 1, "quit must not drain the bus");
        assert_eq!(shell.frame_count(), 0);
    }

    #[test]
    fn run_loops_until_quit_then_stops_active_app() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(3), &journal);

        shell.run();

        assert!(!shell.is_running());
        assert_eq!(shell.frame_count(), 3);
        assert_eq!(shell.input().polls(), 4);
        assert_eq!(shell.display().frames_presented(), 3);
        assert!(!shell.manager().has_active_app());

        let entries = journal.borrow();
        let tail: Vec<_> = entries.iter().rev().take(2).rev().cloned().collect();
        assert_eq!(tail, vec!["Home.on_pause", "Home.on_stop"]);
    }

    #[test]
    fn startup_and_shutdown_events_are_published() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(1), &journal);

        let seen: Journal = Rc::default();
        for kind in [EventType::SystemStartup, EventType::SystemShutdown] {
            let seen = Rc::clone(&seen);
            shell
                .bus()
                .subscribe(kind, move |e| seen.borrow_mut().push(e.kind().to_string()));
        }

        shell.run();

        assert_eq!(*seen.borrow(), vec!["SystemStartup", "SystemShutdown"]);
    }

    #[test]
    fn final_lifecycle_broadcasts_are_delivered() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(1), &journal);

        let seen: Journal = Rc::default();
        for kind in [
            EventType::AppPaused,
            EventType::AppStopped,
            EventType::SystemShutdown,
        ] {
            let seen = Rc::clone(&seen);
            shell.bus().subscribe(kind, move |e| {
                seen.borrow_mut()
                    .push(format!("{}:{}", e.kind(), e.payload().unwrap_or("")));
            });
        }

        shell.run();

        assert_eq!(
            *seen.borrow(),
            vec!["AppPaused:Home", "AppStopped:Home", "SystemShutdown:"]
        );
        assert_eq!(shell.bus().pending(), 0);
    }

    #[test]
    fn input_left_at_quit_is_not_forwarded() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(0), &journal);
        shell.bus().publish(Event::new(EventType::KeySelect));

        shell.run();

        assert!(!journal
            .borrow()
            .iter()
            .any(|entry| entry.starts_with("Home.on_event")));
        assert_eq!(shell.bus().pending(), 0);
    }

    #[test]
    fn run_only_runs_once() {
        let journal: Journal = Rc::default();
        let mut shell = shell_with(ScriptedInput::idle(1), &journal);
        let startups = Rc::new(std::cell::Cell::new(0));
        {
            let startups = Rc::clone(&startups);
            shell
                .bus()
                .subscribe(EventType::SystemStartup, move |_| startups.set(startups.get() + 1));
        }

        shell.run();
        assert!(shell.is_finished());
        let polls = shell.input().polls();

        shell.run();

        assert_eq!(startups.get(), 1);
        assert_eq!(shell.input().polls(), polls);
        assert!(!shell.is_running());
        assert_eq!(shell.bus().pending(), 0);
    }

    #[test]
    fn clear_color_is_configurable() {
        let journal: Journal = Rc::default();
        let color = Color::rgb(10, 20, 30);
        let mut shell = shell_with(ScriptedInput::idle(1), &journal).with_clear_color(color);

        shell.tick();

        assert_eq!(shell.display().ops()[0], DrawOp::Clear(color));
    }
}
