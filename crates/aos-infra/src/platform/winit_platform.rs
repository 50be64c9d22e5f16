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


//! A `winit` window driven one tick at a time.
//!
//! The shell owns the frame loop, so instead of handing control to
//! `EventLoop::run_app` the platform pumps pending OS events once per
//! [`InputSource::poll_input`] call.

use super::input::translate_winit_input;
use aos_core::{Event, EventBus, EventType, InputSource, ShellConfig};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

/// Pump timeout while waiting for the platform to hand us a window.
const WINDOW_CREATION_POLL: Duration = Duration::from_millis(10);

/// The `winit` application handler: creates the window and buffers input.
struct PlatformState {
    title: String,
    width: u32,
    height: u32,
    fullscreen: bool,
    window: Option<Arc<Window>>,
    creation_error: Option<OsError>,
    pending: Vec<EventType>,
    quit_requested: bool,
}

impl PlatformState {
    fn new(config: &ShellConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            fullscreen: config.fullscreen,
            window: None,
            creation_error: None,
            pending: Vec::new(),
            quit_requested: false,
        }
    }
}

impl ApplicationHandler for PlatformState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );
        let mut attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true);
        if self.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("Winit window created successfully (id: {:?}).", window.id());
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.creation_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested.");
                self.quit_requested = true;
                event_loop.exit();
            }
            WindowEvent::Destroyed => {
                self.quit_requested = true;
            }
            other => {
                if let Some(kind) = translate_winit_input(&other) {
                    log::trace!("Key mapped to {kind}");
                    self.pending.push(kind);
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.quit_requested = true;
    }
}

/// Desktop window plus keyboard input source.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    state: PlatformState,
    window: Arc<Window>,
}

impl WinitPlatform {
    /// Creates the event loop and opens the window described by `config`.
    ///
    /// # Errors
    /// Fails if the event loop cannot be created, the window cannot be
    /// created, or no window arrives within `config.window_timeout_ms`.
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("Failed to create the event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        let mut state = PlatformState::new(config);
        let timeout = config.window_timeout();
        let deadline = Instant::now() + timeout;

        loop {
            let status = event_loop.pump_app_events(Some(WINDOW_CREATION_POLL), &mut state);
            if let Some(err) = state.creation_error.take() {
                return Err(err).context("Failed to create the window");
            }
            if let Some(window) = state.window.clone() {
                return Ok(Self {
                    event_loop,
                    state,
                    window,
                });
            }
            if let PumpStatus::Exit(code) = status {
                bail!("Event loop exited with code {code} before a window was created");
            }
            if Instant::now() >= deadline {
                bail!(
                    "Timed out after {} ms waiting for the platform to create a window",
                    timeout.as_millis()
                );
            }
        }
    }

    /// The window, for the presentation backend.
    pub fn window(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }
}

impl InputSource for WinitPlatform {
    fn poll_input(&mut self, bus: &EventBus) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {code}.");
            self.state.quit_requested = true;
        }

        for kind in self.state.pending.drain(..) {
            bus.publish(Event::new(kind));
        }
    }

    fn is_quit_requested(&self) -> bool {
        self.state.quit_requested
    }
}
