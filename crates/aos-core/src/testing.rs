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


//! Headless collaborators for driving the shell without a window or GPU.
//!
//! Used by this crate's tests and available to downstream crates for theirs.

use crate::app::{App, AppHandle, ShellCommand};
use crate::event::{Event, EventBus, EventType};
use crate::math::{Color, Rect};
use crate::platform::{Display, DrawSurface, InputSource};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A shared, ordered log of callback names.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// Replays pre-recorded input: one batch of events per frame, then quits.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<Event>>,
    quit_requested: bool,
    polls: usize,
}

impl ScriptedInput {
    /// Creates a script from per-frame batches. The poll after the last batch
    /// requests quit.
    pub fn new<I, F>(frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = EventType>,
    {
        Self {
            frames: frames
                .into_iter()
                .map(|frame| frame.into_iter().map(Event::new).collect())
                .collect(),
            ..Self::default()
        }
    }

    /// A script of `count` frames without input.
    pub fn idle(count: usize) -> Self {
        Self {
            frames: (0..count).map(|_| Vec::new()).collect(),
            ..Self::default()
        }
    }

    /// How many times the shell polled this source.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self, bus: &EventBus) {
        self.polls += 1;
        match self.frames.pop_front() {
            Some(frame) => frame.into_iter().for_each(|event| bus.publish(event)),
            None => self.quit_requested = true,
        }
    }

    fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }
}

/// A drawing call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// `Display::clear`.
    Clear(Color),
    /// `DrawSurface::fill_rect`.
    FillRect(Rect, Color),
    /// `Display::present`.
    Present,
}

/// A [`Display`] that records every call instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: (u32, u32),
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates a surface reporting the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ops: Vec::new(),
        }
    }

    /// Every call recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of presented frames.
    pub fn frames_presented(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }
}

impl Display for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}

/// An application that appends `"<name>.<callback>"` to a journal for every
/// call it receives, and can navigate in response to a chosen event.
pub struct RecordingApp {
    name: String,
    journal: Journal,
    reaction: Option<(EventType, AppHandle, ShellCommand)>,
}

impl RecordingApp {
    /// Creates an application recording into `journal`.
    pub fn new(name: impl Into<String>, journal: &Journal) -> Self {
        Self {
            name: name.into(),
            journal: Rc::clone(journal),
            reaction: None,
        }
    }

    /// Issues `command` through `handle` whenever an event of `kind` arrives.
    pub fn navigating(mut self, kind: EventType, handle: AppHandle, command: ShellCommand) -> Self {
        self.reaction = Some((kind, handle, command));
        self
    }

    fn record(&self, callback: &str) {
        self.journal
            .borrow_mut()
            .push(format!("{}.{callback}", self.name));
    }
}

impl App for RecordingApp {
    fn on_start(&mut self) {
        self.record("on_start");
    }

    fn on_pause(&mut self) {
        self.record("on_pause");
    }

    fn on_resume(&mut self) {
        self.record("on_resume");
    }

    fn on_stop(&mut self) {
        self.record("on_stop");
    }

    fn update(&mut self, _delta_seconds: f32) {
        self.record("update");
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        self.record("render");
        surface.fill_rect(Rect::new(0, 0, 1, 1), Color::WHITE);
    }

    fn on_event(&mut self, event: &Event) {
        self.record(&format!("on_event:{}", event.kind()));
        if let Some((kind, handle, command)) = &self.reaction {
            if *kind == event.kind() {
                match command.clone() {
                    ShellCommand::LaunchIndex(index) => handle.launch_index(index),
                    ShellCommand::LaunchName(name) => handle.launch(name),
                    ShellCommand::ReturnHome => handle.return_to_home(),
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Keeps only the journal entries that are lifecycle callbacks.
pub fn lifecycle_only(journal: &Journal) -> Vec<String> {
    journal
        .borrow()
        .iter()
        .filter(|entry| {
            ["on_start", "on_pause", "on_resume", "on_stop"]
                .iter()
                .any(|callback| entry.ends_with(callback))
        })
        .cloned()
        .collect()
}
