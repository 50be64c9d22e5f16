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


//! Translation from `winit` keyboard events to the shell's input vocabulary.
//!
//! Only key presses produce events; auto-repeat counts as a press so holding
//! an arrow keeps moving the focus.

use aos_core::EventType;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates a `WindowEvent` into an input event type, if it is one.
pub fn translate_winit_input(event: &WindowEvent) -> Option<EventType> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => translate_key(key_event.physical_key, key_event.state),
        _ => None,
    }
}

/// Translates a physical key transition. Releases are ignored.
pub fn translate_key(key: PhysicalKey, state: ElementState) -> Option<EventType> {
    match (key, state) {
        (PhysicalKey::Code(code), ElementState::Pressed) => map_key_code(code),
        _ => None,
    }
}

/// Maps a key code to its navigation event.
pub fn map_key_code(code: KeyCode) -> Option<EventType> {
    match code {
        KeyCode::ArrowUp => Some(EventType::KeyUp),
        KeyCode::ArrowDown => Some(EventType::KeyDown),
        KeyCode::ArrowLeft => Some(EventType::KeyLeft),
        KeyCode::ArrowRight => Some(EventType::KeyRight),
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(EventType::KeySelect),
        KeyCode::Escape => Some(EventType::KeyBack),
        _ => None,
    }
}
