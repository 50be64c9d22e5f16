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


use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed vocabulary of events the shell dispatches on.
///
/// The bus treats the type as an opaque discriminator and never looks at the
/// payload. Only the six `Key*` variants are forwarded to the active
/// application by the [`AppManager`](crate::AppManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventType {
    /// Published once when the frame loop starts.
    SystemStartup,
    /// Published once when the frame loop terminates.
    SystemShutdown,

    /// Directional input: up.
    KeyUp,
    /// Directional input: down.
    KeyDown,
    /// Directional input: left.
    KeyLeft,
    /// Directional input: right.
    KeyRight,
    /// Confirm / activate (Enter, Space, A button).
    KeySelect,
    /// Cancel / go back (Escape, B button).
    KeyBack,

    /// Wake word detected. Reserved.
    VoiceWake,
    /// Partial speech transcript. Reserved.
    VoicePartial,
    /// Final speech transcript. Reserved.
    VoiceFinal,
    /// Recognised voice command. Reserved.
    VoiceCommand,

    /// An application received `on_start`. Payload: application name.
    AppStarted,
    /// An application received `on_pause`. Payload: application name.
    AppPaused,
    /// An application received `on_resume`. Payload: application name.
    AppResumed,
    /// An application received `on_stop`. Payload: application name.
    AppStopped,

    /// Free-form application-defined event.
    Custom,
}

impl EventType {
    /// The input-class event types, in the order the manager subscribes to them.
    pub const INPUT: [EventType; 6] = [
        EventType::KeyUp,
        EventType::KeyDown,
        EventType::KeyLeft,
        EventType::KeyRight,
        EventType::KeySelect,
        EventType::KeyBack,
    ];

    /// Returns `true` for the directional, selection and back input types.
    pub fn is_input(self) -> bool {
        Self::INPUT.contains(&self)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A typed message with an optional text and numeric payload.
///
/// Events are immutable once built and are moved by value into the bus queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventType,
    payload: Option<String>,
    value: Option<i64>,
}

impl Event {
    /// Creates an event with no payload.
    pub fn new(kind: EventType) -> Self {
        Self {
            kind,
            payload: None,
            value: None,
        }
    }

    /// Attaches a text payload.
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attaches a numeric payload.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// The discriminator the bus dispatches on.
    pub fn kind(&self) -> EventType {
        self.kind
    }

    /// The text payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// The numeric payload, if any.
    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

impl From<EventType> for Event {
    fn from(kind: EventType) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_types_are_exactly_the_key_variants() {
        let all = [
            EventType::SystemStartup,
            EventType::SystemShutdown,
            EventType::KeyUp,
            EventType::KeyDown,
            EventType::KeyLeft,
            EventType::KeyRight,
            EventType::KeySelect,
            EventType::KeyBack,
            EventType::VoiceWake,
            EventType::VoicePartial,
            EventType::VoiceFinal,
            EventType::VoiceCommand,
            EventType::AppStarted,
            EventType::AppPaused,
            EventType::AppResumed,
            EventType::AppStopped,
            EventType::Custom,
        ];
        let inputs: Vec<_> = all.iter().copied().filter(|t| t.is_input()).collect();
        assert_eq!(inputs, EventType::INPUT.to_vec());
    }

    #[test]
    fn builder_sets_payloads() {
        let event = Event::new(EventType::VoiceFinal)
            .with_payload("open settings")
            .with_value(3);
        assert_eq!(event.kind(), EventType::VoiceFinal);
        assert_eq!(event.payload(), Some("open settings"));
        assert_eq!(event.value(), Some(3));
    }

    #[test]
    fn bare_event_has_no_payload() {
        let event: Event = EventType::KeyBack.into();
        assert_eq!(event.payload(), None);
        assert_eq!(event.value(), None);
    }
}
