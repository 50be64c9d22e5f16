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


//! Provides the queued event primitives the shell communicates through.
//!
//! Producers (input devices, the application manager, applications) publish
//! [`Event`]s onto the [`EventBus`]; the frame loop drains the queue once per
//! tick and hands each event to the handlers subscribed to its [`EventType`].

mod bus;
mod types;

pub use self::bus::{EventBus, EventHandler};
pub use self::types::{Event, EventType};
