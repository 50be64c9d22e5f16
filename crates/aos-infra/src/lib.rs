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


//! # A-OS Infra
//!
//! Concrete implementations of the collaborators `aos-core` only knows as
//! traits: a `winit` window that publishes key presses onto the event bus,
//! and a `wgpu` surface that draws the solid rectangles applications emit.

pub mod audio;
pub mod graphics;
pub mod platform;

pub use audio::AudioManager;
pub use graphics::WgpuDisplay;
pub use platform::WinitPlatform;
