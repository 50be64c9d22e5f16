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


//! Audio output.

/// Placeholder audio service. It owns no device yet; it only tracks and logs
/// its own lifecycle so the bootstrap sequence is complete.
#[derive(Debug, Default)]
pub struct AudioManager {
    initialized: bool,
}

impl AudioManager {
    /// Creates an uninitialized manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the service up.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        log::info!("AudioManager: Initialized (no output device).");
    }

    /// Releases the service. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.initialized = false;
        log::info!("AudioManager: Shutdown.");
    }

    /// Returns `true` between [`initialize`](Self::initialize) and
    /// [`shutdown`](Self::shutdown).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
