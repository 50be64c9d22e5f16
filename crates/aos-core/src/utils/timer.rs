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


use std::time::{Duration, Instant};

/// A simple wall-clock stopwatch, started on creation.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a new, running Stopwatch.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Restarts the stopwatch and returns the time elapsed before the restart.
    #[inline]
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.start_time);
        self.start_time = now;
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures the wall-clock delta between consecutive frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    stopwatch: Stopwatch,
}

impl FrameClock {
    /// Creates a clock whose first delta is measured from now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new frame and returns the seconds since the previous mark.
    ///
    /// Never negative.
    pub fn tick(&mut self) -> f32 {
        self.stopwatch.restart().as_secs_f32()
    }

    /// Forgets the previous mark; the next delta is measured from now.
    pub fn reset(&mut self) {
        self.stopwatch.restart();
    }
}
