// Copyright 2026 The flashdeck developers
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

use std::time::Duration;
use std::time::Instant;

/// A non-negative count of milliseconds.
pub type Millis = u64;

/// Readings are truncated to this tick, so sub-tick precision is not
/// guaranteed, only monotonic non-decreasing accumulation while running.
pub const TICK_MS: Millis = 10;

/// Elapsed-time accumulator for one card's unseen interval. A plain value,
/// not a background timer: time accrues between `start()` and the next
/// `stop()` or `reset()`, measured against a monotonic clock.
#[derive(Debug)]
pub struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    /// A zeroed, halted stopwatch.
    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    /// Begin or resume accumulation. No-op while already running.
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Freeze the accumulated value.
    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Zero the accumulated value and halt.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running_since = None;
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// The elapsed milliseconds, truncated to [TICK_MS].
    pub fn elapsed_millis(&self) -> Millis {
        let mut elapsed = self.accumulated;
        if let Some(since) = self.running_since {
            elapsed += since.elapsed();
        }
        let ms = elapsed.as_millis() as Millis;
        (ms / TICK_MS) * TICK_MS
    }
}

/// Format milliseconds as `MM:SS.cc`, the in-card stopwatch display.
pub fn format_clock(ms: Millis) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Format milliseconds as `M:SS`, the aggregate-figure display.
pub fn format_minutes(ms: Millis) -> String {
    let seconds = ms / 1_000;
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!("{minutes}:{remaining:02}")
}
