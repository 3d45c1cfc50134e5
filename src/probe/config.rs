//! Tunables for the polling probes.

use std::time::Duration;

/// Foreground-window polling: `polls` re-reads, one `interval` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPollConfig {
    pub polls: u32,
    pub interval: Duration,
}

impl Default for WindowPollConfig {
    fn default() -> Self {
        Self {
            polls: 10,
            interval: Duration::from_secs(1),
        }
    }
}

/// Cursor sampling for the human-speed heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSamplingConfig {
    /// Total position samples, including the first one.
    pub samples: u32,
    pub interval: Duration,
    /// Average speed (pixels per second) at or above which movement is
    /// treated as scripted.
    pub max_human_speed: f64,
}

impl Default for CursorSamplingConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            interval: Duration::from_secs(1),
            max_human_speed: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeConfig {
    pub window: WindowPollConfig,
    pub cursor: CursorSamplingConfig,
}

impl ProbeConfig {
    pub fn with_window(mut self, window: WindowPollConfig) -> Self {
        self.window = window;
        self
    }

    pub fn with_cursor(mut self, cursor: CursorSamplingConfig) -> Self {
        self.cursor = cursor;
        self
    }
}
