//! # Environment probes
//!
//! Each probe inspects one piece of live OS or CPU state and returns a
//! [`Verdict`]. Probes are independent; none calls another.
//!
//! Every probe module offers `check()`, which queries the running system,
//! and `check_with(..)`, which takes the provider capabilities explicitly.

pub mod config;
pub mod cpuid;
pub mod cursor_speed;
pub mod debugger;
pub mod error;
pub mod foreground_window;
pub mod provider;
pub mod search_history;
pub mod system;
pub mod verdict;
pub mod virtual_device_drivers;

#[cfg(test)]
pub(crate) mod fakes;

pub use config::{CursorSamplingConfig, ProbeConfig, WindowPollConfig};
pub use error::{ProbeError, Result};
pub use provider::{
    CpuFeatures, CpuidRegisters, CursorPoint, CursorPosition, DebuggerStatus, RegistryAccess,
    RegistryHive, RegistryKey, Sleeper, WindowInfo,
};
pub use system::{SystemProvider, ThreadSleeper};
pub use verdict::{Verdict, VerdictCodeError};

use tracing::info;

/// One verdict per probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionDetails {
    pub debugger: Verdict,
    pub foreground_window: Verdict,
    pub virtual_device_drivers: Verdict,
    pub search_history: Verdict,
    pub hypervisor_bit: Verdict,
    pub cursor_speed: Verdict,
}

impl DetectionDetails {
    /// `(probe name, verdict)` pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, Verdict); 6] {
        [
            ("debugger_present", self.debugger),
            ("foreground_window_changes", self.foreground_window),
            ("virtual_device_drivers", self.virtual_device_drivers),
            ("search_history_content", self.search_history),
            ("hypervisor_bit", self.hypervisor_bit),
            ("human_cursor_speed", self.cursor_speed),
        ]
    }

    /// Number of probes that found an indicator.
    pub fn failed_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| v.is_failed()).count()
    }
}

/// Runs probes against one provider, one sleeper and one configuration.
pub struct Fingerprinter<P = SystemProvider, S = ThreadSleeper> {
    provider: P,
    sleeper: S,
    config: ProbeConfig,
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    pub fn with_config(config: ProbeConfig) -> Self {
        Self::with_parts(SystemProvider, ThreadSleeper, config)
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S> Fingerprinter<P, S>
where
    P: DebuggerStatus + WindowInfo + RegistryAccess + CpuFeatures + CursorPosition,
    S: Sleeper,
{
    pub fn with_parts(provider: P, sleeper: S, config: ProbeConfig) -> Self {
        Self {
            provider,
            sleeper,
            config,
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn debugger_present(&self) -> Verdict {
        debugger::check_with(&self.provider)
    }

    pub fn foreground_window_changes(&self) -> Verdict {
        foreground_window::check_with(&self.provider, &self.sleeper, &self.config.window)
    }

    pub fn virtual_device_drivers(&self) -> Verdict {
        virtual_device_drivers::check_with(&self.provider)
    }

    pub fn search_history_content(&self) -> Verdict {
        search_history::check_with(&self.provider)
    }

    pub fn hypervisor_bit(&self) -> Verdict {
        cpuid::check_with(&self.provider)
    }

    pub fn human_cursor_speed(&self) -> Verdict {
        cursor_speed::check_with(&self.provider, &self.sleeper, &self.config.cursor)
    }

    /// Runs every probe in turn. Blocks for as long as the two polling
    /// probes together.
    pub fn details(&self) -> DetectionDetails {
        let details = DetectionDetails {
            debugger: self.debugger_present(),
            foreground_window: self.foreground_window_changes(),
            virtual_device_drivers: self.virtual_device_drivers(),
            search_history: self.search_history_content(),
            hypervisor_bit: self.hypervisor_bit(),
            cursor_speed: self.human_cursor_speed(),
        };
        info!(failed = details.failed_count(), "environment probes finished");
        details
    }
}
