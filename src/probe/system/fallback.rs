//! Non-Windows system provider. There is no window manager, registry or
//! cursor API to query; debugger presence comes from procfs on Linux.

use crate::probe::error::{ProbeError, Result};
use crate::probe::provider::{CursorPoint, RegistryHive, RegistryKey};

#[cfg(target_os = "linux")]
pub(super) fn is_debugger_present() -> bool {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => tracer_pid(&status).is_some_and(|pid| pid != 0),
        Err(e) => {
            tracing::debug!(error = %e, "cannot read /proc/self/status");
            false
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub(super) fn is_debugger_present() -> bool {
    false
}

/// Extracts the `TracerPid:` field of a `/proc/<pid>/status` dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|rest| rest.trim().parse().ok())
}

pub(super) fn foreground_window_title() -> Option<String> {
    None
}

/// Never constructed: registry keys cannot be opened here.
#[derive(Debug)]
pub enum RegistryHandle {}

impl RegistryKey for RegistryHandle {
    fn value_count(&self) -> Result<u32> {
        match *self {}
    }
}

pub(super) fn open_key(_hive: RegistryHive, _path: &str) -> Result<RegistryHandle> {
    Err(ProbeError::Unsupported("registry access"))
}

pub(super) fn cursor_position() -> Result<CursorPoint> {
    Err(ProbeError::Unsupported("cursor position"))
}
