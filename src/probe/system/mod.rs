//! Live-system implementations of the provider traits.

use std::thread;
use std::time::Duration;

use super::cpuid;
use super::error::Result;
use super::provider::{
    CpuFeatures, CpuidRegisters, CursorPoint, CursorPosition, DebuggerStatus, RegistryAccess,
    RegistryHive, Sleeper, WindowInfo,
};

#[cfg(target_os = "windows")]
mod win32;
#[cfg(target_os = "windows")]
use win32 as platform;

#[cfg(not(target_os = "windows"))]
mod fallback;
#[cfg(not(target_os = "windows"))]
use fallback as platform;

pub use platform::RegistryHandle;

/// Queries the machine the process is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl DebuggerStatus for SystemProvider {
    fn is_debugger_present(&self) -> bool {
        platform::is_debugger_present()
    }
}

impl WindowInfo for SystemProvider {
    fn foreground_window_title(&self) -> Option<String> {
        platform::foreground_window_title()
    }
}

impl RegistryAccess for SystemProvider {
    type Key = RegistryHandle;

    fn open_key(&self, hive: RegistryHive, path: &str) -> Result<Self::Key> {
        platform::open_key(hive, path)
    }
}

impl CpuFeatures for SystemProvider {
    fn cpuid(&self, leaf: u32) -> Option<CpuidRegisters> {
        cpuid::read_leaf(leaf)
    }
}

impl CursorPosition for SystemProvider {
    fn cursor_position(&self) -> Result<CursorPoint> {
        platform::cursor_position()
    }
}

/// Blocks the calling thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
