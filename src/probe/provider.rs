//! System-query capabilities consumed by the probes.
//!
//! One trait per probe family. [`SystemProvider`](super::system::SystemProvider)
//! implements them against the live machine; tests substitute scripted fakes.

use std::time::Duration;

use super::error::Result;

pub trait DebuggerStatus {
    /// Whether the calling process is currently being debugged.
    fn is_debugger_present(&self) -> bool;
}

pub trait WindowInfo {
    /// Title of the foreground window, `None` when no window has focus.
    fn foreground_window_title(&self) -> Option<String>;
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Root hive a registry path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryHive {
    LocalMachine,
    CurrentUser,
}

/// An open registry key. The handle is released when the value is dropped.
pub trait RegistryKey {
    /// Number of values stored directly under the key.
    fn value_count(&self) -> Result<u32>;
}

pub trait RegistryAccess {
    type Key: RegistryKey;

    /// Opens `path` under `hive` for read (query) access.
    fn open_key(&self, hive: RegistryHive, path: &str) -> Result<Self::Key>;
}

/// Raw register output of one CPUID leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuidRegisters {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

pub trait CpuFeatures {
    /// Executes CPUID for `leaf`. `None` on architectures without the
    /// instruction.
    fn cpuid(&self, leaf: u32) -> Option<CpuidRegisters>;
}

/// Screen coordinates in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPoint {
    pub x: i32,
    pub y: i32,
}

impl CursorPoint {
    pub fn distance_to(self, other: CursorPoint) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

pub trait CursorPosition {
    fn cursor_position(&self) -> Result<CursorPoint>;
}
