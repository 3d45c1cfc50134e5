//! Win32 bindings for the system provider.

use windows::core::{HSTRING, PWSTR};
use windows::Win32::Foundation::{ERROR_SUCCESS, POINT};
use windows::Win32::System::Diagnostics::Debug::IsDebuggerPresent;
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryInfoKeyW, HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
    KEY_QUERY_VALUE,
};
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, GetForegroundWindow, GetWindowTextW};

use crate::probe::error::{ProbeError, Result};
use crate::probe::provider::{CursorPoint, RegistryHive, RegistryKey};

const TITLE_MAX_SIZE: usize = 256;

pub(super) fn is_debugger_present() -> bool {
    unsafe { IsDebuggerPresent().as_bool() }
}

pub(super) fn foreground_window_title() -> Option<String> {
    let window = unsafe { GetForegroundWindow() };
    if window.0.is_null() {
        return None;
    }

    let mut buffer = [0u16; TITLE_MAX_SIZE];
    let length = unsafe { GetWindowTextW(window, &mut buffer) };
    // GetWindowTextW returns 0 both for an empty title and on failure
    let length = usize::try_from(length).unwrap_or(0).min(TITLE_MAX_SIZE);
    Some(String::from_utf16_lossy(&buffer[..length]))
}

/// Open registry key, closed on drop.
#[derive(Debug)]
pub struct RegistryHandle {
    handle: HKEY,
    path: String,
}

impl RegistryKey for RegistryHandle {
    fn value_count(&self) -> Result<u32> {
        let mut values = 0u32;
        let status = unsafe {
            RegQueryInfoKeyW(
                self.handle,
                PWSTR::null(),
                None,
                None,
                None,
                None,
                None,
                Some(&mut values as *mut u32),
                None,
                None,
                None,
                None,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(ProbeError::registry_query(&self.path, status.0));
        }
        Ok(values)
    }
}

impl Drop for RegistryHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = RegCloseKey(self.handle);
        }
    }
}

pub(super) fn open_key(hive: RegistryHive, path: &str) -> Result<RegistryHandle> {
    let root = match hive {
        RegistryHive::LocalMachine => HKEY_LOCAL_MACHINE,
        RegistryHive::CurrentUser => HKEY_CURRENT_USER,
    };
    let subkey = HSTRING::from(path);
    let mut handle = HKEY::default();

    let status = unsafe { RegOpenKeyExW(root, &subkey, 0, KEY_QUERY_VALUE, &mut handle) };
    if status != ERROR_SUCCESS {
        return Err(ProbeError::registry_open(path, status.0));
    }

    Ok(RegistryHandle {
        handle,
        path: path.to_string(),
    })
}

pub(super) fn cursor_position() -> Result<CursorPoint> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }.map_err(|e| ProbeError::Cursor(e.to_string()))?;
    Ok(CursorPoint {
        x: point.x,
        y: point.y,
    })
}
