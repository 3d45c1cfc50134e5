//! Virtual-device-driver registry probe.

use tracing::debug;

use super::provider::{RegistryAccess, RegistryHive};
use super::system::SystemProvider;
use super::verdict::Verdict;

pub const VIRTUAL_DEVICE_DRIVERS_KEY: &str =
    "SYSTEM\\CurrentControlSet\\Control\\VirtualDeviceDrivers";

/// FAILED when the key exists. Any open failure counts as absent.
pub fn check_with<R: RegistryAccess + ?Sized>(registry: &R) -> Verdict {
    match registry.open_key(RegistryHive::LocalMachine, VIRTUAL_DEVICE_DRIVERS_KEY) {
        Ok(key) => {
            drop(key);
            debug!(key = VIRTUAL_DEVICE_DRIVERS_KEY, "virtualization key present");
            Verdict::Failed
        }
        Err(e) => {
            debug!(error = %e, "virtualization key absent");
            Verdict::Passed
        }
    }
}

pub fn check() -> Verdict {
    check_with(&SystemProvider)
}
