//! Debugger-presence probe.

use tracing::debug;

use super::provider::DebuggerStatus;
use super::system::SystemProvider;
use super::verdict::Verdict;

/// FAILED if a debugger is attached, PASSED otherwise. Never inconclusive.
pub fn check_with<D: DebuggerStatus + ?Sized>(status: &D) -> Verdict {
    let attached = status.is_debugger_present();
    debug!(attached, "debugger presence");
    Verdict::from_indicator(attached)
}

pub fn check() -> Verdict {
    check_with(&SystemProvider)
}
