//! Search-history-content probe.
//!
//! Explorer records search terms under `WordWheelQuery`. A machine someone
//! actually uses accumulates entries there; a fresh analysis image has none.

use tracing::debug;

use super::provider::{RegistryAccess, RegistryHive, RegistryKey};
use super::system::SystemProvider;
use super::verdict::Verdict;

pub const WORD_WHEEL_QUERY_KEY: &str =
    "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Explorer\\WordWheelQuery";

/// Below this many stored values the history counts as empty.
pub const MIN_HISTORY_VALUES: u32 = 2;

/// Open failure is FAILED, metadata failure is INCONCLUSIVE, otherwise the
/// verdict follows the stored value count. The key is released before the
/// verdict is decided.
pub fn check_with<R: RegistryAccess + ?Sized>(registry: &R) -> Verdict {
    let key = match registry.open_key(RegistryHive::CurrentUser, WORD_WHEEL_QUERY_KEY) {
        Ok(key) => key,
        Err(e) => {
            debug!(error = %e, "no search history key");
            return Verdict::Failed;
        }
    };

    let count = key.value_count();
    drop(key);

    match count {
        Ok(values) => {
            debug!(values, "search history entries");
            Verdict::from_indicator(values < MIN_HISTORY_VALUES)
        }
        Err(e) => {
            debug!(error = %e, "search history key unreadable");
            Verdict::Inconclusive
        }
    }
}

pub fn check() -> Verdict {
    check_with(&SystemProvider)
}
