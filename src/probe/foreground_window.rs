//! Foreground-window-stability probe.
//!
//! Automated analysis environments rarely have anyone switching windows, so
//! the foreground title stays fixed. The probe samples the title for a
//! bounded number of polls and passes as soon as it changes.

use tracing::{debug, trace};

use super::config::WindowPollConfig;
use super::provider::{Sleeper, WindowInfo};
use super::system::{SystemProvider, ThreadSleeper};
use super::verdict::Verdict;

fn current_title<W: WindowInfo + ?Sized>(window: &W) -> String {
    window.foreground_window_title().unwrap_or_default()
}

/// PASSED on the first poll whose title differs from the initial one,
/// FAILED if all `config.polls` polls see the same title. A missing
/// foreground window reads as the empty title.
pub fn check_with<W, S>(window: &W, sleeper: &S, config: &WindowPollConfig) -> Verdict
where
    W: WindowInfo + ?Sized,
    S: Sleeper + ?Sized,
{
    let first_title = current_title(window);

    for poll in 1..=config.polls {
        sleeper.sleep(config.interval);
        let title = current_title(window);
        trace!(poll, title = %title, "foreground window");

        if title != first_title {
            debug!(poll, "foreground window changed");
            return Verdict::Passed;
        }
    }

    debug!(polls = config.polls, title = %first_title, "foreground window never changed");
    Verdict::Failed
}

/// Blocks for up to ten seconds.
pub fn check() -> Verdict {
    check_with(&SystemProvider, &ThreadSleeper, &WindowPollConfig::default())
}
