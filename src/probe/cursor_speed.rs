//! Human-like cursor-speed probe.
//!
//! Samples the cursor position at a fixed interval and averages the speed
//! between consecutive samples. People move the mouse slowly or not at all;
//! scripted input teleports it across the screen.

use tracing::debug;

use super::config::CursorSamplingConfig;
use super::provider::{CursorPoint, CursorPosition, Sleeper};
use super::system::{SystemProvider, ThreadSleeper};
use super::verdict::Verdict;

/// Mean speed in pixels per second given the summed distance over
/// `segments` consecutive sample pairs. `None` without any segment or with a
/// zero interval.
pub fn average_speed(total_distance: f64, segments: u32, interval_secs: f64) -> Option<f64> {
    if segments == 0 || interval_secs <= 0.0 {
        return None;
    }
    Some(total_distance / f64::from(segments) / interval_secs)
}

/// INCONCLUSIVE when a position query fails or the configuration cannot
/// produce a speed; otherwise PASSED below `config.max_human_speed`.
///
/// Only the previous sample is kept, so memory does not grow with
/// `config.samples`.
pub fn check_with<C, S>(cursor: &C, sleeper: &S, config: &CursorSamplingConfig) -> Verdict
where
    C: CursorPosition + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut previous: Option<CursorPoint> = None;
    let mut total_distance = 0.0;
    let mut segments = 0u32;

    for index in 0..config.samples {
        if index > 0 {
            sleeper.sleep(config.interval);
        }
        let point = match cursor.cursor_position() {
            Ok(point) => point,
            Err(e) => {
                debug!(error = %e, sample = index, "cursor sampling aborted");
                return Verdict::Inconclusive;
            }
        };
        if let Some(last) = previous {
            total_distance += last.distance_to(point);
            segments += 1;
        }
        previous = Some(point);
    }

    let Some(speed) = average_speed(total_distance, segments, config.interval.as_secs_f64()) else {
        debug!(samples = config.samples, "not enough cursor samples");
        return Verdict::Inconclusive;
    };

    debug!(speed, limit = config.max_human_speed, "average cursor speed");
    Verdict::from_indicator(speed >= config.max_human_speed)
}

/// Ten samples with one second between consecutive ones: blocks for up to
/// nine seconds.
pub fn check() -> Verdict {
    check_with(&SystemProvider, &ThreadSleeper, &CursorSamplingConfig::default())
}
