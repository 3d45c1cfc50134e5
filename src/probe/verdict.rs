//! Tri-state probe outcome

use std::fmt;

use thiserror::Error;

/// Result of a single probe invocation.
///
/// The integer codes are part of the external contract: `Passed = 1`,
/// `Failed = -1`, `Inconclusive = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Verdict {
    /// No sandbox indicator found.
    Passed = 1,
    /// A sandbox, VM or debugger indicator was found.
    Failed = -1,
    /// The check could not be completed reliably.
    Inconclusive = 0,
}

impl Verdict {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_passed(self) -> bool {
        self == Verdict::Passed
    }

    pub fn is_failed(self) -> bool {
        self == Verdict::Failed
    }

    pub fn is_inconclusive(self) -> bool {
        self == Verdict::Inconclusive
    }

    /// Maps an "indicator found" flag onto the two definitive verdicts.
    pub(crate) fn from_indicator(found: bool) -> Self {
        if found {
            Verdict::Failed
        } else {
            Verdict::Passed
        }
    }
}

/// Integer that is not one of the three verdict codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid verdict code {0}")]
pub struct VerdictCodeError(pub i32);

impl TryFrom<i32> for Verdict {
    type Error = VerdictCodeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Verdict::Passed),
            -1 => Ok(Verdict::Failed),
            0 => Ok(Verdict::Inconclusive),
            other => Err(VerdictCodeError(other)),
        }
    }
}

impl From<Verdict> for i32 {
    fn from(verdict: Verdict) -> Self {
        verdict.code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Passed => "PASSED",
            Verdict::Failed => "FAILED",
            Verdict::Inconclusive => "INCONCLUSIVE",
        };
        f.write_str(label)
    }
}
