//! Status returned by behavior nodes.

use serde::{Deserialize, Serialize};

/// The result of evaluating a behavior node for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior could not complete (condition unmet, nothing to act on).
    Failure,

    /// The behavior has started but needs more ticks to finish.
    ///
    /// The parent composite keeps its cursor on the running child so the
    /// next tick resumes it rather than restarting.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`; `Running` is left untouched.
    #[inline]
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
