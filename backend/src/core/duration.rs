//! Call duration handling
//!
//! Calls are metered in whole seconds. Billing works on fractional minutes,
//! while the dashboard shows durations as whole minutes plus the remaining
//! seconds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds attributed to each conversation turn when a call's real duration
/// is unknown and has to be estimated from its transcript.
pub const SECONDS_PER_TURN: u64 = 15;

/// Length of a call in whole seconds
///
/// # Example
/// ```
/// use followup_core_rs::CallDuration;
///
/// let duration = CallDuration::from_seconds(185);
/// assert_eq!(duration.whole_minutes(), 3);
/// assert_eq!(duration.seconds_within_minute(), 5);
/// assert_eq!(duration.to_string(), "3m 5s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallDuration {
    seconds: u64,
}

impl CallDuration {
    /// Create a duration from a number of seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Estimate a call's duration from the number of conversation turns
    ///
    /// # Example
    /// ```
    /// use followup_core_rs::CallDuration;
    ///
    /// let duration = CallDuration::estimate_from_turns(12);
    /// assert_eq!(duration.seconds(), 180);
    /// ```
    pub fn estimate_from_turns(turns: usize) -> Self {
        Self {
            seconds: (turns as u64).saturating_mul(SECONDS_PER_TURN),
        }
    }

    /// Total seconds
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Completed minutes (rounded down)
    pub fn whole_minutes(&self) -> u64 {
        self.seconds / 60
    }

    /// Seconds past the last completed minute
    pub fn seconds_within_minute(&self) -> u64 {
        self.seconds % 60
    }

    /// Duration in minutes, partial minutes kept as a fraction
    ///
    /// This is the billing basis: 90 seconds is 1.5 minutes, never 2.
    ///
    /// # Example
    /// ```
    /// use followup_core_rs::CallDuration;
    ///
    /// assert_eq!(CallDuration::from_seconds(90).fractional_minutes(), 1.5);
    /// ```
    pub fn fractional_minutes(&self) -> f64 {
        self.seconds as f64 / 60.0
    }

    /// Whether the call never connected long enough to last a second
    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }
}

impl From<u64> for CallDuration {
    fn from(seconds: u64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl fmt::Display for CallDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}m {}s",
            self.whole_minutes(),
            self.seconds_within_minute()
        )
    }
}
