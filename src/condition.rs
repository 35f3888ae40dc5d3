//! The closed set of health conditions an agent can hold, and the step
//! functions that move a condition along the severity scale.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MingleError;

/// A health condition. The declaration order is the severity scale, best
/// to worst, and is exposed through the derived `Ord`:
/// `Cure < Healthy < Sick < Dying < Dead`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Carries the cure. Meetings with a cure carrier improve both sides.
    Cure,
    /// Not sick. Healthy agents sit rounds out.
    Healthy,
    Sick,
    Dying,
    /// Dead agents sit rounds out. Nothing changes a dead agent.
    Dead,
}

impl Condition {
    /// Improves the condition by one step. `Cure`, `Healthy` and `Dead`
    /// are fixed points.
    #[must_use]
    pub fn improve(self) -> Condition {
        match self {
            Condition::Dying => Condition::Sick,
            Condition::Sick => Condition::Healthy,
            other => other,
        }
    }

    /// Worsens the condition by one step. `Cure`, `Healthy` and `Dead`
    /// are fixed points.
    #[must_use]
    pub fn worsen(self) -> Condition {
        match self {
            Condition::Sick => Condition::Dying,
            Condition::Dying => Condition::Dead,
            other => other,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Condition::Cure => "CURE",
            Condition::Healthy => "HEALTHY",
            Condition::Sick => "SICK",
            Condition::Dying => "DYING",
            Condition::Dead => "DEAD",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = MingleError;

    /// Parses a condition name, case-insensitively. This is the one edge
    /// of the crate where a malformed category can appear; the typed API
    /// cannot represent one.
    fn from_str(s: &str) -> Result<Condition, MingleError> {
        match s.to_ascii_uppercase().as_str() {
            "CURE" => Ok(Condition::Cure),
            "HEALTHY" => Ok(Condition::Healthy),
            "SICK" => Ok(Condition::Sick),
            "DYING" => Ok(Condition::Dying),
            "DEAD" => Ok(Condition::Dead),
            unknown => Err(format!("unknown condition: {unknown}").into()),
        }
    }
}
