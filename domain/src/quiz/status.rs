//! Status value object - how annoyed Bender is

use crate::core::color::Rgb;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Severity level raised by wrong answers (Value Object)
///
/// Levels are ordered from [`Status::Normal`] (minimum) to
/// [`Status::Critical`] (maximum). [`Status::next`] cycles through them
/// and wraps back to the minimum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Danger,
    Critical,
}

impl Status {
    /// All levels, in ascending severity
    pub const ALL: [Status; 4] = [
        Status::Normal,
        Status::Warning,
        Status::Danger,
        Status::Critical,
    ];

    /// Display colour for this level
    pub fn color(&self) -> Rgb {
        match self {
            Status::Normal => Rgb::new(255, 255, 255),
            Status::Warning => Rgb::new(255, 120, 0),
            Status::Danger => Rgb::new(255, 60, 60),
            Status::Critical => Rgb::new(255, 0, 0),
        }
    }

    /// The next level; the maximum wraps to the minimum.
    pub fn next(&self) -> Status {
        match self {
            Status::Normal => Status::Warning,
            Status::Warning => Status::Danger,
            Status::Danger => Status::Critical,
            Status::Critical => Status::Normal,
        }
    }

    pub fn is_max(&self) -> bool {
        matches!(self, Status::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Danger => "danger",
            Status::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
