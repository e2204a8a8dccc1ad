//! App theme value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Day/night display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    #[default]
    Day,
    Night,
}

impl AppTheme {
    pub fn toggled(&self) -> AppTheme {
        match self {
            AppTheme::Day => AppTheme::Night,
            AppTheme::Night => AppTheme::Day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::Day => "day",
            AppTheme::Night => "night",
        }
    }
}

impl std::fmt::Display for AppTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AppTheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(AppTheme::Day),
            "night" => Ok(AppTheme::Night),
            other => Err(DomainError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(AppTheme::Day.toggled(), AppTheme::Night);
        assert_eq!(AppTheme::Night.toggled().toggled(), AppTheme::Night);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("night".parse::<AppTheme>().unwrap(), AppTheme::Night);
        assert!("dusk".parse::<AppTheme>().is_err());
    }
}
