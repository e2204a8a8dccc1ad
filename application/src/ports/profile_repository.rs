//! Port for profile and theme storage.

use bender_domain::{AppTheme, Profile};
use thiserror::Error;

/// Storage failure reported by a [`ProfileRepository`] adapter
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Profile storage unavailable: {0}")]
    Unavailable(String),
}

/// Where the profile and the selected theme live.
///
/// Adapters are expected to return the default value when nothing has
/// been saved yet.
pub trait ProfileRepository: Send + Sync {
    fn load_profile(&self) -> Result<Profile, RepositoryError>;

    fn save_profile(&self, profile: &Profile) -> Result<(), RepositoryError>;

    fn load_theme(&self) -> Result<AppTheme, RepositoryError>;

    fn save_theme(&self, theme: AppTheme) -> Result<(), RepositoryError>;
}
