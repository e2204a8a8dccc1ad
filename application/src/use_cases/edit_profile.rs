//! Edit Profile use case
//!
//! Loads the profile and theme from a [`ProfileRepository`], saves edits
//! (dropping an invalid repository link) and toggles the theme.

use crate::ports::profile_repository::{ProfileRepository, RepositoryError};
use bender_domain::{AppTheme, Profile, validate_repository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while editing the profile
#[derive(Error, Debug)]
pub enum EditProfileError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result of saving a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved as given
    Saved,
    /// Saved with the repository link cleared; holds the rejected URL
    RepositoryDropped(String),
}

/// Use case for viewing and editing the user profile
pub struct EditProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
    profile: Profile,
    theme: AppTheme,
}

impl EditProfileUseCase {
    /// Load the current profile and theme from the repository.
    pub fn load(repository: Arc<dyn ProfileRepository>) -> Result<Self, EditProfileError> {
        let profile = repository.load_profile()?;
        let theme = repository.load_theme()?;
        debug!(nickname = %profile.nickname(), %theme, "Profile loaded");
        Ok(Self {
            repository,
            profile,
            theme,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn theme(&self) -> AppTheme {
        self.theme
    }

    pub fn initials(&self) -> Option<String> {
        self.profile.initials()
    }

    /// Persist an edited profile.
    ///
    /// A repository URL that fails validation is stored as empty.
    pub fn save_profile(&mut self, mut profile: Profile) -> Result<SaveOutcome, EditProfileError> {
        let outcome = if validate_repository(&profile.repository) {
            SaveOutcome::Saved
        } else {
            warn!(repository = %profile.repository, "Invalid repository dropped");
            SaveOutcome::RepositoryDropped(std::mem::take(&mut profile.repository))
        };

        self.repository.save_profile(&profile)?;
        self.profile = profile;
        Ok(outcome)
    }

    /// Flip between day and night and persist the choice.
    pub fn switch_theme(&mut self) -> Result<AppTheme, EditProfileError> {
        let theme = self.theme.toggled();
        self.repository.save_theme(theme)?;
        self.theme = theme;
        debug!(%theme, "Theme switched");
        Ok(theme)
    }
}
