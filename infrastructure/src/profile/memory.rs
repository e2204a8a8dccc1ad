//! In-memory [`ProfileRepository`] adapter.
//!
//! Lives for the process only; nothing is written to disk.

use bender_application::{ProfileRepository, RepositoryError};
use bender_domain::{AppTheme, Profile};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Stored {
    profile: Profile,
    theme: AppTheme,
}

/// Profile repository backed by a mutex-guarded value
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    stored: Mutex<Stored>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already saved profile
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            stored: Mutex::new(Stored {
                profile,
                theme: AppTheme::default(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Stored>, RepositoryError> {
        self.stored
            .lock()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn load_profile(&self) -> Result<Profile, RepositoryError> {
        Ok(self.lock()?.profile.clone())
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), RepositoryError> {
        self.lock()?.profile = profile.clone();
        Ok(())
    }

    fn load_theme(&self) -> Result<AppTheme, RepositoryError> {
        Ok(self.lock()?.theme)
    }

    fn save_theme(&self, theme: AppTheme) -> Result<(), RepositoryError> {
        self.lock()?.theme = theme;
        Ok(())
    }
}
