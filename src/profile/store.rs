//! Session-scoped profile storage.

use super::types::Profile;

/// Holds the single current profile for the running session.
///
/// Absent is a valid state meaning onboarding has not completed; callers
/// decide how to react (the dashboard redirects to onboarding). `set` is
/// a full unconditional replacement with no merge semantics, and nothing
/// is persisted beyond the process.
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: Option<Profile>,
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current profile, if onboarding has completed.
    pub fn get(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    /// Whether a profile is present.
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the current profile unconditionally.
    pub fn set(&mut self, profile: Profile) {
        if self.current.is_some() {
            tracing::info!(name = %profile.name, "replacing session profile");
        } else {
            tracing::info!(name = %profile.name, "session profile created");
        }
        self.current = Some(profile);
    }

    /// Reset to absent.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("session profile cleared");
        }
    }
}
