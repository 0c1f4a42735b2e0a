//! Application state for the staffing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::store::Repository;

/// The repository as shared between handlers.
pub type SharedRepository = Arc<RwLock<Box<dyn Repository>>>;

/// Shared application state.
///
/// Holds the loaded configuration and the repository. All writes to the
/// repository go through the write half of its lock, so a mutation and the
/// cache recomputation that follows it are never observed apart.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    repo: SharedRepository,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, repo: impl Repository + 'static) -> Self {
        Self {
            config: Arc::new(config),
            repo: Arc::new(RwLock::new(Box::new(repo))),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared repository.
    pub fn repo(&self) -> &SharedRepository {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;
    use crate::store::InMemoryRepository;

    #[test]
    fn test_app_state_is_clone_send_sync() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_one_repository() {
        let state = AppState::new(ConfigLoader::default(), InMemoryRepository::new());
        let other = state.clone();

        other
            .repo()
            .write()
            .await
            .add_staff(StaffMember::new("1", "John Smith", "Waiter", "Service"))
            .unwrap();

        assert_eq!(state.repo().read().await.staff().len(), 1);
    }
}
