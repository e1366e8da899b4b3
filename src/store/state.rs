use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::AppConfig;
use crate::models::Session;

/// Runtime state that survives restarts: the notification preference
/// and the cached session. The file is read once at startup and written
/// on toggle/login/logout; last writer wins, no locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub session: Option<Session>,
}

impl AppState {
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&AppConfig::state_path()?))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&AppConfig::state_path()?)
    }

    /// Missing file means a fresh state. A file that no longer parses
    /// is discarded with a warning rather than blocking startup.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Discarding unreadable state file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Serializing state")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, User};

    #[test]
    fn missing_file_yields_default_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load_from(&dir.path().join("state.json"));
        assert!(!state.notifications_enabled);
        assert!(state.session.is_none());
    }

    #[test]
    fn corrupt_file_yields_default_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        let state = AppState::load_from(&path);
        assert!(state.session.is_none());
    }

    #[test]
    fn state_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let state = AppState {
            notifications_enabled: true,
            session: Some(Session {
                access_token: "tok".to_string(),
                user: User {
                    id: "u-1".to_string(),
                    email: "demo@waktusholat.com".to_string(),
                    name: Some("Demo User".to_string()),
                    avatar_url: None,
                },
            }),
        };
        state.save_to(&path).unwrap();

        let back = AppState::load_from(&path);
        assert!(back.notifications_enabled);
        assert_eq!(back.session.unwrap().user.id, "u-1");
    }
}
