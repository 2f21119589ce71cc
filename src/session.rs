//! Session state: the access/refresh token pair and the signed-in user.
//!
//! The store is owned by the composition root and handed to the API
//! client explicitly; no process-global storage. Tokens persist in a
//! JSON file under the data dir so the CLI `login` command and the TUI
//! share a session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// The signed-in user's profile.
///
/// The backend issues opaque tokens and exposes no profile endpoint, so
/// this is a static placeholder returned whenever a token is present.
/// Nothing client-side inspects or validates token contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    fn placeholder() -> Self {
        Self {
            id: "current-user".to_string(),
            first_name: "User".to_string(),
            last_name: "Name".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct SessionStore {
    tokens: Option<AuthTokens>,
    /// Where tokens are persisted; None keeps the session in memory only
    /// (used by tests).
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Open the session backed by `tokens.json` in the given data dir,
    /// loading any persisted tokens.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join("tokens.json");
        let tokens = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read token file: {}", path.display()))?;
            Some(
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse token file: {}", path.display()))?,
            )
        } else {
            None
        };
        Ok(Self {
            tokens,
            path: Some(path),
        })
    }

    /// In-memory session with no persistence.
    pub fn in_memory() -> Self {
        Self {
            tokens: None,
            path: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access_token.as_str())
    }

    /// Store tokens from a successful sign-in or sign-up.
    pub fn store(&mut self, tokens: AuthTokens) -> Result<()> {
        self.tokens = Some(tokens);
        self.persist()
    }

    /// Clear tokens on sign-out.
    pub fn clear(&mut self) -> Result<()> {
        self.tokens = None;
        if let Some(ref path) = self.path
            && path.exists()
        {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove token file: {}", path.display()))?;
        }
        Ok(())
    }

    /// The current user, or None when signed out.
    pub fn current_user(&self) -> Option<User> {
        self.tokens.as_ref().map(|_| User::placeholder())
    }

    fn persist(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(ref tokens) = self.tokens {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create data directory: {}", dir.display())
                })?;
            }
            let content =
                serde_json::to_string_pretty(tokens).context("Failed to serialize tokens")?;
            fs::write(path, content)
                .with_context(|| format!("Failed to write token file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_has_no_user() {
        let store = SessionStore::in_memory();
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_store_and_clear_round_trip() {
        let mut store = SessionStore::in_memory();
        store
            .store(AuthTokens {
                access_token: "abc".to_string(),
                refresh_token: Some("def".to_string()),
            })
            .unwrap();
        assert!(store.is_signed_in());
        assert_eq!(store.access_token(), Some("abc"));

        store.clear().unwrap();
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_current_user_is_placeholder_when_token_present() {
        let mut store = SessionStore::in_memory();
        store
            .store(AuthTokens {
                access_token: "tok".to_string(),
                refresh_token: None,
            })
            .unwrap();
        // Placeholder profile, independent of token contents
        let user = store.current_user().unwrap();
        assert_eq!(user.id, "current-user");
        assert_eq!(user.email, "user@example.com");
    }
}
