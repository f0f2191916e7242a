//! Flat-file user store.
//!
//! All registered users live in one pretty-printed JSON array that is
//! loaded wholesale for every read and rewritten wholesale for every
//! mutation. There are no partial updates and no deletes; the file is the
//! only shared mutable resource in the service.
//!
//! Passwords are persisted verbatim (clear text). That is the product's
//! documented storage contract, not an oversight to fix here.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, warn};
use ulid::Ulid;

/// A registered user as persisted on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh time-ordered id and creation instant.
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            id: Ulid::new().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Store over a single JSON file.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    // Serializes load-check-append-save sequences so two concurrent
    // registrations cannot both claim the same email.
    write_lock: Mutex<()>,
}

impl UserStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the store-wide write guard. Hold it across the whole
    /// load-check-append-save sequence of a mutation.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Create an empty persisted collection if none exists. Idempotent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub async fn ensure_initialized(&self) -> Result<()> {
        let exists = fs::try_exists(&self.path)
            .await
            .with_context(|| format!("Could not stat {}", self.path.display()))?;

        if !exists {
            fs::write(&self.path, "[]")
                .await
                .with_context(|| format!("Could not initialize {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Load the full user collection, insertion order preserved.
    ///
    /// An absent, unreadable or malformed file is downgraded to an empty
    /// collection; read failures never surface to the caller.
    pub async fn load(&self) -> Vec<User> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) => {
                warn!("Could not read user store, treating as empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(users) => users,
            Err(err) => {
                warn!("Malformed user store, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the full collection, overwriting prior contents.
    ///
    /// Returns `false` on failure; the error is logged, not raised.
    pub async fn save(&self, users: &[User]) -> bool {
        let data = match serde_json::to_string_pretty(users) {
            Ok(data) => data,
            Err(err) => {
                error!("Could not serialize users: {err}");
                return false;
            }
        };

        match fs::write(&self.path, data).await {
            Ok(()) => true,
            Err(err) => {
                error!("Could not save users: {err}");
                false
            }
        }
    }

    /// Whether the backing file is reachable. Used by the health probe.
    pub async fn healthy(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }
}
