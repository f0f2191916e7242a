//! Registration, credential verification and token issuance.
//!
//! [`AuthService`] is a stateless orchestrator over an injected
//! [`UserStore`]: every request reloads the collection from disk, nothing
//! is cached across requests.

pub mod gate;
pub mod store;
pub mod token;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use self::store::{User, UserStore};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Failure taxonomy for the auth endpoints. Messages are short fixed
/// strings; they never carry file paths or other internal detail.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password required")]
    MissingFields,
    #[error("password too short")]
    PasswordTooShort,
    #[error("email already registered")]
    EmailTaken,
    // Uniform on purpose: does not distinguish unknown email from wrong
    // password.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("could not save")]
    Storage,
}

impl AuthError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::PasswordTooShort | Self::EmailTaken => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The public identity returned by login. Never includes the password.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
        }
    }
}

/// A successful login: a bearer token plus the matched identity.
#[derive(Debug)]
pub struct Session {
    pub token: String,
    pub user: PublicUser,
}

/// Stateless authentication service over a store handle.
#[derive(Debug)]
pub struct AuthService {
    store: UserStore,
}

impl AuthService {
    #[must_use]
    pub const fn new(store: UserStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &UserStore {
        &self.store
    }

    /// Register a new user.
    ///
    /// The load-check-append-save sequence runs under the store's write
    /// guard so concurrent registrations serialize and the email
    /// uniqueness invariant holds. One durable write on success only; a
    /// failed write discards the in-memory append.
    ///
    /// # Errors
    /// `MissingFields`, `PasswordTooShort`, `EmailTaken` or `Storage`.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let _guard = self.store.write_guard().await;

        let mut users = self.store.load().await;

        // Case-sensitive exact match, by contract.
        if users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(email, password);
        debug!("Registering user {}", user.id);

        users.push(user);

        if self.store.save(&users).await {
            Ok(())
        } else {
            Err(AuthError::Storage)
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// The scan uses a single combined predicate over email and password
    /// (clear-text equality, per the product contract) and answers every
    /// miss with the same uniform error.
    ///
    /// # Errors
    /// `MissingFields` or `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let users = self.store.load().await;

        let user = users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        debug!("Issuing token for user {}", user.id);

        Ok(Session {
            token: token::issue(&user.id),
            user: PublicUser::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    fn service_in(dir: &tempfile::TempDir) -> AuthService {
        AuthService::new(UserStore::new(dir.path().join("users.json")))
    }

    #[tokio::test]
    async fn register_then_login_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let service = service_in(&dir);

        service
            .register("a@x.com", "abcd")
            .await
            .map_err(|err| anyhow::anyhow!("register failed: {err}"))?;

        let session = service
            .login("a@x.com", "abcd")
            .await
            .map_err(|err| anyhow::anyhow!("login failed: {err}"))?;

        assert_eq!(session.user.email, "a@x.com");
        assert_eq!(
            token::resolve(&session.token).as_deref(),
            Some(session.user.id.as_str())
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let dir = tempdir().expect("tempdir");
        let service = service_in(&dir);

        assert_eq!(
            service.register("", "abcd").await,
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            service.register("a@x.com", "").await,
            Err(AuthError::MissingFields)
        );
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let dir = tempdir().expect("tempdir");
        let service = service_in(&dir);

        assert_eq!(
            service.register("a@x.com", "abc").await,
            Err(AuthError::PasswordTooShort)
        );
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_and_keeps_one_record() -> Result<()> {
        let dir = tempdir()?;
        let service = service_in(&dir);

        service
            .register("a@x.com", "abcd")
            .await
            .map_err(|err| anyhow::anyhow!("register failed: {err}"))?;

        assert_eq!(
            service.register("a@x.com", "efgh").await,
            Err(AuthError::EmailTaken)
        );

        let users = service.store().load().await;
        assert_eq!(
            users.iter().filter(|user| user.email == "a@x.com").count(),
            1
        );

        Ok(())
    }

    #[tokio::test]
    async fn email_comparison_is_case_sensitive() -> Result<()> {
        let dir = tempdir()?;
        let service = service_in(&dir);

        service
            .register("a@x.com", "abcd")
            .await
            .map_err(|err| anyhow::anyhow!("register failed: {err}"))?;

        // Different case registers as a distinct user.
        assert!(service.register("A@X.COM", "abcd").await.is_ok());
        assert_eq!(service.store().load().await.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() -> Result<()> {
        let dir = tempdir()?;
        let service = service_in(&dir);

        service
            .register("a@x.com", "abcd")
            .await
            .map_err(|err| anyhow::anyhow!("register failed: {err}"))?;

        assert_eq!(
            service.login("a@x.com", "wrong").await.err(),
            Some(AuthError::InvalidCredentials)
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_unknown_email_with_uniform_error() {
        let dir = tempdir().expect("tempdir");
        let service = service_in(&dir);

        assert_eq!(
            service.login("nobody@x.com", "abcd").await.err(),
            Some(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn failed_save_surfaces_storage_error() {
        let service = AuthService::new(UserStore::new("/nonexistent-dir/users.json"));

        assert_eq!(
            service.register("a@x.com", "abcd").await,
            Err(AuthError::Storage)
        );
    }

    #[test]
    fn error_statuses_match_contract() {
        assert_eq!(AuthError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::PasswordTooShort.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::EmailTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Storage.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
