//! Auth manager: mock login/signup/logout over durable key-value storage.

use super::{
    errors::{AuthError, AuthResult},
    models::User,
};
use crate::storage::KeyValueStore;
use parking_lot::RwLock;
use std::{sync::Arc, time::Duration};
use uuid::Uuid;

/// Storage key the signed-in user is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "trip-gullack-user";

/// Simulated network latency for login/signup.
const DEFAULT_LATENCY_MS: u64 = 1000;

/// Stock avatar stamped onto every synthesized user.
const STOCK_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face";

#[derive(Debug, Default)]
struct AuthState {
    user: Option<User>,
    loading: bool,
}

/// Auth manager
///
/// Clonable handle; clones share the current-user state and the storage
/// backend. Login and signup hold no lock across their latency suspend
/// point, so overlapping calls race and the last to resolve wins last-write
/// on both the in-memory user and the persisted record.
#[derive(Clone)]
pub struct AuthManager {
    storage: Arc<dyn KeyValueStore>,
    state: Arc<RwLock<AuthState>>,
    storage_key: String,
    latency: Duration,
}

impl AuthManager {
    /// Create a new auth manager, hydrating the persisted user before
    /// returning so consumers never see a pre-hydration state.
    ///
    /// Environment overrides: `TRIP_GULLACK_STORAGE_KEY` for the storage
    /// key, `TRIP_GULLACK_AUTH_LATENCY_MS` for the simulated latency.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let storage_key = std::env::var("TRIP_GULLACK_STORAGE_KEY")
            .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());

        let latency_ms = std::env::var("TRIP_GULLACK_AUTH_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LATENCY_MS);

        Self::with_options(storage, storage_key, Duration::from_millis(latency_ms))
    }

    /// Create a manager with explicit options. Tests use this to drop the
    /// simulated latency to near zero.
    pub fn with_options(
        storage: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        latency: Duration,
    ) -> Self {
        let storage_key = storage_key.into();
        let user = hydrate(storage.as_ref(), &storage_key);
        Self {
            storage,
            state: Arc::new(RwLock::new(AuthState {
                user,
                loading: false,
            })),
            storage_key,
            latency,
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Whether a login or signup call is in flight. Hydration completes in
    /// the constructor, so this is `false` from first observation until a
    /// call starts.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Sign in. Simulates network latency and always succeeds: the password
    /// is accepted unchecked and the user's name is the local part of the
    /// email address.
    pub async fn login(&self, email: &str, _password: &str) -> AuthResult<User> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let email = email.to_string();
        self.complete_sign_in(email, name, AuthError::LoginFailed)
            .await
    }

    /// Register. Same mock semantics as [`AuthManager::login`], but the
    /// display name is caller-supplied.
    pub async fn signup(&self, name: &str, email: &str, _password: &str) -> AuthResult<User> {
        self.complete_sign_in(email.to_string(), name.to_string(), AuthError::SignupFailed)
            .await
    }

    /// Sign out: clears the current user and removes the persisted record.
    pub fn logout(&self) -> AuthResult<()> {
        self.state.write().user = None;
        self.storage.remove(&self.storage_key)?;
        log::info!("logged out, cleared persisted user");
        Ok(())
    }

    async fn complete_sign_in(
        &self,
        email: String,
        name: String,
        failure: AuthError,
    ) -> AuthResult<User> {
        self.state.write().loading = true;

        // The mock API call. No lock is held here: a second sign-in may
        // overlap and whichever resolves last wins.
        tokio::time::sleep(self.latency).await;

        let user = User {
            id: Uuid::new_v4(),
            email,
            name,
            avatar: Some(STOCK_AVATAR.to_string()),
        };

        let result = self.persist(&user);
        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(()) => {
                state.user = Some(user.clone());
                log::info!("signed in as {} <{}>", user.name, user.email);
                Ok(user)
            }
            Err(e) => {
                log::error!("sign-in could not persist user: {e}");
                Err(failure)
            }
        }
    }

    fn persist(&self, user: &User) -> AuthResult<()> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(&self.storage_key, &raw)?;
        Ok(())
    }
}

/// Read the persisted user, if any. A corrupt payload is discarded rather
/// than surfaced: hydration must never block construction.
fn hydrate(storage: &dyn KeyValueStore, key: &str) -> Option<User> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("could not read persisted user: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(user) => {
            log::debug!("hydrated persisted user from '{key}'");
            Some(user)
        }
        Err(e) => {
            log::warn!("discarding corrupt persisted user: {e}");
            None
        }
    }
}
