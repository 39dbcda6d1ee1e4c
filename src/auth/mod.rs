//! Mock authentication with durable persistence of the signed-in user.
//!
//! There is no credential validation anywhere in this module: login and
//! signup simulate network latency and then always succeed, synthesizing a
//! user record that is persisted under a single storage key. The manager
//! hydrates that key synchronously at construction so consumers never
//! observe a pre-hydration state.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use trip_gullack::auth::AuthManager;
//! use trip_gullack::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthManager::new(Arc::new(MemoryStore::new()));
//!     auth.login("sarah@example.com", "hunter2").await?;
//!     assert_eq!(auth.current_user().map(|u| u.name), Some("sarah".to_string()));
//!     auth.logout()?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{AuthError, AuthResult};
pub use manager::{AuthManager, DEFAULT_STORAGE_KEY};
pub use models::{User, UserId};
