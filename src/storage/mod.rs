//! Durable key-value storage used to persist the logged-in user.
//!
//! The persistence contract is deliberately tiny: a single string key
//! holding a JSON-serialized record, where presence or absence of the key
//! is the whole story. The trait exists so the auth store can be wired to
//! an in-memory backend in tests and a file backend in real use.

pub mod backends;
pub mod errors;

pub use backends::{FileStore, KeyValueStore, MemoryStore};
pub use errors::{StorageError, StorageResult};
