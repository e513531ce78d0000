//! # retail-store: Snapshot Persistence for the RetailSports Cart
//!
//! A small key/value contract over serialized snapshots, mirroring the
//! web-storage model the storefront persists through: one string value per
//! fixed key, read once at startup, rewritten after every mutation.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       SnapshotStore                                 │
//! │                                                                     │
//! │   load("retailsports_cart")  ──► Some(json) | None                  │
//! │   save("retailsports_cart", json)                                   │
//! │   remove("retailsports_cart")                                       │
//! │                                                                     │
//! │   Implementations:                                                  │
//! │   • FileStore   - one document per key under a base directory,      │
//! │                   atomic replace (temp file + rename)               │
//! │   • MemoryStore - HashMap behind a RwLock, for tests and dev        │
//! │                                                                     │
//! │   Values are opaque strings. Serialization lives with the caller.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Callers are expected to treat a failed `save` as degraded durability,
//! not as a failed mutation: the in-memory state stays authoritative and
//! the next successful write supersedes whatever is on disk.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
mod file;
mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

// =============================================================================
// Snapshot Store Contract
// =============================================================================

/// Key/value persistence for serialized snapshots.
///
/// `Send + Sync` so one store handle can be shared behind an `Arc` by
/// whatever owns the session state.
pub trait SnapshotStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the value under `key`. Removing an absent key is not an
    /// error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Validates a storage key.
///
/// Keys name storage locations (files, map entries), so they are limited
/// to alphanumeric characters, hyphens and underscores.
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }

    Ok(())
}
