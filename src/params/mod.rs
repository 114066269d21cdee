//! Key-value parameter store shared with the rest of the platform.
//!
//! Every setting in the console reads and writes one string-keyed entry. The
//! store is handed to panels as an injected handle; the UI never decides where
//! values actually live. Two stores exist at runtime: the persistent store the
//! supervisor also reads, and a volatile session store for flags that must not
//! survive a restart.

pub mod file_store;
pub mod memory_store;
pub mod writer;

pub use file_store::FileParamStore;
pub use memory_store::MemoryParamStore;
pub use writer::ParamWriter;

use std::path::PathBuf;
use std::sync::Arc;

/// Shared handle to a parameter store.
pub type StoreHandle = Arc<dyn ParamStore>;

/// Errors raised by the storage medium.
///
/// These never reach mutation callers; store implementations log them and
/// present the best-effort contract below.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("param io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parameter store contract consumed by every setting.
///
/// `get` returns an empty string for missing keys. Writes are best-effort:
/// failures are logged by the implementation and are not observable through
/// this interface. Typed helpers layer integer and boolean access on top of
/// the raw string contract.
pub trait ParamStore: Send + Sync {
    /// Read the raw value for `key`; empty string on miss.
    fn get(&self, key: &str) -> String;

    /// Write the raw value for `key`.
    fn put(&self, key: &str, value: &str);

    /// Remove `key` and its value. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Read an integer value; a missing or malformed entry reads as 0.
    fn get_int(&self, key: &str) -> i64 {
        self.get(key).trim().parse().unwrap_or(0)
    }

    /// Read a boolean value; anything other than "1" or "true" is false.
    fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key).trim(), "1" | "true")
    }

    /// Write an integer value.
    fn put_int(&self, key: &str, value: i64) {
        self.put(key, &value.to_string());
    }

    /// Write a boolean value as "1" / "0".
    fn put_bool(&self, key: &str, value: bool) {
        self.put(key, if value { "1" } else { "0" });
    }
}
