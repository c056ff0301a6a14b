pub mod file;
pub mod memory;

use std::sync::Arc;

use crate::error::StorageResult;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Durable string-to-string map. Each `set` replaces the whole value stored
/// under the key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

pub type SharedStorage = Arc<dyn KeyValueStore>;
