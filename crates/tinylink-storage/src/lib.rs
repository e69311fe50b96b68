//! Key-value store backends for tinylink.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use self::redis::RedisStore;
pub use tinylink_core::store::Result;
pub use tinylink_core::{ReadStore, StorageError, Store};
