use crate::error::Result;
use async_trait::async_trait;

/// The persistent store the application runs on: an opaque asynchronous
/// string key-value store. Implementations live in `infrastructure`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

pub type KvStoreBox = Box<dyn KeyValueStore>;
