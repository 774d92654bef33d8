use crate::domain::ports::KeyValueStore;
use crate::error::Result;
use async_trait::async_trait;
use rocksdb::{DB, Options};
use std::path::Path;
use std::sync::Arc;

/// A persistent key-value store backed by RocksDB.
///
/// Keys and values are UTF-8 strings in the default column family, matching
/// the flat `key -> JSON string` layout of the mobile client's storage.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`), so
/// one opened database can back both the auth gate and the enrollment engine.
#[derive(Clone)]
pub struct RocksDbKvStore {
    db: Arc<DB>,
}

impl RocksDbKvStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path)?;
        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl KeyValueStore for RocksDbKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value = String::from_utf8(bytes).map_err(|e| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Non-UTF-8 value under key {:?}: {}", key, e),
                    )
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.db.put(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.db.delete(key.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_set_get_remove() {
        let dir = tempdir().unwrap();
        let store = RocksDbKvStore::open(dir.path()).expect("Failed to open RocksDB");

        store
            .set("selectedCourses", r#"["First Aid"]"#.to_string())
            .await
            .unwrap();
        assert_eq!(
            store.get("selectedCourses").await.unwrap().as_deref(),
            Some(r#"["First Aid"]"#)
        );

        store.remove("selectedCourses").await.unwrap();
        assert!(store.get("selectedCourses").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDbKvStore::open(dir.path()).unwrap();
            store
                .set("user", r#"{"username":"alice"}"#.to_string())
                .await
                .unwrap();
        }

        let store = RocksDbKvStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get("user").await.unwrap().as_deref(),
            Some(r#"{"username":"alice"}"#)
        );
    }

    #[tokio::test]
    async fn test_clones_share_database() {
        let dir = tempdir().unwrap();
        let store = RocksDbKvStore::open(dir.path()).unwrap();
        let clone = store.clone();

        store.set("user", "{}".to_string()).await.unwrap();
        assert_eq!(clone.get("user").await.unwrap().as_deref(), Some("{}"));
    }
}
