//! Time-bounded key-value cache for computed weather summaries
//!
//! Backed by a persistent fjall keyspace with postcard-serialized entries.
//! Each entry carries its expiry time; expired entries are treated as absent
//! and removed on read. The cache is constructed once and injected into the
//! service so the recommendation core stays side-effect free.

use serde::Deserialize;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::task;

use crate::error::WearcastError;

#[derive(Serialize, Deserialize)]
struct StoredEntry<T> {
    value: T,
    expires_at: u64, // Unix timestamp (seconds)
}

/// Persistent TTL cache
pub struct SummaryCache {
    store: fjall::Keyspace,
    retention: Duration,
}

fn get_from_store(
    store: fjall::Keyspace,
    key: Vec<u8>,
) -> Result<Option<Vec<u8>>, WearcastError> {
    store
        .get(key)
        .map(|maybe| maybe.map(|v| v.to_vec()))
        .map_err(|e| WearcastError::cache(e.to_string()))
}

fn unix_now() -> Result<u64, WearcastError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| WearcastError::cache(e.to_string()))
}

impl SummaryCache {
    /// Open (or create) the cache database at `path` with the given
    /// retention window.
    pub fn open(path: impl AsRef<Path>, retention: Duration) -> Result<Self, WearcastError> {
        let db = fjall::Database::builder(&path)
            .open()
            .map_err(|e| WearcastError::cache(format!("Failed to open cache database: {e}")))?;
        let store = db
            .keyspace("summaries", fjall::KeyspaceCreateOptions::default)
            .map_err(|e| WearcastError::cache(e.to_string()))?;
        Ok(Self { store, retention })
    }

    /// Stores a serializable value stamped with the retention window.
    #[tracing::instrument(name = "put_cache", level = "debug", skip(self, value))]
    pub async fn put<T: Serialize + Send + 'static>(
        &self,
        key: &str,
        value: T,
    ) -> Result<(), WearcastError> {
        let store = self.store.clone();
        let key = key.as_bytes().to_vec();
        let expires_at = unix_now()? + self.retention.as_secs();
        let entry = StoredEntry { value, expires_at };
        let bytes = postcard::to_stdvec(&entry).map_err(|e| WearcastError::cache(e.to_string()))?;

        task::spawn_blocking(move || store.insert(key, bytes))
            .await
            .map_err(|e| WearcastError::cache(e.to_string()))?
            .map_err(|e| WearcastError::cache(e.to_string()))?;
        Ok(())
    }

    /// Retrieves a value if it exists and has not expired.
    /// Returns `None` for cache misses or expired entries.
    #[tracing::instrument(name = "query_cache", level = "debug", skip(self))]
    pub async fn get<T: DeserializeOwned + Send + 'static>(
        &self,
        key: &str,
    ) -> Result<Option<T>, WearcastError> {
        let store = self.store.clone();
        let key_bytes = key.as_bytes().to_vec();

        let maybe_bytes = task::spawn_blocking(move || get_from_store(store, key_bytes))
            .await
            .map_err(|e| WearcastError::cache(e.to_string()))??;

        if let Some(bytes) = maybe_bytes {
            let entry: StoredEntry<T> =
                postcard::from_bytes(&bytes).map_err(|e| WearcastError::cache(e.to_string()))?;

            if unix_now()? < entry.expires_at {
                tracing::debug!("Key found and still fresh");
                Ok(Some(entry.value))
            } else {
                tracing::debug!("Key found but expired");
                self.remove(key).await?;
                Ok(None)
            }
        } else {
            tracing::debug!("Key not found");
            Ok(None)
        }
    }

    /// Manually removes a key from the cache.
    pub async fn remove(&self, key: &str) -> Result<(), WearcastError> {
        let key = key.as_bytes().to_vec();
        let store = self.store.clone();
        task::spawn_blocking(move || store.remove(key))
            .await
            .map_err(|e| WearcastError::cache(e.to_string()))?
            .map_err(|e| WearcastError::cache(e.to_string()))?;
        Ok(())
    }
}
