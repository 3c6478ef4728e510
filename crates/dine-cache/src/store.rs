//! In-process storage for revalidating upstream responses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Status of a store lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Fresh hit.
    Hit,
    /// Nothing stored under the key.
    Miss,
    /// Stored entry is older than the revalidation window.
    Stale,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Miss => write!(f, "MISS"),
            Self::Stale => write!(f, "STALE"),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredResponse {
    body: Vec<u8>,
    stored_at: Instant,
}

/// Result of a store lookup.
#[derive(Debug)]
pub struct StoreLookup {
    /// Body if the entry is fresh.
    pub body: Option<Vec<u8>>,
    /// Lookup status.
    pub status: CacheStatus,
}

/// Response bodies keyed by request URL.
///
/// An entry is served only while its age is below the caller's revalidation
/// window; stale entries are never served.
#[derive(Debug, Default)]
pub struct ResponseStore {
    entries: Mutex<HashMap<String, StoredResponse>>,
}

impl ResponseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a body that is younger than `window`.
    pub fn lookup(&self, key: &str, window: Duration) -> StoreLookup {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(stored) if stored.stored_at.elapsed() < window => StoreLookup {
                body: Some(stored.body.clone()),
                status: CacheStatus::Hit,
            },
            Some(_) => StoreLookup {
                body: None,
                status: CacheStatus::Stale,
            },
            None => StoreLookup {
                body: None,
                status: CacheStatus::Miss,
            },
        }
    }

    /// Store a body, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, body: Vec<u8>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.into(),
            StoredResponse {
                body,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
