//! In-memory credential store
//!
//! Holds records in a `HashMap` behind a `RwLock`. Suitable for tests and
//! small deployments; anything else should implement `CredentialStore`
//! over a real backend.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::store::record::UserRecord;
use crate::store::CredentialStore;

/// Thread-safe in-memory credential store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given records.
    pub fn with_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("credential store lock poisoned".into()))?;
        Ok(records.get(username).cloned())
    }

    fn save(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("credential store lock poisoned".into()))?;
        records.insert(record.username.clone(), record);
        Ok(())
    }
}
