use super::record::{reconcile, SaveDocument, SaveRecord};
use super::store::{KeyValueStore, StoreError};
use crate::catalog::Catalog;
use crate::core::constants::{SAVE_KEY, SAVE_VERSION};
use chrono::Utc;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("save data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("save data is not a JSON object")]
    NotAnObject,
}

/// Loads and persists the [`SaveRecord`] under a single key.
///
/// `load` and `persist` never fail outward: a broken save becomes a fresh
/// record and a failed write is logged. The `try_` variants expose the
/// underlying error.
pub struct SaveStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SaveStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Reads the stored record. `Ok(None)` means nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<SaveRecord>, SaveError> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let value: serde_json::Value = serde_json::from_str(&json)?;
        if !value.is_object() {
            return Err(SaveError::NotAnObject);
        }
        let document: SaveDocument = serde_json::from_value(value)?;

        if document.needs_migration() {
            tracing::info!(
                from = document.version,
                to = SAVE_VERSION,
                "migrating save document"
            );
        } else if document.version > SAVE_VERSION {
            tracing::warn!(
                version = document.version,
                supported = SAVE_VERSION,
                "save was written by a newer build; loading known fields only"
            );
        }

        Ok(Some(document.into_record()))
    }

    /// Reads the stored record, substituting a fresh one if it is missing
    /// or unreadable.
    pub fn load(&self) -> SaveRecord {
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => SaveRecord::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable save");
                SaveRecord::new()
            }
        }
    }

    /// `load` followed by `reconcile` against `catalog`.
    pub fn load_reconciled(&self, catalog: &Catalog) -> SaveRecord {
        let mut record = self.load();
        let report = reconcile(&mut record, catalog);
        if !report.is_clean() {
            tracing::info!(
                pruned_unlocked = ?report.pruned_unlocked,
                pruned_levels = ?report.pruned_levels,
                repaired_levels = ?report.repaired_levels,
                duplicates_removed = report.duplicates_removed,
                "reconciled save against catalog"
            );
        }
        record
    }

    pub fn try_persist(&mut self, record: &SaveRecord) -> Result<(), SaveError> {
        let document = SaveDocument::from_record(record, Utc::now().timestamp());
        let json = serde_json::to_string_pretty(&document)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }

    /// Writes `record`. Returns false if the write failed; the failure is
    /// logged and progression for this action is lost.
    pub fn persist(&mut self, record: &SaveRecord) -> bool {
        match self.try_persist(record) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist save");
                false
            }
        }
    }
}
