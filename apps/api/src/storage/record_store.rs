use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{KeyValueStore, StoreError};
use crate::records::{renumber_duplicate_ids, sanitize_all, Record};

/// The committed sequence of one record shape, backed by one key in the
/// key-value store.
///
/// `commit` is the only write path and always replaces the whole sequence.
pub struct RecordStore<R: Record> {
    kv: Arc<dyn KeyValueStore>,
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Restores the persisted sequence, falling back to `R::defaults()` when
    /// the key is missing, unreadable, or does not parse as a sequence of `R`.
    /// Parsed records still pass through the entity sanitizer, and repeated
    /// ids are replaced so every id is unique.
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let records = match kv.get(R::STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(parsed) => {
                    let total = parsed.len();
                    let mut records = sanitize_all(parsed);
                    if records.len() != total {
                        warn!(
                            "Dropped {} invalid persisted records under '{}'",
                            total - records.len(),
                            R::STORAGE_KEY
                        );
                    }
                    let renumbered = renumber_duplicate_ids(&mut records);
                    if renumbered > 0 {
                        warn!(
                            "Renumbered {renumbered} persisted records with repeated ids under '{}'",
                            R::STORAGE_KEY
                        );
                    }
                    records
                }
                Err(e) => {
                    warn!("Error parsing saved '{}', using defaults: {e}", R::STORAGE_KEY);
                    R::defaults()
                }
            },
            Ok(None) => {
                debug!("Nothing saved under '{}', using defaults", R::STORAGE_KEY);
                R::defaults()
            }
            Err(e) => {
                warn!("Error reading '{}', using defaults: {e}", R::STORAGE_KEY);
                R::defaults()
            }
        };

        Self { kv, records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Persists `records` and then makes them the committed sequence. On a
    /// write failure the committed sequence is left as it was.
    pub fn commit(&mut self, records: Vec<R>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&records)?;
        self.kv.set(R::STORAGE_KEY, raw)?;
        info!("Committed {} records under '{}'", records.len(), R::STORAGE_KEY);
        self.records = records;
        Ok(())
    }
}
