use std::collections::HashMap;
use std::sync::RwLock;

use tracing::warn;

use strata_types::Identifier;

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::traits::Metastore;

/// In-memory, HashMap-based metastore.
///
/// Intended for tests and embedding. Records are held as `serde_json::Value`
/// keyed by `(type suffix, identifier URN)` behind a `RwLock`, so records of
/// different types coexist at the same identifier just as they do on disk.
pub struct InMemoryMetastore {
    records: RwLock<HashMap<(String, String), serde_json::Value>>,
}

impl InMemoryMetastore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored, across all types.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryMetastore {
    fn default() -> Self {
        Self::new()
    }
}

impl Metastore for InMemoryMetastore {
    fn read<T: Record>(&self, id: &Identifier) -> StoreResult<Option<T>> {
        let key = (T::type_suffix(), id.to_string());
        let map = self.records.read().expect("lock poisoned");
        match map.get(&key) {
            None => Ok(None),
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(record) => Ok(Some(record)),
                Err(e) => {
                    warn!(id = %id, error = %e, "stored value does not decode as requested type; treating as absent");
                    Ok(None)
                }
            },
        }
    }

    fn read_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        let suffix = T::type_suffix();
        let map = self.records.read().expect("lock poisoned");
        let records = map
            .iter()
            .filter(|((s, _), _)| *s == suffix)
            .filter_map(|((_, urn), value)| match serde_json::from_value(value.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(id = %urn, error = %e, "stored value does not decode; skipping");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn write<T: Record>(&self, id: &Identifier, record: &T) -> StoreResult<()> {
        let value =
            serde_json::to_value(record).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let key = (T::type_suffix(), id.to_string());
        self.records.write().expect("lock poisoned").insert(key, value);
        Ok(())
    }

    fn delete(&self, id: &Identifier) -> StoreResult<()> {
        // Type-erased: drop the identifier's entries for every type suffix.
        let urn = id.to_string();
        self.records
            .write()
            .expect("lock poisoned")
            .retain(|(_, stored_urn), _| *stored_urn != urn);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryMetastore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMetastore")
            .field("record_count", &self.len())
            .finish()
    }
}
