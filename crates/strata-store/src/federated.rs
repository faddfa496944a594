use strata_types::Identifier;

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::traits::Metastore;

/// Read-only composite over an ordered list of delegate stores.
///
/// `read` returns the first delegate's hit in registration order; `read_all`
/// concatenates every delegate's results. Mutation is refused: a federation
/// has no single authoritative member to write into.
pub struct FederatedMetastore<S> {
    delegates: Vec<S>,
}

impl<S: Metastore> FederatedMetastore<S> {
    /// Federate over `delegates`, earliest first.
    pub fn new(delegates: Vec<S>) -> Self {
        Self { delegates }
    }

    /// Number of federated delegates.
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Returns `true` if there are no delegates.
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl<S: Metastore> Metastore for FederatedMetastore<S> {
    fn read<T: Record>(&self, id: &Identifier) -> StoreResult<Option<T>> {
        for delegate in &self.delegates {
            if let Some(record) = delegate.read(id)? {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    fn read_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        let mut records = Vec::new();
        for delegate in &self.delegates {
            records.extend(delegate.read_all::<T>()?);
        }
        Ok(records)
    }

    fn write<T: Record>(&self, _id: &Identifier, _record: &T) -> StoreResult<()> {
        Err(StoreError::ReadOnly)
    }

    fn delete(&self, _id: &Identifier) -> StoreResult<()> {
        Err(StoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryMetastore;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct DataElement {
        id: String,
        source: String,
    }

    impl Record for DataElement {
        const TYPE_NAME: &'static str = "DataElement";
    }

    fn ident(name: &str) -> Identifier {
        Identifier::new("element", vec!["person".to_string()], name)
    }

    fn elem(id: &str, source: &str) -> DataElement {
        DataElement {
            id: id.to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn read_returns_first_delegate_hit() {
        let first = InMemoryMetastore::new();
        let second = InMemoryMetastore::new();
        first.write(&ident("age"), &elem("age", "first")).unwrap();
        second.write(&ident("age"), &elem("age", "second")).unwrap();

        let federated = FederatedMetastore::new(vec![first, second]);
        let loaded: DataElement = federated.read(&ident("age")).unwrap().unwrap();
        assert_eq!(loaded.source, "first");
    }

    #[test]
    fn read_falls_through_to_later_delegates() {
        let first = InMemoryMetastore::new();
        let second = InMemoryMetastore::new();
        second.write(&ident("only"), &elem("only", "second")).unwrap();

        let federated = FederatedMetastore::new(vec![first, second]);
        let loaded: DataElement = federated.read(&ident("only")).unwrap().unwrap();
        assert_eq!(loaded.source, "second");
    }

    #[test]
    fn read_all_concatenates_delegates() {
        let first = InMemoryMetastore::new();
        let second = InMemoryMetastore::new();
        first.write(&ident("a"), &elem("a", "first")).unwrap();
        second.write(&ident("b"), &elem("b", "second")).unwrap();

        let federated = FederatedMetastore::new(vec![first, second]);
        assert_eq!(federated.read_all::<DataElement>().unwrap().len(), 2);
    }

    #[test]
    fn mutation_is_refused() {
        let federated: FederatedMetastore<InMemoryMetastore> = FederatedMetastore::new(vec![]);
        let write_err = federated.write(&ident("x"), &elem("x", "nope")).unwrap_err();
        assert!(matches!(write_err, StoreError::ReadOnly));
        let delete_err = federated.delete(&ident("x")).unwrap_err();
        assert!(matches!(delete_err, StoreError::ReadOnly));
    }

    #[test]
    fn empty_federation_reads_nothing() {
        let federated: FederatedMetastore<InMemoryMetastore> = FederatedMetastore::new(vec![]);
        assert!(federated.is_empty());
        assert!(federated.read::<DataElement>(&ident("x")).unwrap().is_none());
        assert!(federated.read_all::<DataElement>().unwrap().is_empty());
    }
}
