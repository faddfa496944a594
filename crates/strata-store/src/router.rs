use std::collections::HashMap;

use strata_types::Identifier;

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::traits::Metastore;

/// Dispatches each operation to the store registered for the record's type
/// suffix.
///
/// Reads against an unregistered type come back empty; a write against an
/// unregistered type is an error ([`StoreError::NoHandler`]). `delete`
/// carries no type, so it is applied to every registered store.
pub struct Router<S> {
    routes: HashMap<String, S>,
}

impl<S: Metastore> Router<S> {
    /// Create a router with no routes.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register `store` as the handler for records of type `T`.
    pub fn route<T: Record>(mut self, store: S) -> Self {
        self.routes.insert(T::type_suffix(), store);
        self
    }

    fn handler_for<T: Record>(&self) -> Option<&S> {
        self.routes.get(&T::type_suffix())
    }
}

impl<S: Metastore> Default for Router<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Metastore> Metastore for Router<S> {
    fn read<T: Record>(&self, id: &Identifier) -> StoreResult<Option<T>> {
        match self.handler_for::<T>() {
            Some(store) => store.read(id),
            None => Ok(None),
        }
    }

    fn read_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        match self.handler_for::<T>() {
            Some(store) => store.read_all(),
            None => Ok(Vec::new()),
        }
    }

    fn write<T: Record>(&self, id: &Identifier, record: &T) -> StoreResult<()> {
        match self.handler_for::<T>() {
            Some(store) => store.write(id, record),
            None => Err(StoreError::NoHandler(T::type_suffix())),
        }
    }

    fn delete(&self, id: &Identifier) -> StoreResult<()> {
        for store in self.routes.values() {
            store.delete(id)?;
        }
        Ok(())
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
    }

    impl Record for DataElement {
        const TYPE_NAME: &'static str = "DataElement";
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Dataset {
        id: String,
        rows: u64,
    }

    impl Record for Dataset {
        const TYPE_NAME: &'static str = "Dataset";
    }

    fn ident(name: &str) -> Identifier {
        Identifier::new("element", vec!["person".to_string()], name)
    }

    #[test]
    fn dispatches_to_registered_handler() {
        let router = Router::new().route::<DataElement>(InMemoryMetastore::new());
        let record = DataElement {
            id: "age".to_string(),
        };

        router.write(&ident("age"), &record).unwrap();
        let loaded: DataElement = router.read(&ident("age")).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn write_without_handler_is_an_error() {
        let router = Router::new().route::<DataElement>(InMemoryMetastore::new());
        let err = router
            .write(
                &ident("x"),
                &Dataset {
                    id: "x".to_string(),
                    rows: 1,
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::NoHandler(suffix) if suffix == "dataset"));
    }

    #[test]
    fn read_without_handler_is_empty() {
        let router: Router<InMemoryMetastore> = Router::new();
        assert!(router.read::<DataElement>(&ident("x")).unwrap().is_none());
        assert!(router.read_all::<DataElement>().unwrap().is_empty());
    }

    #[test]
    fn delete_reaches_every_handler() {
        let elements = InMemoryMetastore::new();
        let datasets = InMemoryMetastore::new();
        elements
            .write(
                &ident("a"),
                &DataElement {
                    id: "a".to_string(),
                },
            )
            .unwrap();
        datasets
            .write(
                &ident("a"),
                &Dataset {
                    id: "a".to_string(),
                    rows: 2,
                },
            )
            .unwrap();

        let router = Router::new()
            .route::<DataElement>(elements)
            .route::<Dataset>(datasets);
        router.delete(&ident("a")).unwrap();

        assert!(router.read::<DataElement>(&ident("a")).unwrap().is_none());
        assert!(router.read::<Dataset>(&ident("a")).unwrap().is_none());
    }
}
