use strata_types::Identifier;

use crate::error::StoreResult;
use crate::record::Record;

/// Persistence capability over typed records.
///
/// All implementations must satisfy this contract:
/// - Absence is not an error: `read` returns `Ok(None)` for a record that was
///   never written, and `delete` of an absent record returns `Ok(())`.
/// - A record that exists but cannot be loaded (unreadable, corrupt) is
///   logged and treated as absent; callers cannot distinguish the two through
///   the return value.
/// - `write` fully replaces any prior content for the same identifier and
///   type; failures come back as `Err` values, with path traversal kept as a
///   variant distinct from I/O errors.
/// - Records of different types never collide at the same identifier.
pub trait Metastore: Send + Sync {
    /// Read the record of type `T` stored at `id`.
    fn read<T: Record>(&self, id: &Identifier) -> StoreResult<Option<T>>;

    /// Collect every loadable record of type `T` in the store.
    ///
    /// Records that fail to load are logged and skipped. Order is
    /// implementation-defined but stable within one snapshot of the store.
    fn read_all<T: Record>(&self) -> StoreResult<Vec<T>>;

    /// Store `record` at `id`, replacing any prior record of the same type.
    fn write<T: Record>(&self, id: &Identifier, record: &T) -> StoreResult<()>;

    /// Remove the record at `id` using type-erased resolution.
    ///
    /// No type is supplied, so backends resolve with the generic suffix (see
    /// [`GENERIC_SUFFIX`](crate::path::GENERIC_SUFFIX)) rather than a record
    /// type's own. Deleting an absent record is a success.
    fn delete(&self, id: &Identifier) -> StoreResult<()>;
}
