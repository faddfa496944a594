use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use strata_types::Identifier;

use crate::error::{StoreError, StoreResult};
use crate::path::{resolve_file, resolve_for_record, GENERIC_SUFFIX};
use crate::record::Record;
use crate::traits::Metastore;

/// One-file-per-record store under a base directory.
///
/// Layout: `<base>/<domain...>/<name>.<type_suffix>.json`, the file body
/// being the record's plain JSON with no envelope. Every operation re-reads
/// or re-writes the filesystem; there is no cache and no locking. Writes go
/// directly to the target file (no temp-file rename), so concurrent writers
/// race last-writer-wins and a concurrent reader may observe a partially
/// written file.
pub struct FileMetastore {
    base_dir: PathBuf,
}

impl FileMetastore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// The base directory is canonicalized once here; every path resolved
    /// afterwards must remain a strict descendant of it.
    pub fn open(base_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            base_dir: base_dir.canonicalize()?,
        })
    }

    /// The canonicalized base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load one record file, treating anything unreadable as absent.
    fn load_from_file<T: Record>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable record file; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed record file; skipping");
                None
            }
        }
    }
}

impl Metastore for FileMetastore {
    fn read<T: Record>(&self, id: &Identifier) -> StoreResult<Option<T>> {
        let path = resolve_for_record::<T>(&self.base_dir, id)?;
        Ok(Self::load_from_file(&path))
    }

    fn read_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        let pattern = format!(".{}.json", T::type_suffix());
        let mut records = Vec::new();

        for entry in WalkDir::new(&self.base_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&pattern));
            if !matches {
                continue;
            }
            if let Some(record) = Self::load_from_file::<T>(entry.path()) {
                records.push(record);
            }
        }

        Ok(records)
    }

    fn write<T: Record>(&self, id: &Identifier, record: &T) -> StoreResult<()> {
        let path = resolve_for_record::<T>(&self.base_dir, id)?;

        let json = serde_json::to_string(record).map_err(|e| {
            warn!(id = %id, error = %e, "failed to serialize record");
            StoreError::Serialization(e.to_string())
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                warn!(id = %id, path = %path.display(), error = %e, "failed to create record directory");
                StoreError::Io(e)
            })?;
        }
        fs::write(&path, json).map_err(|e| {
            warn!(id = %id, path = %path.display(), error = %e, "failed to store record");
            StoreError::Io(e)
        })?;

        debug!(id = %id, path = %path.display(), "record written");
        Ok(())
    }

    fn delete(&self, id: &Identifier) -> StoreResult<()> {
        let path = resolve_file(&self.base_dir, &id.scheme, &id.domain, &id.name, GENERIC_SUFFIX)?;
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|e| {
            warn!(id = %id, path = %path.display(), error = %e, "failed to delete record");
            StoreError::Io(e)
        })?;

        debug!(id = %id, "record deleted");
        Ok(())
    }
}

impl std::fmt::Debug for FileMetastore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileMetastore")
            .field("base_dir", &self.base_dir)
            .finish()
    }
}
