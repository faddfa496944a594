//! Identifier-to-path resolution.
//!
//! Maps `(base_dir, Identifier, type suffix)` to the on-disk location
//! `<base>/<domain...>/<name>.<suffix>.json` and rejects any resolution that
//! would land outside the base directory. Pure path computation; the only
//! filesystem access is resolving symlinks for the containment check.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

use strata_types::{unescape, Identifier};

use crate::error::{StoreError, StoreResult};
use crate::record::Record;

/// Suffix used when resolution has no concrete record type (see
/// [`Metastore::delete`](crate::Metastore::delete)): the derivation a generic
/// object would get.
pub const GENERIC_SUFFIX: &str = "object";

/// Convert a PascalCase-like type name into its snake_case file suffix.
///
/// Inserts `_` before each uppercase letter, lowercases it, then strips one
/// leading `_`. Names differing only in underscore placement can collide
/// (`ABc` and `A_bc` both map to `a_bc`); accepted limitation, since the
/// encoding is part of the on-disk format.
pub fn to_file_style(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch.is_uppercase() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

/// Compute the on-disk path for `id` as a record of type `T`.
pub fn resolve_for_record<T: Record>(base_dir: &Path, id: &Identifier) -> StoreResult<PathBuf> {
    resolve_file(base_dir, &id.scheme, &id.domain, &id.name, &T::type_suffix())
}

/// Compute `<base>/<domain...>/<name>.<suffix>.json`, refusing any result
/// outside `base_dir`.
///
/// `scheme` is accepted but not incorporated into the path; it is reserved
/// for routing between backends. Each domain segment and the name are
/// unescaped before joining, so identifiers may arrive pre-escaped. The
/// joined path is fully resolved (`.`, `..`, symlinks) before the
/// containment check runs, so escapes through `..` segments or symlinked
/// directories are caught on the absolute path, not the raw string.
pub fn resolve_file(
    base_dir: &Path,
    _scheme: &str,
    domain: &[String],
    name: &str,
    suffix: &str,
) -> StoreResult<PathBuf> {
    let base = resolve_lenient(base_dir)?;

    let mut joined = base.clone();
    for segment in domain {
        joined.push(unescape(segment));
    }
    joined.push(format!("{}.{}.json", unescape(name), suffix));

    let resolved = resolve_lenient(&joined)?;
    if resolved == base || !resolved.starts_with(&base) {
        return Err(StoreError::PathTraversal {
            base,
            path: resolved,
        });
    }
    Ok(resolved)
}

/// Fully resolve a path that may not exist yet.
///
/// `.`/`..` components are eliminated lexically, then symlinks are resolved
/// by canonicalizing the longest existing prefix and re-appending the
/// remainder. Existence is probed with `symlink_metadata` so a dangling
/// symlink counts as existing; canonicalizing it then fails instead of
/// letting a later write follow the link.
fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut lexical = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                lexical.pop();
            }
            Component::CurDir => {}
            other => lexical.push(other),
        }
    }

    let mut existing = lexical;
    let mut pending: Vec<OsString> = Vec::new();
    while existing.symlink_metadata().is_err() {
        match existing.file_name() {
            Some(tail) => {
                pending.push(tail.to_os_string());
                existing.pop();
            }
            None => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    for component in pending.iter().rev() {
        resolved.push(component);
    }
    Ok(resolved)
}
