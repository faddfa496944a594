use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::path::to_file_style;

/// A typed record that a [`Metastore`](crate::Metastore) can persist.
///
/// `TYPE_NAME` is the record type's display name, expected PascalCase-like.
/// Its snake_case form becomes the file-suffix discriminator, so two record
/// types sharing an identifier never collide on disk. Decoding is bound here
/// through `DeserializeOwned` rather than any runtime construction hook, so
/// a failure to decode is a per-type, statically visible concern.
pub trait Record: Serialize + DeserializeOwned {
    /// Display name of the record type.
    const TYPE_NAME: &'static str;

    /// File-suffix discriminator derived from [`Self::TYPE_NAME`].
    fn type_suffix() -> String {
        to_file_style(Self::TYPE_NAME)
    }
}
