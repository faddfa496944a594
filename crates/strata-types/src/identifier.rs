use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Hierarchical address for a stored record.
///
/// An identifier names a record independently of its type: `domain` is an
/// ordered list of path segments and `name` is the final component. The
/// `scheme` field is carried along for callers that route between backends,
/// but path resolution ignores it (reserved, see `strata-store`).
///
/// The text form is a URN: `scheme:/domain1/domain2:name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub scheme: String,
    pub domain: Vec<String>,
    pub name: String,
}

impl Identifier {
    /// Create an identifier from its parts.
    pub fn new(
        scheme: impl Into<String>,
        domain: Vec<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            domain,
            name: name.into(),
        }
    }

    /// Parse the URN text form `scheme:/domain1/domain2:name`.
    ///
    /// The domain part is split on `/` with empty segments dropped, so a
    /// leading slash after the scheme is accepted. Segments may arrive
    /// pre-escaped (see [`escape`]); they are kept verbatim here and only
    /// unescaped when mapped to filesystem components.
    pub fn parse(urn: &str) -> Result<Self, IdentifierError> {
        let parts: Vec<&str> = urn.split(':').collect();
        if parts.len() != 3 {
            return Err(IdentifierError::InvalidUrn {
                input: urn.to_string(),
                reason: format!("expected 3 ':'-separated fields, got {}", parts.len()),
            });
        }
        let (scheme, domain, name) = (parts[0], parts[1], parts[2]);
        if scheme.is_empty() {
            return Err(IdentifierError::InvalidUrn {
                input: urn.to_string(),
                reason: "scheme must not be empty".into(),
            });
        }
        if name.is_empty() {
            return Err(IdentifierError::InvalidUrn {
                input: urn.to_string(),
                reason: "name must not be empty".into(),
            });
        }
        let domain: Vec<String> = domain
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self::new(scheme, domain, name))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:/{}:{}",
            self.scheme,
            self.domain.join("/"),
            self.name
        )
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Encode the reserved characters of an identifier segment for URL-safe
/// contexts: `?` becomes `%3F` and space becomes `%20`.
///
/// This is not a general percent-encoder. A segment that already contains a
/// literal `%3F` or `%20` will not survive a round trip unchanged; callers
/// own that ambiguity.
pub fn escape(s: &str) -> String {
    s.replace('?', "%3F").replace(' ', "%20")
}

/// Reverse [`escape`]: `%3F` back to `?`, `%20` back to space.
///
/// Applied internally whenever a domain or name segment becomes a filesystem
/// component, so identifiers may arrive pre-escaped.
pub fn unescape(s: &str) -> String {
    s.replace("%3F", "?").replace("%20", " ")
}
