//! Path canonicalization.
//!
//! Every path that leaves this crate goes through [`normalize`] first, so
//! downstream navigation never sees a trailing slash, a query string, or a
//! fragment.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A canonical in-app route path.
///
/// Guarantees:
/// - Starts with `/`
/// - No trailing slash unless the path is exactly `/`
/// - No consecutive slashes
/// - No query string or fragment
///
/// Produced only by [`normalize`]; all route matching in this crate assumes
/// the invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Canonicalize an arbitrary path-like string.
    ///
    /// Total: malformed input degenerates to `/` or a best-effort canonical
    /// form, never an error.
    pub fn new(path: &str) -> Self {
        normalize(path)
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments without the leading slash; empty for the root path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }

    /// Whether this is the root path `/`.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

/// Canonicalize an arbitrary path-like string.
///
/// Truncates at the first `#`, then at the first `?` of the remainder;
/// prefixes `/` when missing; collapses runs of slashes into one; strips a
/// single trailing slash unless the result is exactly `/`.
pub fn normalize(path: &str) -> CanonicalPath {
    let without_fragment = path.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");

    let mut out = String::with_capacity(without_query.len() + 1);
    out.push('/');
    let mut prev_was_slash = true;
    for c in without_query.chars() {
        if c == '/' {
            if !prev_was_slash {
                out.push('/');
            }
            prev_was_slash = true;
        } else {
            out.push(c);
            prev_was_slash = false;
        }
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    CanonicalPath(out)
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for CanonicalPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for CanonicalPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

impl Serialize for CanonicalPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CanonicalPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CanonicalPath::new(&s))
    }
}
