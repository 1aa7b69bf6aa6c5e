//! Normalised, slash-separated artifact paths.
//!
//! An [`ArtifactPath`] is built once per discovered file and only read
//! afterwards. Construction applies the usual clean-path rules so that
//! callers may hand over raw strings from any directory walker.

use std::fmt;
use std::path::Path;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

const SEPARATOR: char = '/';

/// An immutable, normalised path to a build artifact.
///
/// Ordering and equality compare the normalised text, so `a//b/./c.jar` and
/// `a/b/c.jar` are the same path.
///
/// # Examples
///
/// ```
/// use artifact_order_common::ArtifactPath;
///
/// let path = ArtifactPath::new("com/example/foo/1.0/./foo-1.0.jar");
/// assert_eq!(path.as_str(), "com/example/foo/1.0/foo-1.0.jar");
/// assert_eq!(path.parent(), "com/example/foo/1.0");
/// assert_eq!(path.name(), "foo-1.0.jar");
/// assert_eq!(path.extension(), "jar");
/// assert_eq!(path.base_name(), "foo-1.0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ArtifactPath {
    value: String,
}

impl ArtifactPath {
    /// Builds a path from raw text, normalising it on the way in.
    ///
    /// Backslashes become `/`, empty and `.` segments are dropped, `..`
    /// removes the preceding segment, and trailing separators disappear. A
    /// leading `/` is preserved. Any string is accepted, including `""`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            value: clean(raw),
        }
    }

    /// Returns the normalised text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the path as a [`Utf8Path`].
    #[must_use]
    pub fn as_utf8_path(&self) -> &Utf8Path {
        Utf8Path::new(&self.value)
    }

    /// Returns `true` when the path starts at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.value.starts_with(SEPARATOR)
    }

    /// Returns the directory portion, or `""` when the path has a single
    /// relative segment.
    #[must_use]
    pub fn parent(&self) -> &str {
        self.split().0
    }

    /// Returns the final segment.
    #[must_use]
    pub fn name(&self) -> &str {
        self.split().1
    }

    /// Returns the text after the final `.` of [`Self::name`], or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.name()
            .rsplit_once('.')
            .map_or("", |(_, extension)| extension)
    }

    /// Returns [`Self::name`] without its `.extension` suffix.
    #[must_use]
    pub fn base_name(&self) -> &str {
        let name = self.name();
        name.rsplit_once('.').map_or(name, |(base, _)| base)
    }

    /// Iterates over the segments of [`Self::parent`] from the innermost
    /// directory outwards.
    ///
    /// ```
    /// use artifact_order_common::ArtifactPath;
    ///
    /// let path = ArtifactPath::new("org/foo/1.0/foo-1.0.jar");
    /// let segments: Vec<_> = path.parent_segments_rev().collect();
    /// assert_eq!(segments, ["1.0", "foo", "org"]);
    /// ```
    pub fn parent_segments_rev(&self) -> impl Iterator<Item = &str> {
        self.parent()
            .rsplit(SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }

    fn split(&self) -> (&str, &str) {
        match self.value.rsplit_once(SEPARATOR) {
            Some(("", name)) => ("/", name),
            Some(pair) => pair,
            None => ("", self.value.as_str()),
        }
    }
}

fn clean(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let absolute = unified.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `/..` stays at the root.
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

impl From<&str> for ArtifactPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ArtifactPath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&String> for ArtifactPath {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<&Utf8Path> for ArtifactPath {
    fn from(path: &Utf8Path) -> Self {
        Self::new(path.as_str())
    }
}

impl From<&Path> for ArtifactPath {
    fn from(path: &Path) -> Self {
        Self::new(&path.to_string_lossy())
    }
}

impl From<ArtifactPath> for String {
    fn from(path: ArtifactPath) -> Self {
        path.value
    }
}

impl AsRef<str> for ArtifactPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
