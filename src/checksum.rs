//! Read-only index of precomputed checksums.
//!
//! The index is produced elsewhere in the pipeline and handed to the
//! orderer so that the uploader can look digests up while it walks the
//! ordered sequence. Nothing here computes a digest.

use std::collections::BTreeMap;
use std::collections::btree_map;

use artifact_order_common::ArtifactPath;
use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{OrderingError, Result};

/// Hex-encoded digests recorded for one artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Checksums {
    /// SHA-1 digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// MD5 digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// SHA-256 digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl Checksums {
    /// Returns `true` when no digest is recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sha1.is_none() && self.md5.is_none() && self.sha256.is_none()
    }
}

/// Mapping from artifact path to its recorded [`Checksums`].
///
/// Keys are normalised on insertion, so lookups succeed for any spelling of
/// the same path.
///
/// # Examples
///
/// ```
/// use artifact_order::{ChecksumIndex, Checksums};
///
/// let mut index = ChecksumIndex::new();
/// index.insert(
///     "foo/1.0/foo-1.0.jar",
///     Checksums { sha1: Some("da39a3ee".to_owned()), ..Checksums::default() },
/// );
/// assert!(index.contains("foo/./1.0/foo-1.0.jar"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecksumIndex {
    entries: BTreeMap<ArtifactPath, Checksums>,
}

impl ChecksumIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses an index from a JSON object keyed by path.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::InvalidChecksumIndex`] when the text is not a
    /// JSON object of checksum records.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_order::ChecksumIndex;
    ///
    /// let index = ChecksumIndex::from_json_str(r#"{"a/b.jar": {"md5": "d41d8cd9"}}"#)
    ///     .expect("valid index");
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads and parses a JSON index file.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::Read`] when the file cannot be read and
    /// [`OrderingError::InvalidChecksumIndex`] when it does not parse.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| OrderingError::Read {
            path: path.to_owned(),
            source,
        })?;
        let index = Self::from_json_str(&source)?;
        debug!(
            target: "artifact_order::checksum",
            "loaded {} checksum entries from {path}",
            index.len()
        );
        Ok(index)
    }

    /// Records checksums for `path`, returning any previous entry.
    pub fn insert(
        &mut self,
        path: impl Into<ArtifactPath>,
        checksums: Checksums,
    ) -> Option<Checksums> {
        self.entries.insert(path.into(), checksums)
    }

    /// Looks up the checksums recorded for `path`.
    #[must_use]
    pub fn get(&self, path: &ArtifactPath) -> Option<&Checksums> {
        self.entries.get(path)
    }

    /// Returns `true` when `path` has an entry.
    #[must_use]
    pub fn contains(&self, path: impl Into<ArtifactPath>) -> bool {
        self.entries.contains_key(&path.into())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in path order.
    pub fn iter(&self) -> btree_map::Iter<'_, ArtifactPath, Checksums> {
        self.entries.iter()
    }
}

impl<P: Into<ArtifactPath>> FromIterator<(P, Checksums)> for ChecksumIndex {
    fn from_iter<I: IntoIterator<Item = (P, Checksums)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, checksums)| (path.into(), checksums))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ChecksumIndex {
    type Item = (&'a ArtifactPath, &'a Checksums);
    type IntoIter = btree_map::Iter<'a, ArtifactPath, Checksums>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
