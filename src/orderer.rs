//! Upload ordering over artifact paths.
//!
//! [`PathOrderer`] compares two paths through a fixed tie-break chain:
//!
//! 1. parent directory, lexicographically;
//! 2. [`Category`] (primary, pom, metadata, then classified variants sorted
//!    by classifier);
//! 3. extension;
//! 4. full file name.
//!
//! The parent comparison dominates, so files from one module/version
//! directory are never interleaved with files from another.

use std::cmp::Ordering;

use artifact_order_common::ArtifactPath;
use log::debug;
use once_cell::sync::Lazy;

use crate::category::{Category, classify};
use crate::checksum::{ChecksumIndex, Checksums};
use crate::config::OrderingConfig;

static DEFAULT_CONFIG: Lazy<OrderingConfig> = Lazy::new(OrderingConfig::default);
static EMPTY_INDEX: ChecksumIndex = ChecksumIndex::new();

/// Comparison strategy for ordering artifact uploads.
///
/// The orderer only borrows its inputs and never mutates them, so one value
/// can be shared by concurrent sorts.
///
/// # Examples
///
/// ```
/// use artifact_order::{ChecksumIndex, PathOrderer};
/// use artifact_order_common::ArtifactPath;
///
/// let index = ChecksumIndex::new();
/// let orderer = PathOrderer::new(&index);
/// let sorted = orderer.sorted(["foo/foo.pom", "foo/foo.jar", "bar/bar.jar"]);
/// let names: Vec<&str> = sorted.iter().map(ArtifactPath::as_str).collect();
/// assert_eq!(names, ["bar/bar.jar", "foo/foo.jar", "foo/foo.pom"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathOrderer<'a> {
    checksums: &'a ChecksumIndex,
    config: &'a OrderingConfig,
}

impl<'a> PathOrderer<'a> {
    /// Creates an orderer using the default [`OrderingConfig`].
    #[must_use]
    pub fn new(checksums: &'a ChecksumIndex) -> Self {
        Self::with_config(checksums, &DEFAULT_CONFIG)
    }

    /// Creates an orderer with explicit classification settings.
    #[must_use]
    pub const fn with_config(checksums: &'a ChecksumIndex, config: &'a OrderingConfig) -> Self {
        Self { checksums, config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &'a OrderingConfig {
        self.config
    }

    /// Returns the checksums recorded for `path`, if any.
    ///
    /// The index never influences ordering; it travels with the orderer so
    /// that the uploader can fetch digests while iterating the sorted paths.
    #[must_use]
    pub fn checksums_for(&self, path: &ArtifactPath) -> Option<&'a Checksums> {
        self.checksums.get(path)
    }

    /// Classifies `path` exactly as [`Self::compare`] does.
    #[must_use]
    pub fn category_of<'p>(&self, path: &'p ArtifactPath) -> Category<'p> {
        classify(path, self.config)
    }

    /// Compares two paths for upload order.
    ///
    /// The relation is a total order: identical normalised paths compare
    /// [`Ordering::Equal`] and every other pair is decided.
    #[must_use]
    pub fn compare(&self, a: &ArtifactPath, b: &ArtifactPath) -> Ordering {
        a.parent()
            .cmp(b.parent())
            .then_with(|| self.category_of(a).cmp(&self.category_of(b)))
            .then_with(|| a.extension().cmp(b.extension()))
            .then_with(|| a.name().cmp(b.name()))
    }

    /// Sorts `paths` into upload order.
    ///
    /// The sort is stable, so duplicate entries keep their relative order.
    pub fn sort_in_place(&self, paths: &mut [ArtifactPath]) {
        self.sort_by_path(paths, |path| path);
    }

    /// Sorts arbitrary items by the artifact path each one carries.
    ///
    /// ```
    /// use artifact_order::{ChecksumIndex, PathOrderer};
    /// use artifact_order_common::ArtifactPath;
    ///
    /// let mut uploads = vec![
    ///     (ArtifactPath::new("foo/foo.pom"), 2_u64),
    ///     (ArtifactPath::new("foo/foo.jar"), 1_u64),
    /// ];
    /// PathOrderer::new(&ChecksumIndex::new()).sort_by_path(&mut uploads, |(path, _)| path);
    /// assert_eq!(uploads[0].1, 1);
    /// ```
    pub fn sort_by_path<T, F>(&self, items: &mut [T], mut path_of: F)
    where
        F: FnMut(&T) -> &ArtifactPath,
    {
        debug!(target: "artifact_order::orderer", "sorting {} artifact paths", items.len());
        items.sort_by(|a, b| self.compare(path_of(a), path_of(b)));
    }

    /// Collects path-like values into a new vector in upload order.
    #[must_use]
    pub fn sorted<I>(&self, paths: I) -> Vec<ArtifactPath>
    where
        I: IntoIterator,
        I::Item: Into<ArtifactPath>,
    {
        let mut sorted: Vec<ArtifactPath> = paths.into_iter().map(Into::into).collect();
        self.sort_in_place(&mut sorted);
        sorted
    }
}

/// Sorts `paths` with an empty checksum index and the default configuration.
pub fn sort_paths(paths: &mut [ArtifactPath]) {
    PathOrderer::new(&EMPTY_INDEX).sort_in_place(paths);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn index() -> ChecksumIndex {
        ChecksumIndex::new()
    }

    fn compare(index: &ChecksumIndex, a: &str, b: &str) -> Ordering {
        PathOrderer::new(index).compare(&ArtifactPath::new(a), &ArtifactPath::new(b))
    }

    #[rstest]
    #[case::parent_path("bar/bar.jar", "foo/bar.jar")]
    #[case::parent_beats_category("bar/bar-1.0-sources.jar", "foo/foo.jar")]
    #[case::extension("foo/bar.jar", "foo/bar.war")]
    #[case::pom_after_primary("foo.jar", "foo.pom")]
    #[case::name("foo/bar.jar", "foo/zar.jar")]
    #[case::metadata_after_pom("foo/1.0/foo-1.0.pom", "foo/1.0/maven-metadata.xml")]
    #[case::sidecar_after_pom("foo/1.0/foo-1.0.pom", "foo/1.0/foo-1.0.jar.sha1")]
    #[case::classified_after_metadata("foo/1.0/maven-metadata.xml", "foo/1.0/foo-1.0-javadoc.jar")]
    #[case::classifiers_alphabetical("foo/1.0/foo-1.0-sources.jar", "foo/1.0/foo-1.0-tests.jar")]
    #[case::classifier_before_extension(
        "foo/1.0/foo-1.0-javadoc.zip",
        "foo/1.0/foo-1.0-sources.jar"
    )]
    #[case::relative_before_absolute("foo.jar", "/foo.jar")]
    #[case::empty_first("", "a.jar")]
    fn orders_pairs(index: ChecksumIndex, #[case] lesser: &str, #[case] greater: &str) {
        assert_eq!(compare(&index, lesser, greater), Ordering::Less);
        assert_eq!(compare(&index, greater, lesser), Ordering::Greater);
    }

    #[rstest]
    #[case::identical("foo/bar.jar", "foo/bar.jar")]
    #[case::same_after_normalisation("foo//./bar.jar", "foo/bar.jar")]
    #[case::both_empty("", "")]
    fn equal_paths_compare_equal(index: ChecksumIndex, #[case] a: &str, #[case] b: &str) {
        assert_eq!(compare(&index, a, b), Ordering::Equal);
    }

    #[rstest]
    fn sort_is_stable_for_duplicates(index: ChecksumIndex) {
        let mut items = vec![
            (ArtifactPath::new("a/x.jar"), 1),
            (ArtifactPath::new("a/./x.jar"), 2),
            (ArtifactPath::new("a/x.pom"), 3),
            (ArtifactPath::new("a//x.jar"), 4),
        ];
        PathOrderer::new(&index).sort_by_path(&mut items, |(path, _)| path);
        let order: Vec<i32> = items.iter().map(|(_, id)| *id).collect();
        assert_eq!(order, [1, 2, 4, 3]);
    }

    #[rstest]
    fn checksums_do_not_change_order() {
        let paths = ["foo/1.0/foo-1.0.pom", "foo/1.0/foo-1.0.jar"];
        let populated: ChecksumIndex = [(
            "foo/1.0/foo-1.0.pom",
            Checksums {
                md5: Some("d41d8cd9".to_owned()),
                ..Checksums::default()
            },
        )]
        .into_iter()
        .collect();
        let empty = ChecksumIndex::new();

        assert_eq!(
            PathOrderer::new(&populated).sorted(paths),
            PathOrderer::new(&empty).sorted(paths)
        );
        let pom = ArtifactPath::new("foo/1.0/foo-1.0.pom");
        assert!(PathOrderer::new(&populated).checksums_for(&pom).is_some());
        assert!(PathOrderer::new(&empty).checksums_for(&pom).is_none());
    }

    #[rstest]
    fn custom_config_changes_classification(index: ChecksumIndex) {
        let config = OrderingConfig {
            sidecar_extensions: Vec::new(),
            ..OrderingConfig::default()
        };
        let orderer = PathOrderer::with_config(&index, &config);
        let sidecar = ArtifactPath::new("foo/1.0/foo-1.0.jar.sha1");

        assert_eq!(orderer.category_of(&sidecar), Category::Primary);
        assert_eq!(orderer.config().sidecar_extensions.len(), 0);
        assert_eq!(
            PathOrderer::new(&index).category_of(&sidecar),
            Category::Metadata
        );
    }

    #[rstest]
    fn sort_paths_uses_defaults() {
        let mut paths = vec![
            ArtifactPath::new("foo/1.0/foo-1.0-sources.jar"),
            ArtifactPath::new("foo/1.0/maven-metadata.xml"),
            ArtifactPath::new("foo/1.0/foo-1.0.jar"),
        ];
        sort_paths(&mut paths);
        let names: Vec<&str> = paths.iter().map(ArtifactPath::name).collect();
        assert_eq!(
            names,
            ["foo-1.0.jar", "maven-metadata.xml", "foo-1.0-sources.jar"]
        );
    }
}
