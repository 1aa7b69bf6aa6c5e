//! Classification of artifact files into upload tiers.
//!
//! Classification looks only at a single path and the active
//! [`OrderingConfig`]. Because no other file is consulted, the resulting
//! rank is a pure key and the ordering built on it stays transitive.

use artifact_order_common::ArtifactPath;
use log::trace;

use crate::config::OrderingConfig;

/// Version qualifier kept as part of the version rather than read as a
/// classifier.
const SNAPSHOT: &str = "SNAPSHOT";

/// Upload tier of a single file.
///
/// Variant order is significant: the derived [`Ord`] sorts by tier first and
/// then, for [`Category::Classified`], alphabetically by classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category<'a> {
    /// Main build output with no classifier.
    Primary,
    /// Project descriptor.
    Pom,
    /// Generated metadata, or a checksum or signature sidecar.
    Metadata,
    /// Variant of the primary artifact, such as `sources` or `javadoc`.
    Classified(&'a str),
}

impl Category<'_> {
    /// Numeric tier, lowest uploads first.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Primary => 0,
            Self::Pom => 1,
            Self::Metadata => 2,
            Self::Classified(_) => 3,
        }
    }

    /// Classifier string for [`Category::Classified`].
    #[must_use]
    pub const fn classifier(&self) -> Option<&str> {
        match self {
            Self::Classified(classifier) => Some(*classifier),
            _ => None,
        }
    }
}

/// Classifies `path` under `config`.
///
/// # Examples
///
/// ```
/// use artifact_order::{Category, OrderingConfig, classify};
/// use artifact_order_common::ArtifactPath;
///
/// let config = OrderingConfig::default();
/// let path = ArtifactPath::new("org/foo/1.0/foo-1.0-sources.jar");
/// assert_eq!(classify(&path, &config), Category::Classified("sources"));
/// ```
#[must_use]
pub fn classify<'a>(path: &'a ArtifactPath, config: &OrderingConfig) -> Category<'a> {
    let category = if config.is_metadata_file(path.name())
        || config.is_sidecar_extension(path.extension())
    {
        Category::Metadata
    } else if config.is_pom_extension(path.extension()) {
        Category::Pom
    } else {
        classifier_of(path).map_or(Category::Primary, Category::Classified)
    };
    trace!(target: "artifact_order::category", "{path} classified as {category:?}");
    category
}

/// Outcome of matching a base name against its `<artifactId>/<version>`
/// directories.
enum LayoutMatch<'a> {
    Unmatched,
    Bare,
    Suffix(&'a str),
}

fn classifier_of(path: &ArtifactPath) -> Option<&str> {
    let base = path.base_name();
    let candidate = match layout_match(path) {
        LayoutMatch::Bare => None,
        LayoutMatch::Suffix(suffix) => Some(suffix),
        LayoutMatch::Unmatched => trailing_segments(base),
    };
    candidate.filter(|classifier| is_classifier(classifier))
}

/// Matches `<artifactId>-<version>[-<classifier>]` using the two innermost
/// parent directories.
fn layout_match(path: &ArtifactPath) -> LayoutMatch<'_> {
    let mut parents = path.parent_segments_rev();
    let (Some(version), Some(artifact_id)) = (parents.next(), parents.next()) else {
        return LayoutMatch::Unmatched;
    };

    let after_version = path
        .base_name()
        .strip_prefix(artifact_id)
        .and_then(|tail| tail.strip_prefix('-'))
        .and_then(|tail| tail.strip_prefix(version));

    match after_version {
        Some("") => LayoutMatch::Bare,
        Some(tail) => tail
            .strip_prefix('-')
            .map_or(LayoutMatch::Unmatched, LayoutMatch::Suffix),
        None => LayoutMatch::Unmatched,
    }
}

/// Returns whatever follows the last version-looking `-` segment.
///
/// The first segment is never treated as a version so that names such as
/// `7zip-sources` keep their leading token.
fn trailing_segments(base: &str) -> Option<&str> {
    let (_, mut remaining) = base.split_once('-')?;
    let mut trailing = None;

    loop {
        let (segment, tail) = match remaining.split_once('-') {
            Some((segment, tail)) => (segment, Some(tail)),
            None => (remaining, None),
        };
        if is_version_like(segment) {
            trailing = tail;
        }
        match tail {
            Some(next) => remaining = next,
            None => return trailing,
        }
    }
}

fn is_version_like(segment: &str) -> bool {
    segment == SNAPSHOT || segment.starts_with(|c: char| c.is_ascii_digit())
}

fn is_classifier(candidate: &str) -> bool {
    candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
