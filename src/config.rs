//! Classification settings for the path orderer.
//!
//! The defaults describe a Maven-style repository: `maven-metadata.xml`
//! index files, checksum and signature sidecars, and `.pom` descriptors.
//! Pipelines publishing other layouts can override any list from a TOML
//! file; omitted keys keep their defaults.
//!
//! ```toml
//! metadata_files = ["maven-metadata.xml", "index.json"]
//! sidecar_extensions = ["sha1", "asc"]
//! ```

use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

use crate::error::{OrderingError, Result};

/// Settings that drive [`crate::Category`] classification.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OrderingConfig {
    /// Exact file names treated as generated metadata.
    pub metadata_files: Vec<String>,
    /// Extensions of checksum and signature files written next to an
    /// artifact, such as `foo.jar.sha1`.
    pub sidecar_extensions: Vec<String>,
    /// Extension identifying the project descriptor.
    pub pom_extension: String,
}

impl OrderingConfig {
    fn default_metadata_files() -> Vec<String> {
        Vec::from(["maven-metadata.xml", "maven-metadata-local.xml"].map(str::to_owned))
    }

    fn default_sidecar_extensions() -> Vec<String> {
        Vec::from(["md5", "sha1", "sha256", "sha512", "asc"].map(str::to_owned))
    }

    fn default_pom_extension() -> String {
        "pom".to_owned()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::InvalidConfig`] when the text is not valid
    /// TOML or names an unknown key.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_order::OrderingConfig;
    ///
    /// let config = OrderingConfig::from_toml_str("pom_extension = \"xml\"\n")
    ///     .expect("valid configuration");
    /// assert!(config.is_pom_extension("xml"));
    /// assert!(config.is_metadata_file("maven-metadata.xml"));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::Read`] when the file cannot be read and
    /// [`OrderingError::InvalidConfig`] when its contents do not parse.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        debug!(target: "artifact_order::config", "loading ordering configuration from {path}");
        let source = std::fs::read_to_string(path).map_err(|source| OrderingError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Returns `true` when `name` is a configured metadata file name.
    #[must_use]
    pub fn is_metadata_file(&self, name: &str) -> bool {
        self.metadata_files.iter().any(|candidate| candidate == name)
    }

    /// Returns `true` when `extension` marks a checksum or signature sidecar.
    #[must_use]
    pub fn is_sidecar_extension(&self, extension: &str) -> bool {
        self.sidecar_extensions
            .iter()
            .any(|candidate| candidate == extension)
    }

    /// Returns `true` when `extension` marks a project descriptor.
    #[must_use]
    pub fn is_pom_extension(&self, extension: &str) -> bool {
        self.pom_extension == extension
    }
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            metadata_files: Self::default_metadata_files(),
            sidecar_extensions: Self::default_sidecar_extensions(),
            pom_extension: Self::default_pom_extension(),
        }
    }
}
