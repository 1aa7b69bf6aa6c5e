//! Shared path handling for the artifact ordering workspace.
//!
//! The [`ArtifactPath`] value type normalises raw path text once so that
//! ordering code can work purely with borrowed string slices.

pub mod path;

pub use path::ArtifactPath;
