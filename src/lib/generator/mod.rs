//! The generators of the IDE files, and the building blocks that they share

pub mod paths;
pub mod project;
pub mod settings;
pub mod source_tree;
pub mod toolchain;
pub mod variables;
pub mod workspace;
pub mod xml;

use std::path::PathBuf;

use crate::utils::fs::{self, ArtifactOutcome, WriteStatus};

/// Persists a rendered artifact. A failure abandons this artifact alone: it's
/// logged and reported as skipped, and never stops the generation of the rest
pub(crate) fn persist(path: PathBuf, contents: &str) -> ArtifactOutcome {
    let status = fs::write_if_changed(&path, contents).unwrap_or_else(|err| {
        log::warn!("Skipping {path:?}: {err:?}");
        WriteStatus::Skipped
    });

    ArtifactOutcome { path, status }
}
