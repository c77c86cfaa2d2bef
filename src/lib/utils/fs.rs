use std::{
    fmt,
    fs::{self, DirBuilder},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};
use tempfile::NamedTempFile;

/// What happened with a generated artifact when it was persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The file didn't exist, or its contents differed
    Written,
    /// The file already held exactly the same contents, and was left untouched
    Unchanged,
    /// The file couldn't be written. Nothing was left behind at its path
    Skipped,
}

impl AsRef<str> for WriteStatus {
    fn as_ref(&self) -> &str {
        match *self {
            WriteStatus::Written => "written",
            WriteStatus::Unchanged => "unchanged",
            WriteStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// Writes `contents` at `path` only if they differ from the ones already stored there.
///
/// The new contents are first written to a temporary sibling file, which is then
/// renamed over the destination, so a failure never leaves a partial file behind
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteStatus> {
    if let Ok(current) = fs::read(path) {
        if current == contents.as_bytes() {
            return Ok(WriteStatus::Unchanged);
        }
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut staging = NamedTempFile::new_in(parent)
        .with_context(|| format!("Could not create a temporary file on {parent:?}"))?;
    staging
        .write_all(contents.as_bytes())
        .with_context(|| format!("Could not write the contents for {path:?}"))?;
    staging
        .persist(path)
        .with_context(|| format!("Could not persist the file {path:?}"))?;

    Ok(WriteStatus::Written)
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Gets the absolute route for an element in the system given the path of that element
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = project_root
        .canonicalize()
        .with_context(|| format!("Could not resolve the absolute path of {project_root:?}"))?;

    // Verbatim prefixes (`\\?\C:\`) aren't understood by the IDE
    let lossy = canonical.to_string_lossy();
    match lossy.strip_prefix(r"\\?\") {
        Some(stripped) => Ok(PathBuf::from(stripped)),
        None => Ok(canonical),
    }
}
