//! Resolution of the declared paths of the config file into the absolute, forward
//! slash and lexically normalized form held by the model

use color_eyre::{eyre::Context, Result};

use crate::utils::constants::error_messages;

const SEPARATOR: char = '/';

#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    File(String),
    Glob(GlobPattern),
}

impl Source {
    /// Classifies a declared source, already resolved against its base directory
    pub fn new(path: String) -> Self {
        if path.contains('*') {
            Source::Glob(GlobPattern(path))
        } else {
            Source::File(path)
        }
    }

    #[inline(always)]
    pub fn paths(&self) -> Result<Vec<String>> {
        match self {
            Source::File(file) => Ok(vec![file.clone()]),
            Source::Glob(pattern) => pattern.resolve(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct GlobPattern(pub String);

impl GlobPattern {
    /// The files matching the pattern, in alphabetical order
    #[inline(always)]
    fn resolve(&self) -> Result<Vec<String>> {
        glob::glob(&self.0)
            .with_context(|| format!("{}: {}", error_messages::FAILURE_RESOLVING_SOURCES, self.0))?
            .map(|entry| {
                entry
                    .map(|path| normalize(&path.to_string_lossy().replace('\\', "/")))
                    .with_context(|| error_messages::FAILURE_RESOLVING_SOURCES)
            })
            .collect()
    }
}

/// Resolves every declared source against `base`, expanding the glob patterns
pub fn resolve_sources<'s, I>(base: &str, declared: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut sources = Vec::new();
    for src in declared {
        sources.extend(Source::new(resolve(base, src)).paths()?);
    }
    Ok(sources)
}

/// Anchors `path` at `base` when it's relative, and normalizes the result
pub fn resolve(base: &str, path: &str) -> String {
    let path = path.replace('\\', "/");
    if is_absolute(&path) {
        normalize(&path)
    } else {
        normalize(&format!("{}{SEPARATOR}{path}", base.trim_end_matches(SEPARATOR)))
    }
}

pub fn is_absolute(path: &str) -> bool {
    volume_len(path).is_some()
}

fn volume_len(path: &str) -> Option<usize> {
    match path.as_bytes() {
        [drive, b':', b'/', ..] if drive.is_ascii_alphabetic() => Some(3),
        [b'/', ..] => Some(1),
        _ => None,
    }
}

/// Lexically removes the `.` and `..` components, and the repeated separators
pub fn normalize(path: &str) -> String {
    let (volume, rest) = path.split_at(volume_len(path).unwrap_or(0));

    let mut components: Vec<&str> = Vec::new();
    for component in rest.split(SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(last) if *last != ".." => {
                    components.pop();
                }
                // Ascents over the root of a volume are discarded
                _ if !volume.is_empty() => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    format!("{volume}{}", components.join("/"))
}
