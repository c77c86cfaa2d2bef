//! The contracts between the generators and the world around them.
//!
//! The build model is owned by an external collaborator. The generators only
//! reach it through the narrow, read-only queries declared here, and never
//! mutate it.

use std::collections::BTreeSet;

use crate::domain::target::{BuildTarget, Language};
use crate::utils::fs::ArtifactOutcome;

/// Read-only queries over one directory of the build model, with the targets
/// declared on it
pub trait DirectoryScope {
    /// The absolute, forward slash, source directory of this scope
    fn source_dir(&self) -> &str;

    /// The absolute, forward slash, binary directory of this scope, where its
    /// project files are written
    fn binary_dir(&self) -> &str;

    /// The declared configurations, in their declared order. When `include_empty`
    /// is set and nothing was declared, a single unnamed configuration is reported
    fn configurations(&self, include_empty: bool) -> Vec<String>;

    /// Looks up a named variable
    fn variable(&self, name: &str) -> Option<&str>;

    /// The targets declared on this scope, in their declared order
    fn targets(&self) -> &[BuildTarget];

    /// The absolute paths of the sources of `target` for `config`
    fn sources(&self, target: &BuildTarget, config: &str) -> Vec<String>;

    /// The preprocessor definitions of `target` for `config` and `lang`
    fn defines(&self, target: &BuildTarget, config: &str, lang: Language) -> BTreeSet<String>;

    /// The absolute include directories of `target` for `config` and `lang`, in order
    fn include_dirs(&self, target: &BuildTarget, config: &str, lang: Language) -> Vec<String>;

    /// Evaluates a configuration dependent expression (ie: the path to the
    /// linker configuration file) for `target` and `config`
    fn evaluate(&self, template: &str, config: &str, target: &BuildTarget) -> String;
}

/// A logical group of directories of the build model, which maps to one workspace
pub struct Partition<'a> {
    pub name: &'a str,
    /// The directories of the partition. The first one is the top directory
    pub directories: Vec<&'a dyn DirectoryScope>,
}

/// The whole build model, as a sequence of partitions in their declared order
pub trait BuildModel {
    fn partitions(&self) -> Vec<Partition<'_>>;
}

/// Anything that produces IDE artifacts out of the build model
pub trait Generator {
    /// Writes the artifacts that this generator is responsible for, reporting what
    /// happened with every one of them. A failure to write one artifact is not an
    /// error, and never prevents the remaining ones from being generated
    fn generate(&self) -> Vec<ArtifactOutcome>;
}
