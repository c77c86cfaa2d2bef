//! The higher abstractions of the program

use core::fmt;

use serde::{Deserialize, Serialize};

/// The identity of a target declared on the build model. Everything else about
/// it is queried on its [`crate::bounds::DirectoryScope`]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Hash, Clone)]
pub struct BuildTarget {
    pub name: String,
    pub kind: TargetKind,
}

impl BuildTarget {
    pub fn new<N: Into<String>>(name: N, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The different types of final products
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone, Hash)]
pub enum TargetKind {
    #[default]
    #[serde(alias = "executable", alias = "exe")]
    Executable,
    #[serde(
        alias = "StaticLib",
        alias = "static_library",
        alias = "static-lib",
        alias = "static_lib",
        alias = "staticlib"
    )]
    StaticLibrary,
    /// Any other product (shared libraries, object libraries, utility targets...),
    /// never emitted as a project
    #[serde(alias = "other")]
    Other,
}

impl AsRef<str> for TargetKind {
    fn as_ref(&self) -> &str {
        match *self {
            TargetKind::Executable => "executable",
            TargetKind::StaticLibrary => "static library",
            TargetKind::Other => "other",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The languages whose preprocessor settings are written on the project files
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Language {
    C,
    Asm,
}

impl AsRef<str> for Language {
    /// The language identifier, as it appears on the names of the flags variables
    fn as_ref(&self) -> &str {
        match *self {
            Language::C => "C",
            Language::Asm => "ASM",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
