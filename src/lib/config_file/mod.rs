//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod project;
pub mod target;
pub mod workspace;

use std::borrow::Cow;
use std::fmt::Debug;

use indexmap::IndexMap;
use serde::Deserialize;

use self::{project::ProjectAttribute, target::TargetAttribute, workspace::WorkspaceAttribute};

/// ```rust
/// use ewgen::config_file::{self, EwgenConfigFile, target::TargetAttribute};
/// use ewgen::domain::target::TargetKind;
/// use ewgen::generator::workspace::BatchBuildPolicy;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'firmware'
///     configurations = ['Debug', 'Release']
///
///     [workspace]
///     batch_policy = 'minimal'
///
///     [variables]
///     CMAKE_IAR_CHIP_SELECT = 'ST STM32F407VG'
///     CMAKE_C_FLAGS_DEBUG = '-DDEBUG=1'
///
///     [targets.app]
///     kind = 'executable'
///     sources = [ 'src/*.c', 'startup.s' ]
///     include_dirs = [ 'inc' ]
///
///     [targets.app.configurations.Debug]
///     defines = [ 'TRACE' ]
///
///     [targets.hal]
///     kind = 'static_library'
///     directory = 'hal'
///     sources = [ 'gpio.c' ]
/// "#;
///
/// let config: EwgenConfigFile = config_file::ewgen_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the ewgen toml file");
///
/// assert_eq!(config.project.name, "firmware");
/// assert_eq!(config.project.configurations, vec!["Debug", "Release"]);
/// assert_eq!(
///     config.workspace.and_then(|ws| ws.batch_policy),
///     Some(BatchBuildPolicy::Minimal)
/// );
/// assert_eq!(config.variables.get("CMAKE_C_FLAGS_DEBUG").unwrap(), "-DDEBUG=1");
///
/// let names: Vec<&str> = config.targets.keys().copied().collect();
/// assert_eq!(names, vec!["app", "hal"]);
///
/// let app: &TargetAttribute<'_> = config.targets.get("app").unwrap();
/// assert_eq!(app.kind, Some(TargetKind::Executable));
/// assert_eq!(app.sources, vec!["src/*.c", "startup.s"]);
/// assert_eq!(app.configurations.get("Debug").unwrap().defines, vec!["TRACE"]);
///
/// let hal: &TargetAttribute<'_> = config.targets.get("hal").unwrap();
/// assert_eq!(hal.kind, Some(TargetKind::StaticLibrary));
/// assert_eq!(hal.directory.as_deref(), Some("hal"));
/// ```
/// The [`EwgenConfigFile`] is the type that holds
/// the whole hierarchy of the config file attributes
/// and properties
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct EwgenConfigFile<'a> {
    #[serde(borrow)]
    pub project: ProjectAttribute<'a>,
    pub workspace: Option<WorkspaceAttribute>,
    /// The named variables looked up by the generators
    #[serde(borrow, default)]
    pub variables: IndexMap<&'a str, Cow<'a, str>>,
    /// The declared targets, in their declaration order
    #[serde(borrow, default)]
    pub targets: IndexMap<&'a str, TargetAttribute<'a>>,
}

pub fn ewgen_cfg_from_file(cfg: &'_ str) -> Result<EwgenConfigFile<'_>, toml::de::Error> {
    <EwgenConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
