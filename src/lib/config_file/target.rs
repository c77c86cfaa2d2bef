//! Type for holds the Targets build details

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::target::TargetKind;

/// [`TargetAttribute`] - The type for holding the build details of every
/// user defined target
/// * `kind` - Determines which type of byproduct is generated (executable, library...)
/// * `directory` - The sub-directory of the project that owns the target. Targets
/// sharing a directory share its project files location (`<binary_dir>/<directory>`)
/// * `sources` - The sources of the target. Patterns holding a `*` are expanded
/// * `defines` - Preprocessor definitions for every language
/// * `c_defines`, `asm_defines` - Preprocessor definitions for a single language
/// * `include_dirs` - The include directories, in search order
/// * `configurations` - Additions that only apply to one configuration
///
/// ### Tests
///
/// ```rust
/// use ewgen::config_file::target::TargetAttribute;
/// use ewgen::domain::target::TargetKind;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[targets.app]
///     kind = 'exe'
///     sources = [ 'src/*.c' ]
///     c_defines = [ 'USE_HAL' ]
///     include_dirs = [ 'inc' ]
///"#;
///
/// let config: TargetAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the ewgen toml file");
///
/// assert_eq!(config.kind, Some(TargetKind::Executable));
/// assert_eq!(config.sources, vec!["src/*.c"]);
/// assert_eq!(config.c_defines, vec!["USE_HAL"]);
/// assert!(config.asm_defines.is_empty());
/// assert_eq!(config.include_dirs, vec!["inc"]);
/// assert!(config.configurations.is_empty());
/// ```
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`ewgen::config_file::EwgenConfigFile`] doc-test
#[derive(Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetAttribute<'a> {
    pub kind: Option<TargetKind>,
    #[serde(borrow)]
    pub directory: Option<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub sources: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub defines: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub c_defines: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub asm_defines: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub include_dirs: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub configurations: IndexMap<&'a str, ConfigurationAttribute<'a>>,
}

/// [`ConfigurationAttribute`] - What a target adds for a single configuration
#[derive(Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationAttribute<'a> {
    #[serde(borrow, default)]
    pub defines: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub include_dirs: Vec<Cow<'a, str>>,
    #[serde(borrow, default)]
    pub sources: Vec<Cow<'a, str>>,
}
