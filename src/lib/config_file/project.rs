//! Metadata about the user's project
use std::borrow::Cow;

use serde::*;

/// [`ProjectAttribute`] - Metadata about the user's project
/// * `name` - The project's name, used as the stem of the workspace file
/// * `configurations` - The build configurations, in the order they are presented
/// on the IDE. When none is declared, a single unnamed configuration is generated
/// * `source_dir` - Where the sources live. Defaults to the directory of the
/// config file. Relative paths are resolved against that same directory
/// * `binary_dir` - Where the IDE files are generated. Defaults to
/// `<source_dir>/build`
///
/// ### Tests
///
/// ```rust
/// use ewgen::config_file::project::ProjectAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'firmware'
///     configurations = ['Debug', 'Release']
///     binary_dir = 'out/ide'
///"#;
///
/// let config: ProjectAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the ewgen toml file");
///
/// assert_eq!(config.name, "firmware");
/// assert_eq!(config.configurations, vec!["Debug", "Release"]);
/// assert_eq!(config.source_dir, None);
/// assert_eq!(config.binary_dir.as_deref(), Some("out/ide"));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`ewgen::config_file::EwgenConfigFile`] doc-test
#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow, default)]
    pub configurations: Vec<Cow<'a, str>>,
    #[serde(borrow)]
    pub source_dir: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub binary_dir: Option<Cow<'a, str>>,
}
