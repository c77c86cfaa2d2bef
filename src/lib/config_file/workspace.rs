use serde::Deserialize;

use crate::generator::workspace::BatchBuildPolicy;

/// [`WorkspaceAttribute`] - Defines the characteristics of the generated workspace.
///
/// * `batch_policy` - Which targets get a project file, and whether batch build
/// definitions are written. When absent, the segregated policy is used. A policy
/// given on the command line takes precedence
///
/// ### Tests
///
/// ```rust
/// use ewgen::config_file::workspace::WorkspaceAttribute;
/// use ewgen::generator::workspace::BatchBuildPolicy;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[workspace]
///     batch_policy = 'segregated'
///"#;
///
/// let config: WorkspaceAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the ewgen toml file");
///
/// assert_eq!(config.batch_policy, Some(BatchBuildPolicy::Segregated));
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
pub struct WorkspaceAttribute {
    pub batch_policy: Option<BatchBuildPolicy>,
}
