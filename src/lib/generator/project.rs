//! Generation of the project file of every emitted target of a directory scope

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::bounds::{DirectoryScope, Generator};
use crate::domain::target::{BuildTarget, Language};
use crate::utils::constants::{variables, PROJECT_FILE_EXT};
use crate::utils::fs::ArtifactOutcome;

use super::paths::canonicalize;
use super::settings::SettingsWriter;
use super::source_tree::{DirectoryNode, SourceTree};
use super::toolchain::{self, ConfigurationSettings};
use super::variables::ProjectVariables;
use super::workspace::BatchBuildPolicy;
use super::xml::XmlWriter;

const FILE_VERSION: u32 = 3;
const TOOLCHAIN: &str = "ARM";

/// Writes one project file per target of a directory scope
pub struct ProjectGenerator<'a> {
    scope: &'a dyn DirectoryScope,
    policy: BatchBuildPolicy,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(scope: &'a dyn DirectoryScope, policy: BatchBuildPolicy) -> Self {
        Self { scope, policy }
    }

    /// The targets of the scope that get a project file under the current policy
    pub fn emitted_targets(&self) -> impl Iterator<Item = &'a BuildTarget> + '_ {
        self.scope
            .targets()
            .iter()
            .filter(move |target| self.policy.emits(target.kind))
    }

    pub fn project_path(&self, target: &BuildTarget) -> PathBuf {
        PathBuf::from(self.scope.binary_dir())
            .join(format!("{}.{PROJECT_FILE_EXT}", target.name))
    }

    /// Renders the whole project file of `target`
    pub fn render(&self, target: &BuildTarget) -> String {
        let scope = self.scope;
        let vars = ProjectVariables::gather(scope);
        let configurations = scope.configurations(true);

        let mut xml = XmlWriter::new();
        xml.start_document();
        xml.start_element("project");
        xml.element("fileVersion", FILE_VERSION);

        for config in &configurations {
            let settings = self.configuration_settings(target, config, &vars);
            xml.start_element("configuration");
            xml.element("name", config);
            xml.start_element("toolchain");
            xml.element("name", TOOLCHAIN);
            xml.end_element(); // toolchain
            xml.element("debug", u8::from(settings.is_debug()));
            toolchain::write_settings(&mut SettingsWriter::new(&mut xml), &settings);
            xml.end_element(); // configuration
        }

        // The IDE doesn't support different sets of sources per configuration,
        // so the tree is always built from the first one
        if let Some(reference) = configurations.first() {
            let sources = scope.sources(target, reference);
            let root = DirectoryNode::build(&sources, |path| canonicalize(scope.binary_dir(), path));
            SourceTree::new(root).write(&mut xml);
        }

        xml.end_element(); // project
        xml.end_document()
    }

    fn configuration_settings<'v>(
        &self,
        target: &'v BuildTarget,
        config: &'v str,
        vars: &'v ProjectVariables,
    ) -> ConfigurationSettings<'v> {
        let icf_file = vars.ilink_icf_file.as_deref().map(|expression| {
            let evaluated = self.scope.evaluate(expression, config, target);
            canonicalize(self.scope.binary_dir(), &evaluated)
        });

        ConfigurationSettings {
            config,
            target: &target.name,
            vars,
            c_defines: self.defines(target, config, Language::C),
            c_includes: self.includes(target, config, Language::C),
            asm_defines: self.defines(target, config, Language::Asm),
            asm_includes: self.includes(target, config, Language::Asm),
            icf_file,
        }
    }

    /// The definitions held by the model, plus the ones hidden as `-D` switches on
    /// the per configuration flags variable of the language
    fn defines(&self, target: &BuildTarget, config: &str, lang: Language) -> BTreeSet<String> {
        let mut defines = self.scope.defines(target, config, lang);
        if let Some(flags) = self
            .scope
            .variable(&variables::flags_for(lang.as_ref(), config))
        {
            defines.extend(defines_in_flags(flags));
        }
        defines
    }

    fn includes(&self, target: &BuildTarget, config: &str, lang: Language) -> Vec<String> {
        self.scope
            .include_dirs(target, config, lang)
            .iter()
            .map(|dir| canonicalize(self.scope.binary_dir(), dir))
            .collect()
    }
}

impl Generator for ProjectGenerator<'_> {
    fn generate(&self) -> Vec<ArtifactOutcome> {
        self.emitted_targets()
            .map(|target| {
                log::debug!("Generating the project file for {} ({})", target.name, target.kind);
                super::persist(self.project_path(target), &self.render(target))
            })
            .collect()
    }
}

/// Scans a compiler command line for ` -D` switches, taking everything up to the
/// next whitespace as the definition. Quoted values holding spaces aren't supported
pub fn defines_in_flags(flags: &str) -> impl Iterator<Item = String> + '_ {
    static DEFINE_SWITCH: OnceLock<Regex> = OnceLock::new();

    DEFINE_SWITCH
        .get_or_init(|| Regex::new(r"(?:^|\s)-D(\S*)").unwrap())
        .captures_iter(flags)
        .filter_map(|captures| captures.get(1))
        .map(|define| define.as_str().to_string())
}
