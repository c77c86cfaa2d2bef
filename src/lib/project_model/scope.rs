use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::bounds::DirectoryScope;
use crate::domain::target::{BuildTarget, Language};
use crate::utils::constants::template;

use super::sourceset;
use super::target::TargetModel;

/// A directory of the model, with the targets declared on it
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct ScopeModel {
    pub source_dir: String,
    pub binary_dir: String,
    pub configurations: Vec<String>,
    pub variables: IndexMap<String, String>,
    pub targets: Vec<BuildTarget>,
    pub target_data: IndexMap<String, TargetModel>,
}

impl ScopeModel {
    fn data(&self, target: &BuildTarget) -> Option<&TargetModel> {
        let data = self.target_data.get(&target.name);
        if data.is_none() {
            log::debug!("{} isn't declared on {}", target.name, self.source_dir);
        }
        data
    }
}

impl DirectoryScope for ScopeModel {
    fn source_dir(&self) -> &str {
        &self.source_dir
    }

    fn binary_dir(&self) -> &str {
        &self.binary_dir
    }

    fn configurations(&self, include_empty: bool) -> Vec<String> {
        if self.configurations.is_empty() && include_empty {
            vec![String::new()]
        } else {
            self.configurations.clone()
        }
    }

    fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    fn targets(&self) -> &[BuildTarget] {
        &self.targets
    }

    fn sources(&self, target: &BuildTarget, config: &str) -> Vec<String> {
        self.data(target)
            .map(|data| data.sources(config))
            .unwrap_or_default()
    }

    fn defines(&self, target: &BuildTarget, config: &str, lang: Language) -> BTreeSet<String> {
        self.data(target)
            .map(|data| data.defines(config, lang))
            .unwrap_or_default()
    }

    fn include_dirs(&self, target: &BuildTarget, config: &str, _lang: Language) -> Vec<String> {
        self.data(target)
            .map(|data| data.include_dirs(config))
            .unwrap_or_default()
    }

    /// Substitutes `$<CONFIG>` and `$<TARGET_NAME>`. A relative result is anchored
    /// at the source directory of the scope
    fn evaluate(&self, expression: &str, config: &str, target: &BuildTarget) -> String {
        let evaluated = expression
            .replace(template::CONFIG, config)
            .replace(template::TARGET_NAME, &target.name);
        sourceset::resolve(&self.source_dir, &evaluated)
    }
}
