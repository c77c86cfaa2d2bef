use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::domain::target::Language;

/// The resolved build details of a target, with every path already absolute
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct TargetModel {
    pub sources: Vec<String>,
    pub defines: Vec<String>,
    pub c_defines: Vec<String>,
    pub asm_defines: Vec<String>,
    pub include_dirs: Vec<String>,
    pub configurations: IndexMap<String, ConfigurationModel>,
}

/// What a target adds for a single configuration
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct ConfigurationModel {
    pub defines: Vec<String>,
    pub include_dirs: Vec<String>,
    pub sources: Vec<String>,
}

impl TargetModel {
    pub fn sources(&self, config: &str) -> Vec<String> {
        let mut sources = self.sources.clone();
        if let Some(cfg) = self.configurations.get(config) {
            sources.extend(cfg.sources.iter().cloned());
        }
        sources
    }

    pub fn defines(&self, config: &str, lang: Language) -> BTreeSet<String> {
        let for_language = match lang {
            Language::C => &self.c_defines,
            Language::Asm => &self.asm_defines,
        };
        let for_config = self
            .configurations
            .get(config)
            .map(|cfg| cfg.defines.as_slice())
            .unwrap_or_default();

        self.defines
            .iter()
            .chain(for_language)
            .chain(for_config)
            .cloned()
            .collect()
    }

    /// The include directories in search order, without repetitions
    pub fn include_dirs(&self, config: &str) -> Vec<String> {
        let for_config = self
            .configurations
            .get(config)
            .map(|cfg| cfg.include_dirs.as_slice())
            .unwrap_or_default();

        let mut dirs: Vec<String> = Vec::new();
        for dir in self.include_dirs.iter().chain(for_config) {
            if !dirs.contains(dir) {
                dirs.push(dir.clone());
            }
        }
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TargetModel {
        let mut configurations = IndexMap::new();
        configurations.insert(
            "Debug".to_string(),
            ConfigurationModel {
                defines: vec!["TRACE".into()],
                include_dirs: vec!["C:/fw/dbg".into(), "C:/fw/inc".into()],
                sources: vec!["C:/fw/trace.c".into()],
            },
        );
        TargetModel {
            sources: vec!["C:/fw/main.c".into()],
            defines: vec!["USE_HAL".into()],
            c_defines: vec!["C_ONLY".into()],
            asm_defines: vec!["ASM_ONLY".into()],
            include_dirs: vec!["C:/fw/inc".into()],
            configurations,
        }
    }

    #[test]
    fn test_per_configuration_additions() {
        let target = model();
        assert_eq!(target.sources("Debug"), vec!["C:/fw/main.c", "C:/fw/trace.c"]);
        assert_eq!(target.sources("Release"), vec!["C:/fw/main.c"]);
        assert_eq!(target.include_dirs("Debug"), vec!["C:/fw/inc", "C:/fw/dbg"]);
        assert_eq!(target.include_dirs("Release"), vec!["C:/fw/inc"]);
    }

    #[test]
    fn test_defines_per_language() {
        let target = model();
        let c: Vec<String> = target.defines("Debug", Language::C).into_iter().collect();
        assert_eq!(c, vec!["C_ONLY", "TRACE", "USE_HAL"]);

        let asm: Vec<String> = target.defines("Release", Language::Asm).into_iter().collect();
        assert_eq!(asm, vec!["ASM_ONLY", "USE_HAL"]);
    }
}
