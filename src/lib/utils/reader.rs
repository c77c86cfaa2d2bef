use std::path::{Path, PathBuf};

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use indexmap::IndexMap;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config_file::{
        target::{ConfigurationAttribute, TargetAttribute},
        EwgenConfigFile,
    },
    domain::target::BuildTarget,
    project_model::{
        scope::ScopeModel,
        sourceset::{self, resolve_sources},
        target::{ConfigurationModel, TargetModel},
        EwgenModel,
    },
    utils::constants::{error_messages, CONFIG_FILE_EXT, CONFIG_FILE_NAME},
};

const DEFAULT_BINARY_DIR: &str = "build";

/// Details about a found configuration file on the project
///
/// This is just a configuration file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub dir_entry: DirEntry,
    pub path: PathBuf,
}

/// Checks for the existence of the `ewgen<any>.toml` configuration files
/// present in the project root or in its direct subdirectories, and
/// returns a collection of the ones found.
///
/// *base_path* - The root of the user's project. Defaults to `.`
///
/// *filename_match* - When present, only the files whose name contains it are kept
///
/// This function fails if there's no configuration file
/// (or isn't present in any directory of the project)
pub fn find_config_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ConfigFile>> {
    log::debug!("Searching for the configuration files...");
    let mut files = vec![];

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };
        let file_match = filename_match.as_deref().unwrap_or(filename);
        if e.file_type().is_file()
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(&format!(".{CONFIG_FILE_EXT}"))
            && filename.contains(file_match)
        {
            files.push(ConfigFile {
                path: e.path().to_path_buf(),
                dir_entry: e,
            })
        }
    }

    if files.is_empty() {
        Err(eyre!(error_messages::NO_CFG_FILES_FOUND))
    } else {
        Ok(files)
    }
}

/// Assembles the [`EwgenModel`] of a config file. Relative paths are resolved
/// against `cfg_dir`, the directory where the config file lives
pub fn build_model(config: EwgenConfigFile<'_>, cfg_dir: &Path) -> Result<EwgenModel> {
    let cfg_dir = sourceset::normalize(&cfg_dir.to_string_lossy().replace('\\', "/"));
    let project = &config.project;

    let source_dir = project
        .source_dir
        .as_deref()
        .map(|dir| sourceset::resolve(&cfg_dir, dir))
        .unwrap_or_else(|| cfg_dir.clone());
    let binary_dir = match project.binary_dir.as_deref() {
        Some(dir) => sourceset::resolve(&cfg_dir, dir),
        None => sourceset::resolve(&source_dir, DEFAULT_BINARY_DIR),
    };

    let configurations: Vec<String> = project
        .configurations
        .iter()
        .map(|c| c.to_string())
        .collect();
    let variables: IndexMap<String, String> = config
        .variables
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let root = ScopeModel {
        source_dir: source_dir.clone(),
        binary_dir: binary_dir.clone(),
        configurations,
        variables,
        ..Default::default()
    };

    // The root directory always comes first. The rest keep their declaration order
    let mut scopes: IndexMap<String, ScopeModel> = IndexMap::new();
    scopes.insert(String::new(), root.clone());

    for (name, target) in &config.targets {
        let directory = target
            .directory
            .as_deref()
            .map(|dir| dir.trim_matches('/'))
            .unwrap_or_default();

        let scope = scopes.entry(directory.to_string()).or_insert_with(|| ScopeModel {
            source_dir: sourceset::resolve(&source_dir, directory),
            binary_dir: sourceset::resolve(&binary_dir, directory),
            ..root.clone()
        });

        let model = assemble_target_model(target, &scope.source_dir)
            .with_context(|| format!("{}: {name}", error_messages::PROJECT_MODEL_MAPPING))?;
        log::debug!(
            "Target {name} mapped with {} sources on {}",
            model.sources.len(),
            scope.source_dir
        );

        scope
            .targets
            .push(BuildTarget::new(*name, target.kind.unwrap_or_default()));
        scope.target_data.insert(name.to_string(), model);
    }

    Ok(EwgenModel {
        name: project.name.to_string(),
        batch_policy: config.workspace.as_ref().and_then(|ws| ws.batch_policy),
        scopes: scopes.into_values().collect(),
    })
}

fn assemble_target_model(config: &TargetAttribute<'_>, base: &str) -> Result<TargetModel> {
    let configurations = config
        .configurations
        .iter()
        .map(|(name, cfg)| Ok((name.to_string(), assemble_configuration_model(cfg, base)?)))
        .collect::<Result<IndexMap<_, _>>>()?;

    Ok(TargetModel {
        sources: resolve_sources(base, config.sources.iter().map(AsRef::as_ref))?,
        defines: owned(&config.defines),
        c_defines: owned(&config.c_defines),
        asm_defines: owned(&config.asm_defines),
        include_dirs: resolve_all(base, &config.include_dirs),
        configurations,
    })
}

fn assemble_configuration_model(
    config: &ConfigurationAttribute<'_>,
    base: &str,
) -> Result<ConfigurationModel> {
    Ok(ConfigurationModel {
        defines: owned(&config.defines),
        include_dirs: resolve_all(base, &config.include_dirs),
        sources: resolve_sources(base, config.sources.iter().map(AsRef::as_ref))?,
    })
}

fn owned<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}

fn resolve_all<S: AsRef<str>>(base: &str, paths: &[S]) -> Vec<String> {
    paths
        .iter()
        .map(|p| sourceset::resolve(base, p.as_ref()))
        .collect()
}

#[cfg(test)]
mod test {
    use crate::bounds::{BuildModel, DirectoryScope};
    use crate::config_file;
    use crate::domain::target::{Language, TargetKind};
    use crate::generator::workspace::BatchBuildPolicy;

    use super::*;

    const CONFIG_FILE_MOCK: &str = r#"
        [project]
        name = 'firmware'
        configurations = ['Debug', 'Release']
        source_dir = 'C:/work/fw'
        binary_dir = 'C:/work/fw/out'

        [workspace]
        batch_policy = 'minimal'

        [variables]
        CMAKE_IAR_CHIP_SELECT = 'ST STM32F407VG'

        [targets.hal]
        kind = 'static_library'
        directory = 'hal/'
        sources = [ 'gpio.c' ]
        include_dirs = [ 'inc', '../common/inc' ]

        [targets.app]
        sources = [ 'src/main.c' ]
        defines = [ 'USE_HAL' ]
        asm_defines = [ 'ASM' ]

        [targets.app.configurations.Debug]
        defines = [ 'TRACE' ]
        sources = [ 'src/trace.c' ]

        [targets.boot]
        kind = 'exe'
        directory = 'hal'
        sources = [ 'boot.c' ]
    "#;

    #[test]
    fn test_model_with_full_config() -> Result<()> {
        let config = config_file::ewgen_cfg_from_file(CONFIG_FILE_MOCK)?;
        let model = build_model(config, Path::new("/unused"))?;

        assert_eq!(model.name, "firmware");
        assert_eq!(model.batch_policy, Some(BatchBuildPolicy::Minimal));
        assert_eq!(model.scopes.len(), 2);

        let root = &model.scopes[0];
        assert_eq!(root.source_dir, "C:/work/fw");
        assert_eq!(root.binary_dir, "C:/work/fw/out");
        assert_eq!(root.targets, vec![BuildTarget::new("app", TargetKind::Executable)]);

        let app = &root.targets[0];
        assert_eq!(
            root.sources(app, "Debug"),
            vec!["C:/work/fw/src/main.c", "C:/work/fw/src/trace.c"]
        );
        assert_eq!(root.sources(app, "Release"), vec!["C:/work/fw/src/main.c"]);
        let asm: Vec<String> = root.defines(app, "Release", Language::Asm).into_iter().collect();
        assert_eq!(asm, vec!["ASM", "USE_HAL"]);

        let hal = &model.scopes[1];
        assert_eq!(hal.source_dir, "C:/work/fw/hal");
        assert_eq!(hal.binary_dir, "C:/work/fw/out/hal");
        assert_eq!(
            hal.targets,
            vec![
                BuildTarget::new("hal", TargetKind::StaticLibrary),
                BuildTarget::new("boot", TargetKind::Executable)
            ]
        );
        assert_eq!(
            hal.include_dirs(&hal.targets[0], "Debug", Language::C),
            vec!["C:/work/fw/hal/inc", "C:/work/fw/common/inc"]
        );
        assert_eq!(hal.variable("CMAKE_IAR_CHIP_SELECT"), Some("ST STM32F407VG"));
        assert_eq!(hal.configurations(true), vec!["Debug", "Release"]);

        let partitions = model.partitions();
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].name, "firmware");
        assert_eq!(partitions[0].directories[0].binary_dir(), "C:/work/fw/out");
        Ok(())
    }

    #[test]
    fn test_model_with_minimal_config() -> Result<()> {
        let config = config_file::ewgen_cfg_from_file("[project]\nname = 'fw'\n")?;
        let model = build_model(config, Path::new("/home/dev/fw"))?;

        assert_eq!(model.batch_policy, None);
        assert_eq!(model.scopes.len(), 1);
        assert_eq!(model.scopes[0].source_dir, "/home/dev/fw");
        assert_eq!(model.scopes[0].binary_dir, "/home/dev/fw/build");
        assert_eq!(model.scopes[0].configurations(true), vec![""]);
        Ok(())
    }

    #[test]
    fn test_relative_project_directories() -> Result<()> {
        let config = config_file::ewgen_cfg_from_file(
            "[project]\nname = 'fw'\nsource_dir = 'firmware'\nbinary_dir = '../ide'\n",
        )?;
        let model = build_model(config, Path::new("/home/dev/repo"))?;

        assert_eq!(model.scopes[0].source_dir, "/home/dev/repo/firmware");
        assert_eq!(model.scopes[0].binary_dir, "/home/dev/ide");
        Ok(())
    }

    #[test]
    fn test_find_config_files() -> Result<()> {
        let temp = tempfile::tempdir()?;
        std::fs::write(temp.path().join("ewgen.toml"), "")?;
        std::fs::write(temp.path().join("ewgen_release.toml"), "")?;
        std::fs::write(temp.path().join("other.toml"), "")?;

        let all = find_config_files(temp.path(), &None)?;
        assert_eq!(all.len(), 2);

        let filtered = find_config_files(temp.path(), &Some("release".to_string()))?;
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].path.ends_with("ewgen_release.toml"));

        let empty = tempfile::tempdir()?;
        assert!(find_config_files(empty.path(), &None).is_err());
        Ok(())
    }
}
