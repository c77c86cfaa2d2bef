pub mod bounds;
pub mod cli;
pub mod config_file;
pub mod domain;
pub mod generator;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::{fs, time::Instant};

    use color_eyre::{eyre::Context, Result};

    use crate::bounds::{BuildModel, DirectoryScope, Generator};
    use crate::cli::{CliArgs, Command};
    use crate::config_file::{self, EwgenConfigFile};
    use crate::generator::{
        paths, project::ProjectGenerator,
        workspace::{BatchBuildPolicy, WorkspaceGenerator},
    };
    use crate::project_model::EwgenModel;
    use crate::utils::{
        self,
        constants::error_messages,
        fs::ArtifactOutcome,
        reader::{build_model, find_config_files, ConfigFile},
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI, and reports every artifact handled
    pub fn run_ewgen(cli_args: &CliArgs) -> Result<Vec<ArtifactOutcome>> {
        // A path conversion request needs no project at all
        if it_is_a_canonicalization_then_print(cli_args) {
            return Ok(Vec::new());
        }

        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args)?;
        let config_files: Vec<ConfigFile> =
            find_config_files(&abs_project_root, &cli_args.match_files)?;

        let mut outcomes = Vec::new();
        for config_file in config_files {
            let cfg_path = &config_file.path;
            log::debug!(
                "Launching an ewgen work event for the configuration file: {:?}",
                cfg_path,
            );
            let raw_file = fs::read_to_string(cfg_path)
                .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))?;

            let config: EwgenConfigFile<'_> = config_file::ewgen_cfg_from_file(raw_file.as_str())
                .with_context(|| format!("{}: {:?}", error_messages::PARSE_CFG_FILE, cfg_path))?;

            let cfg_dir = cfg_path.parent().unwrap_or(abs_project_root.as_path());
            let model: EwgenModel =
                build_model(config, cfg_dir).with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;

            create_binary_directories(&model)?;

            let policy = determine_batch_policy(cli_args, &model);
            outcomes.extend(generate_ide_files(&model, policy));
        }

        Ok(outcomes)
    }

    /// Runs the project generators over every directory of every partition of the
    /// model, and then writes the workspace of the first partition
    pub fn generate_ide_files(model: &dyn BuildModel, policy: BatchBuildPolicy) -> Vec<ArtifactOutcome> {
        let generation_ts = Instant::now();
        let partitions = model.partitions();
        let mut outcomes = Vec::new();

        for partition in &partitions {
            for scope in &partition.directories {
                outcomes.extend(ProjectGenerator::new(*scope, policy).generate());
            }
        }

        match partitions.first() {
            Some(top) => outcomes.extend(WorkspaceGenerator::new(top, policy).generate()),
            None => log::warn!("The build model has no partitions, no workspace will be generated"),
        }

        for outcome in &outcomes {
            log::info!("{:?}: {}", outcome.path, outcome.status);
        }
        log::debug!(
            "ewgen took a total of {:?} ms on generating the IDE files",
            generation_ts.elapsed().as_millis()
        );

        outcomes
    }

    /// Inspects the [`CliArgs`] main passed argument, and if it's [`Command::Canonicalize`]
    /// just prints the converted path and exits
    fn it_is_a_canonicalization_then_print(cli_args: &CliArgs) -> bool {
        if let Command::Canonicalize {
            ref binary_dir,
            ref path,
        } = cli_args.command
        {
            println!("{}", paths::canonicalize(binary_dir, path));
            return true;
        };
        false
    }

    /// The command line choice wins over the one of the config file
    fn determine_batch_policy(cli_args: &CliArgs, model: &EwgenModel) -> BatchBuildPolicy {
        let from_cli = match cli_args.command {
            Command::Generate { batch_policy } => batch_policy.map(BatchBuildPolicy::from),
            Command::Canonicalize { .. } => None,
        };
        from_cli.or(model.batch_policy).unwrap_or_default()
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the *ewgen*
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(cli_args: &CliArgs) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(Path::new)
            .unwrap_or(Path::new("."));

        utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    /// Creates the binary directory of every scope of the model, where their
    /// project files will be written
    fn create_binary_directories(model: &EwgenModel) -> Result<()> {
        for scope in &model.scopes {
            utils::fs::create_directory(Path::new(scope.binary_dir()))
                .with_context(|| error_messages::FAILURE_CREATING_BINARY_DIRS)?;
        }
        Ok(())
    }

}
