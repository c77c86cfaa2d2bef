use clap::{Parser, Subcommand, ValueEnum};

use crate::generator::workspace::BatchBuildPolicy;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use ewgen::cli::{BatchPolicy, CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "generate"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Generate { batch_policy: None });
///
/// let parser = CliArgs::parse_from(["", "--root", "fw", "generate", "--batch-policy", "minimal"]);
/// assert_eq!(parser.root.as_deref(), Some("fw"));
/// assert_eq!(parser.command, Command::Generate { batch_policy: Some(BatchPolicy::Minimal) });
///
/// let parser = CliArgs::parse_from(["", "canonicalize", "C:/fw/build", "C:/fw/src/main.c"]);
/// assert_eq!(
///     parser.command,
///     Command::Canonicalize { binary_dir: "C:/fw/build".into(), path: "C:/fw/src/main.c".into() }
/// );
/// ```
#[derive(Parser, Debug)]
#[command(name = "ewgen")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.1")]
#[command(
    about = "ewgen generates IAR Embedded Workbench for Arm workspaces and projects",
    long_about = "ewgen reads the ewgen*.toml build descriptions of a project and writes \
        the .eww workspace and the .ewp project files that the IAR IDE loads"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "ewgen maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "Allows the user to specify the project's root directory"
    )]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Only the configuration files whose name contains this value are processed"
    )]
    pub match_files: Option<String>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Writes the workspace and the project files of every configuration file found
    Generate {
        #[arg(long, value_enum, help = "Overrides the batch policy of the configuration files")]
        batch_policy: Option<BatchPolicy>,
    },
    /// Prints how a path is referenced from a project file living on `binary_dir`
    Canonicalize { binary_dir: String, path: String },
}

/// [`BatchPolicy`] The batch build policies available as a command line argument
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BatchPolicy {
    Segregated,
    Minimal,
}

impl From<BatchPolicy> for BatchBuildPolicy {
    fn from(value: BatchPolicy) -> Self {
        match value {
            BatchPolicy::Segregated => BatchBuildPolicy::Segregated,
            BatchPolicy::Minimal => BatchBuildPolicy::Minimal,
        }
    }
}
