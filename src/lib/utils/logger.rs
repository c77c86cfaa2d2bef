use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

use super::constants::EWGEN;

/// The level reached with every `-v` given on the command line
const LEVELS: [LevelFilter; 2] = [LevelFilter::Info, LevelFilter::Debug];

/// [`config_logger`] The configuration for `env_logger`. One line per generated
/// artifact is reported at the default level, while `-v` adds the details of every
/// step of the generation
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let level = LEVELS.get(usize::from(verbose_level)).copied().ok_or_else(|| {
        eyre!(
            "{EWGEN} maximum allowed verbosity level is: '-{}'",
            "v".repeat(LEVELS.len() - 1)
        )
    })?;

    Builder::from_default_env()
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis()
        .filter(None, level)
        .try_init()
        .with_context(|| format!("{EWGEN} wasn't able to set up the logger"))
}
