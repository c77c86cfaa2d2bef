//! The configuration invariant knobs of a project file, gathered once per target
//! out of the named variables of its directory scope.

use crate::bounds::DirectoryScope;
use crate::utils::constants::{defaults, runtime_lib, variables};
use crate::utils::text;

use super::paths::canonicalize;

/// The runtime library linked by the target, as selected on the general options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeLibrary {
    pub mode: i64,
    pub config_path: String,
    pub description: &'static str,
}

impl RuntimeLibrary {
    fn select(mode: i64, custom_config_path: Option<&str>) -> Self {
        let (config_path, description) = match mode {
            0 => (String::new(), runtime_lib::NONE_DESCRIPTION),
            1 => (
                runtime_lib::NORMAL_CONFIG_PATH.to_string(),
                runtime_lib::NORMAL_DESCRIPTION,
            ),
            2 => (
                runtime_lib::FULL_CONFIG_PATH.to_string(),
                runtime_lib::FULL_DESCRIPTION,
            ),
            3 => (
                custom_config_path.unwrap_or_default().to_string(),
                runtime_lib::CUSTOM_DESCRIPTION,
            ),
            other => {
                log::warn!("Unknown runtime library mode {other}, writing it with no description");
                (String::new(), "")
            }
        };

        Self {
            mode,
            config_path,
            description,
        }
    }
}

/// The assembler diagnostics to suppress. A value holding a `-` is a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmDiagSuppress {
    None,
    One(String),
    Range(String, String),
}

impl AsmDiagSuppress {
    fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::None,
            Some(value) => match value.split_once('-') {
                Some((from, to)) => Self::Range(from.to_string(), to.to_string()),
                None => Self::One(value.to_string()),
            },
        }
    }

    /// The `AWarnWhat` selector: 0 for none, 1 for a single warning, 2 for a range
    pub fn selector(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Range(..) => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVariables {
    pub runtime: RuntimeLibrary,
    /// `<chip><tab><vendor><space><chip>`, or empty when no chip was selected
    pub chip_select: String,
    pub c_diag_suppress: String,
    pub asm_diag_suppress: AsmDiagSuppress,
    pub custom_extensions: String,
    pub custom_cmdline: String,
    pub custom_build_sequence: String,
    pub custom_outputs: Vec<String>,
    pub custom_inputs: Vec<String>,
    pub ilink_keep_symbols: String,
    /// The unevaluated linker configuration file expression
    pub ilink_icf_file: Option<String>,
    pub ilink_program_entry_label: String,
    pub do_fill: String,
    pub filler_byte: String,
    pub filler_start: String,
    pub filler_end: String,
    pub crc_size: String,
    pub crc_initial_value: String,
    pub do_crc: String,
    pub ilink_crc_use_as_input: String,
    pub crc_algorithm: String,
}

impl ProjectVariables {
    pub fn gather(scope: &dyn DirectoryScope) -> Self {
        let knob = |name: &str| lookup(scope, name);
        let knob_or = |name: &str, default: &str| knob(name).unwrap_or(default).to_string();
        let plain = |name: &str| knob_or(name, "");
        let files = |name: &str| -> Vec<String> {
            text::split(knob(name).unwrap_or_default(), ' ')
                .into_iter()
                .map(|token| canonicalize(scope.binary_dir(), token))
                .collect()
        };

        let mode = knob(variables::RUNTIME_LIB_SELECT)
            .map(|raw| {
                raw.trim().parse::<i64>().unwrap_or_else(|_| {
                    log::warn!(
                        "{} holds a non numeric value: {raw:?}. Using the default mode",
                        variables::RUNTIME_LIB_SELECT
                    );
                    defaults::RUNTIME_LIB_SELECT
                })
            })
            .unwrap_or(defaults::RUNTIME_LIB_SELECT);

        Self {
            runtime: RuntimeLibrary::select(mode, knob(variables::RUNTIME_CONFIG_PATH)),
            chip_select: knob(variables::CHIP_SELECT)
                .map(expand_chip_select)
                .unwrap_or_default(),
            c_diag_suppress: plain(variables::C_DIAG_SUPPRESS),
            asm_diag_suppress: AsmDiagSuppress::parse(knob(variables::ASM_DIAG_SUPPRESS)),
            custom_extensions: plain(variables::CUSTOM_EXTENSIONS),
            // Any element of the custom command line may be a filespec
            custom_cmdline: text::join(files(variables::CUSTOM_CMDLINE), ' '),
            custom_build_sequence: knob_or(
                variables::CUSTOM_BUILD_SEQUENCE,
                defaults::CUSTOM_BUILD_SEQUENCE,
            ),
            custom_outputs: files(variables::CUSTOM_OUTPUTS),
            custom_inputs: files(variables::CUSTOM_INPUTS),
            ilink_keep_symbols: plain(variables::ILINK_KEEP_SYMBOLS),
            ilink_icf_file: knob(variables::ILINK_ICF_FILE).map(str::to_string),
            ilink_program_entry_label: plain(variables::ILINK_PROGRAM_ENTRY_LABEL),
            do_fill: knob_or(variables::DO_FILL, defaults::DO_FILL),
            filler_byte: knob_or(variables::FILLER_BYTE, defaults::FILLER_BYTE),
            filler_start: knob_or(variables::FILLER_START, defaults::FILLER_START),
            filler_end: knob_or(variables::FILLER_END, defaults::FILLER_END),
            crc_size: knob_or(variables::CRC_SIZE, defaults::CRC_SIZE),
            crc_initial_value: knob_or(variables::CRC_INITIAL_VALUE, defaults::CRC_INITIAL_VALUE),
            do_crc: knob_or(variables::DO_CRC, defaults::DO_CRC),
            ilink_crc_use_as_input: knob_or(
                variables::ILINK_CRC_USE_AS_INPUT,
                defaults::ILINK_CRC_USE_AS_INPUT,
            ),
            crc_algorithm: knob_or(variables::CRC_ALGORITHM, defaults::CRC_ALGORITHM),
        }
    }
}

/// An empty variable is the same as an unset one
fn lookup<'s>(scope: &'s dyn DirectoryScope, name: &str) -> Option<&'s str> {
    scope.variable(name).filter(|value| !value.is_empty())
}

/// The variable only holds `<vendor><space><chip>`, while the IDE refers to a chip
/// as `<chip><tab><vendor><space><chip>`. The chip is the trailing run of non
/// whitespace characters
fn expand_chip_select(value: &str) -> String {
    let chip = value.rsplit(char::is_whitespace).next().unwrap_or_default();
    format!("{chip}\t{value}")
}
