//! Constant value definitions to use across the whole program

pub const EWGEN: &str = "ewgen";

pub const CONFIG_FILE_NAME: &str = "ewgen";
pub const CONFIG_FILE_EXT: &str = "toml";

pub const PROJECT_FILE_EXT: &str = "ewp";
pub const WORKSPACE_FILE_EXT: &str = "eww";

/// The name of the configuration that the IDE treats as its debug factory settings
pub const DEBUG_CONFIGURATION: &str = "Debug";

/// Symbolic placeholders embedded in the generated paths, resolved by the IDE at load time
pub mod macros {
    pub const PROJ_DIR: &str = "$PROJ_DIR$";
    pub const WS_DIR: &str = "$WS_DIR$";
    pub const FILE_BNAME: &str = "$FILE_BNAME$";
}

/// Tokens understood by the linker configuration file template evaluator
pub mod template {
    pub const CONFIG: &str = "$<CONFIG>";
    pub const TARGET_NAME: &str = "$<TARGET_NAME>";
}

/// The names of the variables looked up on the build model
pub mod variables {
    pub const RUNTIME_LIB_SELECT: &str = "CMAKE_IAR_RUNTIME_LIB_SELECT";
    pub const RUNTIME_CONFIG_PATH: &str = "CMAKE_IAR_RUNTIME_CONFIG_PATH";
    pub const CHIP_SELECT: &str = "CMAKE_IAR_CHIP_SELECT";
    pub const C_DIAG_SUPPRESS: &str = "CMAKE_IAR_C_DIAG_SUPPRESS";
    pub const ASM_DIAG_SUPPRESS: &str = "CMAKE_IAR_ASM_DIAG_SUPPRESS";
    pub const CUSTOM_EXTENSIONS: &str = "CMAKE_IAR_CUSTOM_EXTENSIONS";
    pub const CUSTOM_CMDLINE: &str = "CMAKE_IAR_CUSTOM_CMDLINE";
    pub const CUSTOM_BUILD_SEQUENCE: &str = "CMAKE_IAR_CUSTOM_BUILD_SEQUENCE";
    pub const CUSTOM_OUTPUTS: &str = "CMAKE_IAR_CUSTOM_OUTPUTS";
    pub const CUSTOM_INPUTS: &str = "CMAKE_IAR_CUSTOM_INPUTS";
    pub const ILINK_KEEP_SYMBOLS: &str = "CMAKE_IAR_ILINK_KEEP_SYMBOLS";
    pub const ILINK_ICF_FILE: &str = "CMAKE_IAR_ILINK_ICF_FILE";
    pub const ILINK_PROGRAM_ENTRY_LABEL: &str = "CMAKE_IAR_ILINK_PROGRAM_ENTRY_LABEL";
    pub const DO_FILL: &str = "CMAKE_IAR_DO_FILL";
    pub const FILLER_BYTE: &str = "CMAKE_IAR_FILLER_BYTE";
    pub const FILLER_START: &str = "CMAKE_IAR_FILLER_START";
    pub const FILLER_END: &str = "CMAKE_IAR_FILLER_END";
    pub const CRC_SIZE: &str = "CMAKE_IAR_CRC_SIZE";
    pub const CRC_INITIAL_VALUE: &str = "CMAKE_IAR_CRC_INITIAL_VALUE";
    pub const DO_CRC: &str = "CMAKE_IAR_DO_CRC";
    pub const ILINK_CRC_USE_AS_INPUT: &str = "CMAKE_IAR_ILINK_CRC_USE_AS_INPUT";
    pub const CRC_ALGORITHM: &str = "CMAKE_IAR_CRC_ALGORITHM";

    /// `CMAKE_<LANG>_FLAGS_<CONFIG>`, with the configuration upper cased
    pub fn flags_for(lang: &str, config: &str) -> String {
        format!("CMAKE_{lang}_FLAGS_{}", config.to_uppercase())
    }
}

/// The literals used when a variable isn't set on the build model
pub mod defaults {
    pub const RUNTIME_LIB_SELECT: i64 = 1;
    pub const CUSTOM_BUILD_SEQUENCE: &str = "inputOutputBased";
    pub const ICF_FILE: &str = "lnk0t.icf";
    pub const DO_FILL: &str = "0";
    pub const FILLER_BYTE: &str = "0xFF";
    pub const FILLER_START: &str = "0x0";
    pub const FILLER_END: &str = "0x0";
    pub const CRC_SIZE: &str = "1";
    pub const CRC_INITIAL_VALUE: &str = "0x0";
    pub const DO_CRC: &str = "0";
    pub const ILINK_CRC_USE_AS_INPUT: &str = "1";
    pub const CRC_ALGORITHM: &str = "1";
}

/// The runtime library header paths and descriptions for every selectable mode
pub mod runtime_lib {
    pub const NORMAL_CONFIG_PATH: &str = "$TOOLKIT_DIR$\\inc\\c\\DLib_Config_Normal.h";
    pub const FULL_CONFIG_PATH: &str = "$TOOLKIT_DIR$\\inc\\c\\DLib_Config_Full.h";

    pub const NONE_DESCRIPTION: &str = "Do not link with a runtime library.";
    pub const NORMAL_DESCRIPTION: &str = "Use the normal configuration of the C/C++ runtime \
        library. No locale interface, C locale, no file descriptor support, no multibytes in \
        printf and scanf, and no hex floats in strtod.";
    pub const FULL_DESCRIPTION: &str = "Use the full configuration of the C/C++ runtime \
        library. Full locale interface, C locale, file descriptor support, multibytes in \
        printf and scanf, and hex floats in strtod.";
    pub const CUSTOM_DESCRIPTION: &str = "Use a customized C/C++ runtime library.";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const NO_CFG_FILES_FOUND: &str = "No configuration files found for the project";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_RESOLVING_SOURCES: &str = "Error resolving the declared source files";
    pub const FAILURE_CREATING_BINARY_DIRS: &str = "Error creating the binary directories";
}
