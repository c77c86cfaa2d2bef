//! The fixed schema settings groups written for every configuration of a project.
//!
//! Option names, versions and literals must match byte by byte what the IDE
//! expects to read, so they are kept here exactly as the IDE itself saves them.

use std::collections::BTreeSet;

use crate::utils::constants::{defaults, macros, DEBUG_CONFIGURATION};

use super::settings::{DataHeader, SettingsWriter};
use super::variables::{AsmDiagSuppress, ProjectVariables};

const PRODUCT_VERSION: &str = "9.20.4.46976";
const FORMATTER_DESCRIPTION: &str = "Automatic choice of formatter, without multibyte support.";

/// Everything that the settings groups of one configuration of a target depend on
#[derive(Debug)]
pub struct ConfigurationSettings<'a> {
    pub config: &'a str,
    pub target: &'a str,
    pub vars: &'a ProjectVariables,
    pub c_defines: BTreeSet<String>,
    pub c_includes: Vec<String>,
    pub asm_defines: BTreeSet<String>,
    pub asm_includes: Vec<String>,
    /// The evaluated and canonicalized linker configuration file, if one was set
    pub icf_file: Option<String>,
}

impl<'a> ConfigurationSettings<'a> {
    /// The factory settings selected when the configuration was created on the IDE
    pub fn is_debug(&self) -> bool {
        self.config == DEBUG_CONFIGURATION
    }

    fn header(&self, version: u32) -> Option<DataHeader> {
        Some(DataHeader {
            version,
            debug: self.is_debug(),
        })
    }
}

/// Writes the settings groups, in the order that the IDE saves them
pub fn write_settings(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    general(w, cfg);
    compiler(w, cfg);
    assembler(w, cfg);
    object_copy(w, cfg);
    custom_build(w, cfg);
    build_actions(w);
    linker(w, cfg);
    archiver(w, cfg);
}

fn general(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    let config = cfg.config;
    let vars = cfg.vars;
    w.settings("General", 3, cfg.header(34), |w| {
        w.option("ExePath", format!("{config}\\Exe"));
        w.option("ObjPath", format!("{config}\\Obj"));
        w.option("ListPath", format!("{config}\\List"));
        w.option("BrowseInfoPath", format!("{config}\\BrowseInfo"));
        w.option("GEndianMode", 0);
        w.option("Input description", FORMATTER_DESCRIPTION);
        w.option("Output description", FORMATTER_DESCRIPTION);
        w.option("GOutputBinary", 0);
        w.option("OGCoreOrChip", !vars.chip_select.is_empty());
        w.versioned("GRuntimeLibSelect", 0, vars.runtime.mode);
        w.versioned("GRuntimeLibSelectSlave", 0, vars.runtime.mode);
        w.option("RTDescription", vars.runtime.description);
        w.option("OGProductVersion", PRODUCT_VERSION);
        w.option("OGLastSavedByProductVersion", PRODUCT_VERSION);
        w.option("OGChipSelectEditMenu", &vars.chip_select);
        w.option("GenLowLevelInterface", 1);
        w.option("GEndianModeBE", 1);
        w.option("OGBufferedTerminalOutput", 0);
        w.option("GenStdoutInterface", 0);
        w.option("RTConfigPath2", &vars.runtime.config_path);
        w.versioned("GBECoreSlave", 31, 35);
        w.option("OGUseCmsis", 0);
        w.option("OGUseCmsisDspLib", 0);
        w.option("GRuntimeLibThreads", 0);
        w.versioned("CoreVariant", 31, 35);
        w.option("GFPUDeviceSlave", &vars.chip_select);
        w.versioned("FPU2", 0, 0);
        w.versioned("NrRegs", 0, 0);
        w.option("NEON", 0);
        w.versioned("GFPUCoreSlave2", 31, 35);
        w.marker("OGCMSISPackSelectDevice");
        w.option("OgLibHeap", 0);
        w.option("OGLibAdditionalLocale", 0);
        w.versioned("OGPrintfVariant", 0, 0);
        w.option("OGPrintfMultibyteSupport", 0);
        w.versioned("OGScanfVariant", 0, 0);
        w.option("OGScanfMultibyteSupport", 0);
        w.option("GenLocaleTags", "");
        w.option("GenLocaleDisplayOnly", "");
        w.option("DSPExtension", "0");
        w.option("TrustZone", 0);
        w.versioned("TrustZoneModes", 0, 0);
        w.option("OGAarch64Abi", 0);
        w.option("OG_32_64Device", 0);
        w.option("BuildFilesPath", format!("{config}\\"));
    });
}

fn compiler(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    let output_file = format!("{}.o", macros::FILE_BNAME);
    w.settings("ICCARM", 2, cfg.header(37), |w| {
        w.option("CCDefines", &cfg.c_defines);
        w.option("CCPreprocFile", 0);
        w.option("CCPreprocComments", 0);
        w.option("CCPreprocLine", 1);
        w.option("CCListCFile", 0);
        w.option("CCListCMnemonics", 0);
        w.option("CCListCMessages", 0);
        w.option("CCListAssFile", 0);
        w.option("CCListAssSource", 0);
        w.option("CCEnableRemarks", 0);
        w.option("CCDiagSuppress", &cfg.vars.c_diag_suppress);
        w.option("CCDiagRemark", "");
        w.option("CCDiagWarning", "");
        w.option("CCDiagError", "");
        w.option("CCObjPrefix", 1);
        w.versioned("CCAllowList", 1, "00000000");
        w.option("CCDebugInfo", 1);
        w.option("IEndianMode", 1);
        w.option("IProcessor", 1);
        w.option("IExtraOptionsCheck", 0);
        w.option("IExtraOptions", "");
        w.option("CCLangConformance", 0);
        w.option("CCSignedPlainChar", 1);
        w.option("CCRequirePrototypes", 0);
        w.option("CCDiagWarnAreErr", 0);
        w.option("CCCompilerRuntimeInfo", 0);
        w.option("IFpuProcessor", 1);
        w.option("OutputFile", output_file.as_str());
        w.option("CCLibConfigHeader", 1);
        w.option("PreInclude", "");
        w.option("CCIncludePath2", &cfg.c_includes);
        w.option("CCStdIncCheck", 0);
        w.option("CCCodeSection", ".text");
        w.option("IProcessorMode2", 1);
        w.option("CCOptLevel", 1);
        w.versioned("CCOptStrategy", 0, 0);
        w.option("CCOptLevelSlave", 1);
        w.option("CCPosIndRopi", 0);
        w.option("CCPosIndRwpi", 0);
        w.option("CCPosIndNoDynInit", 0);
        w.option("IccLang", 2);
        w.option("IccCDialect", 1);
        w.option("IccAllowVLA", 0);
        w.option("IccStaticDestr", 1);
        w.option("IccCppInlineSemantics", 0);
        w.option("IccCmsis", 1);
        w.option("IccFloatSemantics", 0);
        w.option("CCOptimizationNoSizeConstraints", 0);
        w.option("CCNoLiteralPool", 0);
        w.versioned("CCOptStrategySlave", 0, 0);
        w.option("CCGuardCalls", 1);
        w.option("CCEncSource", 0);
        w.option("CCEncOutput", 0);
        w.option("CCEncOutputBom", 1);
        w.option("CCEncInput", 0);
        w.option("IccExceptions2", 0);
        w.option("IccRTTI2", 0);
        w.option("OICompilerExtraOption", 1);
        w.option("CCStackProtection", 0);
    });
}

fn assembler(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    let diag = &cfg.vars.asm_diag_suppress;
    let (one, range_from, range_to) = match diag {
        AsmDiagSuppress::None => ("", "", ""),
        AsmDiagSuppress::One(one) => (one.as_str(), "", ""),
        AsmDiagSuppress::Range(from, to) => ("", from.as_str(), to.as_str()),
    };
    let output_file = format!("{}.o", macros::FILE_BNAME);

    w.settings("AARM", 2, cfg.header(11), |w| {
        w.option("AObjPrefix", 1);
        w.option("AEndian", 1);
        w.option("ACaseSensitivity", 1);
        w.versioned("MacroChars", 0, 0);
        w.option("AWarnEnable", *diag != AsmDiagSuppress::None);
        w.option("AWarnWhat", diag.selector());
        w.option("AWarnOne", one);
        w.option("AWarnRange1", range_from);
        w.option("AWarnRange2", range_to);
        w.option("ADebug", 1);
        w.option("AltRegisterNames", 0);
        w.option("ADefines", &cfg.asm_defines);
        w.option("AList", 0);
        w.option("AListHeader", 1);
        w.option("AListing", 1);
        w.option("Includes", 0);
        w.option("MacDefs", 0);
        w.option("MacExps", 1);
        w.option("MacExec", 0);
        w.option("OnlyAssed", 0);
        w.option("MultiLine", 0);
        w.option("PageLengthCheck", 0);
        w.option("PageLength", 80);
        w.option("TabSpacing", 8);
        w.option("AXRef", 0);
        w.option("AXRefDefines", 0);
        w.option("AXRefInternal", 0);
        w.option("AXRefDual", 0);
        w.option("AProcessor", 1);
        w.option("AFpuProcessor", 1);
        w.option("AOutputFile", output_file.as_str());
        w.option("ALimitErrorsCheck", 0);
        w.option("ALimitErrorsEdit", 100);
        w.option("AIgnoreStdInclude", 0);
        w.option("AUserIncludes", &cfg.asm_includes);
        w.option("AExtraOptionsCheckV2", 0);
        w.option("AExtraOptionsV2", "");
        w.option("AsmNoLiteralPool", 0);
        w.option("PreInclude", "");
    });
}

fn object_copy(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    w.settings("OBJCOPY", 0, cfg.header(1), |w| {
        w.versioned("OOCOutputFormat", 3, 0);
        w.option("OCOutputOverride", 0);
        w.option("OOCOutputFile", format!("{}.srec", cfg.target));
        w.option("OOCCommandLineProducer", 1);
        w.option("OOCObjCopyEnable", 0);
    });
}

fn custom_build(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    let vars = cfg.vars;
    w.settings("CUSTOM", 3, None, |w| {
        let xml = w.xml();
        xml.element("extensions", &vars.custom_extensions);
        xml.element("cmdline", &vars.custom_cmdline);
        xml.element("hasPrio", 1);
        xml.element("buildSequence", &vars.custom_build_sequence);
        for (group, files) in [("outputs", &vars.custom_outputs), ("inputs", &vars.custom_inputs)] {
            if files.is_empty() {
                continue;
            }
            xml.start_element(group);
            for file in files {
                xml.start_element("file");
                xml.element("name", file);
                xml.end_element(); // file
            }
            xml.end_element(); // group
        }
    });
}

fn build_actions(w: &mut SettingsWriter) {
    w.settings("BUILDACTION", 1, None, |w| {
        let xml = w.xml();
        xml.element("prebuild", "");
        xml.element("postbuild", "");
    });
}

fn linker(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    let vars = cfg.vars;
    let target = cfg.target;
    w.settings("ILINK", 0, cfg.header(26), |w| {
        w.option("IlinkLibIOConfig", 1);
        w.option("IlinkInputFileSlave", 0);
        w.option("IlinkOutputFile", format!("{target}.out"));
        w.option("IlinkDebugInfoEnable", 1);
        w.option("IlinkKeepSymbols", &vars.ilink_keep_symbols);
        w.option("IlinkRawBinaryFile", "");
        w.option("IlinkRawBinarySymbol", "");
        w.option("IlinkRawBinarySegment", "");
        w.option("IlinkRawBinaryAlign", "");
        w.option("IlinkDefines", "");
        w.option("IlinkConfigDefines", "");
        w.option("IlinkMapFile", 1);
        w.option("IlinkLogFile", 0);
        w.option("IlinkLogInitialization", 0);
        w.option("IlinkLogModule", 0);
        w.option("IlinkLogSection", 0);
        w.option("IlinkLogVeneer", 0);
        w.option("IlinkIcfOverride", cfg.icf_file.is_some());
        w.option(
            "IlinkIcfFile",
            cfg.icf_file.as_deref().unwrap_or(defaults::ICF_FILE),
        );
        w.option("IlinkIcfFileSlave", "");
        w.option("IlinkEnableRemarks", 0);
        w.option("IlinkSuppressDiags", "");
        w.option("IlinkTreatAsRem", "");
        w.option("IlinkTreatAsWarn", "");
        w.option("IlinkTreatAsErr", "");
        w.option("IlinkWarningsAreErrors", 0);
        w.option("IlinkUseExtraOptions", 0);
        w.option("IlinkExtraOptions", "");
        w.option("IlinkLowLevelInterfaceSlave", 1);
        w.option("IlinkAutoLibEnable", 1);
        w.option("IlinkAdditionalLibs", "");
        w.option(
            "IlinkOverrideProgramEntryLabel",
            !vars.ilink_program_entry_label.is_empty(),
        );
        w.option("IlinkProgramEntryLabelSelect", 0);
        w.option("IlinkProgramEntryLabel", &vars.ilink_program_entry_label);
        w.option("DoFill", &vars.do_fill);
        w.option("FillerByte", &vars.filler_byte);
        w.option("FillerStart", &vars.filler_start);
        w.option("FillerEnd", &vars.filler_end);
        w.versioned("CrcSize", 0, &vars.crc_size);
        w.option("CrcAlign", 1);
        w.option("CrcPoly", "0x11021");
        w.versioned("CrcCompl", 0, 0);
        w.versioned("CrcBitOrder", 0, 0);
        w.option("CrcInitialValue", &vars.crc_initial_value);
        w.option("DoCrc", &vars.do_crc);
        w.option("IlinkBE8Slave", 1);
        w.option("IlinkBufferedTerminalOutput", 1);
        w.option("IlinkStdoutInterfaceSlave", 1);
        w.option("CrcFullSize", 0);
        w.option("IlinkIElfToolPostProcess", 0);
        w.option("IlinkLogAutoLibSelect", 0);
        w.option("IlinkLogRedirSymbols", 0);
        w.option("IlinkLogUnusedFragments", 0);
        w.option("IlinkCrcReverseByteOrder", 0);
        w.option("IlinkCrcUseAsInput", &vars.ilink_crc_use_as_input);
        w.option("IlinkOptInline", "0");
        w.option("IlinkOptExceptionsAllow", 1);
        w.option("IlinkOptExceptionsForce", 0);
        w.option("IlinkCmsis", 1);
        w.option("IlinkOptMergeDuplSections", 0);
        w.option("IlinkOptUseVfe", 1);
        w.option("IlinkOptForceVfe", 0);
        w.option("IlinkStackAnalysisEnable", 0);
        w.option("IlinkStackControlFile", "");
        w.option("IlinkStackCallGraphFile", "");
        w.versioned("CrcAlgorithm", 1, &vars.crc_algorithm);
        w.versioned("CrcUnitSize", 0, 0);
        w.option("IlinkThreadsSlave", 1);
        w.option("IlinkLogCallGraph", 0);
        w.option("IlinkIcfFile_AltDefault", "");
        w.option("IlinkEncInput", 0);
        w.option("IlinkEncOutput", 0);
        w.option("IlinkEncOutputBom", 1);
        w.option("IlinkHeapSelect", 1);
        w.option("IlinkLocaleSelect", 1);
        w.option(
            "IlinkTrustzoneImportLibraryOut",
            format!("{target}_import_lib.o"),
        );
        w.option("OILinkExtraOption", 1);
        w.option("IlinkRawBinaryFile2", "");
        w.option("IlinkRawBinarySymbol2", "");
        w.option("IlinkRawBinarySegment2", "");
        w.option("IlinkRawBinaryAlign2", "");
        w.option("IlinkLogCrtRoutineSelection", 0);
        w.option("IlinkLogFragmentInfo", 0);
        w.option("IlinkLogInlining", 0);
        w.option("IlinkLogMerging", 0);
        w.option("IlinkDemangle", 0);
        w.option("IlinkWrapperFileEnable", 0);
        w.option("IlinkWrapperFile", "");
    });
}

fn archiver(w: &mut SettingsWriter, cfg: &ConfigurationSettings) {
    w.settings("IARCHIVE", 0, cfg.header(0), |w| {
        w.option("IarchiveInputs", "");
        w.option("IarchiveOverride", 0);
        w.option("IarchiveOutput", "###Unitialized###");
    });
}
