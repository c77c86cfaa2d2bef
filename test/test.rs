use std::fs;
use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use ewgen::cli::CliArgs;
use ewgen::utils::fs::{ArtifactOutcome, WriteStatus};
use tempfile::tempdir;

const CONFIG_FILE: &str = r#"
[project]
name = 'firmware'
configurations = ['Debug', 'Release']

[variables]
CMAKE_IAR_CHIP_SELECT = 'ST STM32F407VG'
CMAKE_IAR_ILINK_ICF_FILE = 'config/$<CONFIG>.icf'
CMAKE_C_FLAGS_DEBUG = '-DTRACE -O0'

[targets.app]
sources = [ 'src/*.c', 'startup.s' ]
defines = [ 'USE_HAL' ]
include_dirs = [ 'inc' ]

[targets.hal]
kind = 'static_library'
directory = 'hal'
sources = [ 'gpio.c' ]
"#;

fn create_project(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("src"))?;
    fs::create_dir_all(root.join("hal"))?;
    fs::write(root.join("src").join("main.c"), "int main(void) { return 0; }\n")?;
    fs::write(root.join("src").join("clock.c"), "")?;
    fs::write(root.join("startup.s"), "")?;
    fs::write(root.join("hal").join("gpio.c"), "")?;
    fs::write(root.join("ewgen.toml"), CONFIG_FILE)?;
    Ok(())
}

fn generate(root: &Path, extra: &[&str]) -> Result<Vec<ArtifactOutcome>> {
    let root = root.to_string_lossy();
    let mut args = vec!["", "--root", &*root, "generate"];
    args.extend_from_slice(extra);
    ewgen::worker::run_ewgen(&CliArgs::parse_from(args))
}

#[test]
fn test_full_program_generation() -> Result<()> {
    let temp = tempdir()?;
    create_project(temp.path())?;

    let outcomes = generate(temp.path(), &[])?;
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.status == WriteStatus::Written));

    let build = temp.path().join("build");
    let app = fs::read_to_string(build.join("app.ewp"))?;
    let hal = fs::read_to_string(build.join("hal").join("hal.ewp"))?;
    let workspace = fs::read_to_string(build.join("firmware.eww"))?;

    for document in [&app, &hal, &workspace] {
        assert!(roxmltree::Document::parse(document).is_ok());
    }

    let project = roxmltree::Document::parse(&app)?;
    let configurations: Vec<&str> = project
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("configuration"))
        .filter_map(|n| n.children().find(|c| c.has_tag_name("name")))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(configurations, vec!["Debug", "Release"]);

    assert!(app.contains("<state>TRACE</state>"));
    assert!(app.contains("<state>USE_HAL</state>"));
    assert!(app.contains("<state>$PROJ_DIR$\\..\\inc</state>"));
    assert!(app.contains("<name>$PROJ_DIR$\\..\\src\\main.c</name>"));
    assert!(app.contains("<name>$PROJ_DIR$\\..\\startup.s</name>"));
    assert!(app.contains("$PROJ_DIR$\\..\\config\\Debug.icf"));
    assert!(app.contains("STM32F407VG\tST STM32F407VG"));

    assert!(workspace.contains("<path>$WS_DIR$\\app.ewp</path>"));
    assert!(workspace.contains("<path>$WS_DIR$\\hal\\hal.ewp</path>"));
    assert!(workspace.contains("<name>All - Debug</name>"));
    assert!(workspace.contains("<name>All - Release</name>"));

    Ok(temp.close()?)
}

#[test]
fn test_regeneration_leaves_untouched_files() -> Result<()> {
    let temp = tempdir()?;
    create_project(temp.path())?;

    generate(temp.path(), &[])?;
    let outcomes = generate(temp.path(), &[])?;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.status == WriteStatus::Unchanged));

    Ok(temp.close()?)
}

#[test]
fn test_minimal_batch_policy_from_cli() -> Result<()> {
    let temp = tempdir()?;
    create_project(temp.path())?;

    let outcomes = generate(temp.path(), &["--batch-policy", "minimal"])?;
    assert_eq!(outcomes.len(), 2);

    let build = temp.path().join("build");
    assert!(build.join("app.ewp").is_file());
    assert!(!build.join("hal").join("hal.ewp").exists());

    let workspace = fs::read_to_string(build.join("firmware.eww"))?;
    assert!(!workspace.contains("hal.ewp"));
    assert!(workspace.contains("<batchBuild/>"));

    Ok(temp.close()?)
}

#[test]
fn test_missing_config_files() -> Result<()> {
    let temp = tempdir()?;
    assert!(generate(temp.path(), &[]).is_err());
    Ok(temp.close()?)
}

#[test]
fn test_canonicalize_command() -> Result<()> {
    let outcomes = ewgen::worker::run_ewgen(&CliArgs::parse_from([
        "",
        "canonicalize",
        "C:/fw/build",
        "C:/fw/src/main.c",
    ]))?;
    assert!(outcomes.is_empty());
    Ok(())
}
