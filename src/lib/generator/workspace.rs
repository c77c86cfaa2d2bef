//! Generation of the workspace file of a partition of the build model

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bounds::{DirectoryScope, Generator, Partition};
use crate::domain::target::{BuildTarget, TargetKind};
use crate::utils::constants::{macros::WS_DIR, PROJECT_FILE_EXT, WORKSPACE_FILE_EXT};
use crate::utils::fs::ArtifactOutcome;

use super::xml::XmlWriter;

/// Which targets are referenced by a workspace, and how they are batched together
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchBuildPolicy {
    /// Executables and static libraries get a project, and every configuration gets
    /// a batch definition building the libraries before the executables
    #[default]
    #[serde(alias = "segregated")]
    Segregated,
    /// Only executables get a project, and no batch definitions are written
    #[serde(alias = "minimal")]
    Minimal,
}

impl BatchBuildPolicy {
    pub fn emits(&self, kind: TargetKind) -> bool {
        match self {
            BatchBuildPolicy::Segregated => {
                matches!(kind, TargetKind::Executable | TargetKind::StaticLibrary)
            }
            BatchBuildPolicy::Minimal => kind == TargetKind::Executable,
        }
    }
}

/// The members of the batch definition of one configuration
#[derive(Debug, Default)]
struct Batch<'a> {
    libraries: Vec<&'a str>,
    executables: Vec<&'a str>,
}

impl<'a> Batch<'a> {
    fn push(&mut self, target: &'a BuildTarget) {
        match target.kind {
            TargetKind::StaticLibrary => self.libraries.push(&target.name),
            TargetKind::Executable => self.executables.push(&target.name),
            TargetKind::Other => {}
        }
    }

    fn members(&self) -> impl Iterator<Item = &&'a str> {
        self.libraries.iter().chain(self.executables.iter())
    }
}

/// Writes the workspace file of a partition, referencing the project files of
/// every emitted target of all its directories
pub struct WorkspaceGenerator<'a> {
    partition: &'a Partition<'a>,
    policy: BatchBuildPolicy,
}

impl<'a> WorkspaceGenerator<'a> {
    pub fn new(partition: &'a Partition<'a>, policy: BatchBuildPolicy) -> Self {
        Self { partition, policy }
    }

    fn top(&self) -> Option<&'a dyn DirectoryScope> {
        self.partition.directories.first().copied()
    }

    /// `<top binary dir>/<partition name>.eww`
    pub fn workspace_path(&self) -> Option<PathBuf> {
        self.top().map(|top| {
            PathBuf::from(top.binary_dir())
                .join(format!("{}.{WORKSPACE_FILE_EXT}", self.partition.name))
        })
    }

    fn emitted(&self) -> impl Iterator<Item = (&'a dyn DirectoryScope, &'a BuildTarget)> + '_ {
        self.partition.directories.iter().flat_map(move |scope| {
            scope
                .targets()
                .iter()
                .filter(move |target| self.policy.emits(target.kind))
                .map(move |target| (*scope, target))
        })
    }

    /// The reference to the project file of `target`, relative to the workspace
    pub fn project_reference(&self, scope: &dyn DirectoryScope, target: &BuildTarget) -> String {
        let top_binary_dir = self.top().map(|top| top.binary_dir()).unwrap_or_default();
        let file = format!("{}.{PROJECT_FILE_EXT}", target.name);

        let relative = scope
            .binary_dir()
            .strip_prefix(top_binary_dir)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'));

        match relative {
            Some(relative) => format!("{WS_DIR}{}\\{file}", relative.replace('/', "\\")),
            None => {
                log::warn!(
                    "{} lives outside of the workspace directory, referencing it by its absolute path",
                    scope.binary_dir()
                );
                format!("{}\\{file}", scope.binary_dir().replace('/', "\\"))
            }
        }
    }

    /// The batch definitions, following the declared order of the configurations
    fn batches(&self) -> IndexMap<String, Batch<'a>> {
        let mut batches: IndexMap<String, Batch<'a>> = IndexMap::new();
        for (scope, target) in self.emitted() {
            for config in scope.configurations(true) {
                batches.entry(config).or_default().push(target);
            }
        }
        batches
    }

    pub fn render(&self) -> String {
        let mut xml = XmlWriter::new();
        xml.start_document();
        xml.start_element("workspace");

        for (scope, target) in self.emitted() {
            xml.start_element("project");
            xml.element("path", self.project_reference(scope, target));
            xml.end_element(); // project
        }

        xml.start_element("batchBuild");
        if self.policy == BatchBuildPolicy::Segregated {
            for (config, batch) in self.batches() {
                xml.start_element("batchDefinition");
                xml.element("name", format!("All - {config}"));
                for member in batch.members() {
                    xml.start_element("member");
                    xml.element("project", member);
                    xml.element("configuration", &config);
                    xml.end_element(); // member
                }
                xml.end_element(); // batchDefinition
            }
        }
        xml.end_element(); // batchBuild

        xml.end_element(); // workspace
        xml.end_document()
    }
}

impl Generator for WorkspaceGenerator<'_> {
    fn generate(&self) -> Vec<ArtifactOutcome> {
        let Some(path) = self.workspace_path() else {
            log::warn!(
                "The partition {} has no directories, no workspace will be generated",
                self.partition.name
            );
            return Vec::new();
        };

        log::debug!("Generating the workspace file for {}", self.partition.name);
        vec![super::persist(path, &self.render())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::{tags_are_balanced, MockScope};

    fn scopes() -> Vec<MockScope> {
        vec![
            MockScope::new("C:/fw", "C:/fw/build", &["Debug", "Release"])
                .with_target("app", TargetKind::Executable, &[])
                .with_target("docs", TargetKind::Other, &[]),
            MockScope::new("C:/fw/lib", "C:/fw/build/lib", &["Debug", "Release"])
                .with_target("L", TargetKind::StaticLibrary, &[])
                .with_target("E", TargetKind::Executable, &[]),
        ]
    }

    fn partition(scopes: &[MockScope]) -> Partition<'_> {
        Partition {
            name: "firmware",
            directories: scopes.iter().map(|s| s as &dyn DirectoryScope).collect(),
        }
    }

    #[test]
    fn test_policies() {
        assert!(BatchBuildPolicy::Segregated.emits(TargetKind::StaticLibrary));
        assert!(BatchBuildPolicy::Segregated.emits(TargetKind::Executable));
        assert!(!BatchBuildPolicy::Segregated.emits(TargetKind::Other));
        assert!(!BatchBuildPolicy::Minimal.emits(TargetKind::StaticLibrary));
        assert!(BatchBuildPolicy::Minimal.emits(TargetKind::Executable));
        assert_eq!(BatchBuildPolicy::default(), BatchBuildPolicy::Segregated);
    }

    #[test]
    fn test_segregated_workspace() {
        let scopes = scopes();
        let partition = partition(&scopes);
        let out = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Segregated).render();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<workspace>
    <project>
        <path>$WS_DIR$\app.ewp</path>
    </project>
    <project>
        <path>$WS_DIR$\lib\L.ewp</path>
    </project>
    <project>
        <path>$WS_DIR$\lib\E.ewp</path>
    </project>
    <batchBuild>
        <batchDefinition>
            <name>All - Debug</name>
            <member>
                <project>L</project>
                <configuration>Debug</configuration>
            </member>
            <member>
                <project>app</project>
                <configuration>Debug</configuration>
            </member>
            <member>
                <project>E</project>
                <configuration>Debug</configuration>
            </member>
        </batchDefinition>
        <batchDefinition>
            <name>All - Release</name>
            <member>
                <project>L</project>
                <configuration>Release</configuration>
            </member>
            <member>
                <project>app</project>
                <configuration>Release</configuration>
            </member>
            <member>
                <project>E</project>
                <configuration>Release</configuration>
            </member>
        </batchDefinition>
    </batchBuild>
</workspace>
"#;
        assert_eq!(out, expected);
        assert!(tags_are_balanced(&out));
    }

    #[test]
    fn test_minimal_workspace() {
        let scopes = scopes();
        let partition = partition(&scopes);
        let out = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Minimal).render();

        assert!(out.contains("<path>$WS_DIR$\\app.ewp</path>"));
        assert!(out.contains("<path>$WS_DIR$\\lib\\E.ewp</path>"));
        assert!(!out.contains("L.ewp"));
        assert!(out.contains("    <batchBuild/>\n"));
        assert!(!out.contains("batchDefinition"));
    }

    #[test]
    fn test_batches_follow_the_declared_configuration_order() {
        let scopes = vec![MockScope::new("C:/fw", "C:/fw/build", &["Release", "Debug", "MinSize"])
            .with_target("app", TargetKind::Executable, &[])];
        let partition = partition(&scopes);
        let out = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Segregated).render();

        let release = out.find("All - Release").unwrap();
        let debug = out.find("All - Debug").unwrap();
        let min_size = out.find("All - MinSize").unwrap();
        assert!(release < debug && debug < min_size);
    }

    #[test]
    fn test_workspace_path() {
        let scopes = scopes();
        let partition = partition(&scopes);
        let generator = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Segregated);
        assert_eq!(
            generator.workspace_path(),
            Some(PathBuf::from("C:/fw/build").join("firmware.eww"))
        );

        let empty = Partition {
            name: "empty",
            directories: vec![],
        };
        let generator = WorkspaceGenerator::new(&empty, BatchBuildPolicy::Segregated);
        assert_eq!(generator.workspace_path(), None);
        assert!(generator.generate().is_empty());
    }

    #[test]
    fn test_project_reference_outside_of_the_workspace() {
        let scopes = scopes();
        let partition = partition(&scopes);
        let generator = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Segregated);
        let outsider = MockScope::new("D:/ext", "D:/ext/build", &["Debug"]);
        let target = BuildTarget::new("ext", TargetKind::Executable);

        assert_eq!(
            generator.project_reference(&outsider, &target),
            "D:\\ext\\build\\ext.ewp"
        );
    }

    #[test]
    fn test_project_reference_of_a_sibling_sharing_a_name_prefix() {
        let scopes = scopes();
        let partition = partition(&scopes);
        let generator = WorkspaceGenerator::new(&partition, BatchBuildPolicy::Segregated);
        let sibling = MockScope::new("C:/fw", "C:/fw/build2", &["Debug"]);
        let target = BuildTarget::new("boot", TargetKind::Executable);

        assert_eq!(
            generator.project_reference(&sibling, &target),
            "C:\\fw\\build2\\boot.ewp"
        );
    }
}
