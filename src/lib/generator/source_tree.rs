//! The grouped view of the source files of a project.
//!
//! Source files are grouped by the directories they live in, so files sharing a
//! leafname can co-exist in the same project. These groups are also what the user
//! navigates in the IDE, so the common root shared by every file is removed before
//! the groups are written.

use std::collections::{BTreeMap, BTreeSet};

use super::xml::XmlWriter;

const SEPARATOR: char = '/';

/// A directory of the grouping tree. Children and files are kept sorted, which
/// makes the written groups independent of the order of the sources on the model
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub children: BTreeMap<String, DirectoryNode>,
    pub files: BTreeSet<String>,
}

impl DirectoryNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builds the tree for the given raw paths. Every component but the last one
    /// becomes a directory node, while the file itself is stored in the form
    /// returned by `display`
    pub fn build<I, S, F>(paths: I, display: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let mut root = Self::default();
        for path in paths {
            let path = path.as_ref();
            root.insert(path, display(path));
        }
        root
    }

    fn insert(&mut self, raw_path: &str, display: String) {
        let mut node = self;
        if let Some((dirs, _leaf)) = raw_path.rsplit_once(SEPARATOR) {
            for component in dirs.split(SEPARATOR) {
                node = node
                    .children
                    .entry(component.to_string())
                    .or_insert_with(|| DirectoryNode::named(component));
            }
        }
        node.files.insert(display);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.files.is_empty()
    }

    fn write_contents(&self, xml: &mut XmlWriter) {
        for child in self.children.values() {
            child.write_group(xml);
        }
        for file in &self.files {
            xml.start_element("file");
            xml.element("name", file);
            xml.end_element(); // file
        }
    }

    fn write_group(&self, xml: &mut XmlWriter) {
        xml.start_element("group");
        xml.element("name", &self.name);
        self.write_contents(xml);
        xml.end_element(); // group
    }
}

/// A [`DirectoryNode`] tree whose chain of single directory levels at the top has
/// already been collapsed
#[derive(Debug, PartialEq, Eq)]
pub struct SourceTree {
    top: DirectoryNode,
    collapsed: bool,
}

impl SourceTree {
    /// Descends from `root` while the current level has exactly one child directory
    /// and no files of its own, discarding the levels that it walks through
    pub fn new(root: DirectoryNode) -> Self {
        let mut top = root;
        let mut collapsed = false;
        while top.files.is_empty() && top.children.len() == 1 {
            let Some((_, child)) = top.children.pop_first() else {
                break;
            };
            top = child;
            collapsed = true;
        }
        Self { top, collapsed }
    }

    pub fn top(&self) -> &DirectoryNode {
        &self.top
    }

    /// Writes the groups in depth first pre-order: for every level, its child
    /// directories sorted by name, and then its files sorted.
    ///
    /// The collapsed common prefix is written as a single group named after its
    /// last directory, while the synthetic root never opens a group
    pub fn write(&self, xml: &mut XmlWriter) {
        if self.collapsed {
            self.top.write_group(xml);
        } else {
            self.top.write_contents(xml);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::tags_are_balanced;

    fn render(paths: &[&str]) -> String {
        let tree = SourceTree::new(DirectoryNode::build(paths, str::to_string));
        let mut xml = XmlWriter::new();
        tree.write(&mut xml);
        xml.end_document()
    }

    #[test]
    fn test_common_prefix_collapses_into_one_group() {
        let out = render(&["a/b/c/x.c", "a/b/c/y.c"]);
        assert_eq!(
            out,
            "<group>\n    <name>c</name>\n    \
            <file>\n        <name>a/b/c/x.c</name>\n    </file>\n    \
            <file>\n        <name>a/b/c/y.c</name>\n    </file>\n</group>\n"
        );
        assert_eq!(out.matches("<group>").count(), 1);
    }

    #[test]
    fn test_node_with_files_and_subdirectories_is_not_collapsed() {
        let tree = SourceTree::new(DirectoryNode::build(["a/x.c", "a/b/y.c"], str::to_string));
        assert_eq!(tree.top().name, "a");
        assert_eq!(tree.top().children.len(), 1);
        assert!(tree.top().files.contains("a/x.c"));

        let out = render(&["a/x.c", "a/b/y.c"]);
        let group_b = out.find("<name>b</name>").unwrap();
        let file_y = out.find("<name>a/b/y.c</name>").unwrap();
        let file_x = out.find("<name>a/x.c</name>").unwrap();
        assert!(group_b < file_y && file_y < file_x);
        assert_eq!(out.matches("<group>").count(), 2);
    }

    #[test]
    fn test_files_at_the_root_prevent_any_grouping_of_the_root() {
        let out = render(&["x.c", "src/y.c"]);
        assert!(out.starts_with("<group>\n    <name>src</name>"));
        assert!(out.ends_with("<file>\n    <name>x.c</name>\n</file>\n"));
    }

    #[test]
    fn test_groups_and_files_are_sorted() {
        let first = render(&["r/zeta/1.c", "r/alpha/2.c", "r/b.c", "r/a.c"]);
        let second = render(&["r/a.c", "r/b.c", "r/alpha/2.c", "r/zeta/1.c"]);
        assert_eq!(first, second);

        let alpha = first.find("<name>alpha</name>").unwrap();
        let zeta = first.find("<name>zeta</name>").unwrap();
        let a = first.find("<name>r/a.c</name>").unwrap();
        let b = first.find("<name>r/b.c</name>").unwrap();
        assert!(alpha < zeta && zeta < a && a < b);
    }

    #[test]
    fn test_display_form_is_stored_instead_of_the_leafname() {
        let root = DirectoryNode::build(["C:/fw/src/main.c"], |p| p.replace('/', "\\"));
        let tree = SourceTree::new(root);
        assert_eq!(tree.top().name, "src");
        assert!(tree.top().files.contains("C:\\fw\\src\\main.c"));
    }

    #[test]
    fn test_no_sources_writes_nothing() {
        assert_eq!(render(&[]), "\n");
    }

    #[test]
    fn test_deep_trees_are_well_formed() {
        let out = render(&["p/a/b/c/1.c", "p/a/b/2.c", "p/a/d/3.c", "p/e/4.c", "p/5.c"]);
        assert!(tags_are_balanced(&out));
        assert_eq!(out.matches("<group>").count(), out.matches("</group>").count());
    }
}
