//! The single point through which every option of a project file is written.
//!
//! The writer knows nothing about what the options mean, it just guarantees that
//! all of them share the same shape, and that set-valued options are always
//! written in the same order no matter how they were collected.

use std::borrow::Cow;
use std::collections::BTreeSet;

use super::xml::XmlWriter;

/// The value of a named option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionState<'a> {
    /// A name-only marker option
    Absent,
    Text(Cow<'a, str>),
    Number(i64),
    /// Repeated states, in the order given by the caller
    List(Vec<Cow<'a, str>>),
    /// Repeated states, lexicographically ordered and without duplicates
    Set(BTreeSet<Cow<'a, str>>),
}

impl<'a> OptionState<'a> {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<&'a str> for OptionState<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for OptionState<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<String> for OptionState<'a> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<i64> for OptionState<'a> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<i32> for OptionState<'a> {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl<'a> From<bool> for OptionState<'a> {
    fn from(value: bool) -> Self {
        Self::Number(i64::from(value))
    }
}

impl<'a> From<&'a [String]> for OptionState<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::list(value.iter().map(String::as_str))
    }
}

impl<'a> From<&'a Vec<String>> for OptionState<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Self::from(value.as_slice())
    }
}

impl<'a> From<&'a BTreeSet<String>> for OptionState<'a> {
    fn from(value: &'a BTreeSet<String>) -> Self {
        Self::set(value.iter().map(String::as_str))
    }
}

/// The leading fields of the `data` block of a versioned settings group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    pub version: u32,
    pub debug: bool,
}

/// Writes options and settings groups over the [`XmlWriter`] of an artifact
pub struct SettingsWriter<'w> {
    xml: &'w mut XmlWriter,
}

impl<'w> SettingsWriter<'w> {
    pub fn new(xml: &'w mut XmlWriter) -> Self {
        Self { xml }
    }

    /// Access to the underlying writer, for the groups whose data isn't made of options
    pub fn xml(&mut self) -> &mut XmlWriter {
        self.xml
    }

    pub fn option<'a, S: Into<OptionState<'a>>>(&mut self, name: &str, state: S) {
        self.emit(name, None, state.into());
    }

    /// Writes an option whose value is tagged with a schema version
    pub fn versioned<'a, S: Into<OptionState<'a>>>(&mut self, name: &str, version: u32, state: S) {
        self.emit(name, Some(version), state.into());
    }

    pub fn marker(&mut self, name: &str) {
        self.emit(name, None, OptionState::Absent);
    }

    /// Writes one `settings` group. The `data` block starts with `header` when
    /// present, and the rest of its content is written by `body`
    pub fn settings<F>(&mut self, name: &str, archive_version: u32, header: Option<DataHeader>, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.xml.start_element("settings");
        self.xml.element("name", name);
        self.xml.element("archiveVersion", archive_version);
        self.xml.start_element("data");
        if let Some(header) = header {
            self.xml.element("version", header.version);
            self.xml.element("wantNonLocal", 1);
            self.xml.element("debug", u8::from(header.debug));
        }
        body(self);
        self.xml.end_element(); // data
        self.xml.end_element(); // settings
    }

    fn emit(&mut self, name: &str, version: Option<u32>, state: OptionState<'_>) {
        self.xml.start_element("option");
        self.xml.element("name", name);
        if let Some(version) = version {
            self.xml.element("version", version);
        }
        match state {
            OptionState::Absent => {}
            OptionState::Text(text) => self.xml.element("state", text),
            OptionState::Number(number) => self.xml.element("state", number),
            OptionState::List(items) => items.iter().for_each(|s| self.xml.element("state", s)),
            OptionState::Set(items) => items.iter().for_each(|s| self.xml.element("state", s)),
        }
        self.xml.end_element(); // option
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn render<F: FnOnce(&mut SettingsWriter)>(f: F) -> String {
        let mut xml = XmlWriter::new();
        f(&mut SettingsWriter::new(&mut xml));
        xml.end_document()
    }

    #[test]
    fn test_scalar_option() {
        let out = render(|w| w.option("CCOptLevel", 1));
        assert_eq!(
            out,
            "<option>\n    <name>CCOptLevel</name>\n    <state>1</state>\n</option>\n"
        );
    }

    #[test]
    fn test_marker_option_has_no_state() {
        let out = render(|w| w.marker("OGCMSISPackSelectDevice"));
        assert_eq!(out, "<option>\n    <name>OGCMSISPackSelectDevice</name>\n</option>\n");
    }

    #[test]
    fn test_versioned_option() {
        let out = render(|w| w.versioned("CrcSize", 0, "1"));
        assert_eq!(
            out,
            "<option>\n    <name>CrcSize</name>\n    <version>0</version>\n    <state>1</state>\n</option>\n"
        );
    }

    #[test]
    fn test_list_preserves_the_given_order() {
        let includes = vec!["$PROJ_DIR$\\z".to_string(), "$PROJ_DIR$\\a".to_string()];
        let out = render(|w| w.option("CCIncludePath2", &includes));
        let z = out.find("z</state>").unwrap();
        let a = out.find("a</state>").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_set_is_sorted_whatever_the_insertion_order() {
        let forward: HashSet<&str> = ["B=2", "A=1", "C"].into_iter().collect();
        let backward: HashSet<&str> = ["C", "A=1", "B=2"].into_iter().collect();

        let first = render(|w| w.option("CCDefines", OptionState::set(forward.iter().copied())));
        let second = render(|w| w.option("CCDefines", OptionState::set(backward.iter().copied())));

        assert_eq!(first, second);
        let positions: Vec<usize> = ["A=1", "B=2", "C<"]
            .iter()
            .map(|s| first.find(s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_list_writes_no_states() {
        let out = render(|w| w.option("AUserIncludes", &Vec::<String>::new()));
        assert!(!out.contains("<state>"));
    }

    #[test]
    fn test_settings_group_header() {
        let header = DataHeader { version: 11, debug: true };
        let out = render(|w| w.settings("AARM", 2, Some(header), |w| w.option("ADebug", 1)));
        assert!(out.contains("<name>AARM</name>\n    <archiveVersion>2</archiveVersion>"));
        assert!(out.contains(
            "<version>11</version>\n        <wantNonLocal>1</wantNonLocal>\n        <debug>1</debug>"
        ));
        assert!(out.contains("<name>ADebug</name>"));
    }
}
