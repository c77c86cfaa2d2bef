//! A streaming writer for the XML dialect of the IDE files, built over the
//! indenting [`quick_xml::Writer`].
//!
//! Every element starts on its own line, indented by four spaces per nesting
//! level. Elements holding only text are written inline, and elements without any
//! content are self closed.

use std::fmt::Display;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const INDENT_SIZE: usize = 4;

/// Owns the output buffer of one generated artifact while it's being built
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
    open_elements: Vec<&'static str>,
    /// The innermost element, while it's still unknown whether it has any content
    pending_start: Option<&'static str>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE),
            open_elements: Vec::new(),
            pending_start: None,
        }
    }

    pub fn start_document(&mut self) {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)));
    }

    /// Closes any element left open and returns the finished document
    pub fn end_document(mut self) -> String {
        while !self.open_elements.is_empty() {
            self.end_element();
        }
        let mut document = String::from_utf8_lossy(&self.writer.into_inner()).into_owned();
        document.push('\n');
        document
    }

    pub fn start_element(&mut self, name: &'static str) {
        self.flush_start();
        self.open_elements.push(name);
        self.pending_start = Some(name);
    }

    pub fn end_element(&mut self) {
        let Some(name) = self.open_elements.pop() else {
            log::warn!("Discarding the closing of an element that was never opened");
            return;
        };

        match self.pending_start.take() {
            Some(empty) => self.emit(Event::Empty(BytesStart::new(empty))),
            None => self.emit(Event::End(BytesEnd::new(name))),
        }
    }

    /// Writes the textual representation of `value` as the content of the
    /// innermost open element. Only `&`, `<` and `>` are escaped, quotes are kept
    /// as they are
    pub fn content<T: Display>(&mut self, value: T) {
        self.flush_start();
        let text = value.to_string();
        self.emit(Event::Text(BytesText::from_escaped(partial_escape(&text))));
    }

    /// Shorthand for an element that only holds text
    pub fn element<T: Display>(&mut self, name: &'static str, value: T) {
        self.start_element(name);
        self.content(value);
        self.end_element();
    }

    fn flush_start(&mut self) {
        if let Some(name) = self.pending_start.take() {
            self.emit(Event::Start(BytesStart::new(name)));
        }
    }

    /// Writing into memory can't fail, but a failure would only ever cost the
    /// event that caused it
    fn emit(&mut self, event: Event<'_>) {
        if let Err(err) = self.writer.write_event(event) {
            log::warn!("Discarding an XML event that couldn't be written: {err}");
        }
    }
}
