use std::io::Write;

use crate::document::{DocType, Document};
use crate::entity::{escape_attribute, escape_text};
use crate::error::Error;
use crate::name::validate_attribute_name;
use crate::value::Element;

/// Options controlling markup output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Emit newlines and indentation. When false, output is compact: the
    /// same token sequence with empty separators.
    pub pretty: bool,
    /// The indent unit repeated per depth level in pretty mode. Ignored in
    /// compact mode.
    pub indent: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            pretty: false,
            indent: "\t".to_string(),
        }
    }
}

impl SerializeOptions {
    /// Pretty output with a tab indent unit.
    pub fn indented() -> Self {
        SerializeOptions {
            pretty: true,
            ..Default::default()
        }
    }
}

/// Serializes a [`Document`] tree as markup text.
///
/// Recursive depth-first pre-order emission. The depth counter is passed
/// explicitly down the recursion; compact mode runs the same code path with
/// empty newline and indent strings.
pub(crate) struct Serializer<'a, W: Write> {
    document: &'a Document,
    newline: &'a str,
    indent: &'a str,
    w: &'a mut W,
}

impl<'a, W: Write> Serializer<'a, W> {
    pub(crate) fn new(document: &'a Document, options: &'a SerializeOptions, w: &'a mut W) -> Self {
        let (newline, indent) = if options.pretty {
            ("\n", options.indent.as_str())
        } else {
            ("", "")
        };
        Serializer {
            document,
            newline,
            indent,
            w,
        }
    }

    /// Emit the document preamble and the root element.
    pub(crate) fn serialize_document(&mut self) -> Result<(), Error> {
        match self.document.doc_type() {
            DocType::Html => {
                write!(self.w, "<!DOCTYPE html>{}", self.newline)?;
            }
            DocType::Xml => {
                write!(
                    self.w,
                    "<?xml version=\"{}\" encoding=\"{}\"?>{}",
                    self.document.xml_version(),
                    self.document.xml_encoding(),
                    self.newline
                )?;
            }
        }
        let root = self.document.root().ok_or(Error::MissingRoot)?;
        self.serialize_root(root)
    }

    /// The root element differs from inner nodes in how content is placed:
    /// its content always goes on its own indented line in pretty mode.
    fn serialize_root(&mut self, root: &Element) -> Result<(), Error> {
        if root.name().is_empty() {
            return Err(Error::MissingTagName);
        }
        write!(self.w, "<{}", root.name())?;
        self.serialize_attributes(root)?;

        if root.self_closing() {
            // content and children discarded
            write!(self.w, " />{}", self.newline)?;
            return Ok(());
        }
        write!(self.w, ">")?;

        let has_children = !root.children().is_empty();
        if let Some(content) = root.content() {
            if !content.is_empty_text() {
                let text = escape_text(content.to_markup_text()?);
                write!(self.w, "{}{}{}", self.newline, self.indent, text)?;
                if !has_children {
                    write!(self.w, "{}", self.newline)?;
                }
            }
        }

        if has_children {
            if self.newline.is_empty() {
                for child in root.children() {
                    self.serialize_node(child, 0)?;
                }
            } else {
                write!(self.w, "{}", self.newline)?;
                for child in root.children() {
                    write!(self.w, "{}", self.indent)?;
                    self.serialize_node(child, 1)?;
                }
            }
        }

        write!(self.w, "</{}>{}", root.name(), self.newline)?;
        Ok(())
    }

    fn serialize_node(&mut self, element: &Element, depth: usize) -> Result<(), Error> {
        if element.name().is_empty() {
            return Err(Error::MissingTagName);
        }
        write!(self.w, "<{}", element.name())?;
        self.serialize_attributes(element)?;

        if element.self_closing() {
            // content and children discarded
            write!(self.w, " />{}", self.newline)?;
            return Ok(());
        }
        write!(self.w, ">")?;

        let has_children = !element.children().is_empty();
        if let Some(content) = element.content() {
            if !content.is_empty_text() {
                let text = escape_text(content.to_markup_text()?);
                if !has_children {
                    write!(self.w, "{}", text)?;
                } else {
                    write!(self.w, "{}", self.newline)?;
                    self.write_indent(depth + 1)?;
                    write!(self.w, "{}", text)?;
                }
            }
        }

        if has_children {
            if self.newline.is_empty() {
                for child in element.children() {
                    self.serialize_node(child, depth)?;
                }
            } else {
                write!(self.w, "{}", self.newline)?;
                for child in element.children() {
                    self.write_indent(depth + 1)?;
                    self.serialize_node(child, depth + 1)?;
                }
                self.write_indent(depth)?;
            }
        }

        write!(self.w, "</{}>{}", element.name(), self.newline)?;
        Ok(())
    }

    /// Attribute fragments in insertion order: ` name="value"`.
    ///
    /// Non-scalar values are JSON-encoded first, then the double quote is
    /// escaped; the order matters, escaping before encoding would mangle the
    /// JSON quoting.
    fn serialize_attributes(&mut self, element: &Element) -> Result<(), Error> {
        for (name, value) in element.attributes() {
            validate_attribute_name(name)?;
            let text = escape_attribute(value.to_markup_text()?);
            write!(self.w, " {}=\"{}\"", name, text)?;
        }
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) -> Result<(), Error> {
        for _ in 0..depth {
            write!(self.w, "{}", self.indent)?;
        }
        Ok(())
    }
}
