use std::io;

use crate::error::Error;
use crate::serializer::{SerializeOptions, Serializer};
use crate::value::Element;

/// The markup dialect of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    /// XML; output starts with an `<?xml version=".." encoding=".."?>`
    /// declaration. Parse errors are fatal by default.
    Xml,
    /// HTML; output starts with `<!DOCTYPE html>`. Parse errors are
    /// collected silently by default.
    Html,
}

/// An abstract document to be serialized to markup.
///
/// A document is a transient, caller-constructed value: build the
/// [`Element`] tree, wrap it in a document, serialize. It holds no parsed
/// state and performs no I/O of its own.
///
/// ```rust
/// use markdom::{Document, Element, SerializeOptions};
///
/// let doc = Document::xml(Element::with_content("greeting", "hello"));
/// assert_eq!(
///     doc.serialize_to_string(&SerializeOptions::default()).unwrap(),
///     r#"<?xml version="1.0" encoding="utf-8"?><greeting>hello</greeting>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    doc_type: DocType,
    root: Option<Element>,
    xml_version: String,
    xml_encoding: String,
}

impl Document {
    /// Default XML version in the declaration.
    pub const XML_VERSION: &'static str = "1.0";
    /// Default XML encoding in the declaration.
    pub const XML_ENCODING: &'static str = "utf-8";

    /// Create an empty document of the given type, without a root element.
    ///
    /// Serializing a rootless document fails with [`Error::MissingRoot`].
    pub fn new(doc_type: DocType) -> Self {
        Document {
            doc_type,
            root: None,
            xml_version: Self::XML_VERSION.to_string(),
            xml_encoding: Self::XML_ENCODING.to_string(),
        }
    }

    /// Create an XML document with the given root element.
    pub fn xml(root: Element) -> Self {
        let mut document = Document::new(DocType::Xml);
        document.root = Some(root);
        document
    }

    /// Create an HTML document with the given root element.
    pub fn html(root: Element) -> Self {
        let mut document = Document::new(DocType::Html);
        document.root = Some(root);
        document
    }

    /// The document type.
    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// The root element, if any.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Set the root element.
    pub fn set_root(&mut self, root: Element) {
        self.root = Some(root);
    }

    /// The XML version emitted in the declaration.
    pub fn xml_version(&self) -> &str {
        &self.xml_version
    }

    /// Set the XML version emitted in the declaration.
    pub fn set_xml_version(&mut self, version: impl Into<String>) {
        self.xml_version = version.into();
    }

    /// The XML encoding emitted in the declaration.
    pub fn xml_encoding(&self) -> &str {
        &self.xml_encoding
    }

    /// Set the XML encoding emitted in the declaration.
    pub fn set_xml_encoding(&mut self, encoding: impl Into<String>) {
        self.xml_encoding = encoding.into();
    }

    /// Serialize the document as markup to a writer.
    ///
    /// Fails with [`Error::MissingRoot`] when the document has no root
    /// element, [`Error::MissingTagName`] when any element has an empty tag
    /// name, and the attribute name errors when an attribute key violates
    /// the Name grammar. Failure is fast: no attempt is made to complete
    /// partial output.
    pub fn serialize(&self, w: &mut impl io::Write, options: &SerializeOptions) -> Result<(), Error> {
        let mut serializer = Serializer::new(self, options, w);
        serializer.serialize_document()
    }

    /// Serialize the document as a markup string.
    pub fn serialize_to_string(&self, options: &SerializeOptions) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize(&mut buf, options)?;
        Ok(String::from_utf8(buf).expect("serializer wrote invalid utf-8"))
    }
}
