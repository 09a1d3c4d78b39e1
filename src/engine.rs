use thiserror::Error as ThisError;

use crate::document::DocType;
use crate::error::ParseError;

/// Classification of a node in the external parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The document node itself.
    Document,
    /// An element node.
    Element,
    /// A text node.
    Text,
    /// A comment node.
    Comment,
    /// Anything else (processing instructions, CDATA, ...).
    Other,
}

/// Read-only view of a node in an externally parsed document tree.
///
/// This is the raw pointer-chasing surface the query layer builds on:
/// kind classification, name, attributes, and parent/child/sibling links.
/// The element-filtered traversal conveniences live in
/// [`NodeAccess`](crate::NodeAccess).
pub trait DomNode: Clone {
    /// The node kind.
    fn kind(&self) -> NodeKind;

    /// The node name, for elements. [`None`] for non-element nodes.
    fn name(&self) -> Option<String>;

    /// The raw value of an attribute, or [`None`] when the attribute is
    /// absent. Implementations must not report absent attributes as empty
    /// strings.
    fn attribute(&self, name: &str) -> Option<String>;

    /// All attributes as name/value pairs, in document order. Empty for
    /// nodes without attributes.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Whether the attribute is present, regardless of its value.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The parent node, if any.
    fn parent_node(&self) -> Option<Self>;

    /// The first child node, if any.
    fn first_child(&self) -> Option<Self>;

    /// The next sibling node, if any.
    fn next_sibling(&self) -> Option<Self>;

    /// The previous sibling node, if any.
    fn previous_sibling(&self) -> Option<Self>;

    /// The concatenated text content of the node and its descendants.
    fn text(&self) -> String;
}

/// The external XPath engine rejected an expression.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct EvaluationError {
    /// The engine's rejection message.
    pub message: String,
}

impl EvaluationError {
    /// Create an evaluation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        EvaluationError {
            message: message.into(),
        }
    }
}

/// Options passed to the external parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Validate the document while parsing.
    pub validate_on_parse: bool,
    /// Keep whitespace-only text nodes.
    pub preserve_whitespace: bool,
    /// Enable the engine's strict error checking.
    pub strict_error_checking: bool,
    /// Whether collected parse errors abort the load. [`None`] resolves per
    /// document type: XML throws, HTML is permissive.
    pub throw_errors: Option<bool>,
    /// Base URL for resolving relative attribute values, validated during
    /// load.
    pub base_url: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            validate_on_parse: false,
            preserve_whitespace: false,
            strict_error_checking: false,
            throw_errors: None,
            base_url: None,
        }
    }
}

impl ParseOptions {
    pub(crate) fn resolve_throw_errors(&self, doc_type: DocType) -> bool {
        // HTML is more quiet.
        self.throw_errors.unwrap_or(doc_type == DocType::Xml)
    }
}

/// The outcome of a parse: a usable tree plus any errors the engine
/// collected along the way.
///
/// Permissive engines (HTML parsers in particular) produce a
/// partially-parsed but usable tree together with diagnostics; this models
/// that as a value instead of forcing an all-or-nothing `Result`.
#[derive(Debug, Clone)]
pub struct Parsed<D> {
    /// The parsed document tree.
    pub document: D,
    /// Errors collected during the parse, in input order.
    pub errors: Vec<ParseError>,
}

/// An external DOM implementation: parse source text into a tree and run
/// XPath queries over it.
///
/// The query facade treats this as a black box; it never constructs or
/// mutates nodes, only reads them through [`DomNode`] and forwards XPath
/// strings through [`DomEngine::evaluate`].
pub trait DomEngine {
    /// The node handle type of the engine's tree.
    type Node: DomNode;
    /// The parsed document type of the engine.
    type Document;

    /// Parse source text into a document tree.
    ///
    /// A hard failure (no usable tree at all) is an `Err`; recoverable
    /// problems go into [`Parsed::errors`].
    fn parse(
        &self,
        doc_type: DocType,
        source: &str,
        options: &ParseOptions,
    ) -> Result<Parsed<Self::Document>, ParseError>;

    /// Evaluate an XPath expression, optionally relative to a context node,
    /// returning the matching nodes in document order.
    fn evaluate(
        &self,
        document: &Self::Document,
        query: &str,
        context: Option<&Self::Node>,
    ) -> Result<Vec<Self::Node>, EvaluationError>;

    /// The document node of a parsed tree, if the tree is non-empty.
    fn root(&self, document: &Self::Document) -> Option<Self::Node>;
}
