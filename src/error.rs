use thiserror::Error as ThisError;

/// The error type for markdom.
///
/// All failures are synchronous and surfaced to the immediate caller; nothing
/// is retried or recovered internally.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Document data has no root element.
    #[error("invalid document data, no root element found")]
    MissingRoot,
    /// An element in the document data has an empty tag name.
    #[error("invalid document data, no tag name found for element")]
    MissingTagName,
    /// Attribute name contains one of the disallowed characters `'`, `"`, `=`.
    #[error("invalid attribute name '{0}' (don't use these characters in name: '\"=)")]
    AttributeNameChars(String),
    /// Attribute name does not match the XML Name grammar.
    #[error("invalid attribute name '{name}' (use a name that matches with '{pattern}')")]
    AttributeNamePattern {
        /// The offending name.
        name: String,
        /// The expected name pattern.
        pattern: String,
    },
    /// A blank XPath query was supplied.
    #[error("empty query given")]
    EmptyQuery,
    /// The underlying XPath engine rejected the expression syntax.
    #[error("malformed query '{query}': {message}")]
    MalformedQuery {
        /// The rejected expression.
        query: String,
        /// The engine's rejection message.
        message: String,
    },
    /// A supplied base URL fails the structural scheme/host/path check.
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),
    /// Parse error reported by the external DOM engine.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// JSON encoding of a structured value failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// I/O error from the serialization writer.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A parse error reported by the external DOM engine.
///
/// Carries the full diagnostic the engine produced. Whether this aborts
/// [`DomDocument::load`](crate::DomDocument::load) depends on the resolved
/// `throw_errors` option: XML parsing throws by default, HTML parsing
/// collects errors silently.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("parse error: {message} (level: {level} code: {code} column: {column} file: {file} line: {line})")]
pub struct ParseError {
    /// Human-readable message.
    pub message: String,
    /// Severity level as classified by the engine.
    pub level: u32,
    /// Engine-specific numeric error code.
    pub code: u32,
    /// Column of the offending input, if known.
    pub column: u32,
    /// File the input came from, or `n/a`.
    pub file: String,
    /// Line of the offending input, if known.
    pub line: u32,
}

impl ParseError {
    /// Create a parse error with just a message; positions default to zero
    /// and the file to `n/a`.
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            level: 0,
            code: 0,
            column: 0,
            file: "n/a".to_string(),
            line: 0,
        }
    }
}
