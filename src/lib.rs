#![forbid(unsafe_code)]
//! Markdom is a small DOM/markup toolkit with two independent parts:
//!
//! * a tree-to-markup serializer: build an abstract [`Element`] tree, wrap
//!   it in a [`Document`], and render it as indented or compact XML/HTML
//!   text with strict attribute-name validation and deterministic escaping;
//! * a read-only query facade, [`DomDocument`], over a tree parsed by an
//!   external DOM implementation (abstracted as [`DomEngine`]): XPath-style
//!   find/filter, sibling/parent/child traversal, attribute access with
//!   base-URL resolution, and typed value extraction.
//!
//! The serializer is a pure function of its input: no I/O, no shared state,
//! safe to call concurrently on independent documents.
//!
//! ```rust
//! use markdom::{Document, Element, SerializeOptions};
//!
//! let mut html = Element::new("html");
//! let mut body = Element::new("body");
//! body.append_child(Element::with_content("p", "hello"));
//! html.append_child(body);
//!
//! let doc = Document::html(html);
//! let output = doc.serialize_to_string(&SerializeOptions::default())?;
//! assert_eq!(output, "<!DOCTYPE html><html><body><p>hello</p></body></html>");
//! # Ok::<(), markdom::Error>(())
//! ```

mod access;
mod baseurl;
mod document;
mod dom;
mod engine;
mod entity;
mod error;
mod name;
mod nodelist;
mod serializer;
mod value;
mod valueaccess;

pub use access::NodeAccess;
pub use baseurl::BaseUrl;
pub use document::{DocType, Document};
pub use dom::DomDocument;
pub use engine::{DomEngine, DomNode, EvaluationError, NodeKind, Parsed, ParseOptions};
pub use error::{Error, ParseError};
pub use nodelist::NodeList;
pub use serializer::SerializeOptions;
pub use value::{Attributes, Element, Value};
