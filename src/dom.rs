use tracing::{debug, trace};

use crate::baseurl::BaseUrl;
use crate::document::DocType;
use crate::engine::{DomEngine, DomNode, ParseOptions};
use crate::error::{Error, ParseError};
use crate::nodelist::NodeList;

/// A read-only query facade over an externally parsed document tree.
///
/// The facade owns the engine and the parsed tree, delegates XPath
/// evaluation to the engine, and layers small read-only conveniences on
/// top: `find`/`find_by_*` expression building, base-URL resolution for
/// attribute values, typed value extraction. It never mutates the tree.
///
/// Concurrent access follows the engine's own contract; treat a loaded
/// document as a single-owner, read-after-parse-immutable object.
pub struct DomDocument<E: DomEngine> {
    engine: E,
    document: E::Document,
    doc_type: DocType,
    base_url: Option<BaseUrl>,
    parse_errors: Vec<ParseError>,
}

impl<E: DomEngine> DomDocument<E> {
    /// Parse source text with the engine and wrap the result for querying.
    ///
    /// The source is trimmed before parsing. Collected parse errors abort
    /// the load when `throw_errors` resolves to true (the XML default);
    /// otherwise they are kept and available through
    /// [`DomDocument::parse_errors`], and the partially-parsed tree is
    /// usable (the documented permissive HTML behavior).
    ///
    /// The base URL is taken from the options when given (and validated),
    /// else from a `<base href="..">` element in the tree, else left unset.
    pub fn load(
        engine: E,
        doc_type: DocType,
        source: &str,
        options: &ParseOptions,
    ) -> Result<Self, Error> {
        let parsed = engine.parse(doc_type, source.trim(), options)?;

        debug!(
            ?doc_type,
            errors = parsed.errors.len(),
            "loaded document source"
        );

        if options.resolve_throw_errors(doc_type) {
            if let Some(error) = parsed.errors.first() {
                return Err(error.clone().into());
            }
        }

        let mut dom = DomDocument {
            engine,
            document: parsed.document,
            doc_type,
            base_url: None,
            parse_errors: parsed.errors,
        };
        dom.detect_base_url(options)?;
        Ok(dom)
    }

    /// [`DomDocument::load`] for XML sources.
    pub fn load_xml(engine: E, source: &str, options: &ParseOptions) -> Result<Self, Error> {
        Self::load(engine, DocType::Xml, source, options)
    }

    /// [`DomDocument::load`] for HTML sources.
    pub fn load_html(engine: E, source: &str, options: &ParseOptions) -> Result<Self, Error> {
        Self::load(engine, DocType::Html, source, options)
    }

    fn detect_base_url(&mut self, options: &ParseOptions) -> Result<(), Error> {
        if let Some(url) = &options.base_url {
            self.base_url = Some(BaseUrl::parse(url)?);
        } else if self.base_url.is_none() {
            // may exist as <base href="..."> in the document
            if let Some(base) = self.find("//base[@href]", None)? {
                if let Some(href) = base.attribute("href") {
                    self.base_url = BaseUrl::parse(&href).ok();
                }
            }
        }
        Ok(())
    }

    /// The document type the source was parsed as.
    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// Parse errors collected during a permissive load.
    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    /// The document base URL, if any.
    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Set the document base URL, validating it structurally.
    pub fn set_base_url(&mut self, url: &str) -> Result<(), Error> {
        self.base_url = Some(BaseUrl::parse(url)?);
        Ok(())
    }

    /// The document node of the parsed tree, if any.
    pub fn root(&self) -> Option<E::Node> {
        self.engine.root(&self.document)
    }

    /// Run an XPath query, optionally scoped under `root`, returning all
    /// matches in document order.
    ///
    /// A blank query is [`Error::EmptyQuery`]; an expression the engine
    /// rejects is [`Error::MalformedQuery`]. No matches is an empty list,
    /// never an error.
    pub fn query(&self, query: &str, root: Option<&E::Node>) -> Result<NodeList<E::Node>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        trace!(query, scoped = root.is_some(), "evaluating query");

        let nodes = self
            .engine
            .evaluate(&self.document, query, root)
            .map_err(|e| Error::MalformedQuery {
                query: query.to_string(),
                message: e.message,
            })?;
        Ok(NodeList::new(nodes))
    }

    /// First match of an XPath expression, optionally scoped under `root`.
    pub fn find(&self, query: &str, root: Option<&E::Node>) -> Result<Option<E::Node>, Error> {
        let nodes = self.query(query, root)?;
        Ok(nodes.into_iter().next())
    }

    /// All matches of an XPath expression, optionally scoped under `root`.
    pub fn find_all(&self, query: &str, root: Option<&E::Node>) -> Result<NodeList<E::Node>, Error> {
        self.query(query, root)
    }

    /// First element with the given `id` attribute value.
    pub fn find_by_id(&self, id: &str) -> Result<Option<E::Node>, Error> {
        self.find(&format!("//*[@id='{}']", id), None)
    }

    /// First element with the given `name` attribute value.
    pub fn find_by_name(&self, name: &str) -> Result<Option<E::Node>, Error> {
        self.find(&format!("//*[@name='{}']", name), None)
    }

    /// All elements with the given tag name, optionally scoped under `root`.
    pub fn find_by_tag(&self, tag: &str, root: Option<&E::Node>) -> Result<NodeList<E::Node>, Error> {
        match root {
            // root needs (.) first in query, else the expression silently
            // re-scopes to the whole document
            None => self.find_all(&format!("//{}", tag), None),
            Some(root) => self.find_all(&format!(".//{}", tag), Some(root)),
        }
    }

    /// All elements whose `class` attribute contains the given class,
    /// optionally scoped under `root`.
    pub fn find_by_class(
        &self,
        class: &str,
        root: Option<&E::Node>,
    ) -> Result<NodeList<E::Node>, Error> {
        match root {
            // root needs (.) first in query
            None => self.find_all(&format!("//*[contains(@class, '{}')]", class), None),
            Some(root) => self.find_all(&format!(".//*[contains(@class, '{}')]", class), Some(root)),
        }
    }

    /// All elements carrying the given attribute, optionally restricted to
    /// an exact value, optionally scoped under `root`.
    pub fn find_by_attribute(
        &self,
        name: &str,
        value: Option<&str>,
        root: Option<&E::Node>,
    ) -> Result<NodeList<E::Node>, Error> {
        match value {
            None => match root {
                // root needs (.) first in query
                None => self.find_all(&format!("//*[@{}]", name), None),
                Some(root) => self.find_all(&format!(".//*[@{}]", name), Some(root)),
            },
            Some(value) => {
                let value = value.replace('"', "\\\"");
                match root {
                    // root needs (.) first in query
                    None => self.find_all(&format!("//*[@{}='{}']", name, value), None),
                    Some(root) => {
                        self.find_all(&format!(".//*[@{}='{}']", name, value), Some(root))
                    }
                }
            }
        }
    }
}
