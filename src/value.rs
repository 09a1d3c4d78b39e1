use std::borrow::Cow;

use indexmap::IndexMap;

use crate::error::Error;

/// A map of attribute name to value, in insertion order.
pub type Attributes = IndexMap<String, Value>;

/// A content or attribute value.
///
/// Scalars are emitted as their textual form; the [`Value::Structured`]
/// variant holds any JSON-serializable composite, which is JSON-encoded
/// before escaping.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text.
    String(String),
    /// Integer number.
    Int(i64),
    /// Floating point number. Whole floats keep their zero fraction in
    /// output, so `1.0` renders as `1.0`, not `1`.
    Float(f64),
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// Null, JSON-encoded to `null` in output.
    Null,
    /// A composite value, JSON-encoded in output. Forward slashes are not
    /// escaped, so embedded JSON fragments round-trip.
    Structured(serde_json::Value),
}

impl Value {
    /// A `Some(Value::String(""))` content emits nothing between tags, just
    /// like absent content.
    pub(crate) fn is_empty_text(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// The textual form used in markup output, before escaping.
    pub(crate) fn to_markup_text(&self) -> Result<Cow<'_, str>, Error> {
        match self {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Int(i) => Ok(Cow::Owned(i.to_string())),
            Value::Float(f) => Ok(Cow::Owned(serde_json::to_string(f)?)),
            Value::Bool(b) => Ok(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Null => Ok(Cow::Borrowed("null")),
            Value::Structured(v) => Ok(Cow::Owned(serde_json::to_string(v)?)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Structured(v)
    }
}

/// An element in the abstract document tree consumed by the serializer.
///
/// An element has a tag name, optional text content, attributes in insertion
/// order, child elements, and a self-closing flag. A self-closing element is
/// rendered as `<name ... />` and its content and children are discarded,
/// even when present.
///
/// ```rust
/// use markdom::Element;
///
/// let mut ul = Element::new("ul");
/// let mut li = Element::with_content("li", "one");
/// li.set_attribute("class", "item");
/// ul.append_child(li);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) content: Option<Value>,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Element>,
    pub(crate) self_closing: bool,
}

impl Element {
    /// Create an element with the given tag name and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            content: None,
            attributes: Attributes::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Create an element with tag name and content.
    pub fn with_content(name: impl Into<String>, content: impl Into<Value>) -> Self {
        let mut element = Element::new(name);
        element.content = Some(content.into());
        element
    }

    /// The tag name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text content, if any.
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    /// Set the text content.
    pub fn set_content(&mut self, content: impl Into<Value>) {
        self.content = Some(content.into());
    }

    /// The attributes of the element, in insertion order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute value.
    ///
    /// Names are validated at render time, not here; the tree itself imposes
    /// no naming constraint.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Whether the element renders as a self-closing tag.
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    /// Mark the element self-closing. Content and children are discarded
    /// during rendering when this is set.
    pub fn set_self_closing(&mut self, self_closing: bool) {
        self.self_closing = self_closing;
    }
}
