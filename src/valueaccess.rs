use crate::access::NodeAccess;
use crate::dom::DomDocument;
use crate::engine::{DomEngine, DomNode};
use crate::error::Error;

/// Tags whose attribute values may carry URLs worth resolving against the
/// document base URL.
const URL_BEARING_TAGS: &[&str] = &[
    "a", "img", "link", "iframe", "audio", "video", "area", "track", "embed", "source", "object",
];

/// ## Attribute and value access
///
/// Read-only extraction of attribute and "effective" values from nodes of
/// the wrapped tree. These need the owning document (for the base URL and
/// for the one query `value()` makes), so they live on the facade rather
/// than on the node.
impl<E: DomEngine> DomDocument<E> {
    /// The raw attribute value, or, when `use_base_url` is set, the value
    /// resolved against the document base URL.
    ///
    /// Resolution only applies to the fixed set of URL-bearing tags and
    /// when a base URL is known; otherwise the raw value is returned.
    pub fn attribute(&self, node: &E::Node, name: &str, use_base_url: bool) -> Option<String> {
        let value = node.attribute(name)?;

        if !value.is_empty() && use_base_url {
            // nameless nodes keep their raw value
            if let Some(tag) = node.tag() {
                if URL_BEARING_TAGS.contains(&tag.as_str()) {
                    if let Some(base_url) = self.base_url() {
                        return Some(base_url.resolve(&value));
                    }
                }
            }
        }

        Some(value)
    }

    /// The tag-specific "effective value" of a node.
    ///
    /// Checked state for radio/checkbox inputs, the selected option's value
    /// for `<select>`, `src` for media tags, `datetime` for `<time>`,
    /// `content` for `<meta>`; anything else falls back to trimmed text
    /// content.
    pub fn value(&self, node: &E::Node) -> Result<Option<String>, Error> {
        let tag = match node.tag() {
            Some(tag) => tag,
            None => return Ok(node.text_trimmed()),
        };

        let value = match tag.as_str() {
            "input" => {
                let input_type = node.attribute("type").unwrap_or_default();
                if input_type == "radio" || input_type == "checkbox" {
                    if node.has_attribute("checked") {
                        node.attribute("value")
                    } else {
                        None
                    }
                } else {
                    node.attribute("value")
                }
            }
            "option" => {
                if node.has_attribute("selected") {
                    node.attribute("value")
                } else {
                    None
                }
            }
            "select" => {
                // relative query, so only options of this select qualify
                match self.find(".//option[@value][@selected]", Some(node))? {
                    Some(option) => option.attribute("value"),
                    None => None,
                }
            }
            "img" | "image" | "iframe" | "audio" | "video" | "track" | "embed" | "source" => {
                node.attribute("src")
            }
            "data" | "meter" => node.attribute("value"),
            "time" => node.attribute("datetime"),
            "meta" => node.attribute("content"),
            _ => node.text_trimmed(),
        };

        Ok(value)
    }
}
