use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// The XML Name production accepted for attribute names, plus a lone-prefix
/// form such as `:foo`.
///
/// See <http://www.w3.org/TR/2008/REC-xml-20081126/#NT-Name>.
pub(crate) const NAME_PATTERN: &str =
    r"^(?:[A-Za-z_][A-Za-z0-9_-]*(?::[A-Za-z0-9_:-]+)?|:[A-Za-z0-9_:-]*)$";

/// Characters that are never allowed in an attribute name, reported
/// separately from a pattern mismatch.
pub(crate) const NOT_ALLOWED_CHARS: &[char] = &['\'', '"', '='];

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).unwrap());

/// Validate an attribute name against the Name grammar.
///
/// Disallowed characters and grammar mismatches are distinct errors so
/// callers can tell them apart.
pub(crate) fn validate_attribute_name(name: &str) -> Result<(), Error> {
    if name.contains(NOT_ALLOWED_CHARS) {
        return Err(Error::AttributeNameChars(name.to_string()));
    }
    if !NAME_RE.is_match(name) {
        return Err(Error::AttributeNamePattern {
            name: name.to_string(),
            pattern: NAME_PATTERN.to_string(),
        });
    }
    Ok(())
}
