use std::borrow::Cow;

/// Escape text content for markup output.
///
/// Only `<` and `>` are escaped; `&` and quotes pass through untouched. The
/// asymmetry with [`escape_attribute`] is deliberate and load-bearing for
/// embedded JSON fragments, which must keep their `&` and `"` characters.
pub(crate) fn escape_text(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut escape_seen = false;
    for c in content.chars() {
        match c {
            '<' => {
                escape_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                escape_seen = true;
                result.push_str("&gt;")
            }
            _ => result.push(c),
        }
    }

    if !escape_seen {
        content
    } else {
        result.into()
    }
}

/// Escape an attribute value for markup output.
///
/// Only the double quote is escaped, as `&#34;`, since attribute values are
/// always emitted inside double quotes.
pub(crate) fn escape_attribute(value: Cow<str>) -> Cow<str> {
    if !value.contains('"') {
        return value;
    }
    value.replace('"', "&#34;").into()
}
