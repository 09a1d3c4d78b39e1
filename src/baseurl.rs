use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// Minimal scheme/host/path structural check; anything that doesn't look
/// like `scheme://host.tld/rest` is rejected. A missing or `//` scheme
/// defaults to `http://`.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\w+://|//))?([\w.\-]+\.\w{2,})(/.*)?$").unwrap());

/// A document base URL used to resolve relative attribute values.
///
/// Resolution is deliberately simple, matching the documented behavior of
/// the query layer: values starting with `/` resolve against scheme+host
/// only; any other relative value is concatenated onto the full base URL.
/// There is no RFC 3986 handling of `../`, query-only or fragment-only
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: String,
    host: String,
    rest: String,
}

impl BaseUrl {
    /// Parse and structurally validate a base URL.
    ///
    /// Fails with [`Error::InvalidUrl`] when the value has no recognizable
    /// host.
    pub fn parse(url: &str) -> Result<Self, Error> {
        let captures = URL_RE
            .captures(url)
            .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

        let scheme = match captures.get(1).map(|m| m.as_str()) {
            None | Some("//") => "http://".to_string(),
            Some(scheme) => scheme.to_string(),
        };
        let host = captures[2].to_string();
        let rest = captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(BaseUrl { scheme, host, rest })
    }

    /// The full base URL string.
    pub fn as_str(&self) -> String {
        format!("{}{}{}", self.scheme, self.host, self.rest)
    }

    /// Resolve a relative attribute value against this base URL.
    ///
    /// Absolute values (with a scheme or protocol-relative `//`) pass
    /// through untouched.
    pub fn resolve(&self, value: &str) -> String {
        if value.contains("://") || value.starts_with("//") {
            return value.to_string();
        }
        if value.starts_with('/') {
            // use root for links that start with "/"
            format!("{}{}{}", self.scheme, self.host, value)
        } else {
            format!("{}{}", self.as_str(), value)
        }
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.scheme, self.host, self.rest)
    }
}
