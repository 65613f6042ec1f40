//! URL references for route templates.
//!
//! [`RouteUrl`] splits a URI reference into scheme, authority, path, query,
//! and fragment (RFC 3986, appendix B) without normalizing anything, so a
//! parsed route serializes back to the text it was registered with. Relative
//! references such as `/hello/:name` or the empty string are valid routes.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use urlgen_core::ParseError;

/// Characters that are percent-encoded when they appear raw in a path.
/// `%` is left alone so existing escapes survive.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// An immutable URL reference.
///
/// The path is always stored in its escaped form.
///
/// # Examples
///
/// ```
/// use urlgen_routes::RouteUrl;
///
/// let url: RouteUrl = "http://example.com/a/:id?q=1#top".parse().unwrap();
/// assert_eq!(url.scheme(), Some("http"));
/// assert_eq!(url.authority(), Some("example.com"));
/// assert_eq!(url.path(), "/a/:id");
/// assert_eq!(url.query(), Some("q=1"));
/// assert_eq!(url.fragment(), Some("top"));
/// assert_eq!(url.to_string(), "http://example.com/a/:id?q=1#top");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteUrl {
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl RouteUrl {
    /// Parses a URL reference.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for control characters, malformed `%` escapes
    /// in the authority or path, a missing scheme before a leading `:`, a
    /// colon in the first segment of a scheme-less path, or an absolute
    /// reference the `url` crate rejects.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
            return Err(ParseError::ControlCharacter);
        }

        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (scheme, rest) = split_scheme(rest)?;
        if scheme.is_none() {
            let first_segment = rest.split('/').next().unwrap_or_default();
            if first_segment.contains(':') {
                return Err(ParseError::ColonInFirstSegment);
            }
        }

        let has_authority =
            rest.starts_with("//") && (scheme.is_some() || !rest.starts_with("///"));
        let (authority, path) = if has_authority {
            let rest = &rest[2..];
            let end = rest.find('/').unwrap_or(rest.len());
            (Some(&rest[..end]), &rest[end..])
        } else {
            (None, rest)
        };

        if let Some(authority) = authority {
            if authority.contains(' ') {
                return Err(ParseError::ControlCharacter);
            }
            check_escapes(authority)?;
        }
        check_escapes(path)?;

        if scheme.is_some() {
            url::Url::parse(input)?;
        }

        Ok(Self {
            scheme: scheme.map(str::to_ascii_lowercase),
            authority: authority.map(String::from),
            path: utf8_percent_encode(path, PATH).to_string(),
            query: query.map(String::from),
            fragment: fragment.map(String::from),
        })
    }

    /// Returns the scheme, lowercased.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority (`user@host:port`) without the leading `//`.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the escaped path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the reference has a scheme.
    pub const fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Serializes this reference with `path` in place of its own path.
    ///
    /// `path` is written verbatim; the result is not validated.
    pub fn with_path(&self, path: &str) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = &self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(path);
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    /// Converts an absolute reference into a [`url::Url`].
    ///
    /// # Errors
    ///
    /// Relative references fail with `RelativeUrlWithoutBase`.
    pub fn to_url(&self) -> Result<url::Url, ParseError> {
        Ok(url::Url::parse(&self.to_string())?)
    }

    /// Resolves this reference against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn resolve(&self, base: &url::Url) -> Result<url::Url, ParseError> {
        Ok(base.join(&self.to_string())?)
    }
}

impl fmt::Display for RouteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_path(&self.path))
    }
}

impl FromStr for RouteUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RouteUrl {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RouteUrl> for String {
    fn from(url: RouteUrl) -> Self {
        url.to_string()
    }
}

/// Splits off a leading `scheme:`.
///
/// A colon ends the scheme only if every character before it is a valid
/// scheme character and the first one is a letter.
fn split_scheme(input: &str) -> Result<(Option<&str>, &str), ParseError> {
    for (i, c) in input.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => return Err(ParseError::MissingScheme),
            ':' => return Ok((Some(&input[..i]), &input[i + 1..])),
            _ => break,
        }
    }
    Ok((None, input))
}

/// Checks that every `%` starts a two-digit hex escape.
fn check_escapes(s: &str) -> Result<(), ParseError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(ParseError::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
