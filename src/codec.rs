//! Encode, decode, join, and split collaborators.
//!
//! These helpers live outside grammar validation: they are the well-known
//! transforms expected alongside a validator, and none of them validates
//! input against the grammar. [`split`] in particular decomposes any
//! string into the five top-level components on delimiter positions
//! alone.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::classify::is_scheme;
use crate::error::{DecodeError, JoinError};

/// Bytes escaped when encoding a path-like value: everything outside
/// `unreserved` except `/`.
const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Bytes escaped when encoding a form value: everything outside
/// `unreserved`. Space is handled separately as `+`.
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input`, leaving `unreserved` bytes and `/` as-is.
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_encode;
///
/// assert_eq!(pct_encode("a b/c"), "a%20b/c");
/// assert_eq!(pct_encode("50%"), "50%25");
/// ```
#[must_use]
pub fn pct_encode(input: &str) -> String {
    utf8_percent_encode(input, PATH_SET).to_string()
}

/// Reverses [`pct_encode`].
///
/// A `%` that does not introduce two HEXDIG passes through unchanged
/// rather than failing, so decoding is total over encoder output and
/// lenient elsewhere.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidUtf8`] when the decoded octets are not
/// valid UTF-8.
pub fn pct_decode(input: &str) -> Result<String, DecodeError> {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(e) => Err(DecodeError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }),
    }
}

/// Percent-encodes `input` for a form-urlencoded context: space becomes
/// `+`, and everything outside `unreserved` (including `/`) is escaped.
///
/// # Examples
///
/// ```
/// use uri_grammar::pct_plus_encode;
///
/// assert_eq!(pct_plus_encode("a b/c"), "a+b%2Fc");
/// ```
#[must_use]
pub fn pct_plus_encode(input: &str) -> String {
    input
        .split(' ')
        .map(|piece| utf8_percent_encode(piece, FORM_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Reverses [`pct_plus_encode`]: `+` decodes to space, then the escapes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidUtf8`] when the decoded octets are not
/// valid UTF-8.
pub fn pct_plus_decode(input: &str) -> Result<String, DecodeError> {
    pct_decode(&input.replace('+', " "))
}

/// Decoded form-urlencoded query parameters.
///
/// Names are kept ordered; repeated names accumulate their values in
/// input order. [`QueryMap::parse`] is total and [`fmt::Display`]
/// re-encodes, so well-formed queries round-trip.
///
/// # Examples
///
/// ```
/// use uri_grammar::QueryMap;
///
/// let map = QueryMap::parse("b=2&a=1&a=3");
/// assert_eq!(map.get("a"), Some("1"));
/// assert_eq!(map.get_all("a"), ["1", "3"]);
/// assert_eq!(map.to_string(), "a=1&a=3&b=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryMap {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query string (without the leading `?`).
    ///
    /// Pairs are `&`-separated; blank pairs are skipped; a pair without
    /// `=` keeps an empty value; `+` decodes to space; octets that do not
    /// decode as UTF-8 are replaced rather than rejected.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name, value),
                None => (pair, ""),
            };
            params
                .entry(decode_lossy(name))
                .or_default()
                .push(decode_lossy(value));
        }
        Self { params }
    }

    /// Returns the first value recorded for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value recorded for `name`.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map_or(&[], Vec::as_slice)
    }

    /// Appends a value for `name`.
    pub fn append(&mut self, name: &str, value: &str) {
        self.params
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Returns true if no parameter is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of distinct parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over `(name, value)` pairs, repeated names flattened.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }
}

fn decode_lossy(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

impl fmt::Display for QueryMap {
    /// Form-urlencodes the parameters, `a=1&b=2` style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            write!(f, "{}={}", pct_plus_encode(name), pct_plus_encode(value))?;
        }
        Ok(())
    }
}

impl FromStr for QueryMap {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// The five top-level components of a URI reference, as split without
/// grammar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitUri<'a> {
    /// The scheme, when the prefix before the first `:` is scheme-shaped.
    pub scheme: Option<&'a str>,
    /// The authority, when the remainder starts with `//`.
    pub authority: Option<&'a str>,
    /// The path; possibly empty.
    pub path: &'a str,
    /// The query, when a `?` introduces one.
    pub query: Option<&'a str>,
    /// The fragment, when a `#` introduces one.
    pub fragment: Option<&'a str>,
}

/// Splits a URI reference into its five components on delimiter positions
/// alone, without validating any of them.
///
/// The text before the first `:` is taken as a scheme only when it has
/// scheme shape; otherwise the `:` belongs to the path, so relative
/// references split correctly.
///
/// # Examples
///
/// ```
/// use uri_grammar::split;
///
/// let parts = split("http://example.com/a/b?q=1#frag");
/// assert_eq!(parts.scheme, Some("http"));
/// assert_eq!(parts.authority, Some("example.com"));
/// assert_eq!(parts.path, "/a/b");
/// assert_eq!(parts.query, Some("q=1"));
/// assert_eq!(parts.fragment, Some("frag"));
/// ```
#[must_use]
pub fn split(input: &str) -> SplitUri<'_> {
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };
    let (scheme, rest) = match rest.split_once(':') {
        Some((scheme, tail)) if is_scheme(scheme) => (Some(scheme), tail),
        _ => (None, rest),
    };
    let (authority, path) = match rest.strip_prefix("//") {
        Some(tail) => {
            let end = tail.find('/').unwrap_or(tail.len());
            let (authority, path) = tail.split_at(end);
            (Some(authority), path)
        }
        None => (None, rest),
    };
    SplitUri {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Recomposes the components of a [`split`] (RFC 3986 §5.3).
#[must_use]
pub fn unsplit(parts: &SplitUri<'_>) -> String {
    let mut out = String::new();
    if let Some(scheme) = parts.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(authority) = parts.authority {
        out.push_str("//");
        out.push_str(authority);
    }
    out.push_str(parts.path);
    if let Some(query) = parts.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Resolves `reference` against `base` per RFC 3986 §5.2, strict form:
/// a reference with its own scheme is taken whole, even when the scheme
/// matches the base's.
///
/// Dot-segment removal happens here, in resolution, never in validation.
///
/// # Errors
///
/// Returns [`JoinError::RelativeBase`] when `base` carries no scheme.
///
/// # Examples
///
/// ```
/// use uri_grammar::join;
///
/// let base = "http://a/b/c/d;p?q";
/// assert_eq!(join(base, "../g").unwrap(), "http://a/b/g");
/// assert_eq!(join(base, "//g").unwrap(), "http://g");
/// assert_eq!(join(base, "#s").unwrap(), "http://a/b/c/d;p?q#s");
/// ```
pub fn join(base: &str, reference: &str) -> Result<String, JoinError> {
    let base_parts = split(base);
    let Some(base_scheme) = base_parts.scheme else {
        return Err(JoinError::RelativeBase {
            base: base.to_string(),
        });
    };
    let r = split(reference);

    let (scheme, authority, path, query);
    if let Some(r_scheme) = r.scheme {
        scheme = r_scheme;
        authority = r.authority;
        path = remove_dot_segments(r.path);
        query = r.query;
    } else if r.authority.is_some() {
        scheme = base_scheme;
        authority = r.authority;
        path = remove_dot_segments(r.path);
        query = r.query;
    } else if r.path.is_empty() {
        scheme = base_scheme;
        authority = base_parts.authority;
        path = base_parts.path.to_string();
        query = r.query.or(base_parts.query);
    } else if r.path.starts_with('/') {
        scheme = base_scheme;
        authority = base_parts.authority;
        path = remove_dot_segments(r.path);
        query = r.query;
    } else {
        scheme = base_scheme;
        authority = base_parts.authority;
        let merged = merge_paths(base_parts.authority, base_parts.path, r.path);
        path = remove_dot_segments(&merged);
        query = r.query;
    }

    Ok(unsplit(&SplitUri {
        scheme: Some(scheme),
        authority,
        path: &path,
        query,
        fragment: r.fragment,
    }))
}

/// RFC 3986 §5.3.3 path merge.
fn merge_paths(base_authority: Option<&str>, base_path: &str, reference_path: &str) -> String {
    if base_authority.is_some() && base_path.is_empty() {
        return format!("/{reference_path}");
    }
    match base_path.rfind('/') {
        Some(i) => format!("{}{reference_path}", &base_path[..=i]),
        None => reference_path.to_string(),
    }
}

/// RFC 3986 §5.2.4 remove-dot-segments.
fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input
            .strip_prefix("../")
            .or_else(|| input.strip_prefix("./"))
        {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, with its leading "/" if any, to
            // the output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Drops the last `/segment` of `output`.
fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}
