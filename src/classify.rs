//! Whole-string classification under the RFC 3986 grammar.
//!
//! # Grammar Reference (RFC 3986 §3, §4.1-§4.2)
//!
//! ```abnf
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! URI-reference = URI / relative-ref
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! hier-part     = "//" authority path-abempty
//!               / path-absolute / path-rootless / path-empty
//! relative-part = "//" authority path-abempty
//!               / path-absolute / path-noscheme / path-empty
//! scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! query         = *( pchar / "/" / "?" )
//! fragment      = *( pchar / "/" / "?" )
//! ```
//!
//! `relative-part` substitutes `path-noscheme` for `path-rootless`, which
//! is what keeps the two conforming classes exclusive: a string whose
//! first path segment carries a `:` can only parse scheme-qualified.

use std::fmt;

use crate::authority::is_authority;
use crate::chars::is_encoded_run;
use crate::path::{
    is_path_abempty, is_path_absolute, is_path_noscheme, is_path_rootless, is_pchar,
};

/// Classification of a string under the RFC 3986 grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriClass {
    /// An absolute `URI`: scheme-qualified, fragment permitted.
    Uri,
    /// A `relative-ref`: no scheme, resolved against a base elsewhere.
    RelativeReference,
    /// Neither grammar matches.
    Invalid,
}

impl fmt::Display for UriClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uri => "URI",
            Self::RelativeReference => "relative URI reference",
            Self::Invalid => "invalid",
        })
    }
}

/// Classifies `input` as an absolute URI, a relative reference, or invalid.
///
/// Classification is a total function: any string, including the empty
/// string and non-ASCII input, yields a class without error. The empty
/// string is a relative reference (`path-empty` with nothing else).
///
/// # Examples
///
/// ```
/// use uri_grammar::{classify, UriClass};
///
/// assert_eq!(classify("http://example.com/"), UriClass::Uri);
/// assert_eq!(classify("//example.com/path"), UriClass::RelativeReference);
/// assert_eq!(classify(""), UriClass::RelativeReference);
/// assert_eq!(classify("http://exa mple.com"), UriClass::Invalid);
/// ```
#[must_use]
pub fn classify(input: &str) -> UriClass {
    let (core, query, fragment) = split_query_fragment(input);
    if !query.is_none_or(is_query) || !fragment.is_none_or(is_fragment) {
        return UriClass::Invalid;
    }
    // The first ":" is the only scheme boundary candidate: scheme bytes
    // never include ":".
    if let Some((scheme, hier)) = core.split_once(':') {
        if is_scheme(scheme) && is_hier_part(hier) {
            return UriClass::Uri;
        }
    }
    if is_rel_part(core) {
        UriClass::RelativeReference
    } else {
        UriClass::Invalid
    }
}

/// Returns true if `input` is an absolute `URI`.
///
/// # Examples
///
/// ```
/// use uri_grammar::is_uri;
///
/// assert!(is_uri("https://user:pass@[2001:db8::1]:8080/a/b?q=1#frag"));
/// assert!(is_uri("mailto:john@example.com"));
/// assert!(!is_uri("//example.com/path"));
/// assert!(!is_uri(""));
/// ```
#[must_use]
pub fn is_uri(input: &str) -> bool {
    classify(input) == UriClass::Uri
}

/// Returns true if `input` is a `URI-reference`: an absolute URI or a
/// relative reference.
#[must_use]
pub fn is_uri_reference(input: &str) -> bool {
    classify(input) != UriClass::Invalid
}

/// Returns true if `input` is a `relative-ref` (scheme-less reference).
///
/// # Examples
///
/// ```
/// use uri_grammar::is_relative_uri_reference;
///
/// assert!(is_relative_uri_reference("//example.com/path"));
/// assert!(is_relative_uri_reference("a/b:c"));
/// assert!(!is_relative_uri_reference("a:b"));
/// ```
#[must_use]
pub fn is_relative_uri_reference(input: &str) -> bool {
    classify(input) == UriClass::RelativeReference
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn is_scheme(input: &str) -> bool {
    match input.as_bytes().split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic()
                && rest
                    .iter()
                    .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        None => false,
    }
}

fn is_query(input: &str) -> bool {
    is_encoded_run(input.as_bytes(), |b| is_pchar(b) || matches!(b, b'/' | b'?'))
}

fn is_fragment(input: &str) -> bool {
    // Shares the query production.
    is_query(input)
}

fn is_hier_part(input: &str) -> bool {
    if let Some(rest) = input.strip_prefix("//") {
        let (authority, path) = split_authority(rest);
        return is_authority(authority) && is_path_abempty(path);
    }
    input.is_empty() || is_path_absolute(input) || is_path_rootless(input)
}

fn is_rel_part(input: &str) -> bool {
    if let Some(rest) = input.strip_prefix("//") {
        let (authority, path) = split_authority(rest);
        return is_authority(authority) && is_path_abempty(path);
    }
    input.is_empty() || is_path_absolute(input) || is_path_noscheme(input)
}

/// Splits what follows `"//"` at the start of the path; the authority
/// itself never contains a `/`.
fn split_authority(input: &str) -> (&str, &str) {
    match input.find('/') {
        Some(i) => input.split_at(i),
        None => (input, ""),
    }
}

/// Splits off the fragment at the first `#`, then the query at the first
/// `?`, the only positions where those delimiters begin a component.
fn split_query_fragment(input: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };
    let (core, query) = match rest.split_once('?') {
        Some((core, query)) => (core, Some(query)),
        None => (rest, None),
    };
    (core, query, fragment)
}
