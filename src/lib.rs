//! Grammar validation and classification for URIs.
//!
//! This crate answers one question thoroughly: does a string conform to
//! the ABNF grammar of RFC 3986? The grammar is built bottom-up the way
//! the RFC defines it — character classes, then address literals, then
//! authority, path, and the top-level productions — and combines into
//! whole-string classifiers for three related concepts:
//!
//! - **URI**: scheme-qualified, e.g. `http://example.com/a?q#f`
//! - **relative reference**: scheme-less, e.g. `//example.com/a`, `a/b`,
//!   `?q`, or the empty string
//! - **URI reference**: either of the above
//!
//! Classification is pure and total: every input yields an answer, no
//! input raises an error, and nothing is normalized, resolved, or
//! canonicalized along the way.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_grammar::{classify, is_uri, parse_authority, UriClass};
//!
//! assert!(is_uri("https://user:pass@[2001:db8::1]:8080/a/b?q=1#frag"));
//! assert_eq!(classify("//example.com/path"), UriClass::RelativeReference);
//! assert_eq!(classify("http://exa mple.com"), UriClass::Invalid);
//!
//! let auth = parse_authority("user:pass@[2001:db8::1]:8080").unwrap();
//! assert_eq!(auth.userinfo(), Some("user:pass"));
//! assert_eq!(auth.host(), "[2001:db8::1]");
//! assert_eq!(auth.port(), Some("8080"));
//! ```
//!
//! # Codec helpers
//!
//! Alongside validation the crate ships the usual transforms: percent
//! encoding and decoding ([`pct_encode`], [`pct_decode`] and the
//! form-flavored `plus` variants), form-urlencoded query maps
//! ([`QueryMap`]), five-component splitting and recomposition
//! ([`split`], [`unsplit`]), and reference resolution ([`join`]). These
//! never participate in validation; [`split`] in particular accepts any
//! string.
//!
//! # Grammar Specification
//!
//! The productions follow RFC 3986 appendix A exactly, including the
//! nine-alternative `IPv6address` elision table and the `path-noscheme`
//! substitution that keeps scheme-less references unambiguous. Each
//! module documents the ABNF it implements.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod chars;
mod classify;
mod codec;
mod error;
mod ip;
mod path;
pub mod prelude;

pub use authority::{Authority, HostKind, parse_authority};
pub use chars::{is_gen_delim, is_pct_encoded, is_reserved, is_sub_delim, is_unreserved};
pub use classify::{UriClass, classify, is_relative_uri_reference, is_uri, is_uri_reference};
pub use codec::{
    QueryMap, SplitUri, join, pct_decode, pct_encode, pct_plus_decode, pct_plus_encode, split,
    unsplit,
};
pub use error::{DecodeError, JoinError};
pub use ip::{is_ipv4_address, is_ipv6_address, is_ipv_future};
