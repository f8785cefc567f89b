//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for the whole public surface:
//!
//! ```rust
//! use uri_grammar::prelude::*;
//!
//! assert!(is_uri("http://example.com/"));
//! let auth = parse_authority("example.com:80").unwrap();
//! assert_eq!(auth.port(), Some("80"));
//! ```

pub use crate::{
    // Classifiers
    UriClass,
    classify,
    is_relative_uri_reference,
    is_uri,
    is_uri_reference,
    // Authority decomposition
    Authority,
    HostKind,
    parse_authority,
    // Production predicates
    is_gen_delim,
    is_ipv4_address,
    is_ipv6_address,
    is_ipv_future,
    is_pct_encoded,
    is_reserved,
    is_sub_delim,
    is_unreserved,
    // Codec helpers
    DecodeError,
    JoinError,
    QueryMap,
    SplitUri,
    join,
    pct_decode,
    pct_encode,
    pct_plus_decode,
    pct_plus_encode,
    split,
    unsplit,
};
