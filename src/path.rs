//! Path productions: segments and the five path forms.
//!
//! # Grammar Reference (RFC 3986 §3.3)
//!
//! ```abnf
//! path-abempty  = *( "/" segment )
//! path-absolute = "/" [ segment-nz *( "/" segment ) ]
//! path-noscheme = segment-nz-nc *( "/" segment )
//! path-rootless = segment-nz *( "/" segment )
//! path-empty    = 0<pchar>
//! segment       = *pchar
//! segment-nz    = 1*pchar
//! segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
//! pchar         = unreserved / pct-encoded / sub-delims / ":" / "@"
//! ```
//!
//! The five forms are selected by context in `hier-part`/`relative-part`,
//! never through a shared production. `segment-nz-nc` exists so the first
//! segment of a scheme-less reference cannot contain a `:` that would
//! read as a scheme separator.

use crate::chars::{is_encoded_run, is_sub_delim, is_unreserved};

/// `pchar` bytes, the pct-encoded escape aside.
pub(crate) const fn is_pchar(byte: u8) -> bool {
    is_unreserved(byte) || is_sub_delim(byte) || matches!(byte, b':' | b'@')
}

/// `segment-nz-nc` bytes: `pchar` without `:`.
const fn is_pchar_nc(byte: u8) -> bool {
    is_unreserved(byte) || is_sub_delim(byte) || byte == b'@'
}

fn segment(input: &str) -> bool {
    is_encoded_run(input.as_bytes(), is_pchar)
}

fn segment_nz(input: &str) -> bool {
    !input.is_empty() && segment(input)
}

fn segment_nz_nc(input: &str) -> bool {
    !input.is_empty() && is_encoded_run(input.as_bytes(), is_pchar_nc)
}

/// `path-abempty`: empty, or `/`-led segments.
pub(crate) fn is_path_abempty(input: &str) -> bool {
    input.is_empty()
        || input
            .strip_prefix('/')
            .is_some_and(|rest| rest.split('/').all(segment))
}

/// `path-absolute`: a lone `/`, or `/` followed by a nonempty first
/// segment and any further segments.
pub(crate) fn is_path_absolute(input: &str) -> bool {
    input.strip_prefix('/').is_some_and(|rest| {
        rest.is_empty() || {
            let mut segments = rest.split('/');
            segments.next().is_some_and(segment_nz) && segments.all(segment)
        }
    })
}

/// `path-rootless`: a nonempty first segment, no leading `/`.
pub(crate) fn is_path_rootless(input: &str) -> bool {
    let mut segments = input.split('/');
    segments.next().is_some_and(segment_nz) && segments.all(segment)
}

/// `path-noscheme`: like `path-rootless`, first segment colon-free.
pub(crate) fn is_path_noscheme(input: &str) -> bool {
    let mut segments = input.split('/');
    segments.next().is_some_and(segment_nz_nc) && segments.all(segment)
}
