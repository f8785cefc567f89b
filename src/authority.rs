//! Authority component: userinfo, host, and port.
//!
//! # Grammar Reference (RFC 3986 §3.2)
//!
//! ```abnf
//! authority  = [ userinfo "@" ] host [ ":" port ]
//! userinfo   = *( unreserved / pct-encoded / sub-delims / ":" )
//! host       = IP-literal / IPv4address / reg-name
//! IP-literal = "[" ( IPv6address / IPvFuture ) "]"
//! reg-name   = *( unreserved / pct-encoded / sub-delims )
//! port       = *DIGIT
//! ```
//!
//! The `host` alternatives are tried in grammar order: bracketed literals
//! and dotted-decimal addresses before the `reg-name` fallback, whose
//! character class would otherwise swallow every IPv4 address.

use std::fmt;

use crate::chars::{is_encoded_run, is_sub_delim, is_unreserved};
use crate::ip::{is_ipv_future, is_ipv4_address, is_ipv6_address};

/// The syntactic form a host matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A bracketed `IPv6address` or `IPvFuture` literal.
    IpLiteral,
    /// A dotted-decimal `IPv4address`.
    Ipv4,
    /// A registered name, possibly empty.
    RegName,
}

/// A decomposed `authority` component.
///
/// All parts borrow the input string at the RFC component boundaries:
/// the host of an IP literal keeps its brackets, and a trailing `:`
/// yields a present-but-empty port.
///
/// # Examples
///
/// ```
/// use uri_grammar::{parse_authority, HostKind};
///
/// let auth = parse_authority("user:pass@[2001:db8::1]:8080").unwrap();
/// assert_eq!(auth.userinfo(), Some("user:pass"));
/// assert_eq!(auth.host(), "[2001:db8::1]");
/// assert_eq!(auth.port(), Some("8080"));
/// assert_eq!(auth.host_kind(), HostKind::IpLiteral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Authority<'a> {
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    kind: HostKind,
}

impl<'a> Authority<'a> {
    /// Returns the userinfo subcomponent, without its `@` terminator.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the host subcomponent. IP literals keep their brackets.
    #[must_use]
    pub const fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the port subcomponent, without its `:` separator.
    ///
    /// An authority ending in a bare `:` has a present, empty port.
    #[must_use]
    pub const fn port(&self) -> Option<&'a str> {
        self.port
    }

    /// Returns which `host` alternative matched.
    #[must_use]
    pub const fn host_kind(&self) -> HostKind {
        self.kind
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Decomposes `input` into userinfo, host, and port.
///
/// Returns `None` when `input` is not an RFC 3986 `authority`; there is
/// no partial or best-effort result. The empty string is a valid
/// authority with an empty `reg-name` host.
///
/// # Examples
///
/// ```
/// use uri_grammar::parse_authority;
///
/// let auth = parse_authority("example.com:80").unwrap();
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some("80"));
///
/// assert!(parse_authority("host name").is_none());
/// ```
#[must_use]
pub fn parse_authority(input: &str) -> Option<Authority<'_>> {
    let (userinfo, rest) = match input.split_once('@') {
        Some((userinfo, rest)) if is_userinfo(userinfo) => (Some(userinfo), rest),
        Some(_) => return None,
        None => (None, input),
    };

    let (host, port) = split_host_port(rest)?;
    let kind = classify_host(host)?;

    if let Some(port) = port {
        if !is_port(port) {
            return None;
        }
    }

    Some(Authority {
        userinfo,
        host,
        port,
        kind,
    })
}

/// Whole-string `authority` predicate.
pub(crate) fn is_authority(input: &str) -> bool {
    parse_authority(input).is_some()
}

fn is_userinfo(input: &str) -> bool {
    is_encoded_run(input.as_bytes(), |b| {
        is_unreserved(b) || is_sub_delim(b) || b == b':'
    })
}

fn is_reg_name(input: &str) -> bool {
    is_encoded_run(input.as_bytes(), |b| is_unreserved(b) || is_sub_delim(b))
}

fn is_port(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// Splits the part after any userinfo into host and optional port.
///
/// A bracketed host ends at the first `]`; otherwise the first `:` starts
/// the port, since neither `reg-name` nor `IPv4address` admits a colon.
fn split_host_port(input: &str) -> Option<(&str, Option<&str>)> {
    if input.starts_with('[') {
        let end = input.find(']')?;
        let host = &input[..=end];
        return match &input[end + 1..] {
            "" => Some((host, None)),
            tail => tail.strip_prefix(':').map(|port| (host, Some(port))),
        };
    }
    match input.split_once(':') {
        Some((host, port)) => Some((host, Some(port))),
        None => Some((input, None)),
    }
}

/// Classifies a host candidate, literal and dotted-decimal forms first.
fn classify_host(host: &str) -> Option<HostKind> {
    if let Some(literal) = host.strip_prefix('[') {
        let inner = literal.strip_suffix(']')?;
        return (is_ipv6_address(inner) || is_ipv_future(inner)).then_some(HostKind::IpLiteral);
    }
    if is_ipv4_address(host) {
        Some(HostKind::Ipv4)
    } else if is_reg_name(host) {
        Some(HostKind::RegName)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_full_authority() {
        let auth = parse_authority("user:pass@[2001:db8::1]:8080").unwrap();
        assert_eq!(auth.userinfo(), Some("user:pass"));
        assert_eq!(auth.host(), "[2001:db8::1]");
        assert_eq!(auth.port(), Some("8080"));
        assert_eq!(auth.host_kind(), HostKind::IpLiteral);
    }

    #[test]
    fn host_only() {
        let auth = parse_authority("example.com").unwrap();
        assert_eq!(auth.userinfo(), None);
        assert_eq!(auth.host(), "example.com");
        assert_eq!(auth.port(), None);
        assert_eq!(auth.host_kind(), HostKind::RegName);
    }

    #[test]
    fn empty_authority_is_empty_reg_name() {
        let auth = parse_authority("").unwrap();
        assert_eq!(auth.host(), "");
        assert_eq!(auth.host_kind(), HostKind::RegName);
    }

    #[test]
    fn port_without_host() {
        let auth = parse_authority(":8080").unwrap();
        assert_eq!(auth.host(), "");
        assert_eq!(auth.port(), Some("8080"));
    }

    #[test]
    fn trailing_colon_is_empty_port() {
        let auth = parse_authority("example.com:").unwrap();
        assert_eq!(auth.host(), "example.com");
        assert_eq!(auth.port(), Some(""));
    }

    #[test]
    fn dotted_decimal_host_is_ipv4() {
        let auth = parse_authority("192.168.1.1:443").unwrap();
        assert_eq!(auth.host_kind(), HostKind::Ipv4);
    }

    #[test]
    fn overflowing_dotted_host_falls_back_to_reg_name() {
        // reg-name admits digits and dots, so these stay valid hosts.
        for host in ["256.0.0.1", "1.2.3.4.5", "1.2.3"] {
            let auth = parse_authority(host).unwrap();
            assert_eq!(auth.host_kind(), HostKind::RegName, "{host}");
        }
    }

    #[test]
    fn pct_encoded_reg_name() {
        let auth = parse_authority("ex%41mple.com").unwrap();
        assert_eq!(auth.host(), "ex%41mple.com");
    }

    #[test]
    fn ipv_future_literal() {
        let auth = parse_authority("[v1.future:addr]:99").unwrap();
        assert_eq!(auth.host(), "[v1.future:addr]");
        assert_eq!(auth.port(), Some("99"));
        assert_eq!(auth.host_kind(), HostKind::IpLiteral);
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert!(parse_authority("host name").is_none());
        assert!(parse_authority("a@b@c").is_none());
        assert!(parse_authority("example.com:8a").is_none());
        assert!(parse_authority("[2001:db8::1]").is_some());
        assert!(parse_authority("[1::2::3]").is_none());
        assert!(parse_authority("[::1").is_none());
        assert!(parse_authority("[::1]junk").is_none());
        assert!(parse_authority("host/path").is_none());
    }

    #[test]
    fn userinfo_admits_colons_and_sub_delims() {
        let auth = parse_authority("u!$&'()*+,;=:pw@h").unwrap();
        assert_eq!(auth.userinfo(), Some("u!$&'()*+,;=:pw"));
        assert_eq!(auth.host(), "h");
    }

    #[test]
    fn display_recomposes() {
        for input in ["user@example.com:80", "example.com", "[::1]:0", ":", ""] {
            let auth = parse_authority(input).unwrap();
            assert_eq!(auth.to_string(), input);
        }
    }
}
