//! Structured, borrowed view of a raw URL string.
//!
//! Splitting is purely lexical and mirrors generic URI component splitting
//! (`scheme:` / `//authority` / path / `;params` / `?query` / `#fragment`).
//! Nothing is normalized: formatting a [`UrlParts`] reproduces the exact input,
//! which is what lets annotation swap the query while every other component
//! passes through byte-for-byte.

use std::fmt;

use crate::error::UtmError;

/// A raw URL decomposed into its components.
///
/// Every field borrows from the original string. `None` means the delimiter
/// was absent, `Some("")` means it was present with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub params: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Splits `input` into its components.
    ///
    /// # Errors
    ///
    /// Returns [`UtmError::InvalidUrl`] when the authority contains an opening
    /// or closing bracket without its counterpart (a broken IPv6 literal).
    pub fn parse(input: &'a str) -> Result<Self, UtmError> {
        let (scheme, rest) = split_scheme(input);

        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                let authority = &after[..end];
                if authority.contains('[') != authority.contains(']') {
                    return Err(UtmError::invalid_url(
                        input,
                        "unbalanced brackets in authority",
                    ));
                }
                (Some(authority), &after[end..])
            }
            None => (None, rest),
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };

        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (path, params) = split_params(rest);

        Ok(Self {
            scheme,
            authority,
            path,
            params,
            query,
            fragment,
        })
    }

    /// Formats the URL with its query component replaced by `query`.
    pub fn with_query(&self, query: &str) -> String {
        UrlParts {
            query: Some(query),
            ..*self
        }
        .to_string()
    }
}

impl fmt::Display for UrlParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(self.path)?;
        if let Some(params) = self.params {
            write!(f, ";{params}")?;
        }
        if let Some(query) = self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`, ending at the first `:`.
fn split_scheme(input: &str) -> (Option<&str>, &str) {
    if let Some((candidate, rest)) = input.split_once(':')
        && candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return (Some(candidate), rest);
    }

    (None, input)
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, Option<&str>) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(offset) => {
            let at = segment_start + offset;
            (&path[..at], Some(&path[at + 1..]))
        }
        None => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let parts =
            UrlParts::parse("https://user@example.com:8080/a/b;v=1?x=1&y=2#top").unwrap();
        assert_eq!(parts.scheme, Some("https"));
        assert_eq!(parts.authority, Some("user@example.com:8080"));
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.params, Some("v=1"));
        assert_eq!(parts.query, Some("x=1&y=2"));
        assert_eq!(parts.fragment, Some("top"));
    }

    #[test]
    fn test_parse_host_only() {
        let parts = UrlParts::parse("https://example.com").unwrap();
        assert_eq!(parts.authority, Some("example.com"));
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, None);
    }

    #[test]
    fn test_query_in_fragment_belongs_to_fragment() {
        let parts = UrlParts::parse("https://example.com/page#section?not=query").unwrap();
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("section?not=query"));
    }

    #[test]
    fn test_semicolon_before_last_segment_stays_in_path() {
        let parts = UrlParts::parse("https://example.com/a;b/c").unwrap();
        assert_eq!(parts.path, "/a;b/c");
        assert_eq!(parts.params, None);
    }

    #[test]
    fn test_no_scheme() {
        let parts = UrlParts::parse("example.com/page?q=1").unwrap();
        assert_eq!(parts.scheme, None);
        assert_eq!(parts.authority, None);
        assert_eq!(parts.path, "example.com/page");
        assert_eq!(parts.query, Some("q=1"));
    }

    #[test]
    fn test_digit_prefix_is_not_a_scheme() {
        let parts = UrlParts::parse("1http://example.com").unwrap();
        assert_eq!(parts.scheme, None);
    }

    #[test]
    fn test_display_reproduces_input() {
        for input in [
            "https://example.com",
            "http://example.com/",
            "https://EXAMPLE.com:443/Path/?a=1&a=2#frag",
            "https://example.com/a.png;v=2",
            "https://example.com/?",
            "https://example.com/#",
            "http://[::1]:8080/api",
        ] {
            assert_eq!(UrlParts::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_with_query_keeps_other_components() {
        let parts = UrlParts::parse("https://example.com/post?old=1#comments").unwrap();
        assert_eq!(
            parts.with_query("new=2"),
            "https://example.com/post?new=2#comments"
        );
    }

    #[test]
    fn test_with_query_on_host_only_url() {
        let parts = UrlParts::parse("https://example.com").unwrap();
        assert_eq!(parts.with_query("a=b"), "https://example.com?a=b");
    }

    #[test]
    fn test_unbalanced_ipv6_bracket() {
        let result = UrlParts::parse("http://[::1/path");
        assert!(matches!(result, Err(UtmError::InvalidUrl { .. })));
    }
}
