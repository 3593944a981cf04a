//! Locates absolute HTTP(S) URLs in free text.
//!
//! # Matching Rule
//!
//! A candidate starts at `http://` or `https://` and runs until the first
//! whitespace character, `(` or `)`. Parentheses end a match so that the
//! closing `)` of markdown link syntax `[text](url)` is not swallowed.
//!
//! Nothing beyond that rule is checked. Trailing punctuation such as a full
//! stop after a URL in prose stays part of the match.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled locator pattern.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s()]+").unwrap());

/// A located URL together with its byte span in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> UrlMatch<'t> {
    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched URL.
    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

/// Lazy iterator over URL occurrences, in order of position.
///
/// Calling [`find_url_matches`] again on the same text restarts the scan.
#[derive(Debug)]
pub struct UrlMatches<'t> {
    inner: regex::Matches<'static, 't>,
}

impl<'t> Iterator for UrlMatches<'t> {
    type Item = UrlMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| UrlMatch {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
    }
}

/// Returns every URL occurrence in `text` with its span, duplicates included.
///
/// # Examples
///
/// ```
/// use utm_tagger::utils::url_finder::find_url_matches;
///
/// let found: Vec<_> = find_url_matches("[post](https://example.com/p)")
///     .map(|m| (m.start(), m.as_str()))
///     .collect();
/// assert_eq!(found, vec![(7, "https://example.com/p")]);
/// ```
pub fn find_url_matches(text: &str) -> UrlMatches<'_> {
    UrlMatches {
        inner: URL_REGEX.find_iter(text),
    }
}

/// Returns every URL-shaped substring of `text`, in order, duplicates included.
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    find_url_matches(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<&str> {
        find_urls(text).collect()
    }

    #[test]
    fn test_find_no_urls() {
        assert!(urls("plain text, no links here").is_empty());
        assert!(urls("").is_empty());
    }

    #[test]
    fn test_find_single_url() {
        assert_eq!(
            urls("See https://example.com/post?ref=1 for details"),
            vec!["https://example.com/post?ref=1"]
        );
    }

    #[test]
    fn test_find_http_and_https() {
        assert_eq!(
            urls("http://a.com and https://b.com"),
            vec!["http://a.com", "https://b.com"]
        );
    }

    #[test]
    fn test_find_markdown_link_excludes_paren() {
        assert_eq!(
            urls("Read [this](https://example.com/post) now"),
            vec!["https://example.com/post"]
        );
    }

    #[test]
    fn test_find_markdown_image() {
        assert_eq!(
            urls("![img](https://cdn.example.com/a.png)"),
            vec!["https://cdn.example.com/a.png"]
        );
    }

    #[test]
    fn test_find_keeps_duplicates_in_order() {
        assert_eq!(
            urls("https://a.com https://b.com https://a.com"),
            vec!["https://a.com", "https://b.com", "https://a.com"]
        );
    }

    #[test]
    fn test_find_stops_at_whitespace() {
        assert_eq!(
            urls("https://a.com/x\nhttps://b.com/y\thttps://c.com/z"),
            vec!["https://a.com/x", "https://b.com/y", "https://c.com/z"]
        );
    }

    #[test]
    fn test_find_keeps_trailing_punctuation() {
        assert_eq!(urls("Visit https://a.com/x."), vec!["https://a.com/x."]);
    }

    #[test]
    fn test_find_ignores_other_schemes() {
        assert!(urls("ftp://a.com mailto:me@a.com file:///tmp/x").is_empty());
    }

    #[test]
    fn test_find_requires_character_after_scheme() {
        assert!(urls("https:// nothing").is_empty());
    }

    #[test]
    fn test_find_adjacent_urls_use_longest_match() {
        assert_eq!(
            urls("https://a.comhttps://b.com"),
            vec!["https://a.comhttps://b.com"]
        );
    }

    #[test]
    fn test_match_spans() {
        let text = "x https://a.com y";
        let found: Vec<_> = find_url_matches(text).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start(), 2);
        assert_eq!(found[0].end(), 15);
        assert_eq!(&text[found[0].start()..found[0].end()], found[0].as_str());
    }

    #[test]
    fn test_find_is_restartable() {
        let text = "https://a.com https://b.com";
        assert_eq!(urls(text), urls(text));
    }

    #[test]
    fn test_find_unicode_text() {
        assert_eq!(
            urls("Ссылка: https://example.com/путь дальше"),
            vec!["https://example.com/путь"]
        );
    }
}
