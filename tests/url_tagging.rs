mod common;

use common::{UTM_QUERY, query_pairs, tracking};
use utm_tagger::prelude::*;

#[test]
fn test_url_without_query_gets_utm_appended() {
    let output = add_utm_to_url("https://example.com/post", &tracking()).unwrap();
    assert_eq!(output, format!("https://example.com/post?{UTM_QUERY}"));
}

#[test]
fn test_url_keeps_existing_params() {
    let output = add_utm_to_url("https://example.com/search?q=rust&page=2", &tracking()).unwrap();
    let pairs = query_pairs(&output);

    assert!(pairs.contains(&("q".to_string(), "rust".to_string())));
    assert!(pairs.contains(&("page".to_string(), "2".to_string())));
    assert_eq!(pairs.len(), 5);
}

#[test]
fn test_url_components_pass_through() {
    let output = add_utm_to_url(
        "http://user:pw@Example.COM:8080/Some/Path;v=1?a=1#Frag",
        &tracking(),
    )
    .unwrap();

    assert_eq!(
        output,
        format!("http://user:pw@Example.COM:8080/Some/Path;v=1?a=1&{UTM_QUERY}#Frag")
    );
}

#[test]
fn test_url_tracking_values_are_encoded() {
    let params = TrackingParams::new("news letter", "e-mail", "q1&q2");
    let output = add_utm_to_url("https://example.com/", &params).unwrap();

    assert_eq!(
        output,
        "https://example.com/?utm_source=news+letter&utm_medium=e-mail&utm_campaign=q1%26q2"
    );
    assert!(query_pairs(&output).contains(&("utm_campaign".to_string(), "q1&q2".to_string())));
}

#[test]
fn test_url_repeated_key_collapses_to_last() {
    let output = add_utm_to_url("https://example.com/?tag=a&tag=b", &tracking()).unwrap();
    assert_eq!(output, format!("https://example.com/?tag=b&{UTM_QUERY}"));
}

#[test]
fn test_url_invalid_authority() {
    let result = add_utm_to_url("https://[fe80::1/index", &tracking());
    assert!(matches!(result, Err(UtmError::InvalidUrl { .. })));
}

#[test]
fn test_parsed_url_input() {
    let url = url::Url::parse("https://example.com/post?ref=1").unwrap();
    let tagger = UtmTagger::new(tracking());

    assert_eq!(
        tagger.tag_parsed_url(&url),
        format!("https://example.com/post?ref=1&{UTM_QUERY}")
    );
    assert_eq!(tagger.tag_parsed_url(&url), add_utm_to_parsed_url(&url, &tracking()));
}

#[test]
fn test_find_urls_and_is_image_together() {
    let text = "[a](https://x.com/a) ![b](https://x.com/b.webp) https://x.com/a";
    let kinds: Vec<_> = find_urls(text)
        .map(|url| is_image(UrlParts::parse(url).unwrap().path))
        .collect();

    assert_eq!(kinds, vec![false, true, false]);
}

#[test]
fn test_document_text_guard() {
    assert!(matches!(
        document_text(vec![0xc3, 0x28]),
        Err(UtmError::InvalidArgument(_))
    ));
    assert_eq!(document_text("ok".as_bytes().to_vec()).unwrap(), "ok");
}
