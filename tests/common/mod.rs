#![allow(dead_code)]

use utm_tagger::domain::TrackingParams;

pub const UTM_QUERY: &str = "utm_source=newsletter&utm_medium=email&utm_campaign=launch";

pub fn tracking() -> TrackingParams {
    TrackingParams::new("newsletter", "email", "launch")
}

/// Extracts the decoded query pairs of `url`, in order.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    url::Url::parse(url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Looks up a decoded query value of `url`.
pub fn query_value(url: &str, key: &str) -> Option<String> {
    query_pairs(url)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// A rendered post with links, images and a duplicate link.
pub fn sample_post() -> &'static str {
    "# Launch notes\n\
     \n\
     We shipped! Read the [announcement](https://example.com/blog/launch?ref=home)\n\
     and the [docs](https://docs.example.com/start#install).\n\
     \n\
     ![cover](https://cdn.example.com/img/cover.png)\n\
     ![diagram](https://cdn.example.com/img/diagram.svg)\n\
     \n\
     Questions? See https://example.com/blog/launch?ref=home again.\n"
}
