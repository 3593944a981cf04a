//! Image resource detection.
//!
//! Images in a post are usually uploaded by hand to the publishing platform,
//! so links to them must stay exactly as written.

/// Extensions treated as image resources. Compared case-sensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg", "webp", "gif"];

/// Returns true if the final segment of a URL path names an image.
///
/// Empty segments and `.` segments are skipped when picking the final
/// segment, so `/img/a.png/` still names `a.png`. Anything that does not end
/// in `.` + one of [`IMAGE_EXTENSIONS`] is not an image.
///
/// # Examples
///
/// ```
/// use utm_tagger::utils::image::is_image;
///
/// assert!(is_image("/static/cover.png"));
/// assert!(!is_image("/static/cover.PNG"));
/// assert!(!is_image("/blog/post"));
/// ```
pub fn is_image(path: &str) -> bool {
    let Some(name) = path
        .rsplit('/')
        .find(|segment| !segment.is_empty() && *segment != ".")
    else {
        return false;
    };

    IMAGE_EXTENSIONS.iter().any(|extension| {
        name.strip_suffix(*extension)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}
