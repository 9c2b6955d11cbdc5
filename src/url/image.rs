/// Path marker that starts a Wix media transform suffix
const TRANSFORM_MARKER: &str = "/v1/";

/// Strips a Wix image-transform suffix to get the canonical asset URL
///
/// `https://static.wixstatic.com/media/abc.jpg/v1/fill/w_300,h_300/abc.jpg`
/// becomes `https://static.wixstatic.com/media/abc.jpg`. URLs without the
/// marker are returned unchanged.
pub fn strip_image_transform(url: &str) -> &str {
    match url.find(TRANSFORM_MARKER) {
        Some(index) => &url[..index],
        None => url,
    }
}
