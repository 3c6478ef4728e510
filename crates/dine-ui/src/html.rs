//! HTML text helpers.

/// Escape text for element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Quote `s` as a JavaScript string literal safe to embed in a `<script>`.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003c"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `loading`/`fetchpriority` attributes for an image.
///
/// Low media ids are the above-the-fold uploads and load eagerly.
pub fn image_loading_attrs(media_id: u64) -> &'static str {
    if media_id <= EAGER_MEDIA_ID_MAX {
        r#"loading="eager" fetchpriority="high""#
    } else {
        r#"loading="lazy" fetchpriority="auto""#
    }
}

const EAGER_MEDIA_ID_MAX: u64 = 50;
