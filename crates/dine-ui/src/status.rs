//! Standalone status pages (not found, server error).

use crate::html::escape_html;
use crate::shell::{HeadContent, Shell};
use crate::styles::STOREFRONT_STYLES;

/// Render a complete document carrying a single message.
pub fn render_status_page(title: &str, message: &str) -> String {
    let body = format!(
        r#"<main class="status-page">
    <p class="status-message">{message}</p>
    <a href="/" class="status-home">Back to menu</a>
</main>"#,
        message = escape_html(message)
    );

    Shell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(STOREFRONT_STYLES),
    )
    .render(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_page() {
        let html = render_status_page("Not found", "Product not found");
        assert!(html.contains("<title>Not found</title>"));
        assert!(html.contains(r#"<p class="status-message">Product not found</p>"#));
    }
}
