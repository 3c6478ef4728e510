//! Hero banner: sticky navigation over a background video.

use dine_core::StorefrontConfig;

use crate::html::escape_html;
use crate::navbar::render_navbar;

/// Render the sticky header and hero video.
pub fn render_hero(config: &StorefrontConfig) -> String {
    format!(
        r#"<header class="site-header">
{navbar}
</header>
<section class="hero" data-section="hero">
    <video class="hero-video" src="{video}" autoplay muted loop playsinline></video>
</section>"#,
        navbar = render_navbar(),
        video = escape_html(&config.hero_video_url)
    )
}
