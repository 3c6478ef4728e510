//! Inline stylesheet shared by every page.

/// CSS for the storefront pages.
pub const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #f8f9fa; color: #1f2937; }
a { color: inherit; text-decoration: none; }

/* Navigation */
.site-header { position: sticky; top: 0; z-index: 50; background: white; border-bottom: 1px solid #e5e7eb; }
.navbar { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 1rem; }
.navbar-brand { display: flex; gap: 1.75rem; align-items: center; }
.navbar-logo img { border-radius: 9999px; }
.navbar-location { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 0.875rem; color: #374151; }
.navbar-desktop { display: flex; gap: 1.75rem; align-items: center; }
.navbar-franchise { text-decoration: underline; font-weight: 300; }
.navbar-cart { background: #eab308; border-radius: 4px; padding: 0.25rem; display: inline-flex; }
.navbar-signin button { background: #d1d5db; border: 0; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer; }
.navbar-signin button:hover { background: #ca8a04; }
.navbar-mobile { display: none; gap: 1rem; align-items: center; }
.navbar-menu { background: none; border: 0; color: #6b7280; }
@media (max-width: 767px) {
  .navbar-location, .navbar-desktop { display: none; }
  .navbar-mobile { display: flex; }
}

/* Hero */
.hero { margin-top: -40px; }
.hero-video { width: 100%; height: auto; display: block; }

/* Category slider */
.category-slider { position: sticky; top: 64px; z-index: 40; background: white; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.slider-inner { display: flex; align-items: center; max-width: 80rem; margin: 0 auto; padding: 1rem; overflow: hidden; }
.slider-arrow { background: none; border: 0; padding: 0.5rem; color: #4b5563; cursor: pointer; font-size: 1rem; }
.slider-strip { flex: 1; overflow-x: auto; white-space: nowrap; scrollbar-width: none; padding: 0.5rem 0; scroll-behavior: smooth; }
.slider-strip::-webkit-scrollbar { display: none; }
.slider-item { display: inline-block; padding: 0.5rem 1rem; background: none; border: 0; border-bottom: 2px solid transparent; font-weight: 600; color: #1f2937; cursor: pointer; transition: color 0.2s; }
.slider-item--active { color: #ef4444; border-bottom-color: #ef4444; }

/* Listing */
.listing { max-width: 80rem; margin: 2.5rem auto 0; padding: 0 1rem; }
.category-section { margin-bottom: 4rem; scroll-margin-top: 6rem; }
.category-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: #1f2937; }
.category-banner { margin-bottom: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.category-banner img { width: 100%; height: auto; border-radius: 8px; object-fit: cover; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 2rem; }
.product-card { display: flex; gap: 1.5rem; background: white; border-radius: 12px; padding: 0.75rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); transition: box-shadow 0.3s; }
.product-card:hover { box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.product-card-media { position: relative; width: 10rem; height: 10rem; flex-shrink: 0; }
.product-card-image { width: 100%; height: 100%; object-fit: contain; }
.product-card-placeholder { width: 100%; height: 100%; background: #f3f4f6; border-radius: 8px; }
.product-tag { background: black; color: white; padding: 0.25rem 0.5rem; font-size: 0.875rem; border-radius: 4px; white-space: nowrap; }
.product-card-media .product-tag { position: absolute; bottom: 0; left: 50%; transform: translateX(-50%); }
.product-card-body { flex: 1; display: flex; flex-direction: column; justify-content: space-between; }
.product-card-name { font-size: 1rem; font-weight: 800; margin: 0 0 0.5rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.product-card-description { color: #4b5563; font-size: 0.875rem; margin: 0 0 0.5rem; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.product-card-actions { display: flex; flex-direction: column; gap: 0.5rem; }
.product-price { font-size: 0.75rem; font-weight: 700; background: #ef4444; color: white; padding: 0.25rem 0.5rem; border-radius: 4px; white-space: nowrap; width: fit-content; }
.product-card-buttons { display: flex; justify-content: space-between; align-items: center; gap: 0.5rem; }
.add-to-cart { flex: 1; background: #facc15; font-size: 0.875rem; font-weight: 800; padding: 0.375rem 0.25rem; border-radius: 8px; text-align: center; }
.favourite { background: none; border: 0; padding: 0.5rem; border-radius: 8px; cursor: pointer; }

/* Product detail */
.product-page { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.breadcrumb { display: flex; gap: 0.5rem; font-size: 0.875rem; margin-bottom: 1.5rem; color: #6b7280; }
.breadcrumb-current { color: #374151; }
.product-layout { display: flex; flex-wrap: wrap; gap: 2rem; background: white; border-radius: 8px; padding: 1.5rem; }
.product-layout > * { flex: 1 1 24rem; }
.product-title { font-size: 1.875rem; font-weight: 700; margin: 0 0 1rem; }
.product-meta { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
.availability { font-size: 0.875rem; font-weight: 600; }
.availability--in { color: #16a34a; }
.availability--out { color: #dc2626; }
.product-image img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 8px; margin-bottom: 1.5rem; }
.product-description { background: #f9fafb; border-radius: 8px; padding: 1rem; color: #4b5563; }
.addon-group { border: 0; padding: 0; margin: 0 0 1.5rem; }
.addon-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.addon-name { font-weight: 600; font-size: 1.125rem; }
.addon-required { color: #ef4444; font-size: 0.875rem; }
.addon-options { display: flex; flex-direction: column; gap: 0.75rem; }
.addon-option { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem; background: #f9fafb; border-radius: 8px; }
.addon-choice { display: flex; align-items: center; gap: 0.75rem; font-weight: 500; }
.addon-choice input { width: 1rem; height: 1rem; accent-color: #facc15; }
.addon-price { color: #4b5563; }
.add-to-cart-button { width: 100%; background: #facc15; border: 0; font-weight: 700; padding: 0.75rem 1.5rem; border-radius: 8px; cursor: pointer; }
.add-to-cart-button:hover { background: #eab308; }
.add-to-cart-button:disabled { background: #e5e7eb; color: #6b7280; cursor: not-allowed; }
@media (max-width: 767px) {
  .add-to-cart-bar { position: fixed; bottom: 0; left: 0; right: 0; background: white; padding: 1rem; }
}

/* Status pages */
.status-page { min-height: 100vh; display: flex; flex-direction: column; gap: 1rem; align-items: center; justify-content: center; }
.status-message { font-size: 1.25rem; }
.status-home { text-decoration: underline; color: #4b5563; }
"#;
