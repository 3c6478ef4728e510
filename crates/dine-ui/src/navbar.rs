//! Site navigation bar.

const LOCATION_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="26" height="26" fill="currentColor" viewBox="0 0 16 16" aria-hidden="true"><path d="M8 16s6-5.686 6-10A6 6 0 0 0 2 6c0 4.314 6 10 6 10m0-7a3 3 0 1 1 0-6 3 3 0 0 1 0 6"/></svg>"#;

const HANDBAG_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="25" height="25" fill="black" viewBox="0 0 16 16" aria-hidden="true"><path d="M8 1a2 2 0 0 1 2 2v2H6V3a2 2 0 0 1 2-2m3 4V3a3 3 0 1 0-6 0v2H3.36a1.5 1.5 0 0 0-1.483 1.277L.85 13.13A2.5 2.5 0 0 0 3.322 16h9.355a2.5 2.5 0 0 0 2.473-2.87l-1.028-6.853A1.5 1.5 0 0 0 12.64 5zm-1 1v1.5a.5.5 0 0 0 1 0V6h1.639a.5.5 0 0 1 .494.426l1.028 6.851A1.5 1.5 0 0 1 12.678 15H3.322a1.5 1.5 0 0 1-1.483-1.723l1.028-6.851A.5.5 0 0 1 3.36 6H5v1.5a.5.5 0 1 0 1 0V6z"/></svg>"#;

const PERSON_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="black" viewBox="0 0 16 16" aria-hidden="true"><path d="M8 8a3 3 0 1 0 0-6 3 3 0 0 0 0 6m2-3a2 2 0 1 1-4 0 2 2 0 0 1 4 0m4 8c0 1-1 1-1 1H3s-1 0-1-1 1-4 6-4 6 3 6 4m-1-.004c-.001-.246-.154-.986-.832-1.664C11.516 10.68 10.289 10 8 10s-3.516.68-4.168 1.332c-.678.678-.83 1.418-.832 1.664z"/></svg>"#;

const MENU_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/></svg>"#;

/// Render the navigation bar.
///
/// Static chrome: logo, delivery location, franchise link, cart icon and
/// sign-in button on desktop; account icon and menu toggle on mobile.
pub fn render_navbar() -> String {
    format!(
        r##"<nav class="navbar">
    <div class="navbar-brand">
        <a href="/" class="navbar-logo"><img src="/logo.png" alt="Logo" width="70" height="70"></a>
        <a href="#" class="navbar-location">{location_icon}<span>Delivery to<br>Lahore, Pakistan</span></a>
    </div>
    <div class="navbar-desktop">
        <a href="#" class="navbar-franchise">Become a Franchise</a>
        <a href="#" class="navbar-cart" aria-label="Cart">{handbag_icon}</a>
        <a href="#" class="navbar-signin"><button type="button">Sign In / Register</button></a>
    </div>
    <div class="navbar-mobile">
        <a href="#" class="navbar-cart" aria-label="Account">{person_icon}</a>
        <button type="button" class="navbar-menu" aria-label="Menu">{menu_icon}</button>
    </div>
</nav>"##,
        location_icon = LOCATION_ICON,
        handbag_icon = HANDBAG_ICON,
        person_icon = PERSON_ICON,
        menu_icon = MENU_ICON,
    )
}
