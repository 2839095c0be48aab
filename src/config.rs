use log::Level;

/// localStorage slot holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` the stylesheets key their palette off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Widths strictly above this are "desktop": the drawer is forced shut.
/// At or above it the hero background gets its parallax.
pub const DESKTOP_BREAKPOINT_PX: f64 = 900.0;

pub const NAV_HEIGHT_VAR: &str = "--nav-height-dynamic";
pub const SCROLL_PADDING_PROPERTY: &str = "scroll-padding-top";

/// Drawer fades, in seconds.
pub const MENU_FADE_IN_SECS: f64 = 0.28;
pub const MENU_FADE_OUT_SECS: f64 = 0.18;

/// How far the hero background travels, in percent of its own height, over
/// one hero-section height of scrolling.
pub const PARALLAX_TRAVEL_PERCENT: f64 = -3.5;

/// Viewport fractions at which a section's top edge triggers its reveal.
pub const REVEAL_SECTION_START: f64 = 0.90;
pub const REVEAL_FOOTER_START: f64 = 0.95;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
