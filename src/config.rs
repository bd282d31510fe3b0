use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Chat deep link that receives the contact form text.
pub const MESSAGING_BASE_URL: &str = "https://wa.me";
pub const MESSAGING_IDENTIFIER: &str = "917276778395";

pub fn messaging_url() -> String {
    format!("{}/{}", MESSAGING_BASE_URL, MESSAGING_IDENTIFIER)
}

// Scroll geometry, in logical pixels
pub const NAV_SCROLL_OFFSET: f64 = 100.0;
pub const HOME_THRESHOLD: f64 = 200.0;
pub const ANCHOR_OFFSET: f64 = 64.0; // fixed navbar height
pub const SHADOW_THRESHOLD: f64 = 100.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const HOME_SECTION: &str = "home";

// Delays, in milliseconds
pub const MODAL_FADE_IN_MS: u32 = 10;
pub const IMAGE_SWAP_MS: u32 = 150;
pub const MODAL_CLOSE_MS: u32 = 300;
pub const REHIGHLIGHT_MS: u32 = 500;
pub const BANNER_HIDE_MS: u32 = 5000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const DEFAULT_TAB: &str = "nagaon";
