//! Fixed shell configuration.
//!
//! BrowseLighter reads no config file, flags or environment; these values are
//! compiled in and gathered here so the window, the bar and the submit action
//! agree on them.

/// Identification string sent with every navigation from the URL bar.
pub const FIREFOX_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:115.0) Gecko/20100101 Firefox/115.0";

/// Search endpoint; the encoded query is appended directly.
pub const GOOGLE_SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// IE11 edge mode for `FEATURE_BROWSER_EMULATION`.
pub const IE11_EDGE_MODE: u32 = 11001;

/// Window and navigation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub title: String,
    /// Initial inner width in logical units.
    pub width: f64,
    /// Initial inner height in logical units.
    pub height: f64,
    /// Height of the bottom URL bar panel.
    pub bar_height: f64,
    pub search_endpoint: String,
    pub user_agent: String,
    pub emulation_mode: u32,
    /// Whether startup attempts the browser emulation registry write.
    pub apply_browser_emulation: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "BrowseLighter".to_string(),
            width: 800.0,
            height: 600.0,
            bar_height: 30.0,
            search_endpoint: GOOGLE_SEARCH_ENDPOINT.to_string(),
            user_agent: FIREFOX_USER_AGENT.to_string(),
            emulation_mode: IE11_EDGE_MODE,
            apply_browser_emulation: true,
        }
    }
}
