//! The static "new tab" page shown at startup.
//!
//! The page is built in memory and handed to the browser surface directly;
//! nothing is read from disk or fetched.

pub const NEW_TAB_TITLE: &str = "BrowseLighter - New Tab";
pub const WELCOME_HEADING: &str = "Welcome to BrowseLighter!";
pub const WELCOME_HINT: &str = "Type a URL or search term below and click Go.";

const NEW_TAB_CSS: &str = "body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; \
text-align: center; padding-top: 150px; background-color: #f0f0f0; }\n\
h1 { color: #333; }\n\
p { color: #666; font-size: 18px; }";

/// Builds the welcome document.
pub fn new_tab_page_html() -> String {
    let mut html = String::with_capacity(NEW_TAB_CSS.len() + 400);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\">");
    html.push_str("<title>");
    html.push_str(NEW_TAB_TITLE);
    html.push_str("</title><style>");
    html.push_str(NEW_TAB_CSS);
    html.push_str("</style></head><body>");
    html.push_str("<h1>");
    html.push_str(WELCOME_HEADING);
    html.push_str("</h1><p>");
    html.push_str(WELCOME_HINT);
    html.push_str("</p></body></html>");
    html
}
