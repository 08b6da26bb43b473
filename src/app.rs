//! Main window controller for BrowseLighter.
//!
//! Holds the browser surface and the URL-bar text, and implements the submit
//! action shared by the "Go" button and the Enter key. Toolkit code feeds it
//! events; it never touches widgets itself.

use log::{debug, info};

use crate::services::navigation::{NavigationResolver, NavigationResolverTrait};
use crate::services::new_tab::new_tab_page_html;
use crate::services::url_bar::BarMessage;
use crate::surface::BrowserSurface;
use crate::types::config::ShellConfig;
use crate::types::navigation::{Key, KeyDisposition, NavigationRequest};

pub struct MainWindow<S: BrowserSurface> {
    surface: S,
    resolver: NavigationResolver,
    url_text: String,
}

impl<S: BrowserSurface> MainWindow<S> {
    /// Wraps `surface` and shows the welcome page on it.
    pub fn new(surface: S, config: &ShellConfig) -> Self {
        let window = Self {
            surface,
            resolver: NavigationResolver::from_config(config),
            url_text: String::new(),
        };

        if let Err(e) = window.surface.load_html(&new_tab_page_html()) {
            debug!("welcome page not shown: {}", e);
        }
        window
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    pub fn set_url_text(&mut self, text: impl Into<String>) {
        self.url_text = text.into();
    }

    /// "Go" button activation.
    pub fn on_go_clicked(&mut self) -> Option<NavigationRequest> {
        self.submit()
    }

    /// Key press in the URL input. Enter submits and is consumed.
    pub fn on_key_down(&mut self, key: &Key) -> KeyDisposition {
        match key {
            Key::Enter => {
                self.submit();
                KeyDisposition::Suppress
            }
            Key::Other(_) => KeyDisposition::Default,
        }
    }

    /// Applies a message from the bar: syncs the text, then runs its trigger.
    pub fn handle_bar_message(&mut self, message: &BarMessage) -> KeyDisposition {
        self.set_url_text(message.text());
        match message.key() {
            Some(key) => self.on_key_down(&key),
            None => {
                self.on_go_clicked();
                KeyDisposition::Default
            }
        }
    }

    /// Navigates to whatever the URL bar currently holds.
    ///
    /// Returns the issued request, or `None` when the bar is blank.
    pub fn submit(&mut self) -> Option<NavigationRequest> {
        let request = self.resolver.request_for(&self.url_text)?;
        info!("navigating to {}", request.url);

        if let Err(e) = self
            .surface
            .navigate(&request.url, None, None, &request.headers)
        {
            debug!("navigation to {} not started: {}", request.url, e);
        }
        Some(request)
    }
}
