use std::fmt;

/// An extra HTTP request header attached to a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub name: String,
    pub value: String,
}

impl RequestHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn user_agent(value: impl Into<String>) -> Self {
        Self::new("User-Agent", value)
    }
}

impl fmt::Display for RequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A navigation issued to the browser surface by the submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
    pub headers: Vec<RequestHeader>,
}

impl NavigationRequest {
    /// Renders the headers as a CRLF-terminated header block.
    pub fn to_header_block(&self) -> String {
        self.headers
            .iter()
            .map(|h| format!("{}\r\n", h))
            .collect()
    }
}

/// Keys the URL input reports to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` name.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// What the input widget should do with a key after the window handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Let the widget apply its default handling.
    Default,
    /// The window consumed the key; the widget must not act on it.
    Suppress,
}
