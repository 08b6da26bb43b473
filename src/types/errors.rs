use thiserror::Error;

// === FeatureControlError ===

/// Errors from writing the per-application browser emulation key.
///
/// Callers treat every variant the same way: the write is a hint, and the
/// shell runs identically without it.
#[derive(Debug, Error)]
pub enum FeatureControlError {
    /// The current platform has no feature-control registry.
    #[error("Browser emulation is not supported on {0}")]
    Unsupported(String),
    /// The running executable's file name could not be determined.
    #[error("Cannot determine executable name: {0}")]
    ExecutableName(String),
    /// The feature-control key could not be created or opened.
    #[error("Failed to open feature control key: {0}")]
    OpenKey(String),
    /// The emulation value could not be written.
    #[error("Failed to write emulation value: {0}")]
    SetValue(String),
}

// === SurfaceError ===

/// Errors reported by a browser surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface refused or failed to start a navigation.
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// The surface failed to render an in-memory document.
    #[error("Loading HTML failed: {0}")]
    LoadHtml(String),
    /// A request header name or value is not valid HTTP.
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),
    /// The surface does not implement the requested capability.
    #[error("Unsupported surface operation: {0}")]
    Unsupported(String),
}

// === ShellError ===

/// Fatal startup errors from the GUI toolkit.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The top-level window could not be created.
    #[error("Failed to create window: {0}")]
    Window(String),
    /// A webview could not be created or configured.
    #[error("Failed to create webview: {0}")]
    WebView(String),
    /// The event loop could not deliver an event.
    #[error("Event loop error: {0}")]
    EventLoop(String),
}
