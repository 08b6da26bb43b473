//! BrowseLighter UI layer.
//!
//! Uses `wry` for the embedded browser surface and `tao` for the window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The window holds two child webviews: the browser surface on top and the
//! URL bar docked to the bottom edge. The bar talks to Rust over wry IPC.

pub mod webview_app;
pub mod webview_surface;
