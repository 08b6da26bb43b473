//! The embedded browser surface as seen by the window.
//!
//! Fetching, rendering, history and error pages all live behind this trait.
//! The window issues calls and never inspects load state.

use crate::types::errors::SurfaceError;
use crate::types::navigation::RequestHeader;

/// A widget that renders web content and accepts navigation commands.
pub trait BrowserSurface {
    /// Starts navigating to `url`.
    ///
    /// `target_frame` names a frame to load into (`None` for the top level),
    /// `post_data` turns the request into a POST, and `extra_headers` are
    /// added to the outgoing request.
    fn navigate(
        &self,
        url: &str,
        target_frame: Option<&str>,
        post_data: Option<&[u8]>,
        extra_headers: &[RequestHeader],
    ) -> Result<(), SurfaceError>;

    /// Replaces the current document with `html`.
    fn load_html(&self, html: &str) -> Result<(), SurfaceError>;
}

impl<S: BrowserSurface + ?Sized> BrowserSurface for &S {
    fn navigate(
        &self,
        url: &str,
        target_frame: Option<&str>,
        post_data: Option<&[u8]>,
        extra_headers: &[RequestHeader],
    ) -> Result<(), SurfaceError> {
        (**self).navigate(url, target_frame, post_data, extra_headers)
    }

    fn load_html(&self, html: &str) -> Result<(), SurfaceError> {
        (**self).load_html(html)
    }
}

/// Surface that prints every call to stdout; drives the console mode.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl BrowserSurface for ConsoleSurface {
    fn navigate(
        &self,
        url: &str,
        _target_frame: Option<&str>,
        _post_data: Option<&[u8]>,
        extra_headers: &[RequestHeader],
    ) -> Result<(), SurfaceError> {
        println!("navigate {}", url);
        for header in extra_headers {
            println!("  {}", header);
        }
        Ok(())
    }

    fn load_html(&self, html: &str) -> Result<(), SurfaceError> {
        println!("load_html ({} bytes)", html.len());
        Ok(())
    }
}
