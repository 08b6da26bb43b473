//! `BrowserSurface` backed by a `wry` webview.

use wry::http::header::{HeaderMap, HeaderName, HeaderValue};
use wry::WebView;

use crate::surface::BrowserSurface;
use crate::types::errors::SurfaceError;
use crate::types::navigation::RequestHeader;

pub struct WebViewSurface {
    webview: WebView,
}

impl WebViewSurface {
    pub fn new(webview: WebView) -> Self {
        Self { webview }
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }
}

fn header_map(headers: &[RequestHeader]) -> Result<HeaderMap, SurfaceError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        let name = HeaderName::from_bytes(header.name.as_bytes())
            .map_err(|e| SurfaceError::InvalidHeader(format!("{}: {}", header.name, e)))?;
        let value = HeaderValue::from_str(&header.value)
            .map_err(|e| SurfaceError::InvalidHeader(format!("{}: {}", header.name, e)))?;
        map.append(name, value);
    }
    Ok(map)
}

impl BrowserSurface for WebViewSurface {
    fn navigate(
        &self,
        url: &str,
        target_frame: Option<&str>,
        post_data: Option<&[u8]>,
        extra_headers: &[RequestHeader],
    ) -> Result<(), SurfaceError> {
        if let Some(frame) = target_frame {
            return Err(SurfaceError::Unsupported(format!("target frame '{}'", frame)));
        }
        if post_data.is_some() {
            return Err(SurfaceError::Unsupported("POST navigation".to_string()));
        }

        let headers = header_map(extra_headers)?;
        self.webview
            .load_url_with_headers(url, headers)
            .map_err(|e| SurfaceError::Navigation(e.to_string()))
    }

    fn load_html(&self, html: &str) -> Result<(), SurfaceError> {
        self.webview
            .load_html(html)
            .map_err(|e| SurfaceError::LoadHtml(e.to_string()))
    }
}
