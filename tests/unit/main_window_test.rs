//! Unit tests for the main window controller.
//!
//! A recording surface stands in for the webview so every call the window
//! makes can be inspected.

use std::cell::RefCell;

use browselighter::app::MainWindow;
use browselighter::services::url_bar::BarMessage;
use browselighter::surface::BrowserSurface;
use browselighter::types::config::{ShellConfig, FIREFOX_USER_AGENT};
use browselighter::types::errors::SurfaceError;
use browselighter::types::navigation::{Key, KeyDisposition, RequestHeader};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum SurfaceCall {
    Navigate {
        url: String,
        target_frame: Option<String>,
        post_data: Option<Vec<u8>>,
        headers: Vec<RequestHeader>,
    },
    LoadHtml(String),
}

#[derive(Default)]
struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
}

impl RecordingSurface {
    fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    fn navigations(&self) -> Vec<SurfaceCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, SurfaceCall::Navigate { .. }))
            .collect()
    }
}

impl BrowserSurface for RecordingSurface {
    fn navigate(
        &self,
        url: &str,
        target_frame: Option<&str>,
        post_data: Option<&[u8]>,
        extra_headers: &[RequestHeader],
    ) -> Result<(), SurfaceError> {
        self.calls.borrow_mut().push(SurfaceCall::Navigate {
            url: url.to_string(),
            target_frame: target_frame.map(str::to_string),
            post_data: post_data.map(<[u8]>::to_vec),
            headers: extra_headers.to_vec(),
        });
        Ok(())
    }

    fn load_html(&self, html: &str) -> Result<(), SurfaceError> {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::LoadHtml(html.to_string()));
        Ok(())
    }
}

fn expected_navigation(url: &str) -> SurfaceCall {
    SurfaceCall::Navigate {
        url: url.to_string(),
        target_frame: None,
        post_data: None,
        headers: vec![RequestHeader::user_agent(FIREFOX_USER_AGENT)],
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_construction_loads_welcome_page_once() {
    let surface = RecordingSurface::default();
    let window = MainWindow::new(&surface, &ShellConfig::default());

    let calls = surface.calls();
    assert_eq!(calls.len(), 1, "only the welcome page is loaded at startup");
    match &calls[0] {
        SurfaceCall::LoadHtml(html) => assert!(html.contains("Welcome to BrowseLighter!")),
        other => panic!("expected load_html, got {:?}", other),
    }
    assert_eq!(window.url_text(), "");
}

// ---------------------------------------------------------------------------
// Submit action
// ---------------------------------------------------------------------------

#[rstest]
#[case("example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("c++ tutorials", "https://www.google.com/search?q=c%2B%2B%20tutorials")]
fn test_go_navigates_with_user_agent(#[case] text: &str, #[case] expected_url: &str) {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());

    window.set_url_text(text);
    let request = window.on_go_clicked().unwrap();

    assert_eq!(request.url, expected_url);
    assert_eq!(surface.navigations(), vec![expected_navigation(expected_url)]);
}

#[rstest]
#[case("")]
#[case("  ")]
#[case("\t")]
fn test_blank_input_issues_no_navigation(#[case] text: &str) {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());

    window.set_url_text(text);
    assert!(window.on_go_clicked().is_none());
    assert_eq!(window.on_key_down(&Key::Enter), KeyDisposition::Suppress);

    assert!(surface.navigations().is_empty());
}

#[test]
fn test_every_navigation_carries_the_header() {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());

    for text in ["example.com", "rust", "example.com"] {
        window.set_url_text(text);
        window.on_go_clicked();
    }

    let navigations = surface.navigations();
    assert_eq!(navigations.len(), 3);
    for call in navigations {
        match call {
            SurfaceCall::Navigate { headers, .. } => {
                assert_eq!(headers, vec![RequestHeader::user_agent(FIREFOX_USER_AGENT)]);
            }
            SurfaceCall::LoadHtml(_) => unreachable!(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enter key
// ---------------------------------------------------------------------------

#[test]
fn test_enter_matches_go_button() {
    let go_surface = RecordingSurface::default();
    let mut go_window = MainWindow::new(&go_surface, &ShellConfig::default());
    go_window.set_url_text("rust ownership");
    go_window.on_go_clicked();

    let enter_surface = RecordingSurface::default();
    let mut enter_window = MainWindow::new(&enter_surface, &ShellConfig::default());
    enter_window.set_url_text("rust ownership");
    let disposition = enter_window.on_key_down(&Key::Enter);

    assert_eq!(disposition, KeyDisposition::Suppress);
    assert_eq!(go_surface.calls(), enter_surface.calls());
}

#[test]
fn test_enter_leaves_text_untouched() {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());
    window.set_url_text("example.com");
    window.on_key_down(&Key::Enter);
    assert_eq!(window.url_text(), "example.com");
}

#[rstest]
#[case("a")]
#[case("Tab")]
#[case("Escape")]
fn test_other_keys_do_not_navigate(#[case] key: &str) {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());
    window.set_url_text("example.com");

    assert_eq!(
        window.on_key_down(&Key::from_dom(key)),
        KeyDisposition::Default
    );
    assert!(surface.navigations().is_empty());
}

// ---------------------------------------------------------------------------
// Bar messages
// ---------------------------------------------------------------------------

#[test]
fn test_bar_messages_sync_text_and_submit() {
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &ShellConfig::default());

    let go = BarMessage::parse(r#"{"cmd":"go","text":"example.com"}"#).unwrap();
    assert_eq!(window.handle_bar_message(&go), KeyDisposition::Default);
    assert_eq!(window.url_text(), "example.com");

    let enter = BarMessage::parse(r#"{"cmd":"key_down","key":"Enter","text":"example.org"}"#).unwrap();
    assert_eq!(window.handle_bar_message(&enter), KeyDisposition::Suppress);

    assert_eq!(
        surface.navigations(),
        vec![
            expected_navigation("http://example.com"),
            expected_navigation("http://example.org"),
        ]
    );
}

#[test]
fn test_search_endpoint_comes_from_config() {
    let config = ShellConfig {
        search_endpoint: "https://search.example/?q=".to_string(),
        ..ShellConfig::default()
    };
    let surface = RecordingSurface::default();
    let mut window = MainWindow::new(&surface, &config);

    window.set_url_text("hello world");
    let request = window.submit().unwrap();
    assert_eq!(request.url, "https://search.example/?q=hello%20world");
}
