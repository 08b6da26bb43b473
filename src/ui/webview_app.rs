//! Native shell using `wry` + `tao`.
//!
//! Construction order:
//! 1. best-effort browser emulation write (result ignored)
//! 2. top-level window
//! 3. browser child webview
//! 4. URL bar child webview docked to the bottom
//! 5. IPC from the bar → `EventLoopProxy` → `MainWindow`
//! 6. welcome page loaded by `MainWindow::new`

use log::{debug, info, warn};
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::dpi::LogicalPosition;
use wry::{Rect, WebView, WebViewBuilder};

use crate::app::MainWindow;
use crate::platform;
use crate::services::url_bar::{url_bar_html, BarLayout, BarMessage};
use crate::types::config::ShellConfig;
use crate::types::errors::ShellError;
use crate::types::layout::{Bounds, WindowLayout};
use crate::ui::webview_surface::WebViewSurface;

#[derive(Debug)]
enum UserEvent {
    Bar(BarMessage),
}

#[cfg(target_os = "linux")]
type ChildParent = gtk::Fixed;

#[cfg(not(target_os = "linux"))]
type ChildParent = Window;

fn to_rect(bounds: Bounds) -> Rect {
    Rect {
        position: LogicalPosition::new(bounds.x, bounds.y).into(),
        size: wry::dpi::LogicalSize::new(bounds.width, bounds.height).into(),
    }
}

fn apply_browser_emulation(config: &ShellConfig) {
    if !config.apply_browser_emulation {
        return;
    }
    match platform::set_browser_emulation(config.emulation_mode) {
        Ok(()) => debug!("browser emulation set to {}", config.emulation_mode),
        Err(e) => debug!("browser emulation not applied: {}", e),
    }
}

/// GTK needs a fixed container to position child webviews by bounds.
#[cfg(target_os = "linux")]
fn child_container(window: &Window) -> Result<gtk::Fixed, ShellError> {
    use gtk::prelude::*;
    use tao::platform::unix::WindowExtUnix;

    let vbox = window
        .default_vbox()
        .ok_or_else(|| ShellError::Window("window has no GTK container".to_string()))?;
    let fixed = gtk::Fixed::new();
    vbox.pack_start(&fixed, true, true, 0);
    fixed.show_all();
    Ok(fixed)
}

fn build_child<'a>(builder: WebViewBuilder<'a>, parent: &'a ChildParent) -> Result<WebView, ShellError> {
    #[cfg(target_os = "linux")]
    let built = {
        use wry::WebViewBuilderExtUnix;
        builder.build_gtk(parent)
    };

    #[cfg(not(target_os = "linux"))]
    let built = builder.build_as_child(parent);

    built.map_err(|e| ShellError::WebView(e.to_string()))
}

fn bar_ipc_handler(proxy: EventLoopProxy<UserEvent>) -> impl Fn(wry::http::Request<String>) + 'static {
    move |request| match BarMessage::parse(request.body()) {
        Ok(message) => {
            if let Err(e) = proxy.send_event(UserEvent::Bar(message)) {
                warn!("bar message lost: {}", ShellError::EventLoop(e.to_string()));
            }
        }
        Err(e) => warn!("dropping malformed bar message: {}", e),
    }
}

fn apply_layout(browser: &WebView, bar: &WebView, layout: WindowLayout) {
    if let Err(e) = browser.set_bounds(to_rect(layout.browser)) {
        warn!("failed to resize browser surface: {}", e);
    }
    if let Err(e) = bar.set_bounds(to_rect(layout.bar)) {
        warn!("failed to resize URL bar: {}", e);
    }
}

// ─── Main entry point ───

/// Builds the window and runs the event loop until it is closed.
///
/// Returns only on startup failure; a normal close exits the process.
pub fn run(config: ShellConfig) -> Result<(), ShellError> {
    apply_browser_emulation(&config);

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .build(&event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))?;

    #[cfg(target_os = "linux")]
    let fixed = child_container(&window)?;
    #[cfg(target_os = "linux")]
    let parent: &ChildParent = &fixed;
    #[cfg(not(target_os = "linux"))]
    let parent: &ChildParent = &window;

    let layout = WindowLayout::compute(config.width, config.height, config.bar_height);

    let browser = build_child(
        WebViewBuilder::new()
            .with_bounds(to_rect(layout.browser))
            .with_devtools(cfg!(debug_assertions)),
        parent,
    )?;

    let bar = build_child(
        WebViewBuilder::new()
            .with_bounds(to_rect(layout.bar))
            .with_html(url_bar_html(&BarLayout::default()))
            .with_ipc_handler(bar_ipc_handler(proxy)),
        parent,
    )?;

    let mut main_window = MainWindow::new(WebViewSurface::new(browser), &config);
    info!("{} started", config.title);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let logical = size.to_logical::<f64>(window.scale_factor());
                let layout = WindowLayout::compute(logical.width, logical.height, config.bar_height);
                apply_layout(main_window.surface().webview(), &bar, layout);
            }

            Event::UserEvent(UserEvent::Bar(message)) => {
                main_window.handle_bar_message(&message);
            }

            _ => {}
        }
    })
}
