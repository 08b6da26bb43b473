//! BrowseLighter: a minimal browser shell.
//!
//! Entry point: opens the main window and runs the event loop until it is closed.
//! When built without the `gui` feature, runs a console mode that reads one
//! URL-bar entry per stdin line and prints the resulting browser calls.

#![cfg_attr(all(not(debug_assertions), feature = "gui"), windows_subsystem = "windows")]

use browselighter::types::config::ShellConfig;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();

    if let Err(e) = browselighter::ui::webview_app::run(ShellConfig::default()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use std::io::BufRead;

    use browselighter::app::MainWindow;
    use browselighter::surface::ConsoleSurface;

    init_logging();

    let mut window = MainWindow::new(ConsoleSurface, &ShellConfig::default());
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(text) => {
                window.set_url_text(text);
                if window.on_go_clicked().is_none() {
                    println!("(nothing to navigate)");
                }
            }
            Err(e) => {
                log::error!("failed to read input: {}", e);
                std::process::exit(1);
            }
        }
    }
}
