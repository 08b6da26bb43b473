// BrowseLighter services
// Services provide the shell's behavior: navigation resolution, the welcome page and the URL bar.

pub mod navigation;
pub mod new_tab;
pub mod url_bar;
