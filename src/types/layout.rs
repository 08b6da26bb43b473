//! Window layout: the browser surface fills the window above a bottom-docked bar.

/// A rectangle in logical units, origin at the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Placement of the two child surfaces inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub browser: Bounds,
    pub bar: Bounds,
}

impl WindowLayout {
    /// Docks a `bar_height` panel to the bottom edge and gives the rest to the browser.
    ///
    /// Negative sizes clamp to zero, so a window shorter than the bar shows
    /// only the (clipped) bar.
    pub fn compute(width: f64, height: f64, bar_height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let bar_height = bar_height.max(0.0).min(height);
        let browser_height = height - bar_height;

        Self {
            browser: Bounds::new(0.0, 0.0, width, browser_height),
            bar: Bounds::new(0.0, browser_height, width, bar_height),
        }
    }
}
