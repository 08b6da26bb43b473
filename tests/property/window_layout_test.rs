//! Property-based tests for the window layout.
//!
//! For any window size the browser and the bottom bar tile the window
//! exactly, with the bar docked to the bottom edge.

use browselighter::types::layout::WindowLayout;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bar_is_docked_to_bottom(width in 0.0f64..4000.0, height in 30.0f64..3000.0) {
        let layout = WindowLayout::compute(width, height, 30.0);

        prop_assert_eq!(layout.bar.height, 30.0);
        prop_assert!((layout.bar.y + layout.bar.height - height).abs() < 1e-9);
        prop_assert_eq!(layout.bar.width, width);
        prop_assert_eq!(layout.browser.width, width);
    }

    #[test]
    fn browser_and_bar_tile_the_window(width in 0.0f64..4000.0, height in 0.0f64..3000.0) {
        let layout = WindowLayout::compute(width, height, 30.0);

        prop_assert_eq!(layout.browser.y, 0.0);
        prop_assert_eq!(layout.browser.y + layout.browser.height, layout.bar.y);
        prop_assert!((layout.browser.height + layout.bar.height - height).abs() < 1e-9);
        prop_assert!(layout.browser.height >= 0.0 && layout.bar.height >= 0.0);
    }
}
