//! Theme palette derivation.
//!
//! Purely cosmetic: the accessibility and dark-mode switches never affect
//! inventory data, only which palette the view renders with.

/// Resolved color set for the current theme flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub item_background: &'static str,
    pub item_text: &'static str,
    pub category_background: &'static str,
}

/// Maps the two theme switches to the display palette.
pub fn palette(accessible: bool, dark_mode: bool) -> Palette {
    Palette {
        background: match (dark_mode, accessible) {
            (true, true) => "#303030",
            (true, false) => "#212121",
            (false, true) => "#eaeaea",
            (false, false) => "#f5f5f5",
        },
        text: if accessible || dark_mode {
            "#FFFFFF"
        } else {
            "#000000"
        },
        item_background: match (accessible, dark_mode) {
            (true, true) => "#FF5733",
            (true, false) => "#FFC300",
            (false, true) => "#424242",
            (false, false) => "#f0f0f0",
        },
        item_text: match (accessible, dark_mode) {
            (true, _) => "#FFFFFF",
            (false, true) => "#eaeaea",
            (false, false) => "#333",
        },
        category_background: match (accessible, dark_mode) {
            (true, true) => "#C70039",
            (true, false) => "#FF5733",
            (false, true) => "#555555",
            (false, false) => "#ddd",
        },
    }
}
