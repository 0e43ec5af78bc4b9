//! Filter panel component renderer.
//!
//! Renders the category chip row and the verified-vendors checkbox while the
//! filter panel is open.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

/// Renders the filter panel at the specified row.
///
/// Two lines: the category chips (active chip inverted) and the verified
/// checkbox. Chips use the same single-select semantics the reducer applies,
/// so the inverted chip is always the one an identical toggle would clear.
///
/// # Layout
///
/// ```text
/// Categories: [Fabric] Accessories Materials Tools
/// [x] Verified vendors only
/// ```
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_filter_panel(row: usize, panel: &FilterPanelInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Categories: ");

    let mut used = "Categories: ".len();
    for chip in &panel.chips {
        let label_len = chip.label.chars().count() + 3;
        if used + label_len > cols {
            break;
        }
        used += label_len;

        if chip.active {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("[{}]", chip.label);
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!(" ");
        } else {
            print!(" {} ", chip.label);
        }
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let checkbox = if panel.verified_only { "[x]" } else { "[ ]" };
    let line = format!("{checkbox} Verified vendors only");
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line.chars().count())));
    print!("{}", Theme::reset());

    row + 2
}
