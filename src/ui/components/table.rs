//! Product table component renderer.
//!
//! Renders the product list as a four-column table with PRODUCT, VENDOR,
//! PRICE, and RATING columns, a verified-vendor marker, selection
//! highlighting, and search-match highlighting on the product name.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the PRODUCT column, including the verified marker slot.
const NAME_COLUMN: usize = 31;

/// Width of the VENDOR column.
const VENDOR_COLUMN: usize = 20;

/// Width of the PRICE column.
const PRICE_COLUMN: usize = 11;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_COLUMN$}{:<VENDOR_COLUMN$}{:<PRICE_COLUMN$}{}",
        "PRODUCT", "VENDOR", "PRICE", "RATING"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items).
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single product row at the specified row position.
///
/// # Layout
///
/// ```text
/// [✓ or 2 spaces][name, padded][vendor, padded][price, padded][rating][fill]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search-match highlights on the name (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so the selection background
/// covers the entire line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.is_verified {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.verified_fg));
        }
        print!("✓ ");
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("  ");
    }

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);

    let name_visual_len = 2 + item.name.chars().count();
    print!("{}", " ".repeat(NAME_COLUMN.saturating_sub(name_visual_len)));

    print!("{:<VENDOR_COLUMN$}", clip(&item.vendor, VENDOR_COLUMN - 1));
    print!("{:<PRICE_COLUMN$}", item.price);
    print!("{}", item.rating);

    let line_len =
        NAME_COLUMN.max(name_visual_len) + VENDOR_COLUMN + PRICE_COLUMN + item.rating.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Clips a string to at most `max` characters.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
