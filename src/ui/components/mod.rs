//! Composable UI component renderers.
//!
//! Each component renders one part of the browse page; the two layout
//! functions compose them for the normal and search modes.
//!
//! # Components
//!
//! - [`header`]: title bar with result count
//! - [`filters`]: category chips and verified checkbox
//! - [`search`]: search input box
//! - [`table`]: product list (PRODUCT, VENDOR, PRICE, RATING)
//! - [`empty`]: empty state for queries that matched nothing
//! - [`footer`]: command hints
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: header + optional panel/banner + table + footer
//! - [`render_search_mode`]: the same with the search bar inserted

mod empty;
mod filters;
mod footer;
mod header;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use filters::render_filter_panel;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the centered loading indicator.
///
/// Shown in place of the table while a fetch is in flight, for the full
/// duration of the simulated latency.
pub fn render_loading(theme: &Theme, cols: usize) {
    let message = "Loading products...";
    let padding = (cols.saturating_sub(message.len())) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + message.len())));
    print!("{}", Theme::reset());
}

/// Renders the error banner at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_banner(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    let text_len = message.chars().count().min(cols);
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter panel, 2 lines, if open]
/// [Error banner, 1 line, if failed]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(panel) = &vm.filter_panel {
        current_row = render_filter_panel(current_row, panel, theme, cols);
    }
    if let Some(message) = &vm.error_banner {
        current_row = render_banner(current_row, message, theme, cols);
    }
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Identical to normal mode with the 3-line search box inserted between the
/// top border and the table.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(panel) = &vm.filter_panel {
        current_row = render_filter_panel(current_row, panel, theme, cols);
    }
    current_row = render_search_bar(current_row, search, theme, cols);
    if let Some(message) = &vm.error_banner {
        current_row = render_banner(current_row, message, theme, cols);
    }
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
