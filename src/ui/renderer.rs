//! Top-level rendering coordinator.
//!
//! The main rendering entry point: computes the view model from browse state
//! and delegates to the matching layout (loading indicator, empty state, or
//! the normal/search table layouts).

use crate::app::BrowseState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the browse page to stdout.
///
/// Prints ANSI-styled output using absolute cursor positioning; the caller is
/// responsible for clearing the screen between frames.
///
/// # Parameters
///
/// * `state` - Current browse-page state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &BrowseState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// The loading indicator wins over everything: the page shows it for the full
/// simulated round-trip, exactly as a spinner would. The empty state renders
/// when a finished fetch matched nothing; otherwise the table layouts take
/// over, with the search variant adding the query box.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.loading {
        components::render_loading(theme, cols);
        return;
    }

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
