//! View model types representing renderable browse-page state.
//!
//! View models are computed from [`BrowseState`](crate::app::BrowseState) and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: formatted prices, truncated names, pre-computed
//! highlight ranges, and the flags that pick between the loading, empty,
//! error, and table layouts.

/// Complete view model for one render of the browse page.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Product rows inside the current display window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (title with result count).
    pub header: HeaderInfo,

    /// Footer information (command hints).
    pub footer: FooterInfo,

    /// Empty-state message, set when a finished fetch matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Search bar contents, set while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Filter panel contents, set while the panel is open.
    pub filter_panel: Option<FilterPanelInfo>,

    /// Whether a fetch is in flight. The renderer swaps the table for a
    /// loading indicator while this is set.
    pub loading: bool,

    /// User-visible message of the last failed fetch, if any.
    pub error_banner: Option<String>,
}

/// Display information for a single product row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Product name, pre-truncated to the name column width.
    pub name: String,

    /// Vendor display name.
    pub vendor: String,

    /// Formatted price label (currency sign, thousands grouping).
    pub price: String,

    /// Formatted rating, e.g. "4.8".
    pub rating: String,

    /// Whether the vendor is verified; rendered as a leading marker.
    pub is_verified: bool,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hint text (e.g., "search <text> · clear · q").
    pub commands: String,
}

/// Empty-state message display information.
///
/// Shown when a completed fetch matched no products: an ordinary outcome,
/// visually distinct from the loading indicator and the error banner.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No products found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Filter panel display information.
#[derive(Debug, Clone)]
pub struct FilterPanelInfo {
    /// Category chips in enumeration order.
    pub chips: Vec<CategoryChip>,

    /// Whether the verified-vendors-only checkbox is ticked.
    pub verified_only: bool,
}

/// One category chip in the filter panel.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    /// Category label, matched exactly by the query engine.
    pub label: String,

    /// Whether this chip is the active single selection.
    pub active: bool,
}
