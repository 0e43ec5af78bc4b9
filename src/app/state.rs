//! Browse-page state container and view model computation.
//!
//! This module defines [`BrowseState`], the single source of truth for the
//! product-browsing page: the displayed result set, the category list, the
//! live filter specification, the load phase, and the request sequence that
//! keeps overlapping fetches honest.
//!
//! # State vs. derived display
//!
//! The displayed `items` are whatever the latest accepted fetch returned;
//! the state never filters locally. Filtering always round-trips through the
//! fetch coordinator so the page behaves identically against the bundled
//! in-memory source and a real remote backend.
//!
//! # View Model Computation
//!
//! [`compute_viewmodel`](BrowseState::compute_viewmodel) transforms a state
//! snapshot into a renderable representation: a display window centered on
//! the selection, formatted product columns, substring-match highlighting,
//! and the loading/empty/error surfaces.

use super::modes::{InputMode, LoadPhase, SearchFocus};
use crate::domain::ItemRecord;
use crate::fetch::RequestSeq;
use crate::query::FilterSpec;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CategoryChip, DisplayItem, EmptyState, FilterPanelInfo, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

/// Central state container for the product-browsing page.
///
/// Mutated only by the event handler in response to user input and fetch
/// completions. View models are computed on demand from snapshots.
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Products from the latest accepted fetch, in catalog order.
    pub items: Vec<ItemRecord>,

    /// Category enumeration for the filter chips.
    pub categories: Vec<String>,

    /// The live filter specification the shopper is editing.
    pub filter: FilterSpec,

    /// Load phase of `items`: in flight, settled, or failed.
    pub phase: LoadPhase,

    /// Tag of the most recently issued product fetch.
    ///
    /// A completion event is accepted only when its tag equals this value;
    /// anything older is a stale response and is dropped.
    pub last_issued: RequestSeq,

    /// Zero-based index of the selected row within `items`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Whether the filter panel (chips + verified checkbox) is open.
    pub panel_open: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl BrowseState {
    /// Creates the initial page state: empty lists, empty filter, loading.
    ///
    /// The page starts in the `Loading` phase because the runtime issues the
    /// bootstrap fetches immediately after construction.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            filter: FilterSpec::default(),
            phase: LoadPhase::Loading,
            last_issued: 0,
            selected_index: 0,
            input_mode: InputMode::Normal,
            panel_open: false,
            theme,
        }
    }

    /// Registers a new product fetch and returns its tag.
    ///
    /// Bumps the issue counter and flips the phase to `Loading`. Every filter
    /// change goes through here, so the counter is strictly increasing over
    /// the session and the newest tag always wins.
    pub fn begin_fetch(&mut self) -> RequestSeq {
        self.last_issued += 1;
        self.phase = LoadPhase::Loading;
        tracing::debug!(seq = self.last_issued, "product fetch issued");
        self.last_issued
    }

    /// Moves the selection down one row, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Moves the selection up one row, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected product, if any row is visible.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ItemRecord> {
        self.items.get(self.selected_index)
    }

    /// Clamps the selection after the result set changed size.
    pub(crate) fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.items.len() - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Windows the result list around the selection, formats each visible row,
    /// and fills in the chrome (header, footer, search bar, filter panel) plus
    /// whichever of the loading/empty/error surfaces applies.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let loading = matches!(self.phase, LoadPhase::Loading);
        let error_banner = match &self.phase {
            LoadPhase::Failed(message) => Some(message.clone()),
            _ => None,
        };

        let empty_state = if matches!(self.phase, LoadPhase::Ready) && self.items.is_empty() {
            Some(EmptyState {
                message: "No products found".to_string(),
                subtitle: "Try adjusting your search or filters".to_string(),
            })
        } else {
            None
        };

        if loading || empty_state.is_some() || self.items.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state,
                search_bar: self.compute_search_bar(),
                filter_panel: self.compute_filter_panel(),
                loading,
                error_banner,
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.items.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = self.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                self.compute_display_item(item, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            filter_panel: self.compute_filter_panel(),
            loading: false,
            error_banner,
        }
    }

    /// Formats one product row for the visible window.
    ///
    /// Names are truncated to the product column, tighter on narrow
    /// terminals so the price and rating columns stay on screen.
    fn compute_display_item(&self, item: &ItemRecord, absolute_idx: usize, cols: usize) -> DisplayItem {
        const NAME_WIDTH: usize = 28;
        const NARROW_NAME_WIDTH: usize = 18;

        let name_width = if cols < 70 { NARROW_NAME_WIDTH } else { NAME_WIDTH };
        let name = if item.name.chars().count() > name_width {
            let head: String = item.name.chars().take(name_width - 3).collect();
            format!("{head}...")
        } else {
            item.name.clone()
        };

        let highlight_ranges = if self.filter.search.is_empty() {
            vec![]
        } else {
            substring_ranges(&name, &self.filter.search)
        };

        DisplayItem {
            name,
            vendor: item.vendor.clone(),
            price: item.price_label(),
            rating: format!("{:.1}", item.rating),
            is_verified: item.verified,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes the header title with the current result count.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Drip City Marketplace ({}) ", self.items.len()),
        }
    }

    /// Computes the footer command hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let commands = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "type to filter  Enter: browse results  ESC: clear search".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "j/k: navigate  /: edit query  ESC: clear search".to_string()
            }
            InputMode::Normal => {
                "search <text>  cat <label>  verified  filters  clear  j/k  q: quit".to_string()
            }
        };
        FooterInfo { commands }
    }

    /// Computes the search bar contents when in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filter.search.clone(),
            })
        } else {
            None
        }
    }

    /// Computes the filter panel contents when the panel is open.
    fn compute_filter_panel(&self) -> Option<FilterPanelInfo> {
        if !self.panel_open {
            return None;
        }
        let chips = self
            .categories
            .iter()
            .map(|label| CategoryChip {
                label: label.clone(),
                active: self.filter.active_category() == Some(label.as_str()),
            })
            .collect();
        Some(FilterPanelInfo {
            chips,
            verified_only: self.filter.verified_only,
        })
    }

    /// Rows left for product listing after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, table header, and
    /// footer, plus the search bar and filter panel when visible.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = 6;
        if matches!(self.input_mode, InputMode::Search(_)) {
            chrome += 3;
        }
        if self.panel_open {
            chrome += 2;
        }
        total_rows.saturating_sub(chrome)
    }
}

/// Finds non-overlapping occurrences of `needle` in `text`, ignoring case.
///
/// Returns `(start, end)` character-index ranges, exclusive end, suitable for
/// the highlight renderer. Matching is plain substring search, the same rule
/// the query engine applies, so every highlighted row really did match.
fn substring_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let hay: Vec<char> = text.to_lowercase().chars().collect();
    let pat: Vec<char> = needle.to_lowercase().chars().collect();

    if pat.is_empty() || pat.len() > hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()] == pat[..] {
            ranges.push((i, i + pat.len()));
            i += pat.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> ItemRecord {
        ItemRecord {
            id,
            name: name.to_string(),
            category: "Fabric".to_string(),
            price: 4500,
            rating: 4.8,
            vendor: "FabricsNG".to_string(),
            verified: true,
            image: String::new(),
            description: String::new(),
        }
    }

    fn ready_state(names: &[&str]) -> BrowseState {
        let mut state = BrowseState::new(Theme::default());
        state.items = names
            .iter()
            .enumerate()
            .map(|(i, n)| item(i as i64, n))
            .collect();
        state.phase = LoadPhase::Ready;
        state
    }

    #[test]
    fn begin_fetch_is_strictly_increasing() {
        let mut state = BrowseState::new(Theme::default());
        let a = state.begin_fetch();
        let b = state.begin_fetch();
        assert!(b > a);
        assert_eq!(state.last_issued, b);
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = ready_state(&["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn empty_ready_state_surfaces_empty_state_not_error() {
        let state = ready_state(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(!vm.loading);
        assert!(vm.error_banner.is_none());
    }

    #[test]
    fn loading_suppresses_rows_and_empty_state() {
        let mut state = ready_state(&["a"]);
        state.phase = LoadPhase::Loading;
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.loading);
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn failed_phase_carries_the_banner() {
        let mut state = ready_state(&["a"]);
        state.phase = LoadPhase::Failed("Fetch error: backend unreachable".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.error_banner.as_deref(),
            Some("Fetch error: backend unreachable")
        );
    }

    #[test]
    fn highlight_ranges_follow_the_query() {
        let mut state = ready_state(&["Leather Handbag Straps"]);
        state.filter.search = "LEATHER".to_string();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 7)]);
    }

    #[test]
    fn substring_ranges_finds_repeats_without_overlap() {
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(substring_ranges("abc", "zz"), vec![]);
        assert_eq!(substring_ranges("abc", ""), vec![]);
    }

    #[test]
    fn filter_panel_marks_the_active_chip() {
        let mut state = ready_state(&["a"]);
        state.categories = vec!["Fabric".to_string(), "Tools".to_string()];
        state.panel_open = true;
        state.filter.toggle_category("Tools");

        let vm = state.compute_viewmodel(24, 80);
        let panel = vm.filter_panel.expect("panel open");
        assert!(!panel.chips[0].active);
        assert!(panel.chips[1].active);
    }
}
