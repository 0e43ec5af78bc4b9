//! Event handling and state transition logic for the browse page.
//!
//! This module implements the reducer that processes user input and fetch
//! completions, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the front-end loop or from spawned fetch tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `BrowseState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Refetch discipline
//!
//! Every event that changes the filter specification, each search keystroke
//! included, issues a fresh product fetch tagged with a new sequence number.
//! The matching [`Event::ItemsFetched`] completion is accepted only if its
//! tag is still the latest issued; a completion for a superseded request is
//! dropped on the floor, which guarantees that the results on screen always
//! belong to the last filter the shopper submitted, regardless of the order
//! in which overlapping fetches resolve.

use crate::app::modes::{InputMode, LoadPhase, SearchFocus};
use crate::app::{Action, BrowseState};
use crate::domain::error::Result;
use crate::domain::ItemRecord;
use crate::fetch::RequestSeq;

/// Events triggered by user input or fetch completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The reducer processes them sequentially, so state
/// transitions are deterministic for a given event order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the selection down one row (wraps to top).
    KeyDown,
    /// Moves the selection up one row (wraps to bottom).
    KeyUp,
    /// Tears down the front-end loop.
    Quit,

    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Returns focus to the search input (from navigating focus).
    FocusSearchBar,
    /// Moves focus to the result list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query and returns to normal mode.
    Escape,

    /// Toggles the single-select category chip with the given label.
    ToggleCategory(String),
    /// Toggles the verified-vendors-only constraint.
    ToggleVerified,
    /// Opens or closes the filter panel. Display only; no refetch.
    ToggleFilterPanel,
    /// Resets the filter specification to its all-empty default.
    ClearFilters,

    /// A product fetch finished.
    ///
    /// `seq` is the tag the fetch was issued under; the error side carries
    /// the user-visible message string.
    ItemsFetched {
        seq: RequestSeq,
        result: std::result::Result<Vec<ItemRecord>, String>,
    },

    /// The category fetch finished.
    CategoriesFetched {
        result: std::result::Result<Vec<String>, String>,
    },
}

/// Processes an event, mutates browse state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to the browse-page state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a repaint, and the side
/// effects the runtime must execute. Both may be empty for ignored events
/// (e.g. a character typed outside search mode, or a stale fetch result).
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current transitions are
/// all infallible.
///
/// # Example
///
/// ```
/// use dripcity::app::{handle_event, Action, BrowseState, Event};
/// use dripcity::ui::Theme;
///
/// let mut state = BrowseState::new(Theme::default());
/// let (_, actions) = handle_event(&mut state, &Event::ClearFilters).unwrap();
/// assert!(matches!(actions[0], Action::FetchItems { seq: 1, .. }));
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut BrowseState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            let had_query = !state.filter.search.is_empty();
            state.filter.search.clear();
            if had_query {
                Ok((true, vec![refetch(state)]))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filter.search.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.filter.search, "leaving search mode");
            state.input_mode = InputMode::Normal;
            let had_query = !state.filter.search.is_empty();
            state.filter.search.clear();
            if had_query {
                Ok((true, vec![refetch(state)]))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.filter.search.push(*c);
            tracing::trace!(query = %state.filter.search, "search query extended");
            Ok((true, vec![refetch(state)]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.filter.search.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![refetch(state)]))
        }

        Event::ToggleCategory(label) => {
            state.filter.toggle_category(label);
            tracing::debug!(category = ?state.filter.active_category(), "category toggled");
            Ok((true, vec![refetch(state)]))
        }
        Event::ToggleVerified => {
            state.filter.verified_only = !state.filter.verified_only;
            tracing::debug!(verified_only = state.filter.verified_only, "verified filter toggled");
            Ok((true, vec![refetch(state)]))
        }
        Event::ToggleFilterPanel => {
            state.panel_open = !state.panel_open;
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.filter.clear();
            tracing::debug!("filters cleared");
            Ok((true, vec![refetch(state)]))
        }

        Event::ItemsFetched { seq, result } => {
            if *seq != state.last_issued {
                tracing::debug!(
                    seq = seq,
                    latest = state.last_issued,
                    "discarding stale product fetch"
                );
                return Ok((false, vec![]));
            }
            match result {
                Ok(items) => {
                    tracing::debug!(seq = seq, count = items.len(), "products updated");
                    state.items.clone_from(items);
                    state.phase = LoadPhase::Ready;
                    state.clamp_selection();
                }
                Err(message) => {
                    tracing::debug!(seq = seq, error = %message, "product fetch failed");
                    state.phase = LoadPhase::Failed(message.clone());
                }
            }
            Ok((true, vec![]))
        }
        Event::CategoriesFetched { result } => match result {
            Ok(categories) => {
                if &state.categories == categories {
                    return Ok((false, vec![]));
                }
                state.categories.clone_from(categories);
                Ok((true, vec![]))
            }
            Err(message) => {
                tracing::debug!(error = %message, "category fetch failed");
                state.phase = LoadPhase::Failed(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

/// Issues a tagged product fetch for the current filter snapshot.
fn refetch(state: &mut BrowseState) -> Action {
    let seq = state.begin_fetch();
    Action::FetchItems {
        seq,
        filter: state.filter.clone(),
    }
}

/// Short event label for span fields, without payload noise.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::Quit => "Quit",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::ToggleCategory(_) => "ToggleCategory",
        Event::ToggleVerified => "ToggleVerified",
        Event::ToggleFilterPanel => "ToggleFilterPanel",
        Event::ClearFilters => "ClearFilters",
        Event::ItemsFetched { .. } => "ItemsFetched",
        Event::CategoriesFetched { .. } => "CategoriesFetched",
    }
}
