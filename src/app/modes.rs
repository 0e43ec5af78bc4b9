//! Input-mode state types for the browse page.
//!
//! The browse page operates in one of two input modes that decide how
//! keystrokes are interpreted and whether the search bar is drawn:
//! - **Normal**: navigation and command mode
//! - **Search**: live query editing or result navigation
//!
//! # Example
//!
//! ```
//! use dripcity::app::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert_ne!(mode, InputMode::Normal);
//! ```

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or move through the filtered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes append to the search query; every change refetches.
    Typing,

    /// Keystrokes navigate the result list; the query stays frozen.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which events the reducer honors and which footer hint and layout
/// the renderer picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search with a [`SearchFocus`] sub-state. The search bar is
    /// rendered while in this mode.
    Search(SearchFocus),
}

/// Load phase of the displayed result set.
///
/// Kept separate from the result vector itself so that "no products matched"
/// (`Ready` with an empty list) is representable distinctly from "still
/// fetching" and "last fetch failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch is in flight; the UI shows a loading indicator.
    Loading,

    /// The displayed items reflect the latest issued fetch.
    Ready,

    /// The latest fetch failed; the message is user-visible and the state
    /// recovers as soon as any filter change triggers a new fetch.
    Failed(String),
}
