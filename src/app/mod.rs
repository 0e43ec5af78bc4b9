//! Browse-page application layer coordinating state, events, and actions.
//!
//! This layer sits between the front-end loop and the query/fetch layers. It
//! implements the event-driven flow that powers the product-browsing page:
//!
//! ```text
//! User Input → Events → Reducer → State Mutations → Actions → Spawned Fetches
//!                         ↑                                        ↓
//!                         └──── tagged fetch completions ──────────┘
//! ```
//!
//! The reducer owns the filter specification and the request sequence; the
//! runtime owns execution. Completions arriving with a superseded tag are
//! discarded, so the display always reflects the last filter submitted.
//!
//! # Modules
//!
//! - [`actions`]: side-effect commands emitted by the reducer
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: input-mode and load-phase state machine types
//! - [`state`]: the [`BrowseState`] container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadPhase, SearchFocus};
pub use state::BrowseState;
