//! Landing-page application layer.
//!
//! The marketing page's interactive state (hero counters, testimonial
//! carousel, newsletter form, engagement buttons, mobile menu) expressed as
//! one state container with reducer-style transitions, replacing the pile of
//! independent boolean and string cells such pages usually accumulate.
//!
//! # Modules
//!
//! - [`state`]: the [`LandingState`] container and form state machines
//! - [`handler`]: event processing and the landing [`Action`] set

pub mod handler;
pub mod state;

pub use handler::{handle_event, Action, Event};
pub use state::{LandingState, NewsletterForm, SubmitStatus};
