//! Terminal rendering layer for the browse page.
//!
//! Transforms browse state into ANSI-styled output through composable
//! components, following a declarative model:
//!
//! ```text
//! BrowseState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: render-ready view model types
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable component renderers
//! - [`helpers`]: cursor positioning and match highlighting
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CategoryChip, DisplayItem, EmptyState, FilterPanelInfo, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};
