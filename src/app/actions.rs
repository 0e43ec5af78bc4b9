//! Actions representing side effects requested by the browse reducer.
//!
//! The event handler returns a `Vec<Action>` after processing each event;
//! the runtime (the terminal front, or a test harness) executes them. Fetch
//! actions are expected to be spawned concurrently and to feed their
//! completions back into the reducer as events. Several may be in flight at
//! once, which is exactly the situation the request sequence tag exists for.

use crate::fetch::RequestSeq;
use crate::query::FilterSpec;

/// Side effects to be executed by the runtime driving the browse page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch the products matching `filter` and report back with
    /// `Event::ItemsFetched { seq, .. }` carrying the same tag.
    ///
    /// The filter is a snapshot taken when the action was emitted; the live
    /// spec in state may already have moved on by the time the fetch lands,
    /// which is why the tag, not the filter, decides freshness.
    FetchItems {
        /// Tag this fetch was issued under.
        seq: RequestSeq,
        /// Snapshot of the filter to query with.
        filter: FilterSpec,
    },

    /// Fetch the category enumeration and report back with
    /// `Event::CategoriesFetched`.
    FetchCategories,

    /// Tear down the front-end loop.
    Quit,
}
