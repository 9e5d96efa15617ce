//! View-state controllers, one per screen.
//!
//! Each controller owns a loading flag, a result slot and an error slot,
//! exposed as a [`ViewState`] snapshot or a `watch` subscription, plus one
//! async load entry point. Loads never return errors: failures are stored as
//! user-facing messages and cancellation leaves no message at all.

mod detail;
mod news;
mod search;
mod state;

pub use detail::DetailController;
pub use news::NewsController;
pub use search::{EMPTY_QUERY_MESSAGE, SearchController};
pub use state::{LoadOutcome, LoadPhase, UNEXPECTED_ERROR_MESSAGE, ViewState};
