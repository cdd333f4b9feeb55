//! View-state machine and per-level scoping
//!
//! The view moves through four levels (clusters, top ideas, connected ideas,
//! all ideas). Each level decides which slice of the graph is in scope; the
//! company filter is applied on top of that slice without changing the view.

pub mod scope;
pub mod state;

pub use scope::{scope_ideas, visible_idea_count};
pub use state::{transition, ViewEvent, ViewLevel, ViewState, ViewStateMachine};
