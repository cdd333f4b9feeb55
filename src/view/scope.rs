//! Which ideas each level covers
//!
//! The unfiltered scope feeds the company list offered to the user; the
//! visible count applies the filter snapshot and the same caps the layout
//! uses, so the header always agrees with what is drawn.

use super::state::ViewState;
use crate::filter::FilterSnapshot;
use crate::graph::{GraphStore, Idea};

/// Ideas in scope for `state`, ignoring the company filter
pub fn scope_ideas<'a>(store: &'a GraphStore, state: &ViewState, top_limit: usize) -> Vec<&'a Idea> {
    match state {
        ViewState::Clusters => store.ideas().collect(),
        ViewState::AllIdeas { cluster } => store.ideas_in_cluster(cluster).collect(),
        ViewState::TopIdeas { cluster } => {
            let mut ranked = store.rank_by_degree(store.ideas_in_cluster(cluster));
            ranked.truncate(top_limit);
            ranked
        }
        ViewState::ConnectedIdeas { idea, .. } => match store.get_idea(idea) {
            Some(focus) => std::iter::once(focus).chain(store.neighbors(idea)).collect(),
            None => Vec::new(),
        },
    }
}

/// Number of idea nodes the current level shows under the active filter
pub fn visible_idea_count(
    store: &GraphStore,
    snapshot: &FilterSnapshot,
    state: &ViewState,
    top_limit: usize,
) -> usize {
    match state {
        ViewState::Clusters => snapshot.visible_count(),
        ViewState::TopIdeas { cluster } => snapshot.cluster_count(cluster).min(top_limit),
        ViewState::AllIdeas { cluster } => snapshot.cluster_count(cluster),
        ViewState::ConnectedIdeas { idea, .. } => {
            if !store.contains_idea(idea) {
                return 0;
            }
            // The focused idea is always drawn
            1 + store
                .neighbors(idea)
                .iter()
                .filter(|n| snapshot.is_visible(&n.id))
                .count()
        }
    }
}
