//! View state and transitions
//!
//! Transitions:
//! - clusters --select cluster--> top ideas
//! - top ideas --select idea--> connected ideas
//! - top ideas --show all--> all ideas
//! - connected ideas --select idea--> connected ideas
//! - connected ideas --back--> top ideas, all ideas --back--> top ideas,
//!   top ideas --back--> clusters
//! - any level --back to clusters--> clusters
//!
//! Events without a row for the current level are ignored. Requests that
//! would break the focus invariant (focused idea inside focused cluster) are
//! repaired by falling back a level instead of failing.

use crate::graph::{ClusterId, GraphStore, IdeaId};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Discrete zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewLevel {
    Clusters,
    TopIdeas,
    ConnectedIdeas,
    AllIdeas,
}

impl fmt::Display for ViewLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewLevel::Clusters => "clusters",
            ViewLevel::TopIdeas => "topIdeas",
            ViewLevel::ConnectedIdeas => "connectedIdeas",
            ViewLevel::AllIdeas => "allIdeas",
        };
        f.write_str(name)
    }
}

/// Current level with exactly the focus that level needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum ViewState {
    #[default]
    Clusters,
    TopIdeas { cluster: ClusterId },
    ConnectedIdeas { cluster: ClusterId, idea: IdeaId },
    AllIdeas { cluster: ClusterId },
}

impl ViewState {
    pub fn level(&self) -> ViewLevel {
        match self {
            ViewState::Clusters => ViewLevel::Clusters,
            ViewState::TopIdeas { .. } => ViewLevel::TopIdeas,
            ViewState::ConnectedIdeas { .. } => ViewLevel::ConnectedIdeas,
            ViewState::AllIdeas { .. } => ViewLevel::AllIdeas,
        }
    }

    pub fn focused_cluster(&self) -> Option<&ClusterId> {
        match self {
            ViewState::Clusters => None,
            ViewState::TopIdeas { cluster }
            | ViewState::ConnectedIdeas { cluster, .. }
            | ViewState::AllIdeas { cluster } => Some(cluster),
        }
    }

    pub fn focused_idea(&self) -> Option<&IdeaId> {
        match self {
            ViewState::ConnectedIdeas { idea, .. } => Some(idea),
            _ => None,
        }
    }
}

/// User intents that drive the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SelectCluster(ClusterId),
    SelectIdea(IdeaId),
    ShowAll,
    Back,
    BackToClusters,
}

/// Compute the state following `event`. Never fails.
pub fn transition(state: &ViewState, event: &ViewEvent, store: &GraphStore) -> ViewState {
    apply(state, event, store).unwrap_or_else(|| state.clone())
}

/// Table row for `event` at `state`, or `None` when the level has no row
fn apply(state: &ViewState, event: &ViewEvent, store: &GraphStore) -> Option<ViewState> {
    let next = match (state, event) {
        (ViewState::Clusters, ViewEvent::SelectCluster(cluster)) => {
            if store.get_cluster(cluster).is_some() {
                ViewState::TopIdeas { cluster: cluster.clone() }
            } else {
                warn!("Unknown cluster {} selected, staying on clusters", cluster);
                ViewState::Clusters
            }
        }

        (ViewState::TopIdeas { cluster }, ViewEvent::SelectIdea(idea)) => {
            match store.get_idea(idea) {
                Some(found) if found.belongs_to(cluster) => ViewState::ConnectedIdeas {
                    cluster: cluster.clone(),
                    idea: idea.clone(),
                },
                _ => {
                    warn!("Idea {} is not in cluster {}, keeping top ideas", idea, cluster);
                    ViewState::TopIdeas { cluster: cluster.clone() }
                }
            }
        }

        (ViewState::TopIdeas { cluster }, ViewEvent::ShowAll) => {
            ViewState::AllIdeas { cluster: cluster.clone() }
        }

        (ViewState::ConnectedIdeas { cluster, .. }, ViewEvent::SelectIdea(idea)) => {
            // A neighbour may live in another cluster: follow it there
            match store.get_idea(idea).and_then(|found| store.cluster_of(found)) {
                Some(target) => ViewState::ConnectedIdeas {
                    cluster: target.id.clone(),
                    idea: idea.clone(),
                },
                None => {
                    warn!("Idea {} has no cluster, falling back to top ideas", idea);
                    ViewState::TopIdeas { cluster: cluster.clone() }
                }
            }
        }

        (ViewState::ConnectedIdeas { cluster, .. }, ViewEvent::Back)
        | (ViewState::AllIdeas { cluster }, ViewEvent::Back) => {
            ViewState::TopIdeas { cluster: cluster.clone() }
        }

        (ViewState::TopIdeas { .. }, ViewEvent::Back) => ViewState::Clusters,

        (ViewState::TopIdeas { .. }, ViewEvent::BackToClusters)
        | (ViewState::ConnectedIdeas { .. }, ViewEvent::BackToClusters)
        | (ViewState::AllIdeas { .. }, ViewEvent::BackToClusters) => ViewState::Clusters,

        // No row for this level: ignore
        _ => return None,
    };
    Some(next)
}

/// Holder of the current view state and the inspected-idea side panel
#[derive(Debug, Clone, Default)]
pub struct ViewStateMachine {
    state: ViewState,
    inspected: Option<IdeaId>,
}

impl ViewStateMachine {
    /// Starts on the clusters level with no focus
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn level(&self) -> ViewLevel {
        self.state.level()
    }

    /// Idea shown in the detail panel, if any
    pub fn inspected(&self) -> Option<&IdeaId> {
        self.inspected.as_ref()
    }

    /// Show an idea in the detail panel, from any level
    pub fn inspect(&mut self, idea: IdeaId) {
        self.inspected = Some(idea);
    }

    pub fn dismiss(&mut self) {
        self.inspected = None;
    }

    /// Apply an event. Returns whether the state changed. Any event with a
    /// row at the current level clears the inspected idea, even when the
    /// state stays the same.
    pub fn handle(&mut self, event: &ViewEvent, store: &GraphStore) -> bool {
        let Some(next) = apply(&self.state, event, store) else {
            return false;
        };
        self.inspected = None;
        if next == self.state {
            return false;
        }
        debug!("View {} -> {} on {:?}", self.state.level(), next.level(), event);
        self.state = next;
        true
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        self.state = ViewState::Clusters;
        self.inspected = None;
    }

    /// Re-check focus against the store (e.g. after a reload). Focus that no
    /// longer resolves is cleared level by level. Returns whether anything
    /// was repaired.
    pub fn repair(&mut self, store: &GraphStore) -> bool {
        let repaired = match &self.state {
            ViewState::Clusters => ViewState::Clusters,
            ViewState::TopIdeas { cluster } | ViewState::AllIdeas { cluster }
                if store.get_cluster(cluster).is_none() =>
            {
                ViewState::Clusters
            }
            ViewState::ConnectedIdeas { cluster, idea } => {
                if store.get_cluster(cluster).is_none() {
                    ViewState::Clusters
                } else if !store.get_idea(idea).is_some_and(|i| i.belongs_to(cluster)) {
                    ViewState::TopIdeas { cluster: cluster.clone() }
                } else {
                    self.state.clone()
                }
            }
            other => other.clone(),
        };

        let mut changed = false;
        if repaired != self.state {
            warn!("Repairing view focus: {} -> {}", self.state.level(), repaired.level());
            self.state = repaired;
            self.inspected = None;
            changed = true;
        }
        if let Some(idea) = &self.inspected {
            if !store.contains_idea(idea) {
                self.inspected = None;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::NoCompanies;
    use crate::graph::{Cluster, Connection, Idea};

    fn store() -> GraphStore {
        let ideas = vec![
            Idea::new("a", "A").in_cluster("c1"),
            Idea::new("b", "B").in_cluster("c1"),
            Idea::new("x", "X").in_cluster("c2"),
            Idea::new("loose", "Loose"),
        ];
        let connections = vec![
            Connection::similar("a", "b", 0.5),
            Connection::similar("a", "x", 0.5),
            Connection::similar("a", "loose", 0.5),
        ];
        let clusters = vec![Cluster::new("c1", "One"), Cluster::new("c2", "Two")];
        GraphStore::from_parts(ideas, connections, clusters, &NoCompanies).unwrap()
    }

    fn cluster(id: &str) -> ClusterId {
        ClusterId::new(id)
    }

    fn idea(id: &str) -> IdeaId {
        IdeaId::new(id)
    }

    #[test]
    fn test_default_state_is_clusters() {
        let machine = ViewStateMachine::new();
        assert_eq!(machine.state(), &ViewState::Clusters);
        assert!(machine.state().focused_cluster().is_none());
        assert!(machine.state().focused_idea().is_none());
    }

    #[test]
    fn test_round_trip_returns_to_clusters() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        assert!(machine.handle(&ViewEvent::SelectCluster(cluster("c1")), &store));
        assert!(machine.handle(&ViewEvent::SelectIdea(idea("a")), &store));
        assert_eq!(machine.level(), ViewLevel::ConnectedIdeas);
        assert!(machine.handle(&ViewEvent::Back, &store));
        assert_eq!(machine.level(), ViewLevel::TopIdeas);
        assert!(machine.handle(&ViewEvent::Back, &store));
        assert_eq!(machine.state(), &ViewState::Clusters);
    }

    #[test]
    fn test_show_all_and_back() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        machine.handle(&ViewEvent::SelectCluster(cluster("c1")), &store);
        machine.handle(&ViewEvent::ShowAll, &store);
        assert_eq!(machine.state(), &ViewState::AllIdeas { cluster: cluster("c1") });
        machine.handle(&ViewEvent::Back, &store);
        assert_eq!(machine.state(), &ViewState::TopIdeas { cluster: cluster("c1") });
    }

    #[test]
    fn test_back_to_clusters_from_every_level() {
        let store = store();
        for setup in [
            vec![ViewEvent::SelectCluster(cluster("c1"))],
            vec![ViewEvent::SelectCluster(cluster("c1")), ViewEvent::SelectIdea(idea("a"))],
            vec![ViewEvent::SelectCluster(cluster("c1")), ViewEvent::ShowAll],
        ] {
            let mut machine = ViewStateMachine::new();
            for event in &setup {
                machine.handle(event, &store);
            }
            assert!(machine.handle(&ViewEvent::BackToClusters, &store));
            assert_eq!(machine.state(), &ViewState::Clusters);
        }
    }

    #[test]
    fn test_select_idea_outside_cluster_falls_back() {
        let store = store();
        let state = ViewState::TopIdeas { cluster: cluster("c1") };
        let next = transition(&state, &ViewEvent::SelectIdea(idea("x")), &store);
        assert_eq!(next, state);
        let next = transition(&state, &ViewEvent::SelectIdea(idea("missing")), &store);
        assert_eq!(next, state);
    }

    #[test]
    fn test_connected_follows_neighbour_into_other_cluster() {
        let store = store();
        let state = ViewState::ConnectedIdeas { cluster: cluster("c1"), idea: idea("a") };
        let next = transition(&state, &ViewEvent::SelectIdea(idea("x")), &store);
        assert_eq!(next, ViewState::ConnectedIdeas { cluster: cluster("c2"), idea: idea("x") });

        let next = transition(&state, &ViewEvent::SelectIdea(idea("b")), &store);
        assert_eq!(next, ViewState::ConnectedIdeas { cluster: cluster("c1"), idea: idea("b") });

        let next = transition(&state, &ViewEvent::SelectIdea(idea("loose")), &store);
        assert_eq!(next, ViewState::TopIdeas { cluster: cluster("c1") });
    }

    #[test]
    fn test_unknown_cluster_is_ignored() {
        let store = store();
        let next = transition(&ViewState::Clusters, &ViewEvent::SelectCluster(cluster("zz")), &store);
        assert_eq!(next, ViewState::Clusters);
    }

    #[test]
    fn test_events_without_a_row_are_ignored() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        assert!(!machine.handle(&ViewEvent::Back, &store));
        assert!(!machine.handle(&ViewEvent::ShowAll, &store));
        assert!(!machine.handle(&ViewEvent::SelectIdea(idea("a")), &store));
        assert_eq!(machine.state(), &ViewState::Clusters);
    }

    #[test]
    fn test_transitions_clear_inspected_idea() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        machine.inspect(idea("b"));
        assert_eq!(machine.inspected(), Some(&idea("b")));

        // Ignored event keeps the panel open
        machine.handle(&ViewEvent::Back, &store);
        assert!(machine.inspected().is_some());

        machine.handle(&ViewEvent::SelectCluster(cluster("c1")), &store);
        assert!(machine.inspected().is_none());

        machine.inspect(idea("a"));
        machine.dismiss();
        assert!(machine.inspected().is_none());
    }

    #[test]
    fn test_reselecting_focused_idea_closes_panel() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        machine.handle(&ViewEvent::SelectCluster(cluster("c1")), &store);
        machine.handle(&ViewEvent::SelectIdea(idea("a")), &store);
        machine.inspect(idea("b"));

        assert!(!machine.handle(&ViewEvent::SelectIdea(idea("a")), &store));
        assert_eq!(
            machine.state(),
            &ViewState::ConnectedIdeas {
                cluster: cluster("c1"),
                idea: idea("a"),
            }
        );
        assert!(machine.inspected().is_none());
    }

    #[test]
    fn test_repair_clears_dangling_focus() {
        let store = store();
        let mut machine = ViewStateMachine::new();
        machine.handle(&ViewEvent::SelectCluster(cluster("c1")), &store);
        machine.handle(&ViewEvent::SelectIdea(idea("a")), &store);

        let reloaded = GraphStore::from_parts(
            vec![Idea::new("b", "B").in_cluster("c1")],
            vec![],
            vec![Cluster::new("c1", "One")],
            &NoCompanies,
        )
        .unwrap();
        assert!(machine.repair(&reloaded));
        assert_eq!(machine.state(), &ViewState::TopIdeas { cluster: cluster("c1") });

        assert!(machine.repair(&GraphStore::empty()));
        assert_eq!(machine.state(), &ViewState::Clusters);
        assert!(!machine.repair(&GraphStore::empty()));
    }
}
