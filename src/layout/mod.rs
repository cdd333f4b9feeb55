//! Level layouts
//!
//! Each view level maps the store, the filter snapshot and the current view
//! state to a flat list of positioned nodes and routed edges. Layouts are
//! pure functions of their inputs: the same store, filter and state always
//! produce bit-identical output, and nothing is kept between calls.

pub mod all_ideas;
pub mod clusters;
pub mod connected;
pub mod edge;
pub mod node;
pub mod top_ideas;

pub use edge::{edge_style, EdgeStyle, LayoutEdge};
pub use node::{LayoutNode, NodeData, SizeTier};

use crate::config::EngineConfig;
use crate::filter::FilterSnapshot;
use crate::graph::{GraphStore, Idea};
use crate::view::ViewState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the clusters level is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterPresentation {
    /// One bubble per cluster, no edges
    #[default]
    Bubbles,
    /// One region per cluster holding its top ideas, with edges between them
    Regions,
}

/// Computed node and edge set for one view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Idea nodes only, in draw order
    pub fn idea_nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|n| n.idea_id().is_some())
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Inputs shared by every level routine
pub struct LayoutDispatcher<'a> {
    pub store: &'a GraphStore,
    pub snapshot: &'a FilterSnapshot,
    pub config: &'a EngineConfig,
}

impl<'a> LayoutDispatcher<'a> {
    pub fn new(store: &'a GraphStore, snapshot: &'a FilterSnapshot, config: &'a EngineConfig) -> Self {
        Self { store, snapshot, config }
    }

    /// Layout for `state`. A focus the store does not know yields an empty
    /// layout rather than an error.
    pub fn layout(&self, state: &ViewState, presentation: ClusterPresentation) -> Layout {
        let layout = match state {
            ViewState::Clusters => match presentation {
                ClusterPresentation::Bubbles => clusters::bubbles(self),
                ClusterPresentation::Regions => clusters::regions(self),
            },
            ViewState::TopIdeas { cluster } => top_ideas::layout(self, cluster),
            ViewState::ConnectedIdeas { idea, .. } => connected::layout(self, idea),
            ViewState::AllIdeas { cluster } => all_ideas::layout(self, cluster),
        };
        debug!(
            "Layout for {}: {} nodes, {} edges",
            state.level(),
            layout.nodes.len(),
            layout.edges.len()
        );
        layout
    }

    /// Color token of the cluster an idea belongs to
    pub(crate) fn color_of(&self, idea: &Idea) -> Option<String> {
        self.store.cluster_of(idea).map(|c| c.color.clone())
    }
}

/// Convenience wrapper over [`LayoutDispatcher::layout`]
pub fn compute_layout(
    store: &GraphStore,
    snapshot: &FilterSnapshot,
    state: &ViewState,
    presentation: ClusterPresentation,
    config: &EngineConfig,
) -> Layout {
    LayoutDispatcher::new(store, snapshot, config).layout(state, presentation)
}
