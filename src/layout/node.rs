//! Node records handed to the renderer

use crate::graph::{Cluster, ClusterId, Idea, IdeaId};
use ideagraph_geometry::Point;
use serde::Serialize;

/// Discrete visual size of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    /// Tier of `value` relative to the largest value in its set
    pub fn relative(value: usize, max: usize) -> Self {
        if max == 0 {
            return SizeTier::Small;
        }
        let ratio = value as f64 / max as f64;
        if ratio >= 2.0 / 3.0 {
            SizeTier::Large
        } else if ratio >= 1.0 / 3.0 {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }
}

/// What a node represents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeData {
    /// A cluster bubble; `idea_count` reflects the active filter
    Cluster { cluster: Cluster },
    /// A bounded cluster region enclosing its top ideas
    Region {
        cluster: Cluster,
        width: f64,
        height: f64,
    },
    Idea {
        idea: Idea,
        /// Color token of the idea's cluster
        color: Option<String>,
        /// Degree rank within the view, when the view is ranked
        rank: Option<usize>,
        /// The pinned idea of the connected-ideas view
        focused: bool,
    },
}

/// A positioned node. `position` is the node center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub position: Point,
    pub size: SizeTier,
    pub data: NodeData,
}

pub fn cluster_node_id(id: &ClusterId) -> String {
    format!("cluster:{}", id)
}

pub fn region_node_id(id: &ClusterId) -> String {
    format!("region:{}", id)
}

pub fn idea_node_id(id: &IdeaId) -> String {
    format!("idea:{}", id)
}

impl LayoutNode {
    pub fn cluster(cluster: Cluster, position: Point, size: SizeTier) -> Self {
        LayoutNode {
            id: cluster_node_id(&cluster.id),
            position,
            size,
            data: NodeData::Cluster { cluster },
        }
    }

    pub fn region(cluster: Cluster, position: Point, width: f64, height: f64) -> Self {
        LayoutNode {
            id: region_node_id(&cluster.id),
            position,
            size: SizeTier::Large,
            data: NodeData::Region { cluster, width, height },
        }
    }

    pub fn idea(idea: &Idea, color: Option<String>, position: Point, size: SizeTier) -> Self {
        LayoutNode {
            id: idea_node_id(&idea.id),
            position,
            size,
            data: NodeData::Idea {
                idea: idea.clone(),
                color,
                rank: None,
                focused: false,
            },
        }
    }

    pub fn with_rank(mut self, value: usize) -> Self {
        if let NodeData::Idea { rank, .. } = &mut self.data {
            *rank = Some(value);
        }
        self
    }

    pub fn pinned(mut self) -> Self {
        if let NodeData::Idea { focused, .. } = &mut self.data {
            *focused = true;
        }
        self
    }

    pub fn idea_id(&self) -> Option<&IdeaId> {
        match &self.data {
            NodeData::Idea { idea, .. } => Some(&idea.id),
            _ => None,
        }
    }

    pub fn is_focused(&self) -> bool {
        matches!(self.data, NodeData::Idea { focused: true, .. })
    }
}
