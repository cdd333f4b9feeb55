//! Wire format of the `/ideas/graph` payload
//!
//! Precomputed coordinates (`x`, `y`, `center_x`, `center_y`) are accepted
//! for compatibility and dropped on conversion: every view recomputes
//! positions.

use super::cluster::Cluster;
use super::connection::{Connection, ConnectionKind};
use super::idea::{Idea, IdeaType};
use super::types::{ClusterId, IdeaId};
use serde::{Deserialize, Serialize};

/// Complete graph payload as served by the extraction backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<IdeaNode>,
    pub edges: Vec<IdeaEdge>,
    pub clusters: Vec<ClusterInfo>,
    #[serde(default)]
    pub total_ideas: usize,
    #[serde(default)]
    pub total_connections: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaNode {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub full_context: String,
    #[serde(default)]
    pub guest: String,
    #[serde(default)]
    pub episode_title: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub youtube_deep_link: String,
    pub idea_type: IdeaType,
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaEdge {
    pub source: String,
    pub target: String,
    pub connection_type: ConnectionKind,
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub idea_count: usize,
    #[serde(default)]
    pub top_idea_ids: Vec<String>,
    #[serde(default)]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
}

impl From<IdeaNode> for Idea {
    fn from(node: IdeaNode) -> Self {
        Idea {
            id: IdeaId::from(node.id),
            summary: node.summary,
            full_context: node.full_context,
            guest: node.guest,
            episode_title: node.episode_title,
            video_id: node.video_id,
            timestamp: node.timestamp,
            youtube_deep_link: node.youtube_deep_link,
            idea_type: node.idea_type,
            cluster_id: node.cluster_id.map(ClusterId::from),
            cluster_name: node.cluster_name,
        }
    }
}

impl From<IdeaEdge> for Connection {
    fn from(edge: IdeaEdge) -> Self {
        Connection {
            source: IdeaId::from(edge.source),
            target: IdeaId::from(edge.target),
            kind: edge.connection_type,
            strength: edge.strength,
            explanation: edge.explanation,
        }
    }
}

impl From<ClusterInfo> for Cluster {
    fn from(info: ClusterInfo) -> Self {
        Cluster {
            id: ClusterId::from(info.id),
            name: info.name,
            description: info.description,
            color: info.color,
            idea_count: info.idea_count,
            top_idea_ids: info.top_idea_ids.into_iter().map(IdeaId::from).collect(),
        }
    }
}

impl From<&Idea> for IdeaNode {
    fn from(idea: &Idea) -> Self {
        IdeaNode {
            id: idea.id.as_str().to_string(),
            summary: idea.summary.clone(),
            full_context: idea.full_context.clone(),
            guest: idea.guest.clone(),
            episode_title: idea.episode_title.clone(),
            video_id: idea.video_id.clone(),
            timestamp: idea.timestamp.clone(),
            youtube_deep_link: idea.youtube_deep_link.clone(),
            idea_type: idea.idea_type,
            cluster_id: idea.cluster_id.as_ref().map(|c| c.as_str().to_string()),
            cluster_name: idea.cluster_name.clone(),
            x: 0.0,
            y: 0.0,
        }
    }
}

impl From<&Connection> for IdeaEdge {
    fn from(connection: &Connection) -> Self {
        IdeaEdge {
            source: connection.source.as_str().to_string(),
            target: connection.target.as_str().to_string(),
            connection_type: connection.kind,
            strength: connection.strength,
            explanation: connection.explanation.clone(),
        }
    }
}

impl From<&Cluster> for ClusterInfo {
    fn from(cluster: &Cluster) -> Self {
        ClusterInfo {
            id: cluster.id.as_str().to_string(),
            name: cluster.name.clone(),
            description: cluster.description.clone(),
            color: cluster.color.clone(),
            idea_count: cluster.idea_count,
            top_idea_ids: cluster.top_idea_ids.iter().map(|i| i.as_str().to_string()).collect(),
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

impl GraphPayload {
    /// Build a payload from domain records (fixtures, re-export)
    pub fn from_parts(ideas: &[Idea], connections: &[Connection], clusters: &[Cluster]) -> Self {
        GraphPayload {
            nodes: ideas.iter().map(IdeaNode::from).collect(),
            edges: connections.iter().map(IdeaEdge::from).collect(),
            clusters: clusters.iter().map(ClusterInfo::from).collect(),
            total_ideas: ideas.len(),
            total_connections: connections.len(),
        }
    }
}
