//! Cluster records

use super::types::{ClusterId, IdeaId};
use serde::{Deserialize, Serialize};

/// A thematic grouping of ideas.
///
/// `idea_count` on a fetched cluster counts the unfiltered dataset. Filtered
/// copies are produced with [`Cluster::with_idea_count`]; the original is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub name: String,
    pub description: String,
    /// Color token (hex) for rendering
    pub color: String,
    pub idea_count: usize,
    /// Representative ideas, best first
    pub top_idea_ids: Vec<IdeaId>,
}

impl Cluster {
    pub fn new(id: impl Into<ClusterId>, name: impl Into<String>) -> Self {
        Cluster {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            color: String::from("#6366f1"),
            idea_count: 0,
            top_idea_ids: Vec::new(),
        }
    }

    /// Derived copy with a recomputed count
    pub fn with_idea_count(&self, idea_count: usize) -> Cluster {
        Cluster {
            idea_count,
            ..self.clone()
        }
    }
}
