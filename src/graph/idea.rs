//! Idea records
//!
//! An idea is a single claim extracted from one guest appearance. Ideas are
//! immutable once loaded; positions are never stored on them.

use super::types::{ClusterId, IdeaId};
use serde::{Deserialize, Serialize};

/// Strategic theme vs tactical insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaType {
    Strategic,
    Tactical,
    #[serde(other)]
    Other,
}

impl IdeaType {
    /// Ordering key used when ranking ideas of equal degree: strategic first
    pub fn rank_priority(&self) -> u8 {
        match self {
            IdeaType::Strategic => 0,
            IdeaType::Tactical => 1,
            IdeaType::Other => 2,
        }
    }
}

/// A single extracted idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    /// One or two sentence summary shown on the node
    pub summary: String,
    /// Quoted transcript excerpt shown in the detail panel
    pub full_context: String,
    pub guest: String,
    pub episode_title: String,
    pub video_id: String,
    pub timestamp: String,
    pub youtube_deep_link: String,
    pub idea_type: IdeaType,
    pub cluster_id: Option<ClusterId>,
    pub cluster_name: Option<String>,
}

impl Idea {
    /// Minimal idea, mostly useful for tests and fixtures
    pub fn new(id: impl Into<IdeaId>, summary: impl Into<String>) -> Self {
        Idea {
            id: id.into(),
            summary: summary.into(),
            full_context: String::new(),
            guest: String::new(),
            episode_title: String::new(),
            video_id: String::new(),
            timestamp: String::new(),
            youtube_deep_link: String::new(),
            idea_type: IdeaType::Tactical,
            cluster_id: None,
            cluster_name: None,
        }
    }

    pub fn in_cluster(mut self, cluster: impl Into<ClusterId>) -> Self {
        self.cluster_id = Some(cluster.into());
        self
    }

    pub fn with_episode(mut self, guest: impl Into<String>, episode_title: impl Into<String>) -> Self {
        self.guest = guest.into();
        self.episode_title = episode_title.into();
        self
    }

    pub fn with_type(mut self, idea_type: IdeaType) -> Self {
        self.idea_type = idea_type;
        self
    }

    pub fn belongs_to(&self, cluster: &ClusterId) -> bool {
        self.cluster_id.as_ref() == Some(cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let idea = Idea::new("i1", "Activation before acquisition")
            .in_cluster("growth")
            .with_episode("Jane Doe", "Jane Doe | Growth (Head of Growth at Airbnb)")
            .with_type(IdeaType::Strategic);

        assert_eq!(idea.id.as_str(), "i1");
        assert!(idea.belongs_to(&ClusterId::new("growth")));
        assert!(!idea.belongs_to(&ClusterId::new("pricing")));
        assert_eq!(idea.idea_type, IdeaType::Strategic);
    }

    #[test]
    fn test_idea_type_serde() {
        let t: IdeaType = serde_json::from_str("\"strategic\"").unwrap();
        assert_eq!(t, IdeaType::Strategic);
        let unknown: IdeaType = serde_json::from_str("\"visionary\"").unwrap();
        assert_eq!(unknown, IdeaType::Other);
        assert!(IdeaType::Strategic.rank_priority() < IdeaType::Tactical.rank_priority());
    }
}
