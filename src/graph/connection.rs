//! Connections between ideas
//!
//! A connection is an unordered pair of ideas. `strength` is meaningful only
//! for `similar` connections, `explanation` only for `contradictory` ones.

use super::types::IdeaId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Similar,
    Contradictory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: IdeaId,
    pub target: IdeaId,
    pub kind: ConnectionKind,
    /// Similarity in [0, 1]
    pub strength: f64,
    pub explanation: Option<String>,
}

impl Connection {
    pub fn similar(a: impl Into<IdeaId>, b: impl Into<IdeaId>, strength: f64) -> Self {
        Connection {
            source: a.into(),
            target: b.into(),
            kind: ConnectionKind::Similar,
            strength,
            explanation: None,
        }
    }

    pub fn contradictory(
        a: impl Into<IdeaId>,
        b: impl Into<IdeaId>,
        explanation: impl Into<String>,
    ) -> Self {
        Connection {
            source: a.into(),
            target: b.into(),
            kind: ConnectionKind::Contradictory,
            strength: 0.8,
            explanation: Some(explanation.into()),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn touches(&self, idea: &IdeaId) -> bool {
        &self.source == idea || &self.target == idea
    }

    /// The endpoint opposite `idea`, if `idea` is an endpoint
    pub fn other(&self, idea: &IdeaId) -> Option<&IdeaId> {
        if &self.source == idea {
            Some(&self.target)
        } else if &self.target == idea {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Strength clamped to [0, 1]; NaN counts as 0
    pub fn clamped_strength(&self) -> f64 {
        if self.strength.is_nan() {
            0.0
        } else {
            self.strength.clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_endpoint_is_unordered() {
        let c = Connection::similar("a", "b", 0.5);
        assert_eq!(c.other(&IdeaId::new("a")), Some(&IdeaId::new("b")));
        assert_eq!(c.other(&IdeaId::new("b")), Some(&IdeaId::new("a")));
        assert_eq!(c.other(&IdeaId::new("z")), None);
        assert!(c.touches(&IdeaId::new("b")));
        assert!(!c.is_self_loop());
    }

    #[test]
    fn test_clamped_strength() {
        assert_eq!(Connection::similar("a", "b", 1.7).clamped_strength(), 1.0);
        assert_eq!(Connection::similar("a", "b", -0.2).clamped_strength(), 0.0);
        assert_eq!(Connection::similar("a", "b", f64::NAN).clamped_strength(), 0.0);
        assert_eq!(Connection::similar("a", "b", 0.25).clamped_strength(), 0.25);
    }

    #[test]
    fn test_contradictory() {
        let c = Connection::contradictory("a", "b", "opposing views on hiring");
        assert_eq!(c.kind, ConnectionKind::Contradictory);
        assert_eq!(c.explanation.as_deref(), Some("opposing views on hiring"));
    }
}
