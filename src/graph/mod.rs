//! Idea graph data model and the read-only store
//!
//! Ideas, connections and clusters are immutable once loaded. Positions are
//! never stored here; every view recomputes them.

pub mod cluster;
pub mod connection;
pub mod idea;
pub mod payload;
pub mod store;
pub mod types;

// Re-export main types
pub use cluster::Cluster;
pub use connection::{Connection, ConnectionKind};
pub use idea::{Idea, IdeaType};
pub use payload::{ClusterInfo, GraphPayload, IdeaEdge, IdeaNode};
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{ClusterId, IdeaId};
