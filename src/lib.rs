//! Idea Graph Engine
//!
//! Hierarchical layout and navigation over a graph of extracted ideas
//! (short claims pulled from podcast transcripts), with live filtering by
//! company.
//!
//! # Architecture
//!
//! - [`graph`]: immutable store of ideas, connections and clusters, loaded
//!   once per session from a [`GraphPayload`]
//! - [`companies`]: episode title to company names, cached per idea at load
//! - [`filter`]: company filter and the derived per-cluster counts
//! - [`view`]: four-level view-state machine (clusters, top ideas,
//!   connected ideas, all ideas)
//! - [`layout`]: node and edge placement for each level, built on the
//!   `ideagraph-geometry` crate
//! - [`source`]: async payload fetch (file, HTTP, memoized)
//! - [`engine`]: the session tying it all together
//!
//! ## Example Usage
//!
//! ```rust
//! use ideagraph::{Cluster, Connection, EngineConfig, GraphStore, Idea, IdeaGraphEngine, NoCompanies, ViewEvent};
//!
//! let ideas = vec![
//!     Idea::new("a", "Hire slowly").in_cluster("hiring"),
//!     Idea::new("b", "Fire fast").in_cluster("hiring"),
//! ];
//! let connections = vec![Connection::similar("a", "b", 0.8)];
//! let clusters = vec![Cluster::new("hiring", "Hiring")];
//! let store = GraphStore::from_parts(ideas, connections, clusters, &NoCompanies).unwrap();
//!
//! let mut engine = IdeaGraphEngine::from_store(store, EngineConfig::default());
//! assert_eq!(engine.layout().nodes.len(), 1);
//!
//! engine.handle(&ViewEvent::SelectCluster("hiring".into()));
//! assert_eq!(engine.layout().nodes.len(), 2);
//! assert_eq!(engine.layout().edges.len(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod companies;
pub mod config;
pub mod engine;
pub mod filter;
pub mod graph;
pub mod layout;
pub mod source;
pub mod view;

// Re-export main types for convenience
pub use graph::{
    Cluster, ClusterId, Connection, ConnectionKind, GraphError, GraphPayload, GraphResult,
    GraphStatistics, GraphStore, Idea, IdeaId, IdeaType,
};

pub use companies::{CompanyExtractor, NoCompanies, TitleCompanyExtractor};

pub use config::{ConfigError, ConfigResult, EdgeStyleConfig, EngineConfig, LayoutConfig, SourceConfig};

pub use engine::{EngineStatus, IdeaGraphEngine};

pub use filter::{CompanyFilter, FilterAggregator, FilterSnapshot};

pub use layout::{
    compute_layout, ClusterPresentation, EdgeStyle, Layout, LayoutDispatcher, LayoutEdge, LayoutNode,
    NodeData, SizeTier,
};

pub use source::{FileSource, GraphSource, HttpSource, MemoizedSource, SourceError, SourceResult};

pub use view::{ViewEvent, ViewLevel, ViewState, ViewStateMachine};

pub use ideagraph_geometry::{Handle, Point};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
