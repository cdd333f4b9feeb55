//! Read-only graph data store
//!
//! Holds the fetched ideas, connections and clusters for one session, plus
//! the indices every view needs:
//! - ideas in payload order (IndexMap)
//! - cluster id -> position in the payload cluster list
//! - idea id -> indices of connections touching it
//! - idea id -> companies derived from the episode title (computed once)

use super::cluster::Cluster;
use super::connection::Connection;
use super::idea::Idea;
use super::payload::GraphPayload;
use super::types::{ClusterId, IdeaId};
use crate::companies::CompanyExtractor;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a graph payload
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Idea {0} appears more than once")]
    DuplicateIdea(IdeaId),

    #[error("Cluster {0} appears more than once")]
    DuplicateCluster(ClusterId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Counts gathered while loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub ideas: usize,
    pub clusters: usize,
    pub connections: usize,
    /// Self-connections and connections naming unknown ideas
    pub skipped_connections: usize,
    /// Ideas with no cluster id or an id matching no cluster
    pub unclustered_ideas: usize,
    /// Distinct company names across all ideas
    pub companies: usize,
}

/// Immutable graph data for one session
#[derive(Debug, Clone)]
pub struct GraphStore {
    ideas: IndexMap<IdeaId, Idea>,
    connections: Vec<Connection>,
    clusters: Vec<Cluster>,
    cluster_index: FxHashMap<ClusterId, usize>,
    adjacency: FxHashMap<IdeaId, Vec<usize>>,
    companies: FxHashMap<IdeaId, Vec<String>>,
    statistics: GraphStatistics,
}

impl GraphStore {
    /// Build a store from a fetched payload
    pub fn from_payload(payload: GraphPayload, extractor: &dyn CompanyExtractor) -> GraphResult<Self> {
        let ideas = payload.nodes.into_iter().map(Idea::from).collect();
        let connections = payload.edges.into_iter().map(Connection::from).collect();
        let clusters = payload.clusters.into_iter().map(Cluster::from).collect();
        Self::from_parts(ideas, connections, clusters, extractor)
    }

    /// Build a store from domain records.
    ///
    /// Self-connections and connections naming unknown ideas are skipped with
    /// a warning; duplicate idea or cluster ids are rejected.
    pub fn from_parts(
        ideas: Vec<Idea>,
        connections: Vec<Connection>,
        clusters: Vec<Cluster>,
        extractor: &dyn CompanyExtractor,
    ) -> GraphResult<Self> {
        let mut cluster_index = FxHashMap::default();
        for (i, cluster) in clusters.iter().enumerate() {
            if cluster_index.insert(cluster.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateCluster(cluster.id.clone()));
            }
        }

        let mut idea_map = IndexMap::with_capacity(ideas.len());
        let mut companies = FxHashMap::default();
        let mut distinct_companies = FxHashSet::default();
        let mut unclustered_ideas = 0;
        for idea in ideas {
            let clustered = idea
                .cluster_id
                .as_ref()
                .is_some_and(|c| cluster_index.contains_key(c));
            if !clustered {
                unclustered_ideas += 1;
            }
            let names = extractor.companies(&idea.episode_title);
            distinct_companies.extend(names.iter().cloned());
            companies.insert(idea.id.clone(), names);

            let id = idea.id.clone();
            if idea_map.insert(id.clone(), idea).is_some() {
                return Err(GraphError::DuplicateIdea(id));
            }
        }

        let mut kept = Vec::with_capacity(connections.len());
        let mut skipped_connections = 0;
        for connection in connections {
            if connection.is_self_loop() {
                warn!("Skipping self-connection on idea {}", connection.source);
                skipped_connections += 1;
                continue;
            }
            if !idea_map.contains_key(&connection.source) || !idea_map.contains_key(&connection.target) {
                warn!(
                    "Skipping connection {} -> {}: unknown idea",
                    connection.source, connection.target
                );
                skipped_connections += 1;
                continue;
            }
            kept.push(connection);
        }

        let mut adjacency: FxHashMap<IdeaId, Vec<usize>> = FxHashMap::default();
        for (i, connection) in kept.iter().enumerate() {
            adjacency.entry(connection.source.clone()).or_default().push(i);
            adjacency.entry(connection.target.clone()).or_default().push(i);
        }

        let statistics = GraphStatistics {
            ideas: idea_map.len(),
            clusters: clusters.len(),
            connections: kept.len(),
            skipped_connections,
            unclustered_ideas,
            companies: distinct_companies.len(),
        };
        info!(
            "Loaded idea graph: {} ideas, {} clusters, {} connections ({} skipped)",
            statistics.ideas, statistics.clusters, statistics.connections, statistics.skipped_connections
        );

        Ok(GraphStore {
            ideas: idea_map,
            connections: kept,
            clusters,
            cluster_index,
            adjacency,
            companies,
            statistics,
        })
    }

    /// Empty store
    pub fn empty() -> Self {
        GraphStore {
            ideas: IndexMap::new(),
            connections: Vec::new(),
            clusters: Vec::new(),
            cluster_index: FxHashMap::default(),
            adjacency: FxHashMap::default(),
            companies: FxHashMap::default(),
            statistics: GraphStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &GraphStatistics {
        &self.statistics
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    pub fn get_idea(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.get(id)
    }

    pub fn contains_idea(&self, id: &IdeaId) -> bool {
        self.ideas.contains_key(id)
    }

    /// Payload position of an idea
    pub fn idea_position(&self, id: &IdeaId) -> Option<usize> {
        self.ideas.get_index_of(id)
    }

    /// All ideas in payload order
    pub fn ideas(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.values()
    }

    /// Clusters in payload order
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn get_cluster(&self, id: &ClusterId) -> Option<&Cluster> {
        self.cluster_index.get(id).map(|&i| &self.clusters[i])
    }

    pub fn cluster_position(&self, id: &ClusterId) -> Option<usize> {
        self.cluster_index.get(id).copied()
    }

    /// Resolved cluster of an idea, if its cluster id names a known cluster
    pub fn cluster_of(&self, idea: &Idea) -> Option<&Cluster> {
        idea.cluster_id.as_ref().and_then(|c| self.get_cluster(c))
    }

    /// Ideas of one cluster in payload order
    pub fn ideas_in_cluster<'a>(&'a self, cluster: &ClusterId) -> impl Iterator<Item = &'a Idea> + 'a {
        let cluster = cluster.clone();
        self.ideas.values().filter(move |idea| idea.belongs_to(&cluster))
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    /// Connections touching an idea, with their index in [`GraphStore::connections`]
    pub fn connections_of<'a>(&'a self, id: &IdeaId) -> impl Iterator<Item = (usize, &'a Connection)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&i| (i, &self.connections[i]))
    }

    /// Distinct ideas connected to `id`, in connection order
    pub fn neighbors(&self, id: &IdeaId) -> Vec<&Idea> {
        let mut seen = FxHashSet::default();
        self.connections_of(id)
            .filter_map(|(_, c)| c.other(id))
            .filter(|other| seen.insert(*other))
            .filter_map(|other| self.ideas.get(other))
            .collect()
    }

    /// Total connection degree over the full, unfiltered connection set
    pub fn degree(&self, id: &IdeaId) -> usize {
        self.adjacency.get(id).map_or(0, Vec::len)
    }

    /// Companies derived from the idea's episode title
    pub fn companies_of(&self, id: &IdeaId) -> &[String] {
        self.companies.get(id).map_or(&[], Vec::as_slice)
    }

    /// Sort ideas by unfiltered degree (descending), then strategic before
    /// tactical, then payload order. The key never depends on any filter, so
    /// a filtered subset keeps its relative order.
    pub fn rank_by_degree<'a>(&self, ideas: impl IntoIterator<Item = &'a Idea>) -> Vec<&'a Idea> {
        let mut ranked: Vec<&Idea> = ideas.into_iter().collect();
        ranked.sort_by_key(|idea| {
            (
                Reverse(self.degree(&idea.id)),
                idea.idea_type.rank_priority(),
                self.idea_position(&idea.id).unwrap_or(usize::MAX),
            )
        });
        ranked
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::empty()
    }
}
