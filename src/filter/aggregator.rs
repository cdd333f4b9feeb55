//! Filter aggregation: visible ideas and per-cluster counts under a filter

use super::company::CompanyFilter;
use crate::graph::{Cluster, ClusterId, GraphStore, Idea, IdeaId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::debug;

/// Everything derived from the store and the active filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSnapshot {
    /// Ideas passing the filter, in payload order
    pub filtered_ideas: Vec<IdeaId>,
    /// Copies of every cluster, in payload order, with `idea_count` replaced
    /// by the number of filtered ideas in it. Empty clusters are kept.
    pub filtered_clusters: Vec<Cluster>,
    /// Filtered ideas that belong to no known cluster
    pub unclustered: usize,
    visible: FxHashSet<IdeaId>,
    counts: FxHashMap<ClusterId, usize>,
}

impl FilterSnapshot {
    pub fn is_visible(&self, id: &IdeaId) -> bool {
        self.visible.contains(id)
    }

    pub fn visible_count(&self) -> usize {
        self.filtered_ideas.len()
    }

    /// Filtered idea count of a cluster (0 for unknown clusters)
    pub fn cluster_count(&self, cluster: &ClusterId) -> usize {
        self.counts.get(cluster).copied().unwrap_or(0)
    }

    pub fn filtered_cluster(&self, cluster: &ClusterId) -> Option<&Cluster> {
        self.filtered_clusters.iter().find(|c| &c.id == cluster)
    }
}

/// Compute the snapshot for a filter over the whole store
pub fn aggregate(store: &GraphStore, filter: &CompanyFilter) -> FilterSnapshot {
    let mut filtered_ideas = Vec::new();
    let mut visible = FxHashSet::default();
    let mut counts: FxHashMap<ClusterId, usize> = FxHashMap::default();
    let mut unclustered = 0;

    for idea in store.ideas() {
        if !filter.matches(store.companies_of(&idea.id)) {
            continue;
        }
        filtered_ideas.push(idea.id.clone());
        visible.insert(idea.id.clone());
        match store.cluster_of(idea) {
            Some(cluster) => *counts.entry(cluster.id.clone()).or_insert(0) += 1,
            None => unclustered += 1,
        }
    }

    let filtered_clusters = store
        .clusters()
        .iter()
        .map(|c| c.with_idea_count(counts.get(&c.id).copied().unwrap_or(0)))
        .collect();

    FilterSnapshot {
        filtered_ideas,
        filtered_clusters,
        unclustered,
        visible,
        counts,
    }
}

/// Owner of the active company filter and its derived snapshot
#[derive(Debug, Clone, Default)]
pub struct FilterAggregator {
    filter: CompanyFilter,
    snapshot: FilterSnapshot,
}

impl FilterAggregator {
    /// Aggregator with an empty filter over `store`
    pub fn new(store: &GraphStore) -> Self {
        let filter = CompanyFilter::new();
        let snapshot = aggregate(store, &filter);
        Self { filter, snapshot }
    }

    pub fn filter(&self) -> &CompanyFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> &FilterSnapshot {
        &self.snapshot
    }

    /// Toggle a company and recompute; returns whether it is now selected
    pub fn toggle(&mut self, store: &GraphStore, company: &str) -> bool {
        let selected = self.filter.toggle(company);
        debug!("Company filter {} {}", if selected { "+" } else { "-" }, company);
        self.refresh(store);
        selected
    }

    pub fn clear(&mut self, store: &GraphStore) {
        if self.filter.is_empty() {
            return;
        }
        debug!("Company filter cleared");
        self.filter.clear();
        self.refresh(store);
    }

    /// Replace the whole filter set
    pub fn set_filter(&mut self, store: &GraphStore, filter: CompanyFilter) {
        self.filter = filter;
        self.refresh(store);
    }

    /// Recompute after a base data change
    pub fn refresh(&mut self, store: &GraphStore) {
        self.snapshot = aggregate(store, &self.filter);
        debug!(
            "Filter aggregation: {} of {} ideas visible",
            self.snapshot.visible_count(),
            store.idea_count()
        );
    }

    /// Companies offered to the user for a level scope.
    ///
    /// `scope` is the unfiltered idea set of the current level. Active filter
    /// entries are always included so they can be toggled off. Sorted
    /// case-insensitively, duplicates removed.
    pub fn available_companies<'a>(
        &self,
        store: &GraphStore,
        scope: impl IntoIterator<Item = &'a Idea>,
    ) -> Vec<String> {
        let mut names: BTreeSet<(String, String)> = BTreeSet::new();
        let mut push = |name: &String| {
            names.insert((name.to_lowercase(), name.clone()));
        };
        for idea in scope {
            store.companies_of(&idea.id).iter().for_each(&mut push);
        }
        self.filter.iter().for_each(&mut push);

        let mut seen = FxHashSet::default();
        names
            .into_iter()
            .filter(|(_, name)| seen.insert(name.clone()))
            .map(|(_, name)| name)
            .collect()
    }
}
