//! Top-ideas level: ranked ideas of one cluster on two rings

use super::edge::edges_between;
use super::node::{LayoutNode, SizeTier};
use super::{Layout, LayoutDispatcher};
use crate::graph::ClusterId;
use ideagraph_geometry::tiered_rings;
use rustc_hash::FxHashMap;

/// Rank 0 sits at the origin, the next `inner_ring_capacity` ranks on the
/// inner ring, the rest on the outer ring. Ranking uses unfiltered degree, so
/// filtering removes ideas without reordering the survivors.
pub fn layout(ctx: &LayoutDispatcher<'_>, cluster: &ClusterId) -> Layout {
    let store = ctx.store;
    let config = &ctx.config.layout;
    let Some(info) = store.get_cluster(cluster) else {
        return Layout::empty();
    };

    let mut ranked = store.rank_by_degree(
        store
            .ideas_in_cluster(cluster)
            .filter(|idea| ctx.snapshot.is_visible(&idea.id)),
    );
    ranked.truncate(config.top_ideas_limit);

    let positions = tiered_rings(
        ranked.len(),
        config.inner_ring_capacity,
        config.inner_ring_radius,
        config.outer_ring_radius,
    );

    let mut placed = FxHashMap::default();
    let nodes = ranked
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(rank, (idea, position))| {
            placed.insert(idea.id.clone(), position);
            let size = match rank {
                0 => SizeTier::Large,
                r if r <= config.inner_ring_capacity => SizeTier::Medium,
                _ => SizeTier::Small,
            };
            LayoutNode::idea(idea, Some(info.color.clone()), position, size).with_rank(rank)
        })
        .collect();

    let edges = edges_between(store, &placed, &ctx.config.edges, |_| true);
    Layout { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::CompanyExtractor;
    use crate::config::EngineConfig;
    use crate::filter::{aggregate, CompanyFilter};
    use crate::graph::{Cluster, Connection, GraphStore, Idea};
    use ideagraph_geometry::Point;

    struct ByGuest;

    impl CompanyExtractor for ByGuest {
        fn companies(&self, title: &str) -> Vec<String> {
            vec![title.to_string()]
        }
    }

    fn store(size: usize) -> GraphStore {
        let mut ideas: Vec<Idea> = (0..size)
            .map(|i| {
                let company = if i % 2 == 0 { "Even" } else { "Odd" };
                Idea::new(format!("i{}", i), "idea")
                    .in_cluster("c1")
                    .with_episode("guest", company)
            })
            .collect();
        ideas.extend((0..size).map(|j| Idea::new(format!("hub{}", j), "hub")));
        // i{n} gets degree n, so rank order is reversed payload order
        let mut connections = Vec::new();
        for i in 1..size {
            for j in 0..i {
                connections.push(Connection::similar(format!("i{}", i), format!("hub{}", j), 0.5));
            }
        }
        GraphStore::from_parts(ideas, connections, vec![Cluster::new("c1", "One")], &ByGuest).unwrap()
    }

    fn ids(layout: &Layout) -> Vec<String> {
        layout.idea_nodes().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_rank_zero_at_origin() {
        let mut ideas: Vec<Idea> = (0..4).map(|i| Idea::new(format!("i{}", i), "x").in_cluster("c1")).collect();
        ideas.push(Idea::new("hub", "x").in_cluster("c1"));
        let connections = (0..4).map(|i| Connection::similar("hub", format!("i{}", i), 0.5)).collect();
        let store =
            GraphStore::from_parts(ideas, connections, vec![Cluster::new("c1", "One")], &crate::companies::NoCompanies)
                .unwrap();
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let config = EngineConfig::default();
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);

        let layout = layout(&ctx, &ClusterId::new("c1"));
        let hub = layout.node("idea:hub").unwrap();
        assert_eq!(hub.position, Point::ORIGIN);
        assert_eq!(hub.size, SizeTier::Large);
        assert_eq!(layout.edges.len(), 4);
    }

    #[test]
    fn test_truncates_to_limit() {
        let mut ideas: Vec<Idea> = (0..30).map(|i| Idea::new(format!("i{}", i), "x").in_cluster("c1")).collect();
        ideas.reverse();
        let store =
            GraphStore::from_parts(ideas, Vec::new(), vec![Cluster::new("c1", "One")], &crate::companies::NoCompanies)
                .unwrap();
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let config = EngineConfig::default();
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);

        let layout = layout(&ctx, &ClusterId::new("c1"));
        assert_eq!(layout.nodes.len(), config.layout.top_ideas_limit);
        // Equal degree falls back to payload order
        assert_eq!(layout.nodes[0].id, "idea:i29");
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let store = store(8);
        let config = EngineConfig::default();
        let all = aggregate(&store, &CompanyFilter::default());
        let ctx = LayoutDispatcher::new(&store, &all, &config);
        let unfiltered = ids(&layout(&ctx, &ClusterId::new("c1")));

        let odd = aggregate(&store, &["Odd".to_string()].into_iter().collect());
        let ctx = LayoutDispatcher::new(&store, &odd, &config);
        let filtered = ids(&layout(&ctx, &ClusterId::new("c1")));

        let expected: Vec<String> = unfiltered.into_iter().filter(|id| filtered.contains(id)).collect();
        assert_eq!(filtered, expected);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_unknown_cluster_is_empty() {
        let store = store(3);
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let config = EngineConfig::default();
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);
        assert_eq!(layout(&ctx, &ClusterId::new("missing")), Layout::empty());
    }
}
