//! Clusters level: bubble grid or region grid

use super::edge::edges_between;
use super::node::{LayoutNode, SizeTier};
use super::{Layout, LayoutDispatcher};
use ideagraph_geometry::{grid_cells, grid_positions, half_columns, Point};
use rustc_hash::FxHashMap;

/// One bubble per filtered cluster on a centered grid of `ceil(n/2)` columns.
/// Size tracks the filtered count relative to the largest cluster.
pub fn bubbles(ctx: &LayoutDispatcher<'_>) -> Layout {
    let clusters = &ctx.snapshot.filtered_clusters;
    let layout = &ctx.config.layout;
    let positions = grid_positions(
        clusters.len(),
        half_columns(clusters.len()),
        layout.cluster_spacing_x,
        layout.cluster_spacing_y,
    );
    let max = clusters.iter().map(|c| c.idea_count).max().unwrap_or(0);

    let nodes = clusters
        .iter()
        .zip(positions)
        .map(|(cluster, position)| {
            LayoutNode::cluster(cluster.clone(), position, SizeTier::relative(cluster.idea_count, max))
        })
        .collect();

    Layout { nodes, edges: Vec::new() }
}

/// One region per filtered cluster, each enclosing its highest-degree
/// visible ideas on an internal grid. Edges join any two drawn ideas.
pub fn regions(ctx: &LayoutDispatcher<'_>) -> Layout {
    let store = ctx.store;
    let clusters = &ctx.snapshot.filtered_clusters;
    let layout = &ctx.config.layout;

    let columns = layout.region_columns.max(1);
    let rows = layout.region_top_n.div_ceil(columns);
    let width = columns as f64 * layout.region_cell_width + 2.0 * layout.region_padding;
    let height = rows as f64 * layout.region_cell_height + 2.0 * layout.region_padding;

    let centers = grid_positions(
        clusters.len(),
        half_columns(clusters.len()),
        width + layout.region_gap,
        height + layout.region_gap,
    );

    let mut nodes = Vec::new();
    let mut placed = FxHashMap::default();

    for (cluster, center) in clusters.iter().zip(centers) {
        nodes.push(LayoutNode::region(cluster.clone(), center, width, height));

        let mut top = store.rank_by_degree(
            store
                .ideas_in_cluster(&cluster.id)
                .filter(|idea| ctx.snapshot.is_visible(&idea.id)),
        );
        top.truncate(layout.region_top_n);

        let origin = center
            - Point::new(
                width / 2.0 - layout.region_padding,
                height / 2.0 - layout.region_padding,
            );
        let cells = grid_cells(
            top.len(),
            columns,
            layout.region_cell_width,
            layout.region_cell_height,
            origin,
        );
        for (rank, (idea, position)) in top.into_iter().zip(cells).enumerate() {
            placed.insert(idea.id.clone(), position);
            nodes.push(
                LayoutNode::idea(idea, Some(cluster.color.clone()), position, SizeTier::Small).with_rank(rank),
            );
        }
    }

    let edges = edges_between(store, &placed, &ctx.config.edges, |_| true);
    Layout { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::NoCompanies;
    use crate::config::EngineConfig;
    use crate::filter::{aggregate, CompanyFilter};
    use crate::graph::{Cluster, Connection, GraphStore, Idea};
    use crate::layout::NodeData;

    fn store() -> GraphStore {
        let mut ideas = Vec::new();
        for (cluster, n) in [("c1", 6), ("c2", 3), ("c3", 1)] {
            for i in 0..n {
                ideas.push(Idea::new(format!("{}-{}", cluster, i), "idea").in_cluster(cluster));
            }
        }
        let clusters = vec![Cluster::new("c1", "One"), Cluster::new("c2", "Two"), Cluster::new("c3", "Three")];
        let connections = vec![
            Connection::similar("c1-0", "c2-0", 0.5),
            Connection::similar("c1-0", "c1-1", 0.9),
        ];
        GraphStore::from_parts(ideas, connections, clusters, &NoCompanies).unwrap()
    }

    #[test]
    fn test_bubble_grid_and_tiers() {
        let store = store();
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let config = EngineConfig::default();
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);
        let layout = bubbles(&ctx);

        assert_eq!(layout.nodes.len(), 3);
        assert!(layout.edges.is_empty());
        let sizes: Vec<_> = layout.nodes.iter().map(|n| n.size).collect();
        assert_eq!(sizes, vec![SizeTier::Large, SizeTier::Medium, SizeTier::Small]);
        // Two columns: first row holds two bubbles
        assert_eq!(layout.nodes[0].position.y, layout.nodes[1].position.y);
        assert!(layout.nodes[2].position.y > layout.nodes[0].position.y);
    }

    #[test]
    fn test_regions_hold_top_ideas() {
        let store = store();
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let mut config = EngineConfig::default();
        config.layout.region_top_n = 4;
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);
        let layout = regions(&ctx);

        let regions: Vec<_> = layout
            .nodes
            .iter()
            .filter(|n| matches!(n.data, NodeData::Region { .. }))
            .collect();
        assert_eq!(regions.len(), 3);
        // 4 + 3 + 1 ideas
        assert_eq!(layout.idea_nodes().count(), 8);
        // Highest degree first inside c1
        assert!(layout.node("idea:c1-0").is_some());
        assert_eq!(layout.edges.len(), 2);
    }

    #[test]
    fn test_ideas_stay_inside_region() {
        let store = store();
        let snapshot = aggregate(&store, &CompanyFilter::default());
        let config = EngineConfig::default();
        let ctx = LayoutDispatcher::new(&store, &snapshot, &config);
        let layout = regions(&ctx);

        let region = layout.node("region:c1").unwrap();
        let (w, h) = match region.data {
            NodeData::Region { width, height, .. } => (width, height),
            _ => unreachable!(),
        };
        for i in 0..6 {
            let idea = layout.node(&format!("idea:c1-{}", i)).unwrap();
            assert!((idea.position.x - region.position.x).abs() <= w / 2.0);
            assert!((idea.position.y - region.position.y).abs() <= h / 2.0);
        }
    }
}
