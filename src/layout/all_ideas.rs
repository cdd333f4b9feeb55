//! All-ideas level: every visible idea of a cluster on concentric rings

use super::edge::edges_between;
use super::node::{LayoutNode, SizeTier};
use super::{Layout, LayoutDispatcher};
use crate::graph::ClusterId;
use ideagraph_geometry::concentric_rings;
use rustc_hash::FxHashMap;

pub fn layout(ctx: &LayoutDispatcher<'_>, cluster: &ClusterId) -> Layout {
    let store = ctx.store;
    let Some(info) = store.get_cluster(cluster) else {
        return Layout::empty();
    };

    let ideas: Vec<_> = store
        .ideas_in_cluster(cluster)
        .filter(|idea| ctx.snapshot.is_visible(&idea.id))
        .collect();
    let positions = concentric_rings(ideas.len(), ctx.config.layout.ring_spacing);

    let mut placed = FxHashMap::default();
    let nodes = ideas
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (idea, position))| {
            placed.insert(idea.id.clone(), position);
            let size = if i == 0 { SizeTier::Medium } else { SizeTier::Small };
            LayoutNode::idea(idea, Some(info.color.clone()), position, size)
        })
        .collect();

    let edges = edges_between(store, &placed, &ctx.config.edges, |_| true);
    Layout { nodes, edges }
}
