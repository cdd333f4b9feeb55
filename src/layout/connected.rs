//! Connected-ideas level: the focused idea pinned at the origin with its
//! visible neighbours spread around it by a force relaxation.

use super::edge::edges_between;
use super::node::{LayoutNode, SizeTier};
use super::{Layout, LayoutDispatcher};
use crate::graph::IdeaId;
use ideagraph_geometry::{relax, Point};
use rustc_hash::FxHashMap;

/// The focused idea is always drawn, even when the filter excludes it.
/// Only connections touching the focus are drawn as edges.
pub fn layout(ctx: &LayoutDispatcher<'_>, focus_id: &IdeaId) -> Layout {
    let store = ctx.store;
    let Some(focus) = store.get_idea(focus_id) else {
        return Layout::empty();
    };

    let neighbors: Vec<_> = store
        .neighbors(focus_id)
        .into_iter()
        .filter(|idea| ctx.snapshot.is_visible(&idea.id))
        .collect();
    let positions = relax(neighbors.len(), &ctx.config.layout.force);

    let mut placed = FxHashMap::default();
    placed.insert(focus.id.clone(), Point::ORIGIN);
    let mut nodes = Vec::with_capacity(neighbors.len() + 1);
    nodes.push(LayoutNode::idea(focus, ctx.color_of(focus), Point::ORIGIN, SizeTier::Large).pinned());

    for (idea, position) in neighbors.into_iter().zip(positions) {
        placed.insert(idea.id.clone(), position);
        nodes.push(LayoutNode::idea(idea, ctx.color_of(idea), position, SizeTier::Medium));
    }

    let edges = edges_between(store, &placed, &ctx.config.edges, |c| c.touches(focus_id));
    Layout { nodes, edges }
}
