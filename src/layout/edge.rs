//! Edge records, routing and stroke styling

use super::node::idea_node_id;
use crate::config::EdgeStyleConfig;
use crate::graph::{Connection, ConnectionKind, GraphStore, IdeaId};
use ideagraph_geometry::{route, Handle, Point};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// How the renderer should stroke an edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    pub stroke_width: f64,
    /// SVG-style dash pattern, solid when absent
    pub dash: Option<String>,
    pub animated: bool,
    pub opacity: f64,
}

/// A routed edge between two drawn nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Handle,
    pub target_handle: Handle,
    pub kind: ConnectionKind,
    pub explanation: Option<String>,
    pub style: EdgeStyle,
}

/// Stroke for a connection: similar edges scale linearly with strength,
/// contradictory edges ignore strength entirely.
pub fn edge_style(connection: &Connection, config: &EdgeStyleConfig) -> EdgeStyle {
    match connection.kind {
        ConnectionKind::Similar => {
            let s = connection.clamped_strength();
            EdgeStyle {
                stroke_width: lerp(config.similar_min_width, config.similar_max_width, s),
                dash: None,
                animated: false,
                opacity: lerp(config.similar_min_opacity, config.similar_max_opacity, s),
            }
        }
        ConnectionKind::Contradictory => EdgeStyle {
            stroke_width: config.contradictory_width,
            dash: Some(config.contradictory_dash.clone()),
            animated: config.contradictory_animated,
            opacity: config.contradictory_opacity,
        },
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn edge_id(index: usize) -> String {
    format!("edge:{}", index)
}

/// Route one connection between two placed endpoints
pub fn build_edge(
    index: usize,
    connection: &Connection,
    source: Point,
    target: Point,
    config: &EdgeStyleConfig,
) -> LayoutEdge {
    let (source_handle, target_handle) = route(source, target);
    LayoutEdge {
        id: edge_id(index),
        source: idea_node_id(&connection.source),
        target: idea_node_id(&connection.target),
        source_handle,
        target_handle,
        kind: connection.kind,
        explanation: connection.explanation.clone(),
        style: edge_style(connection, config),
    }
}

/// Edges for every stored connection whose endpoints are both placed and
/// that passes `keep`, in connection order
pub fn edges_between(
    store: &GraphStore,
    placed: &FxHashMap<IdeaId, Point>,
    config: &EdgeStyleConfig,
    keep: impl Fn(&Connection) -> bool,
) -> Vec<LayoutEdge> {
    store
        .connections()
        .iter()
        .enumerate()
        .filter(|&(_, c)| keep(c))
        .filter_map(|(i, c)| {
            let source = placed.get(&c.source)?;
            let target = placed.get(&c.target)?;
            Some(build_edge(i, c, *source, *target, config))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_width_tracks_strength() {
        let config = EdgeStyleConfig::default();
        let weak = edge_style(&Connection::similar("a", "b", 0.0), &config);
        let strong = edge_style(&Connection::similar("a", "b", 1.0), &config);
        let over = edge_style(&Connection::similar("a", "b", 3.0), &config);
        assert_eq!(weak.stroke_width, config.similar_min_width);
        assert_eq!(strong.stroke_width, config.similar_max_width);
        assert_eq!(over, strong);
        assert!(weak.dash.is_none());
        assert!(!strong.animated);
    }

    #[test]
    fn test_contradictory_ignores_strength() {
        let config = EdgeStyleConfig::default();
        let mut low = Connection::contradictory("a", "b", "x");
        low.strength = 0.1;
        let mut high = Connection::contradictory("a", "b", "x");
        high.strength = 0.95;
        let a = edge_style(&low, &config);
        let b = edge_style(&high, &config);
        assert_eq!(a, b);
        assert_eq!(a.stroke_width, config.contradictory_width);
        assert_eq!(a.dash.as_deref(), Some("6 4"));
        assert!(a.animated);
    }

    #[test]
    fn test_build_edge_routes_handles() {
        let config = EdgeStyleConfig::default();
        let edge = build_edge(
            7,
            &Connection::similar("a", "b", 0.5),
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            &config,
        );
        assert_eq!(edge.id, "edge:7");
        assert_eq!(edge.source, "idea:a");
        assert_eq!(edge.target, "idea:b");
        assert_eq!(edge.source_handle, Handle::Bottom);
        assert_eq!(edge.target_handle, Handle::Top);
    }
}
