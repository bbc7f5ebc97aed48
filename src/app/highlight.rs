use std::collections::HashSet;

use eframe::egui::Color32;

use super::render_utils::Palette;
use super::zoom::ZoomValues;
use super::SceneGraph;

const DIMMED_NODE_OPACITY: f32 = 0.4;
const DIMMED_LINK_OPACITY: f32 = 0.2;
const HOVER_RADIUS_SCALE: f32 = 1.5;

/// One hovered node plus its 1-hop neighborhood. Adjacency is not
/// transitive: only nodes one incident link away are included, along with
/// the hovered node itself.
pub(super) struct HighlightState {
    pub hovered: usize,
    pub adjacent_nodes: HashSet<usize>,
    pub incident_links: HashSet<usize>,
}

pub(super) fn build_highlight_state(scene: &SceneGraph, hovered: usize) -> HighlightState {
    let mut adjacent_nodes = HashSet::new();
    let mut incident_links = HashSet::new();

    adjacent_nodes.insert(hovered);

    for (link_index, link) in scene.links.iter().enumerate() {
        if link.source == hovered {
            incident_links.insert(link_index);
            adjacent_nodes.insert(link.target);
        } else if link.target == hovered {
            incident_links.insert(link_index);
            adjacent_nodes.insert(link.source);
        }
    }

    HighlightState {
        hovered,
        adjacent_nodes,
        incident_links,
    }
}

/// Desired visual state of one node, computed as plain data before anything
/// touches the paint surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct NodeVisual {
    pub fill: Color32,
    pub opacity: f32,
    pub radius: f32,
    /// Vertical offset of the label below the node center.
    pub label_offset: f32,
    /// Raised labels are drawn after their siblings.
    pub raise_label: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct LinkVisual {
    pub stroke: Color32,
    pub width: f32,
    pub opacity: f32,
}

pub(super) fn node_visual(
    index: usize,
    highlight: Option<&HighlightState>,
    palette: &Palette,
    zoom: &ZoomValues,
) -> NodeVisual {
    let radius = zoom.node_radius;
    let baseline = NodeVisual {
        fill: palette.node_default,
        opacity: 1.0,
        radius,
        label_offset: radius + 10.0,
        raise_label: false,
    };

    let Some(state) = highlight else {
        return baseline;
    };

    if state.hovered == index {
        let radius = radius * HOVER_RADIUS_SCALE;
        NodeVisual {
            fill: palette.node_highlight,
            opacity: 1.0,
            radius,
            label_offset: radius * 3.0 + 1.0,
            raise_label: true,
        }
    } else if state.adjacent_nodes.contains(&index) {
        NodeVisual {
            raise_label: true,
            ..baseline
        }
    } else {
        NodeVisual {
            fill: palette.node_dimmed,
            opacity: DIMMED_NODE_OPACITY,
            ..baseline
        }
    }
}

pub(super) fn link_visual(
    index: usize,
    highlight: Option<&HighlightState>,
    palette: &Palette,
    scale: f32,
) -> LinkVisual {
    let width = baseline_link_width(scale);
    let baseline = LinkVisual {
        stroke: palette.link_default,
        width,
        opacity: 1.0,
    };

    let Some(state) = highlight else {
        return baseline;
    };

    if state.incident_links.contains(&index) {
        LinkVisual {
            stroke: palette.link_highlight,
            width: width * 2.0,
            opacity: 1.0,
        }
    } else {
        LinkVisual {
            opacity: DIMMED_LINK_OPACITY,
            ..baseline
        }
    }
}

pub(super) fn baseline_link_width(scale: f32) -> f32 {
    (0.5 * scale).max(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::graph::build_scene_graph;
    use crate::data::{ContentKind, ContentRecord, GraphData, LinkRecord};

    fn record(id: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_owned(),
            title: format!("Title {id}"),
            kind: ContentKind::Article,
            summary: None,
            url: None,
        }
    }

    fn link(source: &str, target: &str) -> LinkRecord {
        LinkRecord {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    /// Star graph: center `c` linked to leaves `a`, `b`, `d`.
    fn star_scene() -> SceneGraph {
        let data = GraphData {
            nodes: vec![record("c"), record("a"), record("b"), record("d")],
            links: vec![link("c", "a"), link("c", "b"), link("d", "c")],
        };
        build_scene_graph(&data, 700.0, 500.0)
    }

    fn index_of(scene: &SceneGraph, id: &str) -> usize {
        scene.index_by_id[id]
    }

    #[test]
    fn star_center_is_adjacent_to_every_leaf() {
        let scene = star_scene();
        let center = index_of(&scene, "c");
        let state = build_highlight_state(&scene, center);

        let expected = ["c", "a", "b", "d"]
            .iter()
            .map(|id| index_of(&scene, id))
            .collect::<HashSet<_>>();
        assert_eq!(state.adjacent_nodes, expected);
        assert_eq!(state.incident_links.len(), 3);
    }

    #[test]
    fn star_leaf_sees_only_one_hop() {
        let scene = star_scene();
        let leaf = index_of(&scene, "a");
        let state = build_highlight_state(&scene, leaf);

        let expected = ["a", "c"]
            .iter()
            .map(|id| index_of(&scene, id))
            .collect::<HashSet<_>>();
        assert_eq!(state.adjacent_nodes, expected);
        assert_eq!(state.incident_links.len(), 1);
    }

    #[test]
    fn hover_exit_restores_every_style() {
        let scene = star_scene();
        let palette = Palette::default();
        let zoom = ZoomValues::for_scale(1.0);

        let baseline_nodes: Vec<_> = (0..scene.nodes.len())
            .map(|i| node_visual(i, None, &palette, &zoom))
            .collect();
        let baseline_links: Vec<_> = (0..scene.links.len())
            .map(|i| link_visual(i, None, &palette, 1.0))
            .collect();

        for hovered in 0..scene.nodes.len() {
            let state = build_highlight_state(&scene, hovered);

            // Entering hover changes at least the hovered node.
            let entered = node_visual(hovered, Some(&state), &palette, &zoom);
            assert_ne!(entered, baseline_nodes[hovered]);

            // Exiting hover (no highlight state) is the exact inverse.
            for i in 0..scene.nodes.len() {
                assert_eq!(node_visual(i, None, &palette, &zoom), baseline_nodes[i]);
            }
            for i in 0..scene.links.len() {
                assert_eq!(link_visual(i, None, &palette, 1.0), baseline_links[i]);
            }
        }
    }

    #[test]
    fn hover_styling_matches_roles() {
        let scene = star_scene();
        let palette = Palette::default();
        let zoom = ZoomValues::for_scale(1.0);
        let center = index_of(&scene, "c");
        let state = build_highlight_state(&scene, center);

        let hovered = node_visual(center, Some(&state), &palette, &zoom);
        assert_eq!(hovered.fill, palette.node_highlight);
        assert_eq!(hovered.radius, zoom.node_radius * 1.5);
        assert_eq!(hovered.label_offset, hovered.radius * 3.0 + 1.0);
        assert!(hovered.raise_label);

        let adjacent = node_visual(index_of(&scene, "a"), Some(&state), &palette, &zoom);
        assert_eq!(adjacent.fill, palette.node_default);
        assert_eq!(adjacent.opacity, 1.0);

        let leaf_state = build_highlight_state(&scene, index_of(&scene, "a"));
        let unrelated = node_visual(index_of(&scene, "b"), Some(&leaf_state), &palette, &zoom);
        assert_eq!(unrelated.fill, palette.node_dimmed);
        assert_eq!(unrelated.opacity, DIMMED_NODE_OPACITY);
    }

    #[test]
    fn incident_links_double_in_width() {
        let scene = star_scene();
        let palette = Palette::default();
        let center = index_of(&scene, "c");
        let state = build_highlight_state(&scene, center);

        let base = baseline_link_width(1.0);
        for i in 0..scene.links.len() {
            let visual = link_visual(i, Some(&state), &palette, 1.0);
            assert_eq!(visual.width, base * 2.0);
            assert_eq!(visual.stroke, palette.link_highlight);
            assert_eq!(visual.opacity, 1.0);
        }

        let leaf_state = build_highlight_state(&scene, index_of(&scene, "a"));
        let dimmed = (0..scene.links.len())
            .map(|i| link_visual(i, Some(&leaf_state), &palette, 1.0))
            .filter(|visual| visual.opacity == DIMMED_LINK_OPACITY)
            .count();
        assert_eq!(dimmed, 2);
    }
}
