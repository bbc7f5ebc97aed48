use std::collections::HashMap;

use eframe::egui::{Vec2, vec2};

use crate::data::GraphData;
use crate::util::stable_pair;

use super::super::sim::{CANVAS_PADDING, Simulation};
use super::super::zoom::ZoomValues;
use super::super::{SceneGraph, SceneLink, SceneNode, ViewModel};

/// Logical canvas used before the first frame reports a real size.
pub(in crate::app) const DEFAULT_CANVAS_WIDTH: f32 = 700.0;
pub(in crate::app) const DEFAULT_CANVAS_HEIGHT: f32 = 500.0;

/// Resolve raw graph data into the scene arena. Node order is preserved and
/// links become index pairs, resolved exactly once. A link naming an unknown
/// id is dropped here so nothing downstream ever sees a dangling endpoint;
/// self-links and exact duplicates are dropped with it.
pub(in crate::app) fn build_scene_graph(data: &GraphData, width: f32, height: f32) -> SceneGraph {
    let mut index_by_id = HashMap::with_capacity(data.nodes.len());
    for (index, record) in data.nodes.iter().enumerate() {
        index_by_id.insert(record.id.clone(), index);
    }

    let center = vec2(width * 0.5, height * 0.5);
    let spread = ((width.min(height) * 0.5) - CANVAS_PADDING).max(1.0);

    let nodes = data
        .nodes
        .iter()
        .map(|record| {
            let (jx, jy) = stable_pair(&record.id);
            SceneNode {
                id: record.id.clone(),
                title: record.title.clone(),
                pos: center + (vec2(jx, jy) * spread),
                vel: Vec2::ZERO,
                pin: None,
            }
        })
        .collect::<Vec<_>>();

    let mut links = Vec::with_capacity(data.links.len());
    let mut dropped = 0usize;
    for record in &data.links {
        let (Some(&source), Some(&target)) = (
            index_by_id.get(&record.source),
            index_by_id.get(&record.target),
        ) else {
            dropped += 1;
            continue;
        };

        if source == target {
            dropped += 1;
            continue;
        }

        let link = SceneLink { source, target };
        if !links.contains(&link) {
            links.push(link);
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} links with unresolved or degenerate endpoints");
    }

    SceneGraph {
        nodes,
        links,
        index_by_id,
    }
}

impl ViewModel {
    /// Ingest the current data set: a fresh scene and a fresh simulation.
    /// The previous simulation instance, if any, is stopped first so it can
    /// never keep mutating nodes that are no longer rendered.
    pub(in crate::app) fn rebuild_scene(&mut self) {
        if let Some(sim) = self.simulation.as_mut() {
            sim.stop();
        }
        self.search_match_cache = None;
        self.drag_node = None;

        let scene = build_scene_graph(&self.data, DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
        log::info!(
            "scene rebuilt: {} nodes, {} links",
            scene.nodes.len(),
            scene.links.len()
        );

        self.simulation = Some(Simulation::new(
            &ZoomValues::for_scale(self.transform.k),
            DEFAULT_CANVAS_WIDTH,
            DEFAULT_CANVAS_HEIGHT,
        ));
        self.scene = Some(scene);
        self.scene_dirty = false;
    }
}
