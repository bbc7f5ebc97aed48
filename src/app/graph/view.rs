use std::collections::HashSet;
use std::sync::Arc;

use eframe::egui::{self, Align2, FontId, Pos2, Sense, Stroke, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::super::highlight::{build_highlight_state, link_visual, node_visual};
use super::super::render_utils::{draw_background, with_opacity};
use super::super::zoom::{ZoomValues, label_opacity};
use super::super::{SearchMatchCache, ViewModel};

impl ViewModel {
    fn cached_search_matches(&mut self) -> Option<Arc<HashSet<usize>>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = &self.search_match_cache
            && cached.query == query
        {
            return Some(Arc::clone(&cached.matches));
        }

        let scene = self.scene.as_ref()?;
        let matcher = SkimMatcherV2::default();
        let matches = scene
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                matcher
                    .fuzzy_match(&node.title, query)
                    .or_else(|| {
                        matcher
                            .fuzzy_match(&node.title.to_ascii_lowercase(), &query.to_ascii_lowercase())
                    })
                    .map(|_score| index)
            })
            .collect::<HashSet<_>>();
        let matches = Arc::new(matches);

        self.search_match_cache = Some(SearchMatchCache {
            query: query.to_owned(),
            matches: Arc::clone(&matches),
        });

        Some(matches)
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        if self.scene_dirty {
            self.rebuild_scene();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        draw_background(&painter, rect, &self.palette);

        let search_matches = self.cached_search_matches();
        let palette = self.palette;

        let Some(scene) = self.scene.as_mut() else {
            ui.label("No graph data loaded.");
            return;
        };
        let Some(sim) = self.simulation.as_mut() else {
            return;
        };
        let transform = &mut self.transform;
        let drag_node = &mut self.drag_node;

        sim.resize(rect.width(), rect.height());

        let pointer = ui.input(|input| input.pointer.hover_pos());
        let hit_radius = ZoomValues::for_scale(transform.k).node_radius;
        let hovered = Self::hovered_node(scene, *transform, rect, pointer, hit_radius);

        Self::handle_node_drag(scene, sim, drag_node, *transform, rect, &response, hovered);
        Self::handle_zoom(transform, sim, ui, rect, &response);
        Self::handle_pan(transform, drag_node.is_some(), &response);

        let moving = sim.step(scene);
        if moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        let scale = transform.k;
        let zoom_values = ZoomValues::for_scale(scale);
        let screen = scene
            .nodes
            .iter()
            .map(|node| transform.world_to_screen(rect, node.pos))
            .collect::<Vec<Pos2>>();

        let highlight = hovered.map(|index| build_highlight_state(scene, index));

        for (index, link) in scene.links.iter().enumerate() {
            let visual = link_visual(index, highlight.as_ref(), &palette, scale);
            painter.line_segment(
                [screen[link.source], screen[link.target]],
                Stroke::new(visual.width, with_opacity(visual.stroke, visual.opacity)),
            );
        }

        let text_alpha = label_opacity(scale);
        let mut labels = Vec::with_capacity(scene.nodes.len());
        for index in 0..scene.nodes.len() {
            let visual = node_visual(index, highlight.as_ref(), &palette, &zoom_values);
            painter.circle_filled(
                screen[index],
                visual.radius,
                with_opacity(visual.fill, visual.opacity),
            );

            if search_matches
                .as_ref()
                .is_some_and(|matches| matches.contains(&index))
            {
                painter.circle_stroke(
                    screen[index],
                    visual.radius + 3.0,
                    Stroke::new(1.5, palette.search_accent),
                );
            }

            if text_alpha > 0.0 {
                labels.push((index, visual));
            }
        }

        // Raised labels are drawn last so the hovered neighborhood reads on top.
        labels.sort_by_key(|(_, visual)| visual.raise_label);
        for (index, visual) in labels {
            painter.text(
                screen[index] + vec2(0.0, visual.label_offset),
                Align2::CENTER_CENTER,
                &scene.nodes[index].title,
                FontId::proportional(zoom_values.font_size),
                with_opacity(palette.text, text_alpha * visual.opacity),
            );
        }

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            hovered.and_then(|index| scene.nodes.get(index).map(|node| node.id.clone()))
        } else {
            None
        };

        if let Some(id) = pending_selection {
            self.set_selected(Some(id));
        }
    }
}
