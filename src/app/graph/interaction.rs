use eframe::egui::{self, Pos2, Rect, Ui, Vec2};

use super::super::sim::{DRAG_ALPHA_TARGET, Simulation};
use super::super::zoom::{Transform, ZoomValues};
use super::super::{SceneGraph, ViewModel};

/// Pin a node at its current position and warm the simulation so the rest of
/// the layout keeps adjusting around the drag. Pinning first prevents the
/// node from jumping to the pointer on the initial event.
pub(super) fn begin_node_drag(scene: &mut SceneGraph, sim: &mut Simulation, index: usize) {
    if let Some(node) = scene.nodes.get_mut(index) {
        node.pin = Some(node.pos);
        sim.set_alpha_target(DRAG_ALPHA_TARGET);
        sim.reheat();
    }
}

/// Move the pin, and the node with it, to the pointer's world position.
pub(super) fn drag_node_to(scene: &mut SceneGraph, index: usize, point: Vec2) {
    if let Some(node) = scene.nodes.get_mut(index) {
        node.pin = Some(point);
        node.pos = point;
        node.vel = Vec2::ZERO;
    }
}

/// Release the pin. Physics resumes control of the node and the layout cools
/// back down immediately, with no post-release burst.
pub(super) fn end_node_drag(scene: &mut SceneGraph, sim: &mut Simulation, index: usize) {
    if let Some(node) = scene.nodes.get_mut(index) {
        node.pin = None;
    }
    sim.set_alpha_target(0.0);
}

impl ViewModel {
    pub(in crate::app) fn handle_zoom(
        transform: &mut Transform,
        sim: &mut Simulation,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);

        let before = transform.k;
        transform.zoom_about(rect, pointer, factor);
        if (transform.k - before).abs() > f32::EPSILON {
            sim.retune(&ZoomValues::for_scale(transform.k));
        }
    }

    pub(in crate::app) fn handle_pan(
        transform: &mut Transform,
        drag_active: bool,
        response: &egui::Response,
    ) {
        // A gesture claimed by a node drag never pans the viewport.
        if drag_active {
            return;
        }

        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            transform.pan_by(response.drag_delta());
        }
    }

    pub(in crate::app) fn hovered_node(
        scene: &SceneGraph,
        transform: Transform,
        rect: Rect,
        pointer: Option<Pos2>,
        hit_radius: f32,
    ) -> Option<usize> {
        let pointer = pointer?;
        scene
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let distance = transform.world_to_screen(rect, node.pos).distance(pointer);
                (distance <= hit_radius).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    pub(in crate::app) fn handle_node_drag(
        scene: &mut SceneGraph,
        sim: &mut Simulation,
        drag_node: &mut Option<usize>,
        transform: Transform,
        rect: Rect,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary)
            && drag_node.is_none()
            && let Some(index) = hovered
        {
            *drag_node = Some(index);
            begin_node_drag(scene, sim, index);
        }

        let Some(index) = *drag_node else {
            return;
        };

        if response.dragged_by(egui::PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            drag_node_to(scene, index, transform.screen_to_world(rect, pointer));
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            end_node_drag(scene, sim, index);
            *drag_node = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::graph::build_scene_graph;
    use crate::data::sample_graph;
    use eframe::egui::vec2;

    fn scene_and_sim() -> (SceneGraph, Simulation) {
        let scene = build_scene_graph(&sample_graph(), 700.0, 500.0);
        let sim = Simulation::new(&ZoomValues::for_scale(1.0), 700.0, 500.0);
        (scene, sim)
    }

    #[test]
    fn drag_round_trip_releases_the_pin_at_the_last_position() {
        let (mut scene, mut sim) = scene_and_sim();
        let start = scene.nodes[3].pos;

        begin_node_drag(&mut scene, &mut sim, 3);
        assert_eq!(scene.nodes[3].pin, Some(start));
        assert_eq!(scene.nodes[3].pos, start);

        let dropped_at = vec2(321.0, 177.0);
        drag_node_to(&mut scene, 3, dropped_at);
        end_node_drag(&mut scene, &mut sim, 3);

        assert!(scene.nodes[3].pin.is_none());
        assert_eq!(scene.nodes[3].pos, dropped_at);
    }

    #[test]
    fn drag_start_resumes_a_settled_simulation() {
        let (mut scene, mut sim) = scene_and_sim();
        while sim.step(&mut scene) {}

        begin_node_drag(&mut scene, &mut sim, 0);
        assert!(sim.step(&mut scene), "drag should keep the layout ticking");

        end_node_drag(&mut scene, &mut sim, 0);
        while sim.step(&mut scene) {}
        assert!(sim.alpha() < 0.001);
    }

    #[test]
    fn dragged_pin_survives_simulation_ticks() {
        let (mut scene, mut sim) = scene_and_sim();
        begin_node_drag(&mut scene, &mut sim, 1);
        let held = vec2(400.0, 250.0);
        drag_node_to(&mut scene, 1, held);

        for _ in 0..20 {
            sim.step(&mut scene);
        }
        assert_eq!(scene.nodes[1].pos, held);
    }
}
