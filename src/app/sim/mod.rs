mod forces;
mod quadtree;

use eframe::egui::{Vec2, vec2};

use crate::util::label_pixel_width;

use super::SceneGraph;
use super::zoom::ZoomValues;
use forces::{
    ChargeParams, accumulate_axis_pull, accumulate_charge_for_node, accumulate_link_springs,
    apply_center_pull, relax_collisions,
};
use quadtree::QuadTree;

/// Nodes are clamped this far inside the canvas edge after every tick.
pub(in crate::app) const CANVAS_PADDING: f32 = 50.0;

/// Alpha target while a node is being dragged; back to zero on release.
pub(in crate::app) const DRAG_ALPHA_TARGET: f32 = 0.3;

const ALPHA_START: f32 = 1.0;
const ALPHA_MIN: f32 = 0.001;
const ALPHA_DECAY: f32 = 0.02;
const ALPHA_REHEAT: f32 = 0.3;
const VELOCITY_DECAY: f32 = 0.4;
const LINK_STRENGTH: f32 = 0.5;
const CENTER_STRENGTH: f32 = 0.1;
const AXIS_STRENGTH: f32 = 0.05;
const CHARGE_DISTANCE_MIN: f32 = 10.0;
const CHARGE_DISTANCE_MAX: f32 = 200.0;
const CHARGE_THETA: f32 = 0.9;
const COLLISION_PASSES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Running,
    Stopped,
}

/// Zoom-dependent force parameters. Updated in place on zoom changes so the
/// accumulated layout survives re-tuning instead of starting over.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ForceTuning {
    link_distance: f32,
    charge_strength: f32,
    collision_radius: f32,
}

impl ForceTuning {
    fn from_zoom(zoom: &ZoomValues) -> Self {
        Self {
            link_distance: zoom.link_distance,
            charge_strength: zoom.charge_strength,
            collision_radius: zoom.collision_radius,
        }
    }
}

/// Force-directed layout engine for one data set. Owns the cooling schedule;
/// positions and velocities live on the scene nodes it is stepped with.
///
/// Exponential cooldown: each tick moves `alpha` toward `alpha_target` and
/// ticking idles once alpha falls under its minimum with a zero target.
/// Drags and zoom changes raise the temperature again. `stop()` is terminal;
/// a new data set gets a fresh instance.
pub(in crate::app) struct Simulation {
    phase: Phase,
    alpha: f32,
    alpha_target: f32,
    tuning: ForceTuning,
    width: f32,
    height: f32,
    forces: Vec<Vec2>,
    positions: Vec<Vec2>,
    collision_radii: Vec<f32>,
}

impl Simulation {
    pub(in crate::app) fn new(zoom: &ZoomValues, width: f32, height: f32) -> Self {
        Self {
            phase: Phase::Uninitialized,
            alpha: ALPHA_START,
            alpha_target: 0.0,
            tuning: ForceTuning::from_zoom(zoom),
            width,
            height,
            forces: Vec::new(),
            positions: Vec::new(),
            collision_radii: Vec::new(),
        }
    }

    pub(in crate::app) fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Push new zoom-derived parameters into the live force configuration
    /// and reheat so the layout relaxes under them.
    pub(in crate::app) fn retune(&mut self, zoom: &ZoomValues) {
        let tuning = ForceTuning::from_zoom(zoom);
        if tuning == self.tuning {
            return;
        }
        self.tuning = tuning;
        self.reheat();
    }

    pub(in crate::app) fn reheat(&mut self) {
        if self.phase != Phase::Stopped {
            self.alpha = ALPHA_REHEAT;
        }
    }

    pub(in crate::app) fn set_alpha_target(&mut self, target: f32) {
        self.alpha_target = target.clamp(0.0, 1.0);
    }

    pub(in crate::app) fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(in crate::app) fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    /// Halt this instance for good. Idempotent; stepping afterwards is a
    /// no-op so a torn-down view cannot keep mutating node state.
    pub(in crate::app) fn stop(&mut self) {
        if self.phase != Phase::Stopped {
            log::debug!("simulation stopped");
        }
        self.phase = Phase::Stopped;
    }

    /// Advance one tick. Returns true while the layout is still hot; the
    /// caller uses this to keep scheduling repaints.
    ///
    /// Force application order is fixed: link springs, charge repulsion,
    /// centering, axis bias, collision relaxation, then integration, pins,
    /// and the canvas bounds clamp. Reordering changes convergence.
    pub(in crate::app) fn step(&mut self, scene: &mut SceneGraph) -> bool {
        match self.phase {
            Phase::Stopped => return false,
            Phase::Uninitialized => self.phase = Phase::Running,
            Phase::Running => {}
        }

        if self.alpha < ALPHA_MIN && self.alpha_target < ALPHA_MIN {
            return false;
        }

        self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;

        let node_count = scene.nodes.len();
        if node_count == 0 || self.width <= 0.0 || self.height <= 0.0 {
            return self.alpha >= ALPHA_MIN;
        }

        let center = vec2(self.width * 0.5, self.height * 0.5);

        self.forces.clear();
        self.forces.resize(node_count, Vec2::ZERO);
        self.positions.clear();
        self.collision_radii.clear();
        for node in &scene.nodes {
            self.positions.push(node.pos);
            self.collision_radii
                .push((label_pixel_width(&node.title) * 0.5).max(self.tuning.collision_radius));
        }

        accumulate_link_springs(
            scene,
            self.tuning.link_distance,
            LINK_STRENGTH,
            self.alpha,
            &mut self.forces,
        );

        let charge = ChargeParams {
            strength: self.tuning.charge_strength,
            distance_min: CHARGE_DISTANCE_MIN,
            distance_max: CHARGE_DISTANCE_MAX,
            theta: CHARGE_THETA,
        };
        if let Some(tree) = QuadTree::build(&self.positions) {
            for (index, force) in self.forces.iter_mut().enumerate() {
                accumulate_charge_for_node(&tree, index, &self.positions, charge, self.alpha, force);
            }
        }

        apply_center_pull(&mut scene.nodes, center, CENTER_STRENGTH);
        accumulate_axis_pull(&scene.nodes, center, AXIS_STRENGTH, self.alpha, &mut self.forces);
        relax_collisions(&mut scene.nodes, &self.collision_radii, COLLISION_PASSES);

        for (node, force) in scene.nodes.iter_mut().zip(&self.forces) {
            node.vel = (node.vel + *force) * (1.0 - VELOCITY_DECAY);
            node.pos += node.vel;
        }

        // Pins override everything the forces decided this tick.
        for node in &mut scene.nodes {
            if let Some(pin) = node.pin {
                node.pos = pin;
                node.vel = Vec2::ZERO;
            }
        }

        let max_x = (self.width - CANVAS_PADDING).max(CANVAS_PADDING);
        let max_y = (self.height - CANVAS_PADDING).max(CANVAS_PADDING);
        for node in &mut scene.nodes {
            node.pos.x = node.pos.x.clamp(CANVAS_PADDING, max_x);
            node.pos.y = node.pos.y.clamp(CANVAS_PADDING, max_y);
        }

        self.alpha >= ALPHA_MIN
    }
}
