use eframe::egui::{Vec2, vec2};

use super::super::{SceneGraph, SceneNode};
use super::quadtree::QuadTree;

#[derive(Clone, Copy)]
pub(super) struct ChargeParams {
    /// Negative values repel, matching the zoom mapper's output.
    pub strength: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    pub theta: f32,
}

/// Direction used when two points coincide exactly, varied by index so
/// stacked nodes separate instead of oscillating along one axis.
pub(super) fn scatter_direction(index: usize) -> Vec2 {
    let angle = ((index as f32) * 0.618_034 + 0.11) * std::f32::consts::TAU;
    vec2(angle.cos(), angle.sin())
}

/// Spring each link toward its rest length, split evenly between endpoints.
/// A soft constraint: long links contract, short ones expand.
pub(super) fn accumulate_link_springs(
    scene: &SceneGraph,
    rest_distance: f32,
    strength: f32,
    alpha: f32,
    forces: &mut [Vec2],
) {
    for (link_index, link) in scene.links.iter().enumerate() {
        let delta = scene.nodes[link.source].pos - scene.nodes[link.target].pos;
        let distance_sq = delta.length_sq();
        let (direction, distance) = if distance_sq > 1e-6 {
            let distance = distance_sq.sqrt();
            (delta / distance, distance)
        } else {
            (scatter_direction(link_index), 0.0)
        };

        let correction = (distance - rest_distance) * strength * alpha * 0.5;
        forces[link.source] -= direction * correction;
        forces[link.target] += direction * correction;
    }
}

/// Many-body repulsion for one node, walking the Barnes-Hut tree. Cells far
/// enough away (by the theta opening criterion) act as a single aggregate
/// body. Interaction distance is clamped into [distance_min, distance_max]
/// so near-coincident nodes cannot produce runaway velocities and far pairs
/// cost nothing.
pub(super) fn accumulate_charge_for_node(
    tree: &QuadTree,
    index: usize,
    positions: &[Vec2],
    params: ChargeParams,
    alpha: f32,
    force: &mut Vec2,
) {
    if tree.mass <= 0.0 {
        return;
    }

    let point = positions[index];
    let min_sq = params.distance_min * params.distance_min;
    let max_sq = params.distance_max * params.distance_max;

    if tree.is_leaf() {
        for &other in &tree.members {
            if other == index {
                continue;
            }

            let mut delta = point - positions[other];
            let mut distance_sq = delta.length_sq();
            if distance_sq > max_sq {
                continue;
            }
            if distance_sq < 1e-6 {
                delta = scatter_direction(other) * params.distance_min;
                distance_sq = min_sq;
            }
            let distance_sq = distance_sq.max(min_sq);

            *force += delta * (-params.strength * alpha / distance_sq);
        }
        return;
    }

    let delta = point - tree.center_of_mass;
    let distance_sq = delta.length_sq().max(1e-4);
    let distance = distance_sq.sqrt();
    let can_aggregate =
        !tree.bounds.contains(point) && (tree.bounds.side_length() / distance) < params.theta;

    if can_aggregate {
        if distance_sq > max_sq {
            return;
        }
        let distance_sq = distance_sq.max(min_sq);
        *force += delta * (-params.strength * tree.mass * alpha / distance_sq);
        return;
    }

    for child in tree.children.iter().flatten() {
        accumulate_charge_for_node(child, index, positions, params, alpha, force);
    }
}

/// Pull the layout centroid toward the canvas center by shifting every node.
pub(super) fn apply_center_pull(nodes: &mut [SceneNode], center: Vec2, strength: f32) {
    if nodes.is_empty() {
        return;
    }

    let mut centroid = Vec2::ZERO;
    for node in nodes.iter() {
        centroid += node.pos;
    }
    centroid /= nodes.len() as f32;

    let shift = (center - centroid) * strength;
    for node in nodes.iter_mut() {
        node.pos += shift;
    }
}

/// Per-axis bias toward the canvas center. Weaker than the centroid pull but
/// applied per node, which keeps disconnected components from drifting.
pub(super) fn accumulate_axis_pull(
    nodes: &[SceneNode],
    center: Vec2,
    strength: f32,
    alpha: f32,
    forces: &mut [Vec2],
) {
    for (node, force) in nodes.iter().zip(forces.iter_mut()) {
        *force += (center - node.pos) * strength * alpha;
    }
}

/// Iteratively separate overlapping collision discs. Radii already account
/// for approximate label width so text does not pile up.
pub(super) fn relax_collisions(nodes: &mut [SceneNode], radii: &[f32], passes: usize) {
    for _ in 0..passes {
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let min_distance = radii[i] + radii[j];
                let delta = nodes[i].pos - nodes[j].pos;
                let distance_sq = delta.length_sq();
                if distance_sq >= min_distance * min_distance {
                    continue;
                }

                let distance = distance_sq.sqrt();
                let direction = if distance > 1e-3 {
                    delta / distance
                } else {
                    scatter_direction(i.wrapping_mul(31) ^ j)
                };

                let push = (min_distance - distance) * 0.5;
                nodes[i].pos += direction * push;
                nodes[j].pos -= direction * push;
            }
        }
    }
}
