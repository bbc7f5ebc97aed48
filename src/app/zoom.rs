use eframe::egui::{Pos2, Rect, Vec2};

pub(in crate::app) const ZOOM_FAR: f32 = 0.5;
pub(in crate::app) const ZOOM_MID: f32 = 1.5;
pub(in crate::app) const ZOOM_MAX: f32 = 4.0;

/// Visual and physics parameters derived from the viewport scale. Every
/// output grows with the scale and is floored so a zoomed-out graph stays
/// legible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct ZoomValues {
    pub node_radius: f32,
    pub link_distance: f32,
    pub charge_strength: f32,
    pub collision_radius: f32,
    pub font_size: f32,
}

impl ZoomValues {
    pub(in crate::app) fn for_scale(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        Self {
            node_radius: (10.0 * scale).max(5.0),
            link_distance: (80.0 * scale).max(50.0),
            charge_strength: -30.0 * scale,
            collision_radius: (60.0 * scale).max(40.0),
            font_size: (12.0 * scale).max(8.0),
        }
    }
}

/// Label opacity for a given scale: invisible below [`ZOOM_FAR`], fully
/// opaque at and above [`ZOOM_MID`], linear in between.
pub(in crate::app) fn label_opacity(scale: f32) -> f32 {
    ((scale - ZOOM_FAR) / (ZOOM_MID - ZOOM_FAR)).clamp(0.0, 1.0)
}

/// Viewport transform: uniform scale plus translation, applied to the whole
/// scene. Owned by the viewport controller; everything else only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Transform {
    pub k: f32,
    pub translation: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            k: 1.0,
            translation: Vec2::ZERO,
        }
    }
}

impl Transform {
    pub(in crate::app) fn world_to_screen(self, rect: Rect, world: Vec2) -> Pos2 {
        rect.left_top() + self.translation + (world * self.k)
    }

    pub(in crate::app) fn screen_to_world(self, rect: Rect, screen: Pos2) -> Vec2 {
        (screen - rect.left_top() - self.translation) / self.k
    }

    pub(in crate::app) fn pan_by(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Scale by `factor` while keeping the world point under `anchor` fixed
    /// on screen. The resulting scale is bounded to [ZOOM_FAR, ZOOM_MAX].
    pub(in crate::app) fn zoom_about(&mut self, rect: Rect, anchor: Pos2, factor: f32) {
        let world = self.screen_to_world(rect, anchor);
        self.k = (self.k * factor).clamp(ZOOM_FAR, ZOOM_MAX);
        self.translation = anchor - rect.left_top() - (world * self.k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn floors_hold_at_every_scale() {
        for scale in [0.0, 0.1, 0.5, 1.0, 2.0, 4.0] {
            let values = ZoomValues::for_scale(scale);
            assert!(values.node_radius >= 5.0, "node radius at k={scale}");
            assert!(values.link_distance >= 50.0, "link distance at k={scale}");
            assert!(values.collision_radius >= 40.0, "collision at k={scale}");
            assert!(values.font_size >= 8.0, "font size at k={scale}");
        }
    }

    #[test]
    fn outputs_grow_with_scale() {
        let scales = [0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0];
        for pair in scales.windows(2) {
            let lo = ZoomValues::for_scale(pair[0]);
            let hi = ZoomValues::for_scale(pair[1]);
            assert!(hi.node_radius >= lo.node_radius);
            assert!(hi.link_distance >= lo.link_distance);
            assert!(hi.charge_strength.abs() >= lo.charge_strength.abs());
            assert!(hi.collision_radius >= lo.collision_radius);
            assert!(hi.font_size >= lo.font_size);
        }
    }

    #[test]
    fn charge_stays_repulsive() {
        assert!(ZoomValues::for_scale(0.5).charge_strength < 0.0);
        assert!(ZoomValues::for_scale(4.0).charge_strength < 0.0);
    }

    #[test]
    fn degenerate_scale_falls_back_to_unit() {
        let unit = ZoomValues::for_scale(1.0);
        assert_eq!(ZoomValues::for_scale(f32::NAN), unit);
        assert_eq!(ZoomValues::for_scale(f32::INFINITY), unit);
        assert_eq!(ZoomValues::for_scale(-2.0), unit);
    }

    #[test]
    fn label_opacity_fades_between_thresholds() {
        assert_eq!(label_opacity(0.3), 0.0);
        assert_eq!(label_opacity(ZOOM_FAR), 0.0);
        assert!((label_opacity(1.0) - 0.5).abs() < 1e-6);
        assert_eq!(label_opacity(ZOOM_MID), 1.0);
        assert_eq!(label_opacity(ZOOM_MAX), 1.0);
    }

    #[test]
    fn zoom_about_is_bounded_and_anchored() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(700.0, 500.0));
        let mut transform = Transform::default();
        let anchor = pos2(200.0, 150.0);
        let world_before = transform.screen_to_world(rect, anchor);

        transform.zoom_about(rect, anchor, 2.0);
        assert_eq!(transform.k, 2.0);

        // The anchor keeps pointing at the same world position.
        let world_after = transform.screen_to_world(rect, anchor);
        assert!((world_after - world_before).length() < 1e-3);

        // Scale never leaves its supported window.
        transform.zoom_about(rect, anchor, 100.0);
        assert_eq!(transform.k, ZOOM_MAX);
        transform.zoom_about(rect, anchor, 1e-6);
        assert_eq!(transform.k, ZOOM_FAR);
    }

    #[test]
    fn pan_accumulates_translation() {
        let mut transform = Transform::default();
        transform.pan_by(vec2(10.0, -4.0));
        transform.pan_by(vec2(-2.0, 6.0));
        assert_eq!(transform.translation, vec2(8.0, 2.0));
    }
}
