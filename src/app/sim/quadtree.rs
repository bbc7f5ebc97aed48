use eframe::egui::{Vec2, vec2};

const LEAF_CAPACITY: usize = 4;
const MAX_DEPTH: usize = 12;

#[derive(Clone, Copy)]
pub(super) struct CellBounds {
    pub(super) center: Vec2,
    pub(super) half_extent: f32,
}

impl CellBounds {
    fn around(points: &[Vec2]) -> Option<Self> {
        let mut min = vec2(f32::INFINITY, f32::INFINITY);
        let mut max = vec2(f32::NEG_INFINITY, f32::NEG_INFINITY);

        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        if !min.x.is_finite() || !min.y.is_finite() || !max.x.is_finite() || !max.y.is_finite() {
            return None;
        }

        let span = (max.x - min.x).max(max.y - min.y).max(1.0);
        Some(Self {
            center: (min + max) * 0.5,
            half_extent: (span * 0.5) + 1.0,
        })
    }

    pub(super) fn contains(self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extent
            && (point.y - self.center.y).abs() <= self.half_extent
    }

    pub(super) fn side_length(self) -> f32 {
        self.half_extent * 2.0
    }

    fn quadrant_of(self, point: Vec2) -> usize {
        let right = point.x >= self.center.x;
        let lower = point.y >= self.center.y;
        (right as usize) | ((lower as usize) << 1)
    }

    fn child_bounds(self, quadrant: usize) -> Self {
        let quarter = self.half_extent * 0.5;
        let offset = vec2(
            if quadrant & 1 == 0 { -quarter } else { quarter },
            if quadrant & 2 == 0 { -quarter } else { quarter },
        );

        Self {
            center: self.center + offset,
            half_extent: quarter,
        }
    }
}

/// Barnes-Hut aggregation tree over node positions. Interior cells carry
/// their total mass and center of mass so distant groups can repel as one.
pub(super) struct QuadTree {
    pub(super) bounds: CellBounds,
    pub(super) center_of_mass: Vec2,
    pub(super) mass: f32,
    pub(super) members: Vec<usize>,
    pub(super) children: [Option<Box<QuadTree>>; 4],
}

impl QuadTree {
    pub(super) fn build(positions: &[Vec2]) -> Option<Self> {
        let bounds = CellBounds::around(positions)?;
        let members = (0..positions.len()).collect::<Vec<_>>();
        Some(Self::build_cell(bounds, members, positions, 0))
    }

    fn build_cell(bounds: CellBounds, members: Vec<usize>, positions: &[Vec2], depth: usize) -> Self {
        let mut center_of_mass = Vec2::ZERO;
        for &index in &members {
            center_of_mass += positions[index];
        }

        let mass = members.len() as f32;
        if mass > 0.0 {
            center_of_mass /= mass;
        }

        let mut cell = Self {
            bounds,
            center_of_mass,
            mass,
            members,
            children: std::array::from_fn(|_| None),
        };

        if depth >= MAX_DEPTH || cell.members.len() <= LEAF_CAPACITY {
            return cell;
        }

        let mut buckets = std::array::from_fn::<_, 4, _>(|_| Vec::new());
        for &index in &cell.members {
            buckets[bounds.quadrant_of(positions[index])].push(index);
        }

        // Coincident points all land in one bucket; splitting would recurse
        // forever without shrinking anything.
        if buckets.iter().filter(|bucket| !bucket.is_empty()).count() <= 1 {
            return cell;
        }

        for (quadrant, bucket) in buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }

            cell.children[quadrant] = Some(Box::new(Self::build_cell(
                bounds.child_bounds(quadrant),
                bucket,
                positions,
                depth + 1,
            )));
        }
        cell.members.clear();
        cell
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| child.is_none())
    }
}
