use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Approximate per-character pixel width used when sizing collision discs
/// around node labels. Glyph widths are not measured; this is a heuristic.
pub const LABEL_CHAR_WIDTH: f32 = 10.0;

pub fn label_pixel_width(title: &str) -> f32 {
    title.chars().count() as f32 * LABEL_CHAR_WIDTH
}

/// Deterministic pseudo-random pair in [-1, 1] derived from an id, used to
/// seed layout positions so a data set always unfolds the same way.
pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_pair_is_deterministic_and_bounded() {
        let (x1, y1) = stable_pair("neural-networks");
        let (x2, y2) = stable_pair("neural-networks");
        assert_eq!((x1, y1), (x2, y2));
        assert!((-1.0..=1.0).contains(&x1));
        assert!((-1.0..=1.0).contains(&y1));
    }

    #[test]
    fn stable_pair_varies_across_ids() {
        assert_ne!(stable_pair("a"), stable_pair("b"));
    }

    #[test]
    fn label_width_counts_characters() {
        assert_eq!(label_pixel_width(""), 0.0);
        assert_eq!(label_pixel_width("abcd"), 4.0 * LABEL_CHAR_WIDTH);
    }
}
