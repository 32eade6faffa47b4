use glam::Vec2;

/// Axis-aligned bounding box in world space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `pos`.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True when the two boxes share a region of positive area.
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Copy of this box with the bottom edge pushed down by `amount`.
    pub fn extend_down(mut self, amount: f32) -> Self {
        self.max.y += amount;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bx(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_boxes() {
        assert!(bx(0.0, 0.0, 10.0, 10.0).overlaps(&bx(5.0, 5.0, 10.0, 10.0)));
        assert!(bx(5.0, 5.0, 10.0, 10.0).overlaps(&bx(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        assert!(bx(0.0, 0.0, 50.0, 50.0).overlaps(&bx(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        // Adjacent grid cells
        assert!(!bx(0.0, 0.0, 50.0, 50.0).overlaps(&bx(50.0, 0.0, 50.0, 50.0)));
        assert!(!bx(0.0, 0.0, 50.0, 50.0).overlaps(&bx(0.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn extend_down_reaches_support_below() {
        let feet = bx(0.0, 0.0, 10.0, 10.0);
        let floor = bx(0.0, 11.0, 50.0, 50.0);
        assert!(!feet.overlaps(&floor));
        assert!(!feet.extend_down(1.0).overlaps(&floor));
        assert!(feet.extend_down(1.5).overlaps(&floor));
        assert_eq!(feet.extend_down(1.0).size(), Vec2::new(10.0, 11.0));
    }
}
