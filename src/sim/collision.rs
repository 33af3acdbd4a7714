//! Collision geometry for hitboxes
//!
//! Every entity carries a [`Shape`] expressed relative to its origin (the
//! sprite's top-left corner). Overlap tests are pure and deterministic.

use glam::Vec2;

/// Hitbox kind, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Circle,
}

/// A hitbox relative to an entity origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned sub-rectangle `min..max`
    Box { min: Vec2, max: Vec2 },
    /// Circle around `center` (offset from origin)
    Circle { center: Vec2, radius: f32 },
}

impl Shape {
    /// Box from corner offsets `(x1, y1)-(x2, y2)`
    pub fn rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Shape::Box {
            min: Vec2::new(x1.min(x2), y1.min(y2)),
            max: Vec2::new(x1.max(x2), y1.max(y2)),
        }
    }

    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Shape::Circle {
            center: Vec2::new(cx, cy),
            radius: radius.abs(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Uniformly scale the offsets (hitboxes are tuned at one sprite size)
    pub fn scaled(&self, factor: f32) -> Self {
        match *self {
            Shape::Box { min, max } => Shape::Box {
                min: min * factor,
                max: max * factor,
            },
            Shape::Circle { center, radius } => Shape::Circle {
                center: center * factor,
                radius: radius * factor,
            },
        }
    }
}

/// Check whether two placed hitboxes overlap
///
/// Box-box uses open intervals, so boxes that only share an edge do not
/// overlap. Circle-circle compares squared distances.
///
/// # Panics
///
/// Panics when the shapes are of different kinds. Box-versus-circle has no
/// defined rule; configurations are validated so this is unreachable in a
/// running session.
pub fn overlaps(a: &Shape, pos_a: Vec2, b: &Shape, pos_b: Vec2) -> bool {
    match (a, b) {
        (
            Shape::Box {
                min: min_a,
                max: max_a,
            },
            Shape::Box {
                min: min_b,
                max: max_b,
            },
        ) => {
            let (a0, a1) = (pos_a + *min_a, pos_a + *max_a);
            let (b0, b1) = (pos_b + *min_b, pos_b + *max_b);
            a0.x < b1.x && b0.x < a1.x && a0.y < b1.y && b0.y < a1.y
        }
        (
            Shape::Circle {
                center: center_a,
                radius: radius_a,
            },
            Shape::Circle {
                center: center_b,
                radius: radius_b,
            },
        ) => {
            let reach = radius_a + radius_b;
            (pos_a + *center_a).distance_squared(pos_b + *center_b) <= reach * reach
        }
        _ => panic!(
            "no overlap rule for {:?} hitbox against {:?} hitbox",
            a.kind(),
            b.kind()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_overlap() {
        let a = Shape::rect(0.0, 0.0, 32.0, 32.0);
        let b = Shape::rect(0.0, 15.0, 75.0, 80.0);

        // Item directly above, bottom of hitbox dips into the player
        assert!(overlaps(&a, Vec2::new(100.0, 368.0), &b, Vec2::new(90.0, 300.0)));
        // Same column, still too high
        assert!(!overlaps(&a, Vec2::new(100.0, 368.0), &b, Vec2::new(90.0, 280.0)));
        // Right height, off to the side
        assert!(!overlaps(&a, Vec2::new(100.0, 368.0), &b, Vec2::new(200.0, 300.0)));
    }

    #[test]
    fn test_box_touching_edges_do_not_overlap() {
        let a = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let b = Shape::rect(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        assert!(overlaps(&a, Vec2::ZERO, &b, Vec2::new(9.5, 0.0)));
    }

    #[test]
    fn test_box_offsets_shrink_hitbox() {
        // Offsets exclude the left 15px of the sprite
        let bomb = Shape::rect(15.0, 31.0, 61.0, 76.0);
        let player = Shape::rect(0.0, 0.0, 32.0, 32.0);
        assert!(!overlaps(&bomb, Vec2::new(0.0, 0.0), &player, Vec2::new(-20.0, 40.0)));
        assert!(overlaps(&bomb, Vec2::new(0.0, 0.0), &player, Vec2::new(-10.0, 40.0)));
    }

    #[test]
    fn test_circle_overlap() {
        let a = Shape::circle(16.0, 16.0, 16.0);
        let b = Shape::circle(40.0, 40.0, 20.0);

        // Centres 36 apart, radii sum 36: touching counts
        assert!(overlaps(&a, Vec2::ZERO, &b, Vec2::new(-24.0 + 36.0, -24.0)));
        assert!(!overlaps(&a, Vec2::ZERO, &b, Vec2::new(-24.0 + 36.5, -24.0)));
        assert!(overlaps(&a, Vec2::ZERO, &b, Vec2::new(-24.0, -24.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Shape::rect(0.0, 15.0, 75.0, 80.0);
        let b = Shape::rect(0.0, 0.0, 32.0, 32.0);
        let pa = Vec2::new(50.0, 310.0);
        let pb = Vec2::new(60.0, 368.0);
        assert_eq!(overlaps(&a, pa, &b, pb), overlaps(&b, pb, &a, pa));
    }

    #[test]
    fn test_scaled_shape() {
        let shape = Shape::rect(0.0, 15.0, 75.0, 80.0).scaled(0.5);
        assert_eq!(shape, Shape::rect(0.0, 7.5, 37.5, 40.0));
        let circle = Shape::circle(10.0, 10.0, 4.0).scaled(2.0);
        assert_eq!(circle, Shape::circle(20.0, 20.0, 8.0));
    }

    #[test]
    #[should_panic(expected = "no overlap rule")]
    fn test_mixed_kinds_panic() {
        let a = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let b = Shape::circle(5.0, 5.0, 5.0);
        overlaps(&a, Vec2::ZERO, &b, Vec2::ZERO);
    }
}
