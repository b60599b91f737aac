//! Rotation and reflection of shapes.
//!
//! The eight variants of a shape are the images under the dihedral group of
//! the square: four quarter turns, each with and without a horizontal flip.
//! Symmetric shapes produce repeated variants; those are kept here and only
//! collapse into one match at the result level.

use crate::core::Coord;

use super::template::{Positions, ShapeTemplate};

/// Number of variants `expand` yields.
pub const VARIANT_COUNT: usize = 8;

/// Rotate a point by `quarter_turns` × 90° using `(x, y) → (-y, x)`.
#[must_use]
pub fn rotate(p: Coord, quarter_turns: u32) -> Coord {
    (0..quarter_turns % 4).fold(p, |q, _| Coord::new(-q.y, q.x))
}

/// Mirror a point across the vertical axis.
#[must_use]
pub const fn flip_horizontal(p: Coord) -> Coord {
    Coord::new(-p.x, p.y)
}

/// Transform a whole coordinate set, flip first, then rotate.
#[must_use]
pub fn transform(positions: &[Coord], flipped: bool, quarter_turns: u32) -> Positions {
    positions
        .iter()
        .map(|&p| {
            let p = if flipped { flip_horizontal(p) } else { p };
            rotate(p, quarter_turns)
        })
        .collect()
}

/// All eight variants of a template, in a fixed order.
///
/// Index 0 is the identity, 1..=3 the rotations by 90°, 180° and 270°,
/// 4 the horizontal flip and 5..=7 the flip followed by the same rotations.
#[must_use]
pub fn expand(template: &ShapeTemplate) -> [Positions; VARIANT_COUNT] {
    std::array::from_fn(|i| transform(&template.positions, i >= 4, (i % 4) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[Coord]) -> Vec<Coord> {
        let mut v = positions.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_rotate_quarter_turns() {
        let p = Coord::new(2, 1);
        assert_eq!(rotate(p, 0), p);
        assert_eq!(rotate(p, 1), Coord::new(-1, 2));
        assert_eq!(rotate(p, 2), Coord::new(-2, -1));
        assert_eq!(rotate(p, 3), Coord::new(1, -2));
        assert_eq!(rotate(p, 4), p);
    }

    #[test]
    fn test_expand_order() {
        let l = ShapeTemplate::new("3-l", "L", &[(0, 0), (1, 0), (0, 1)]);
        let variants = expand(&l);

        assert_eq!(variants.len(), VARIANT_COUNT);
        assert_eq!(variants[0].as_slice(), l.positions.as_slice());
        assert_eq!(
            variants[1].as_slice(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(-1, 0)]
        );
        assert_eq!(
            variants[4].as_slice(),
            &[Coord::new(0, 0), Coord::new(-1, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn test_symmetric_shape_keeps_duplicates() {
        let line = ShapeTemplate::new("3-line", "Line 3", &[(0, 0), (1, 0), (2, 0)]);
        let variants = expand(&line);

        // The half turn and the mirror image are the same cells.
        assert_eq!(set(&variants[2]), set(&variants[4]));
        assert!(variants.iter().all(|v| v.len() == 3));
        assert_eq!(variants.len(), VARIANT_COUNT);
    }
}
