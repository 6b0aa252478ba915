//! Vector math for bounces
//!
//! Every surface in the game is axis-aligned, so the only normals ever used
//! are the two unit axis vectors below. `projection` relies on that: it is
//! not a general projection and only holds for unit-length bases.

use glam::Vec2;

/// Normal for horizontal surfaces (ceiling, floor, top and bottom faces)
pub const NORMAL_VERTICAL: Vec2 = Vec2::new(0.0, 1.0);
/// Normal for vertical surfaces (side walls, left and right faces)
pub const NORMAL_HORIZONTAL: Vec2 = Vec2::new(1.0, 0.0);

/// Tolerance for the unit-length check on normals
const UNIT_EPSILON: f32 = 1e-4;

/// Sum of pairwise component products
#[inline]
pub fn dot_product(v1: Vec2, v2: Vec2) -> f32 {
    v1.x * v2.x + v1.y * v2.y
}

/// Dot product over arbitrary-length components
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn dot_product_slices(v1: &[f32], v2: &[f32]) -> f32 {
    assert_eq!(
        v1.len(),
        v2.len(),
        "dot product of vectors with different dimensions"
    );
    v1.iter().zip(v2).map(|(a, b)| a * b).sum()
}

/// Scale `base` by `vector · base`
///
/// `base` must be unit length.
#[inline]
pub fn projection(vector: Vec2, base: Vec2) -> Vec2 {
    debug_assert!(
        (base.length_squared() - 1.0).abs() < UNIT_EPSILON,
        "projection base {base} is not unit length"
    );
    base * dot_product(vector, base)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, with `normal` unit length.
#[inline]
pub fn reflection(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * projection(velocity, normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dot_product() {
        assert_eq!(dot_product(Vec2::new(2.0, 3.0), Vec2::new(4.0, -1.0)), 5.0);
        assert_eq!(dot_product_slices(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn test_dot_product_mismatched_lengths() {
        dot_product_slices(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_projection_onto_axis() {
        let v = Vec2::new(3.0, -7.0);
        assert_eq!(projection(v, NORMAL_VERTICAL), Vec2::new(0.0, -7.0));
        assert_eq!(projection(v, NORMAL_HORIZONTAL), Vec2::new(3.0, 0.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not unit length")]
    fn test_projection_rejects_non_unit_base() {
        projection(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_reflection_axis_normals() {
        let v = Vec2::new(2.0, -1.0);
        assert_eq!(reflection(v, NORMAL_VERTICAL), Vec2::new(2.0, 1.0));
        assert_eq!(reflection(v, NORMAL_HORIZONTAL), Vec2::new(-2.0, -1.0));
    }

    fn unit_normal() -> impl Strategy<Value = Vec2> {
        (0.0f32..std::f32::consts::TAU).prop_map(|theta| Vec2::new(theta.cos(), theta.sin()))
    }

    proptest! {
        #[test]
        fn reflection_is_involutive(vx in -500.0f32..500.0, vy in -500.0f32..500.0, n in unit_normal()) {
            let v = Vec2::new(vx, vy);
            let back = reflection(reflection(v, n), n);
            prop_assert!((back - v).length() < 1e-2);
        }

        #[test]
        fn reflection_preserves_magnitude(vx in -500.0f32..500.0, vy in -500.0f32..500.0, n in unit_normal()) {
            let v = Vec2::new(vx, vy);
            prop_assert!((reflection(v, n).length() - v.length()).abs() < 1e-2);
        }

        #[test]
        fn axis_reflection_flips_one_component(vx in -500.0f32..500.0, vy in -500.0f32..500.0) {
            let v = Vec2::new(vx, vy);
            prop_assert_eq!(reflection(v, NORMAL_VERTICAL), Vec2::new(vx, -vy));
            prop_assert_eq!(reflection(v, NORMAL_HORIZONTAL), Vec2::new(-vx, vy));
        }
    }
}
