//! Great-circle arc tessellation
//!
//! Arcs on the ball are drawn as polylines. Rather than evaluating sine and
//! cosine for every point, an arc is seeded with its first segment and the
//! remaining points are generated with a linear recurrence.
//!
//! # Algorithm
//!
//! For unit vectors `p0` and `p1` separated by angle `θ`, the points
//! `p(i)` at angle `iθ` along the same great circle satisfy
//!
//! ```text
//! p(i) = 2·cos(θ)·p(i-1) - p(i-2)
//! ```
//!
//! which is the Chebyshev recurrence for `cos(iθ)` applied per component,
//! with `cos(θ) = dot(p0, p1)`. The seed point `p1` is found by bisecting
//! the whole arc `b` times, so the arc is split into `2^b` equal segments.
//!
//! The recurrence assumes the seed arc is short; arcs approaching half a
//! turn should be drawn in pieces (see [`fill_half_arc`]).

use std::f32::consts::TAU;

use glam::Vec3;
use tb_core::geometry::is_view_axis;

use crate::constants::arc::{BISECT_EPSILON, MAX_BISECTIONS};

/// Unit vector halfway between unit vectors `a` and `b`.
///
/// Opposite vectors have no unique bisector; `+Z` is returned for them.
pub fn bisect(a: Vec3, b: Vec3) -> Vec3 {
    let v = a + b;
    let length2 = v.length_squared();
    if length2 < BISECT_EPSILON {
        Vec3::Z
    } else {
        v * (1.0 / length2.sqrt())
    }
}

/// Number of points [`fill_arc`] emits for the given bisection count
pub fn arc_point_count(bisections: u32) -> usize {
    (1usize << bisections.clamp(1, MAX_BISECTIONS)) + 1
}

/// Append the arc from `from` to `to`, scaled by `radius`, to `out`.
///
/// Emits `2^bisections + 1` points starting at `from` and ending at `to`.
/// Both endpoints must be unit vectors.
pub fn fill_arc(out: &mut Vec<Vec3>, from: Vec3, to: Vec3, radius: f32, bisections: u32) {
    let bisections = bisections.clamp(1, MAX_BISECTIONS);
    let segments = 1usize << bisections;

    let mut second = to;
    for _ in 0..bisections {
        second = bisect(from, second);
    }

    out.reserve(segments + 1);
    out.push(from * radius);
    out.push(second * radius);

    let dot_two = from.dot(second) * 2.0;
    let (mut prev, mut current) = (from, second);
    for _ in 2..segments {
        let next = current * dot_two - prev;
        out.push(next * radius);
        prev = current;
        current = next;
    }

    out.push(to * radius);
}

/// Append a circle of `radius` in the screen plane to `out`.
///
/// Points start on +X and run counter-clockwise; the last point does not
/// repeat the first.
pub fn fill_circle(out: &mut Vec<Vec3>, radius: f32, segments: u32) {
    let step = TAU / segments as f32;
    out.extend((0..segments).map(|i| {
        let angle = i as f32 * step;
        Vec3::new(angle.cos(), angle.sin(), 0.0) * radius
    }));
}

/// Append the front half of the great circle perpendicular to `axis`.
///
/// The half circle runs between two opposite points on the screen plane
/// and is drawn as two quarter arcs meeting at its front-most point.
pub fn fill_half_arc(out: &mut Vec<Vec3>, axis: Vec3, radius: f32, bisections: u32) {
    let mirror = if is_view_axis(axis) {
        Vec3::Y
    } else {
        Vec3::new(axis.y, -axis.x, 0.0).normalize()
    };

    let mid = mirror.cross(axis);

    fill_arc(out, mirror, mid, radius, bisections);
    fill_arc(out, mid, -mirror, radius, bisections);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 5e-4;

    fn arc(from: Vec3, to: Vec3, radius: f32) -> Vec<Vec3> {
        let mut points = Vec::new();
        fill_arc(&mut points, from, to, radius, 5);
        points
    }

    #[test]
    fn test_bisect() {
        let mid = bisect(Vec3::X, Vec3::Y);
        assert!(mid.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0).normalize(), 1e-6));
        assert_eq!(bisect(Vec3::X, Vec3::NEG_X), Vec3::Z);
    }

    #[test]
    fn test_fill_arc_point_count() {
        assert_eq!(arc(Vec3::X, Vec3::Y, 1.0).len(), 33);
        assert_eq!(arc_point_count(5), 33);

        let mut points = Vec::new();
        fill_arc(&mut points, Vec3::X, Vec3::Y, 1.0, 3);
        assert_eq!(points.len(), arc_point_count(3));
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn test_fill_arc_endpoints_and_radius() {
        let from = Vec3::new(0.3, -0.2, 0.9).normalize();
        let to = Vec3::new(-0.6, 0.5, 0.4).normalize();
        let radius = 0.75;
        let points = arc(from, to, radius);

        assert_eq!(points[0], from * radius);
        assert_eq!(points[32], to * radius);
        for p in &points {
            assert_abs_diff_eq!(p.length(), radius, epsilon = EPS);
        }
    }

    #[test]
    fn test_fill_arc_even_spacing() {
        let points = arc(Vec3::X, Vec3::Z, 1.0);
        // Chord of each segment: 2·sin(θ/2) with θ = 90°/32
        let expected = 2.0 * (std::f32::consts::FRAC_PI_2 / 64.0).sin();
        for pair in points.windows(2) {
            assert_abs_diff_eq!(pair[0].distance(pair[1]), expected, epsilon = EPS);
        }
    }

    #[test]
    fn test_fill_arc_stays_on_great_circle() {
        let points = arc(Vec3::X, Vec3::Y, 1.0);
        for p in &points {
            assert_abs_diff_eq!(p.z, 0.0, epsilon = EPS);
            assert!(p.x >= -EPS && p.y >= -EPS);
        }
    }

    #[test]
    fn test_fill_arc_degenerate() {
        let points = arc(Vec3::Y, Vec3::Y, 0.5);
        assert_eq!(points.len(), 33);
        for p in &points {
            assert!(p.abs_diff_eq(Vec3::Y * 0.5, EPS));
        }
    }

    #[test]
    fn test_fill_arc_appends() {
        let mut points = vec![Vec3::ONE];
        fill_arc(&mut points, Vec3::X, Vec3::Y, 1.0, 5);
        assert_eq!(points.len(), 34);
        assert_eq!(points[0], Vec3::ONE);
    }

    #[test]
    fn test_fill_circle() {
        let mut points = Vec::new();
        fill_circle(&mut points, 0.5, 64);
        assert_eq!(points.len(), 64);
        assert!(points[0].abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
        assert!(points[16].abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), 1e-5));
        for p in &points {
            assert_abs_diff_eq!(p.length(), 0.5, epsilon = 1e-5);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_fill_half_arc_lies_on_ring() {
        let axes = [
            Vec3::X,
            Vec3::Y,
            Vec3::new(0.2, 0.5, 0.8).normalize(),
            Vec3::new(-0.7, 0.1, -0.3).normalize(),
        ];
        for axis in axes {
            let mut points = Vec::new();
            fill_half_arc(&mut points, axis, 1.0, 5);
            assert_eq!(points.len(), 66);
            for p in &points {
                assert_abs_diff_eq!(p.length(), 1.0, epsilon = EPS);
                assert_abs_diff_eq!(p.dot(axis), 0.0, epsilon = EPS);
                assert!(p.z >= -EPS, "{p:?} is behind the ball for {axis:?}");
            }
            // The two quarter arcs meet
            assert!(points[32].abs_diff_eq(points[33], EPS));
            // And end on opposite sides of the screen plane
            assert!(points[0].abs_diff_eq(-points[65], EPS));
        }
    }

    #[test]
    fn test_fill_half_arc_view_axis() {
        let mut points = Vec::new();
        fill_half_arc(&mut points, Vec3::Z, 1.0, 5);
        assert!(points[0].abs_diff_eq(Vec3::Y, EPS));
        assert!(points[65].abs_diff_eq(Vec3::NEG_Y, EPS));
        for p in &points {
            assert_abs_diff_eq!(p.z, 0.0, epsilon = EPS);
        }
    }
}
