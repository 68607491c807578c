//! Primitive collision shapes and intersection algorithms
//!
//! Provides the axis-aligned bounding box and the slab-method ray test used
//! for hit detection.

use log::warn;

use crate::foundation::math::Vec3;

/// An axis-aligned box defined by its minimum and maximum corners.
///
/// Well-formed boxes satisfy `min <= max` on every axis. Boxes produced from
/// transformed corners are treated as axis-aligned even though a rotated
/// box's corners no longer bound the rotated geometry exactly; that is only
/// exact under identity or axis-aligned orientations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinate on each axis
    pub min: Vec3,
    /// Corner with the largest coordinate on each axis
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the bounding box of a set of points.
    ///
    /// The running min/max are seeded from the first point rather than from
    /// zero, so a cloud lying entirely on one side of the origin still gets
    /// a tight box. An empty slice degenerates to a zero-size box at the
    /// origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some(first) = points.first() else {
            warn!("bounding box requested for empty vertex data, using zero-size box at origin");
            return Self::new(Vec3::zeros(), Vec3::zeros());
        };

        let mut min = *first;
        let mut max = *first;

        for point in &points[1..] {
            for axis in 0..3 {
                if point[axis] < min[axis] {
                    min[axis] = point[axis];
                }
                if point[axis] > max[axis] {
                    max[axis] = point[axis];
                }
            }
        }

        Self { min, max }
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent along X
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Full extent along Y
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Full extent along Z
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Full extents on all three axes
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether the box has zero volume
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0 || self.depth() <= 0.0
    }
}

/// A ray for hit detection and picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized by [`Ray::new`])
    pub direction: Vec3,
}

/// Result of a successful ray intersection test
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Distance from the ray origin to the entry point
    pub distance: f32,
    /// The point where the ray enters the box, in world space
    pub point: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab-method ray/box intersection.
    ///
    /// Clips the ray's valid parameter range against each pair of axis
    /// planes in turn. Near-zero direction components are branched on
    /// explicitly instead of leaning on IEEE-754 division producing signed
    /// infinities: a ray parallel to a slab misses outright when its origin
    /// lies outside that slab and is unconstrained on that axis otherwise.
    ///
    /// The slab math alone answers for the infinite line through the ray.
    /// A box that lies entirely behind the origin shows up as `tmax < 0`
    /// and is reported as a miss, keeping forward-only ray semantics.
    ///
    /// On a hit, the entry distance is `tmin`, clamped to zero when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<RayHit> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];

            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: no hit unless the origin is within it
                if origin < aabb.min[axis] || origin > aabb.max[axis] {
                    return None;
                }
            } else {
                let inv_dir = 1.0 / dir;
                let mut t1 = (aabb.min[axis] - origin) * inv_dir;
                let mut t2 = (aabb.max[axis] - origin) * inv_dir;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                tmin = tmin.max(t1);
                tmax = tmax.min(t2);

                // Slab intersection interval became empty
                if tmin > tmax {
                    return None;
                }
            }
        }

        // The line intersects, but the whole box is behind the ray origin
        if tmax < 0.0 {
            return None;
        }

        let distance = tmin.max(0.0);
        Some(RayHit {
            distance,
            point: self.point_at(distance),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::new(
            center + Vec3::new(-1.0, -1.0, -1.0),
            center + Vec3::new(1.0, 1.0, 1.0),
        )
    }

    #[test]
    fn box_from_points_uses_first_point_as_seed() {
        // All coordinates positive: a zero-seeded scan would report min (0,0,0).
        let bounds = Aabb::from_points(&[Vec3::new(2.0, 2.0, 2.0), Vec3::new(5.0, 5.0, 5.0)]);
        assert_eq!(bounds.min, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(bounds.max, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn box_from_points_tracks_per_axis_extremes() {
        let bounds = Aabb::from_points(&[
            Vec3::new(-1.0, 4.0, 2.0),
            Vec3::new(3.0, -2.0, 7.0),
            Vec3::new(0.0, 1.0, -5.0),
        ]);
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -5.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 4.0, 7.0));
    }

    #[test]
    fn empty_point_set_degenerates_to_origin() {
        let bounds = Aabb::from_points(&[]);
        assert_eq!(bounds.min, Vec3::zeros());
        assert_eq!(bounds.max, Vec3::zeros());
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn extents_and_center() {
        let bounds = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 6.0, 11.0));
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 4.0);
        assert_eq!(bounds.depth(), 8.0);
        assert_eq!(bounds.center(), Vec3::new(2.0, 4.0, 7.0));
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn ray_at_box_center_hits_the_near_face() {
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));

        let hit = ray.intersect_aabb(&bounds).expect("ray aimed at box center");
        assert_relative_eq!(hit.distance, 9.0, epsilon = EPSILON);
        assert_relative_eq!(hit.point, Vec3::new(0.0, 0.0, 9.0), epsilon = EPSILON);
    }

    #[test]
    fn box_behind_the_origin_is_a_miss() {
        // The infinite line through this ray crosses the box; only the
        // tmax < 0 policy turns it into a miss.
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray.intersect_aabb(&bounds).is_none());
    }

    #[test]
    fn parallel_ray_inside_slabs_still_hits() {
        // Direction is zero on X and Y; the origin sits inside both slabs,
        // so the test reduces to the Z axis alone.
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = Ray::new(Vec3::new(0.5, -0.5, 0.0), Vec3::new(0.0, 0.0, 1.0));

        let hit = ray.intersect_aabb(&bounds).expect("parallel components inside slabs");
        assert_relative_eq!(hit.distance, 9.0, epsilon = EPSILON);
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray.intersect_aabb(&bounds).is_none());
    }

    #[test]
    fn ray_origin_inside_the_box_reports_zero_distance() {
        let bounds = unit_box_at(Vec3::zeros());
        let ray = Ray::new(Vec3::new(0.2, 0.1, -0.3), Vec3::new(0.0, 0.0, 1.0));

        let hit = ray.intersect_aabb(&bounds).expect("origin inside the box");
        assert_relative_eq!(hit.distance, 0.0, epsilon = EPSILON);
        assert_relative_eq!(hit.point, ray.origin, epsilon = EPSILON);
    }

    #[test]
    fn diagonal_ray_grazes_past_the_corner() {
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        // Slides past the +X face: at z = 9 the ray is already at x > 1.
        let ray = Ray::new(Vec3::new(4.0, 0.0, 0.0), Vec3::new(-0.2, 0.0, 1.0));
        assert!(ray.intersect_aabb(&bounds).is_none());
    }

    #[test]
    fn intersection_does_not_mutate_inputs() {
        let bounds = unit_box_at(Vec3::new(0.0, 0.0, 10.0));
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let before = (ray.origin, ray.direction, bounds.min, bounds.max);

        let _ = ray.intersect_aabb(&bounds);
        let _ = ray.intersect_aabb(&bounds);

        assert_eq!(before, (ray.origin, ray.direction, bounds.min, bounds.max));
    }
}
