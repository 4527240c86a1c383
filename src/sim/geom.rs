//! Intersection primitives
//!
//! Pure predicates over squared distances. Comparisons are strict, so shapes
//! touching exactly at a boundary do not count as overlapping.

use glam::Vec3;

/// True when two spheres overlap
#[inline]
pub fn spheres_intersect(a_pos: Vec3, a_radius: f32, b_pos: Vec3, b_radius: f32) -> bool {
    let r = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < r * r
}

/// True when an axis-aligned box overlaps a sphere
///
/// The sphere center is clamped into the box extents per axis; overlap is
/// measured from that closest point back to the center.
#[inline]
pub fn box_intersects_sphere(box_min: Vec3, box_size: Vec3, center: Vec3, radius: f32) -> bool {
    let closest = center.clamp(box_min, box_min + box_size);
    center.distance_squared(closest) < radius * radius
}
