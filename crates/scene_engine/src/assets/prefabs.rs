//! Procedural geometry constructors
//!
//! Stand-ins for meshes that would normally come out of an asset pipeline:
//! a textured cube for solid objects, wireframe boxes for bounding-volume
//! visuals, and a single segment for direction rays.

use crate::foundation::math::{Vec3, Vec4};

use super::mesh::{Mesh, Vertex};

/// A cube of the given edge length, centered at the origin, with per-face
/// normals and texture coordinates
pub fn textured_cube(size: f32) -> Mesh {
    let h = size * 0.5;

    // (normal, four corners in counter-clockwise winding seen from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::new(1.0, 0.0, 0.0),
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
        ),
        (
            Vec3::new(-1.0, 0.0, 0.0),
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
        ),
        (
            Vec3::new(0.0, 1.0, 0.0),
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
        ),
        (
            Vec3::new(0.0, -1.0, 0.0),
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
        ),
        (
            Vec3::new(0.0, 0.0, 1.0),
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        (
            Vec3::new(0.0, 0.0, -1.0),
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
        ),
    ];

    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in &faces {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(&uvs) {
            vertices.push(Vertex::new(
                [corner.x, corner.y, corner.z],
                [normal.x, normal.y, normal.z],
                *uv,
            ));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(vertices, indices)
}

/// A wireframe box of the given full extents, centered at `center`, drawn
/// as twelve unlit line segments
pub fn wireframe_box(extents: Vec3, center: Vec3, color: Vec4) -> Mesh {
    let half = extents * 0.5;

    let mut vertices = Vec::with_capacity(8);
    for &z in &[-half.z, half.z] {
        for &y in &[-half.y, half.y] {
            for &x in &[-half.x, half.x] {
                vertices.push(Vertex::new(
                    [center.x + x, center.y + y, center.z + z],
                    [0.0, 0.0, 0.0],
                    [0.0, 0.0],
                ));
            }
        }
    }

    // Four edges per axis between the corner pairs that differ only on
    // that axis.
    let indices = vec![
        0, 1, 2, 3, 4, 5, 6, 7, // X edges
        0, 2, 1, 3, 4, 6, 5, 7, // Y edges
        0, 4, 1, 5, 2, 6, 3, 7, // Z edges
    ];

    Mesh::lines(vertices, indices, color)
}

/// A single unlit line segment from `start` to `end`
pub fn line(start: Vec3, end: Vec3, color: Vec4) -> Mesh {
    let vertices = vec![
        Vertex::new([start.x, start.y, start.z], [0.0, 0.0, 0.0], [0.0, 0.0]),
        Vertex::new([end.x, end.y, end.z], [0.0, 0.0, 0.0], [0.0, 0.0]),
    ];
    Mesh::lines(vertices, vec![0, 1], color)
}
