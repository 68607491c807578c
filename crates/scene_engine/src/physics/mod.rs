//! Geometry queries for hit detection and picking

pub mod collision;

pub use collision::{Aabb, Ray, RayHit};
