//! Axis-aligned bounding boxes and ray intersection
//!
//! Boxes are built in local space from mesh vertex data and transformed to
//! world space on demand by the entities that own them; the ray test
//! operates on whatever corners it is handed and never mutates its inputs.
//!
//! # Key Types
//!
//! - [`Aabb`] - min/max corner box
//! - [`Ray`] - origin plus normalized direction
//! - [`RayHit`] - entry distance and entry point of a successful test

pub mod primitives;

pub use primitives::{Aabb, Ray, RayHit};
