//! Projectile flight control
//!
//! A projectile wraps an entity body in a small state machine: idle at a
//! launch point, then a timed flight straight along the body's forward axis,
//! then back to idle at the launch point. While armed with a target it is
//! tested against that target's bounding box every tick.

use serde::{Deserialize, Serialize};

use crate::foundation::collections::{EntityHandle, MeshHandle};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::Ray;

use super::entity::{Body, Entity};

/// Flight tuning for a projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileConfig {
    /// Distance advanced along the forward axis per tick.
    ///
    /// Deliberately a per-tick step rather than a per-second speed: flight
    /// distance is controlled by `flight_duration` against a fixed-step
    /// clock.
    pub speed: f32,

    /// Seconds of flight before the projectile snaps back to idle
    pub flight_duration: f32,

    /// Position the projectile rests at and returns to after each flight
    pub launch_point: Vec3,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            flight_duration: 0.7,
            launch_point: Vec3::new(0.0, 0.0, -10.0),
        }
    }
}

/// An entity body driven by a launch/flight/return state machine.
///
/// Composition instead of subclassing: the projectile owns its body and
/// exposes the shared [`Body`] contract by delegation, so call sites that
/// take any body accept a projectile too.
pub struct Projectile {
    body: Entity,
    target: Option<EntityHandle>,
    direction_ray: MeshHandle,
    moving: bool,
    elapsed: f32,
    config: ProjectileConfig,
}

impl Body for Projectile {
    fn transform(&self) -> &Transform {
        &self.body.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.body.transform
    }
}

impl Projectile {
    /// Create an idle projectile resting at the configured launch point.
    ///
    /// `direction_ray` is the debug segment the renderer draws along the
    /// projectile's forward axis.
    pub fn new(mut body: Entity, direction_ray: MeshHandle, config: ProjectileConfig) -> Self {
        body.transform.position = config.launch_point;
        Self {
            body,
            target: None,
            direction_ray,
            moving: false,
            elapsed: 0.0,
            config,
        }
    }

    /// The entity body
    pub fn body(&self) -> &Entity {
        &self.body
    }

    /// Mutable access to the entity body
    pub fn body_mut(&mut self) -> &mut Entity {
        &mut self.body
    }

    /// The debug segment drawn along the forward axis
    pub fn direction_ray(&self) -> MeshHandle {
        self.direction_ray
    }

    /// The entity this projectile is tested against each tick
    pub fn target(&self) -> Option<EntityHandle> {
        self.target
    }

    /// Arm the projectile against a target
    pub fn set_target(&mut self, target: EntityHandle) {
        self.target = Some(target);
    }

    /// Whether the projectile is currently in flight
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Seconds accumulated in the current flight
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Flight tuning
    pub fn config(&self) -> &ProjectileConfig {
        &self.config
    }

    /// Begin a flight.
    ///
    /// Firing while already in flight changes nothing; the current flight
    /// continues with its accumulated time.
    pub fn launch(&mut self) {
        if self.moving {
            return;
        }
        self.moving = true;
        self.elapsed = 0.0;
    }

    /// Advance the flight state machine by one tick.
    ///
    /// In flight, time accumulates and the body advances along its current
    /// forward axis. Once the accumulated time exceeds the flight duration
    /// the projectile returns to idle at the launch point exactly, whatever
    /// the tick's intersection results were.
    pub fn tick(&mut self, delta_time: f32) {
        if self.moving {
            self.elapsed += delta_time;

            let step = self.body.transform.forward() * self.config.speed;
            self.body.transform.translate(step);
        }

        if self.elapsed > self.config.flight_duration {
            self.moving = false;
            self.elapsed = 0.0;
            self.body.transform.position = self.config.launch_point;
        }
    }

    /// The ray used for hit testing: anchored at the body's current
    /// position, pointing along its forward axis.
    pub fn aim_ray(&self) -> Ray {
        Ray::new(self.body.transform.position, self.body.transform.forward())
    }
}
