//! Bounding volumes and their debug visuals

use crate::foundation::collections::MeshHandle;
use crate::foundation::math::Vec4;
use crate::physics::collision::Aabb;

/// Color of the wireframe shown while nothing intersects the volume
pub const NORMAL_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Color of the wireframe shown while the volume is being hit
pub const ALERT_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Which of the two precomputed visuals is currently shown.
///
/// Level-triggered: the scene re-evaluates this every tick from the current
/// intersection result, not just on transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Not currently intersected
    Normal,
    /// Intersected this tick
    Alert,
}

/// A local-space bounding box with two precomputed wireframe visuals.
///
/// The corner values are immutable once built; only the active visual
/// toggles. Owned exclusively by the entity that built it.
#[derive(Debug, Clone)]
pub struct BoundingVolume {
    local: Aabb,
    normal_visual: MeshHandle,
    alert_visual: MeshHandle,
    state: VisualState,
}

impl BoundingVolume {
    /// Create a volume in the normal state
    pub fn new(local: Aabb, normal_visual: MeshHandle, alert_visual: MeshHandle) -> Self {
        Self {
            local,
            normal_visual,
            alert_visual,
            state: VisualState::Normal,
        }
    }

    /// The local-space box
    pub fn local(&self) -> &Aabb {
        &self.local
    }

    /// Current visual state
    pub fn state(&self) -> VisualState {
        self.state
    }

    /// Set the visual state from this tick's intersection result
    pub fn set_state(&mut self, state: VisualState) {
        self.state = state;
    }

    /// The mesh the renderer should draw for the current state
    pub fn active_visual(&self) -> MeshHandle {
        match self.state {
            VisualState::Normal => self.normal_visual,
            VisualState::Alert => self.alert_visual,
        }
    }
}
