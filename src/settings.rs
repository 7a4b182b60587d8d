//! Mutable state behind the debug panel.

use glam::Vec3;

use crate::scene::Transform;

/// What the panel's controls read and write. Rotation is stored in multiples
/// of pi, matching the slider labels; the applied rotation is `value * pi`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Selected registry entry; armed for the next load, not loaded eagerly.
    pub model: String,
    pub position: Vec3,
    pub rotation_pi: Vec3,
}

impl Settings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            position: Vec3::ZERO,
            rotation_pi: Vec3::ZERO,
        }
    }

    /// Resync the sliders with a freshly placed object so the panel shows
    /// where the model actually ended up.
    pub fn sync_from(&mut self, transform: &Transform) {
        self.position = transform.position;
        self.rotation_pi = transform.rotation / std::f32::consts::PI;
    }
}
