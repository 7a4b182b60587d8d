//! Per-model placement presets applied after a load completes.
//!
//! Each registry entry carries its own preset, so adding a model means adding
//! data, not another switch arm. `for_material_key` reproduces the legacy
//! table for the three bundled models, keyed on the material library stem.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::Transform;

const PI: f32 = std::f32::consts::PI;

/// How the preset treats the object's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Leave the loader's position untouched.
    Keep,
    /// Add a delta to the loader's position.
    Offset([f32; 3]),
    /// Overwrite the position outright.
    Set([f32; 3]),
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Keep
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignmentPreset {
    #[serde(default)]
    pub placement: Placement,
    /// Per-axis rotation overrides in radians; `None` keeps the loaded value.
    #[serde(default)]
    pub rotation_x: Option<f32>,
    #[serde(default)]
    pub rotation_y: Option<f32>,
    #[serde(default)]
    pub rotation_z: Option<f32>,
    /// Orbit camera distance to switch to once the model is placed.
    #[serde(default)]
    pub camera_distance: Option<f32>,
}

impl AlignmentPreset {
    /// Preset for a material library stem (filename minus extension).
    /// Unrecognized keys get the default no-op preset.
    pub fn for_material_key(key: &str) -> Self {
        match key {
            "r2-d2" => Self {
                placement: Placement::Offset([0.0, -60.0, 0.0]),
                camera_distance: Some(200.0),
                ..Self::default()
            },
            "mustang_GT" => Self {
                placement: Placement::Offset([0.0, -18.0, 0.0]),
                rotation_x: Some(-0.5 * PI),
                rotation_z: Some(0.75 * PI),
                camera_distance: Some(100.0),
                ..Self::default()
            },
            "12140_Skull_v3_L2" => Self {
                placement: Placement::Set([0.0, -10.0, 0.0]),
                rotation_x: Some(0.5 * PI),
                rotation_y: Some(PI),
                rotation_z: Some(0.75 * PI),
                camera_distance: Some(50.0),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Mutate only what the preset specifies; the default preset is a no-op.
    pub fn apply(&self, transform: &mut Transform) {
        match self.placement {
            Placement::Keep => {}
            Placement::Offset(delta) => transform.position += Vec3::from_array(delta),
            Placement::Set(position) => transform.position = Vec3::from_array(position),
        }
        if let Some(x) = self.rotation_x {
            transform.rotation.x = x;
        }
        if let Some(y) = self.rotation_y {
            transform.rotation.y = y;
        }
        if let Some(z) = self.rotation_z {
            transform.rotation.z = z;
        }
    }
}
