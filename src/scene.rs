//! CPU-side scene state: loaded models, their transforms and the light rig.

use glam::{EulerRot, Mat4, Vec3};

use crate::loader::MeshData;

/// Position plus XYZ Euler rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Points from the light toward the origin.
    pub direction: Vec3,
}

/// The fixed rig: warm key, cool fill, neutral back.
pub fn light_rig() -> [DirectionalLight; 3] {
    [
        DirectionalLight {
            color: [1.0, 0.75, 0.5],
            intensity: 1.0,
            direction: Vec3::new(100.0, 0.0, -100.0).normalize(),
        },
        DirectionalLight {
            color: [0.5, 0.5, 1.0],
            intensity: 0.75,
            direction: Vec3::new(-100.0, 0.0, -100.0).normalize(),
        },
        DirectionalLight {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            direction: Vec3::new(-100.0, 0.0, 100.0).normalize(),
        },
    ]
}

pub struct SceneModel {
    pub name: String,
    pub mesh: MeshData,
    pub transform: Transform,
}

/// Holds every model loaded so far. Loading never removes prior models; the
/// GUI only ever targets the most recently loaded one.
pub struct Scene {
    pub models: Vec<SceneModel>,
    pub last_loaded: Option<usize>,
    pub lights: [DirectionalLight; 3],
}

impl Scene {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            last_loaded: None,
            lights: light_rig(),
        }
    }

    /// Append a model and mark it as the slider target.
    pub fn add_model(&mut self, model: SceneModel) -> usize {
        self.models.push(model);
        let index = self.models.len() - 1;
        self.last_loaded = Some(index);
        index
    }

    pub fn last_loaded_mut(&mut self) -> Option<&mut SceneModel> {
        let index = self.last_loaded?;
        self.models.get_mut(index)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_model(name: &str) -> SceneModel {
        SceneModel {
            name: name.to_string(),
            mesh: MeshData::default(),
            transform: Transform::default(),
        }
    }

    #[test]
    fn add_model_retargets_last_loaded() {
        let mut scene = Scene::new();
        assert!(scene.last_loaded_mut().is_none());

        scene.add_model(dummy_model("first"));
        scene.add_model(dummy_model("second"));

        assert_eq!(scene.models.len(), 2, "older models stay in the scene");
        assert_eq!(scene.last_loaded_mut().unwrap().name, "second");
    }

    #[test]
    fn transform_matrix_translates() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
        };
        let moved = transform.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(moved, Vec3::new(1.0, 2.0, 3.0));
    }
}
