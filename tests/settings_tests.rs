use glam::Vec3;
use obj_viewer::loader::MeshData;
use obj_viewer::scene::{Scene, SceneModel, Transform};
use obj_viewer::settings::Settings;

const PI: f32 = std::f32::consts::PI;

fn scene_with_model() -> Scene {
    let mut scene = Scene::new();
    scene.add_model(SceneModel {
        name: "skull".to_string(),
        mesh: MeshData::default(),
        transform: Transform::default(),
    });
    scene
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_resync_mirrors_the_placed_object() {
        let placed = Transform {
            position: Vec3::new(0.0, -10.0, 0.0),
            rotation: Vec3::new(0.5 * PI, PI, 0.75 * PI),
        };
        let mut settings = Settings::new("skull");

        settings.sync_from(&placed);

        assert_eq!(settings.position, Vec3::new(0.0, -10.0, 0.0));
        // Sliders speak in multiples of pi.
        assert!((settings.rotation_pi.x - 0.5).abs() < 1e-6);
        assert!((settings.rotation_pi.y - 1.0).abs() < 1e-6);
        assert!((settings.rotation_pi.z - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_position_writes_are_per_axis() {
        let mut scene = scene_with_model();
        let mut settings = Settings::new("skull");
        settings.position = Vec3::new(0.0, 5.0, 9.0);

        // The X slider writes X and nothing else, as the panel does.
        settings.position.x = 42.0;
        if let Some(model) = scene.last_loaded_mut() {
            model.transform.position.x = settings.position.x;
        }

        let transform = scene.last_loaded_mut().unwrap().transform;
        assert_eq!(transform.position.x, 42.0);
        assert_eq!(transform.position.y, 0.0, "Y untouched by the X slider");
        assert_eq!(transform.position.z, 0.0, "Z untouched by the X slider");
    }

    #[test]
    fn test_rotation_slider_applies_value_times_pi() {
        let mut scene = scene_with_model();
        let mut settings = Settings::new("skull");

        settings.rotation_pi.y = 1.5;
        if let Some(model) = scene.last_loaded_mut() {
            model.transform.rotation.y = settings.rotation_pi.y * PI;
        }

        let transform = scene.last_loaded_mut().unwrap().transform;
        assert!((transform.rotation.y - 1.5 * PI).abs() < 1e-6);
    }

    #[test]
    fn test_slider_writes_before_first_load_are_noops() {
        let mut scene = Scene::new();
        let mut settings = Settings::new("r2-d2");
        settings.position.x = 100.0;

        // No crash and no target: the guard simply skips the write.
        assert!(scene.last_loaded_mut().is_none());
    }

    #[test]
    fn test_selection_changes_do_not_touch_the_scene() {
        let mut scene = scene_with_model();
        let mut settings = Settings::new("r2-d2");

        settings.model = "mustang_GT".to_string();

        assert_eq!(scene.models.len(), 1, "selection arms a load, nothing more");
        assert_eq!(scene.last_loaded_mut().unwrap().name, "skull");
    }
}
