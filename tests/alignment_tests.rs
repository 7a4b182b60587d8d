use glam::Vec3;
use obj_viewer::alignment::{AlignmentPreset, Placement};
use obj_viewer::scene::Transform;

const PI: f32 = std::f32::consts::PI;

#[cfg(test)]
mod alignment_tests {
    use super::*;

    #[test]
    fn test_r2d2_preset_drops_on_y_only() {
        let preset = AlignmentPreset::for_material_key("r2-d2");
        let mut transform = Transform {
            position: Vec3::new(5.0, 10.0, -3.0),
            rotation: Vec3::new(0.1, 0.2, 0.3),
        };

        preset.apply(&mut transform);

        assert_eq!(transform.position, Vec3::new(5.0, -50.0, -3.0));
        assert_eq!(
            transform.rotation,
            Vec3::new(0.1, 0.2, 0.3),
            "rotation must be left as loaded"
        );
        assert_eq!(preset.camera_distance, Some(200.0));
    }

    #[test]
    fn test_mustang_preset_lays_car_flat() {
        let preset = AlignmentPreset::for_material_key("mustang_GT");
        let mut transform = Transform::default();

        preset.apply(&mut transform);

        assert_eq!(transform.position, Vec3::new(0.0, -18.0, 0.0));
        assert_eq!(transform.rotation.x, -0.5 * PI);
        assert_eq!(transform.rotation.y, 0.0, "y rotation untouched");
        assert_eq!(transform.rotation.z, 0.75 * PI);
        assert_eq!(preset.camera_distance, Some(100.0));
    }

    #[test]
    fn test_skull_preset_overrides_position_outright() {
        let preset = AlignmentPreset::for_material_key("12140_Skull_v3_L2");
        let mut transform = Transform {
            position: Vec3::new(70.0, 70.0, 70.0),
            rotation: Vec3::new(1.0, 1.0, 1.0),
        };

        preset.apply(&mut transform);

        assert_eq!(transform.position, Vec3::new(0.0, -10.0, 0.0));
        assert_eq!(transform.rotation.x, 0.5 * PI);
        assert_eq!(transform.rotation.y, PI);
        assert_eq!(transform.rotation.z, 0.75 * PI);
        assert_eq!(preset.camera_distance, Some(50.0));
    }

    #[test]
    fn test_unrecognized_key_is_a_noop() {
        let preset = AlignmentPreset::for_material_key("teapot");
        let original = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(0.4, 0.5, 0.6),
        };
        let mut transform = original;

        preset.apply(&mut transform);

        assert_eq!(transform, original);
        assert_eq!(preset.camera_distance, None);
        assert_eq!(preset, AlignmentPreset::default());
    }

    #[test]
    fn test_offset_accumulates_on_loader_position() {
        let preset = AlignmentPreset {
            placement: Placement::Offset([0.0, -60.0, 0.0]),
            ..AlignmentPreset::default()
        };
        let mut transform = Transform {
            position: Vec3::new(0.0, 100.0, 0.0),
            rotation: Vec3::ZERO,
        };

        preset.apply(&mut transform);
        assert_eq!(transform.position.y, 40.0);

        preset.apply(&mut transform);
        assert_eq!(transform.position.y, -20.0, "offsets stack when reapplied");
    }

    #[test]
    fn test_set_placement_ignores_loader_position() {
        let preset = AlignmentPreset {
            placement: Placement::Set([0.0, -10.0, 0.0]),
            ..AlignmentPreset::default()
        };

        for start in [Vec3::ZERO, Vec3::splat(500.0), Vec3::new(-1.0, 2.0, -3.0)] {
            let mut transform = Transform {
                position: start,
                rotation: Vec3::ZERO,
            };
            preset.apply(&mut transform);
            assert_eq!(transform.position, Vec3::new(0.0, -10.0, 0.0));
        }
    }
}
