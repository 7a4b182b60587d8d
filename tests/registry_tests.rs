use std::fs;
use std::path::PathBuf;

use obj_viewer::alignment::AlignmentPreset;
use obj_viewer::registry::ModelRegistry;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "obj-viewer-registry-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_builtin_names_and_order() {
        let registry = ModelRegistry::builtin();
        assert_eq!(registry.names(), vec!["r2-d2", "mustang_GT", "skull"]);
        assert_eq!(registry.default_entry().name, "r2-d2");
    }

    #[test]
    fn test_builtin_lookup_returns_asset_pair() {
        let registry = ModelRegistry::builtin();

        let skull = registry.get("skull").unwrap();
        assert_eq!(skull.geometry_file, "12140_Skull_v3_L2.obj");
        assert_eq!(skull.material_file, "12140_Skull_v3_L2.mtl");
        assert_eq!(
            skull.alignment,
            AlignmentPreset::for_material_key("12140_Skull_v3_L2")
        );

        let mustang = registry.get("mustang_GT").unwrap();
        assert_eq!(mustang.geometry_file, "mustang_GT.obj");
        assert_eq!(mustang.material_file, "mustang_GT.mtl");
    }

    #[test]
    fn test_unknown_name_is_none() {
        let registry = ModelRegistry::builtin();
        assert!(registry.get("millennium-falcon").is_none());
    }

    #[test]
    fn test_manifest_replaces_builtin_list() {
        let dir = temp_dir("manifest");
        let manifest = dir.join("models.json");
        fs::write(
            &manifest,
            r#"[
                {
                    "name": "teapot",
                    "geometry_file": "teapot.obj",
                    "material_file": "teapot.mtl"
                }
            ]"#,
        )
        .unwrap();

        let registry = ModelRegistry::from_manifest(&manifest).unwrap();
        assert_eq!(registry.names(), vec!["teapot"]);
        let entry = registry.get("teapot").unwrap();
        assert_eq!(
            entry.alignment,
            AlignmentPreset::default(),
            "manifest entries default to no alignment"
        );
    }

    #[test]
    fn test_empty_manifest_is_rejected() {
        let dir = temp_dir("empty");
        let manifest = dir.join("models.json");
        fs::write(&manifest, "[]").unwrap();
        assert!(ModelRegistry::from_manifest(&manifest).is_err());
    }

    #[test]
    fn test_asset_root_without_manifest_uses_builtin() {
        let dir = temp_dir("no-manifest");
        let registry = ModelRegistry::for_asset_root(&dir).unwrap();
        assert_eq!(registry.names(), vec!["r2-d2", "mustang_GT", "skull"]);
    }
}
