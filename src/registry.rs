//! Fixed mapping from display names to asset file pairs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::alignment::AlignmentPreset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub geometry_file: String,
    pub material_file: String,
    #[serde(default)]
    pub alignment: AlignmentPreset,
}

/// Immutable collection of model entries; the names double as the dropdown
/// options. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
}

impl ModelRegistry {
    /// The three bundled reference models.
    pub fn builtin() -> Self {
        let entry = |name: &str, stem: &str| ModelEntry {
            name: name.to_string(),
            geometry_file: format!("{stem}.obj"),
            material_file: format!("{stem}.mtl"),
            alignment: AlignmentPreset::for_material_key(stem),
        };
        Self {
            entries: vec![
                entry("r2-d2", "r2-d2"),
                entry("mustang_GT", "mustang_GT"),
                entry("skull", "12140_Skull_v3_L2"),
            ],
        }
    }

    /// Load entries from a JSON manifest. The manifest replaces the builtin
    /// list wholesale and must not be empty.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open registry manifest {}", path.display()))?;
        let entries: Vec<ModelEntry> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed registry manifest {}", path.display()))?;
        if entries.is_empty() {
            bail!("registry manifest {} contains no models", path.display());
        }
        Ok(Self { entries })
    }

    /// Builtin list, overridden by `models.json` under the asset root when
    /// one exists.
    pub fn for_asset_root(asset_root: &Path) -> Result<Self> {
        let manifest = asset_root.join("models.json");
        if manifest.is_file() {
            Self::from_manifest(&manifest)
        } else {
            Ok(Self::builtin())
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// First entry; the registry is never empty.
    pub fn default_entry(&self) -> &ModelEntry {
        &self.entries[0]
    }
}
