//! Two-stage asset loading: material library first, then geometry resolved
//! against it. Loads run on a background thread and report back over a
//! channel drained by the viewer once per frame.

pub mod mtl;
pub mod obj;

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;

use crate::registry::ModelEntry;

pub use mtl::{Material, MaterialLibrary};
pub use obj::MeshData;

/// Outcome of a completed load, ready to attach to the scene.
#[derive(Debug)]
pub struct LoadedModel {
    pub entry: ModelEntry,
    pub mesh: MeshData,
}

pub type LoadOutcome = Result<LoadedModel>;

/// Both stages, in order: the geometry stage only runs once the material
/// stage has succeeded.
pub fn load_model(asset_root: &Path, entry: &ModelEntry) -> LoadOutcome {
    let asset_dir = asset_root.join("assets");
    let materials = mtl::load_material_library(&asset_dir.join(&entry.material_file))?;
    let mesh = obj::load_geometry(&asset_dir.join(&entry.geometry_file), &materials)?;
    Ok(LoadedModel {
        entry: entry.clone(),
        mesh,
    })
}

/// Kick off a load without blocking the frame loop. Triggering another load
/// while one is in flight starts an independent one; whichever finishes last
/// becomes the panel's target.
pub fn spawn_load(asset_root: PathBuf, entry: ModelEntry, tx: Sender<LoadOutcome>) {
    thread::spawn(move || {
        let outcome = load_model(&asset_root, &entry);
        // The receiver is gone only during shutdown.
        let _ = tx.send(outcome);
    });
}
