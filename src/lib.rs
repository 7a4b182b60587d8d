pub mod alignment;
pub mod camera;
pub mod cli;
pub mod loader;
pub mod registry;
pub mod renderer;
pub mod scene;
pub mod server;
pub mod settings;
pub mod types;
pub mod ui;
pub mod viewer;

pub use alignment::{AlignmentPreset, Placement};
pub use registry::{ModelEntry, ModelRegistry};
pub use scene::{Scene, SceneModel, Transform};
pub use settings::Settings;
