// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "obj-viewer")]
#[command(about = "Native OBJ model previewer", long_about = None)]
pub struct Cli {
    /// Asset root directory (holds assets/*.obj, assets/*.mtl and an
    /// optional models.json registry manifest)
    #[arg(long, default_value = "public")]
    pub assets: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the asset root over HTTP instead of opening the viewer
    Serve {
        /// Listen port; falls back to the PORT environment variable, then 8080
        #[arg(long)]
        port: Option<u16>,
    },
}
