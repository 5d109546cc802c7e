// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "virtual-cam")]
#[command(about = "Free-flying camera over wireframe scenes", long_about = None)]
pub struct Cli {
    /// JSON file overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scene shown at startup
    #[arg(long, value_enum, default_value_t = SceneKind::Cuboids)]
    pub scene: SceneKind,

    /// Start with the side panel hidden
    #[arg(long = "no-ui")]
    pub no_ui: bool,
}
