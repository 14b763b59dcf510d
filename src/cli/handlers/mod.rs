mod init;
mod locales;
mod render;
mod route;
mod serve;
mod utils;

pub use init::handle_init;
pub use locales::handle_locales;
pub use render::{RenderParams, handle_render};
pub use route::{RouteParams, handle_route};
pub use serve::handle_serve;

use crate::config::BoardConfig;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BoardConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: BoardConfig, root: PathBuf) -> Self {
        Self { config, root }
    }
}
