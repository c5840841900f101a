//! Headless window-manager core for the desktop shell.
//!
//! [`window_manager::WindowManager`] owns window lifecycle, focus, and
//! stacking; [`interaction`] layers pointer-driven drag/resize sessions on
//! top of it; [`command_bus`] is the channel launch surfaces use to reach
//! the manager. Rendering and event plumbing live in the host crates.

pub mod command_bus;
pub mod interaction;
pub mod model;
pub mod placement;
pub mod window_manager;

pub use command_bus::{
    apply_command, run_pending, CommandBus, CommandError, CommandSender, ShellCommand,
};
pub use interaction::{InteractionState, Viewport, DOCK_RESERVE, MENU_BAR_HEIGHT};
pub use model::{Point, WindowId, WindowRecord, INITIAL_Z_INDEX};
pub use placement::{ScriptedSpawnSource, SpawnSource, SystemSpawnSource, WindowSpawn};
pub use window_manager::{WindowManager, OPEN_MATCH_SKIPS_MINIMIZED};
