//! Shell command channel for launch surfaces.
//!
//! The original shell exposed a mutable `window`-scoped registration
//! function so any UI region could trigger an application open. Here that
//! ambient global is replaced with an explicit channel: menu bar, dock,
//! launcher, and desktop icons hold a cloneable [`CommandSender`], and the
//! shell runtime drains the queue and applies commands in delivery order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use app_catalog::{AppCatalog, ApplicationId, Size};
use log::{debug, warn};
use thiserror::Error;

use crate::model::{Point, WindowId};
use crate::window_manager::WindowManager;

/// Commands accepted by the shell runtime on behalf of UI surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Open (or focus) the application with this catalog id.
    OpenApp {
        /// Application to open.
        app_id: ApplicationId,
    },
    /// Close a window.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle maximize on a window.
    Maximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Focus (and restore/raise) a window.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Overwrite a window's position with pre-clamped coordinates.
    MoveTo {
        /// Window to move.
        window_id: WindowId,
        /// New top-left position.
        position: Point,
    },
    /// Overwrite a window's size with pre-clamped dimensions.
    ResizeTo {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: Size,
    },
    /// Replace a window's title.
    SetTitle {
        /// Window to retitle.
        window_id: WindowId,
        /// New title text.
        title: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced when applying shell commands.
pub enum CommandError {
    /// The requested application id is not present in the catalog.
    #[error("application `{0}` is not in the catalog")]
    UnknownApplication(ApplicationId),
}

/// Single-threaded FIFO command queue shared between the shell runtime and
/// its launch surfaces.
#[derive(Debug, Clone, Default)]
pub struct CommandBus {
    queue: Rc<RefCell<VecDeque<ShellCommand>>>,
}

impl CommandBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sender handle for one UI surface.
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            queue: Rc::clone(&self.queue),
        }
    }

    /// Removes and returns every queued command in delivery order.
    pub fn drain(&self) -> Vec<ShellCommand> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Whether any commands are waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// Cloneable handle held by UI surfaces that issue commands.
#[derive(Debug, Clone)]
pub struct CommandSender {
    queue: Rc<RefCell<VecDeque<ShellCommand>>>,
}

impl CommandSender {
    /// Queues one command for the next runtime drain.
    pub fn send(&self, command: ShellCommand) {
        self.queue.borrow_mut().push_back(command);
    }

    /// Queues an application-open request.
    pub fn open_app(&self, app_id: ApplicationId) {
        self.send(ShellCommand::OpenApp { app_id });
    }
}

/// Applies one command against the manager, resolving applications through
/// the catalog. Window-id commands inherit the manager's silent no-op
/// policy for unknown ids; `OpenApp` returns the id of the window that
/// ended up focused.
///
/// # Errors
///
/// Returns [`CommandError::UnknownApplication`] when an `OpenApp` id is not
/// registered in the catalog.
pub fn apply_command(
    manager: &mut WindowManager,
    catalog: &AppCatalog,
    command: ShellCommand,
) -> Result<Option<WindowId>, CommandError> {
    match command {
        ShellCommand::OpenApp { app_id } => {
            let definition = catalog
                .get(&app_id)
                .ok_or(CommandError::UnknownApplication(app_id))?;
            Ok(Some(manager.open(definition)))
        }
        ShellCommand::Close { window_id } => {
            manager.close(&window_id);
            Ok(None)
        }
        ShellCommand::Minimize { window_id } => {
            manager.minimize(&window_id);
            Ok(None)
        }
        ShellCommand::Maximize { window_id } => {
            manager.maximize(&window_id);
            Ok(None)
        }
        ShellCommand::Focus { window_id } => {
            manager.focus(&window_id);
            Ok(None)
        }
        ShellCommand::MoveTo {
            window_id,
            position,
        } => {
            manager.update_position(&window_id, position);
            Ok(None)
        }
        ShellCommand::ResizeTo { window_id, size } => {
            manager.update_size(&window_id, size);
            Ok(None)
        }
        ShellCommand::SetTitle { window_id, title } => {
            manager.set_title(&window_id, title);
            Ok(None)
        }
    }
}

/// Drains the bus and applies every queued command in delivery order.
/// Unknown applications are logged and skipped so one stale launch request
/// cannot stall the rest of the queue. Returns the number of commands
/// applied.
pub fn run_pending(manager: &mut WindowManager, catalog: &AppCatalog, bus: &CommandBus) -> usize {
    let mut applied = 0;
    for command in bus.drain() {
        debug!("applying shell command {command:?}");
        match apply_command(manager, catalog, command) {
            Ok(_) => applied += 1,
            Err(err) => warn!("skipping shell command: {err}"),
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::placement::ScriptedSpawnSource;

    fn manager() -> WindowManager {
        WindowManager::with_spawn_source(ScriptedSpawnSource::default())
    }

    #[test]
    fn drain_preserves_delivery_order() {
        let bus = CommandBus::new();
        let dock = bus.sender();
        let launcher = bus.sender();

        dock.open_app(ApplicationId::trusted("notes"));
        launcher.open_app(ApplicationId::trusted("mail"));
        dock.open_app(ApplicationId::trusted("browser"));

        let drained: Vec<ShellCommand> = bus.drain();
        assert_eq!(
            drained,
            vec![
                ShellCommand::OpenApp {
                    app_id: ApplicationId::trusted("notes")
                },
                ShellCommand::OpenApp {
                    app_id: ApplicationId::trusted("mail")
                },
                ShellCommand::OpenApp {
                    app_id: ApplicationId::trusted("browser")
                },
            ]
        );
        assert!(bus.is_empty());
    }

    #[test]
    fn open_app_resolves_through_the_catalog() {
        let catalog = AppCatalog::builtin();
        let mut wm = manager();

        let opened = apply_command(
            &mut wm,
            &catalog,
            ShellCommand::OpenApp {
                app_id: ApplicationId::trusted("calculator"),
            },
        )
        .expect("calculator is builtin")
        .expect("open returns a window id");
        assert_eq!(wm.window(&opened).unwrap().title, "Calculator");

        let missing = apply_command(
            &mut wm,
            &catalog,
            ShellCommand::OpenApp {
                app_id: ApplicationId::trusted("terminal"),
            },
        );
        assert_eq!(
            missing,
            Err(CommandError::UnknownApplication(ApplicationId::trusted(
                "terminal"
            )))
        );
    }

    #[test]
    fn run_pending_skips_unknown_applications_and_applies_the_rest() {
        let catalog = AppCatalog::builtin();
        let mut wm = manager();
        let bus = CommandBus::new();
        let sender = bus.sender();

        sender.open_app(ApplicationId::trusted("notes"));
        sender.open_app(ApplicationId::trusted("terminal"));
        sender.open_app(ApplicationId::trusted("mail"));

        assert_eq!(run_pending(&mut wm, &catalog, &bus), 2);
        assert_eq!(wm.windows().len(), 2);
        assert!(bus.is_empty());
    }

    #[test]
    fn stale_window_commands_are_silent_noops() {
        let catalog = AppCatalog::builtin();
        let mut wm = manager();
        let bus = CommandBus::new();
        let sender = bus.sender();

        let notes = apply_command(
            &mut wm,
            &catalog,
            ShellCommand::OpenApp {
                app_id: ApplicationId::trusted("notes"),
            },
        )
        .unwrap()
        .unwrap();
        wm.close(&notes);

        sender.send(ShellCommand::Focus {
            window_id: notes.clone(),
        });
        sender.send(ShellCommand::Minimize {
            window_id: notes.clone(),
        });
        sender.send(ShellCommand::SetTitle {
            window_id: notes,
            title: "stale".to_string(),
        });

        assert_eq!(run_pending(&mut wm, &catalog, &bus), 3);
        assert_eq!(wm.windows().len(), 0);
    }
}
