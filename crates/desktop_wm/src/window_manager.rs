//! Window-manager state machine: lifecycle, focus, and stacking bookkeeping
//! for the desktop shell.
//!
//! The manager owns the ordered window collection (insertion order; stacking
//! is derived from `z_index` at render time) and the shared z-index counter.
//! Every operation is total over its window-id input: unknown ids are silent
//! no-ops, reported through the `bool` return value rather than an error,
//! because absence is not distinguishable from "already closed" and no
//! caller treats either as exceptional.

use app_catalog::{ApplicationDefinition, ApplicationId, Size};
use log::debug;

use crate::model::{Point, WindowId, WindowRecord, INITIAL_Z_INDEX};
use crate::placement::{SpawnSource, SystemSpawnSource};

/// Single-instance policy for `open`: a minimized window is treated as "not
/// running" and skipped by the existing-window match, so reopening an
/// application whose only window is minimized creates a second window.
/// Deliberate, if debatable; preserved as observed.
pub const OPEN_MATCH_SKIPS_MINIMIZED: bool = true;

/// Owns the collection of open application windows, their stacking order,
/// geometry, and lifecycle.
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    next_z_index: u32,
    spawn: Box<dyn SpawnSource>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Creates an empty manager with wall-clock stamps and OS-entropy
    /// placement.
    pub fn new() -> Self {
        Self::with_spawn_source(SystemSpawnSource::new())
    }

    /// Creates an empty manager with a caller-supplied spawn source.
    pub fn with_spawn_source(spawn: impl SpawnSource + 'static) -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: INITIAL_Z_INDEX,
            spawn: Box::new(spawn),
        }
    }

    /// Opens a window for `definition`, or focuses the existing one when the
    /// single-instance match finds a non-minimized window for the same
    /// application. Always succeeds; returns the id of the window that ended
    /// up focused.
    pub fn open(&mut self, definition: &ApplicationDefinition) -> WindowId {
        let existing = self
            .windows
            .iter()
            .find(|window| {
                window.app_id == definition.id
                    && !(OPEN_MATCH_SKIPS_MINIMIZED && window.minimized)
            })
            .map(|window| window.id.clone());
        if let Some(window_id) = existing {
            self.focus(&window_id);
            return window_id;
        }

        let spawn = self.spawn.next_spawn();
        let window_id = WindowId::compose(&definition.id, spawn.open_stamp);
        for window in &mut self.windows {
            window.active = false;
        }
        let z_index = self.allocate_z_index();
        self.windows.push(WindowRecord {
            id: window_id.clone(),
            app_id: definition.id.clone(),
            title: definition.name.clone(),
            position: spawn.origin,
            size: definition.default_size,
            minimized: false,
            maximized: false,
            active: true,
            z_index,
        });
        debug!("opened window {window_id} for application {}", definition.id);
        window_id
    }

    /// Removes the window unconditionally. No window is auto-promoted to
    /// active afterwards.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| &window.id != window_id);
        let removed = self.windows.len() != before;
        if removed {
            debug!("closed window {window_id}");
        }
        removed
    }

    /// Minimizes the window and drops its active flag; every other window is
    /// untouched (no auto-promotion).
    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        match self.find_window_mut(window_id) {
            Some(window) => {
                window.minimized = true;
                window.active = false;
                debug!("minimized window {window_id}");
                true
            }
            None => false,
        }
    }

    /// Toggles maximized state and activates the window; stored geometry is
    /// retained so restoring returns to the pre-maximize bounds. The
    /// maximized layout itself is computed by the rendering layer.
    pub fn maximize(&mut self, window_id: &WindowId) -> bool {
        if self.find_window_mut(window_id).is_none() {
            return false;
        }
        let mut maximized = false;
        for window in &mut self.windows {
            if &window.id == window_id {
                window.maximized = !window.maximized;
                window.active = true;
                maximized = window.maximized;
            } else {
                window.active = false;
            }
        }
        debug!("toggled window {window_id} to maximized={maximized}");
        true
    }

    /// Activates the window, restores it from minimized, and raises it to
    /// the top of the stack with a fresh z-index. Focusing is the only
    /// restore-from-minimized path.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        if self.find_window_mut(window_id).is_none() {
            return false;
        }
        let z_index = self.allocate_z_index();
        for window in &mut self.windows {
            if &window.id == window_id {
                window.active = true;
                window.minimized = false;
                window.z_index = z_index;
            } else {
                window.active = false;
            }
        }
        debug!("focused window {window_id} at z-index {z_index}");
        true
    }

    /// Overwrites the stored position verbatim; the input layer clamps to
    /// viewport bounds before calling.
    pub fn update_position(&mut self, window_id: &WindowId, position: Point) -> bool {
        match self.find_window_mut(window_id) {
            Some(window) => {
                window.position = position;
                true
            }
            None => false,
        }
    }

    /// Overwrites the stored size verbatim; the input layer floors at the
    /// application's minimum size before calling.
    pub fn update_size(&mut self, window_id: &WindowId, size: Size) -> bool {
        match self.find_window_mut(window_id) {
            Some(window) => {
                window.size = size;
                true
            }
            None => false,
        }
    }

    /// Replaces the window title (reserved consumer-driven update).
    pub fn set_title(&mut self, window_id: &WindowId, title: impl Into<String>) -> bool {
        match self.find_window_mut(window_id) {
            Some(window) => {
                window.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Full window collection in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Looks up one window by id.
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| &window.id == window_id)
    }

    /// Non-minimized windows sorted bottom-to-top for rendering.
    pub fn visible_stack(&self) -> Vec<&WindowRecord> {
        let mut stack: Vec<&WindowRecord> = self
            .windows
            .iter()
            .filter(|window| !window.minimized)
            .collect();
        stack.sort_by_key(|window| window.z_index);
        stack
    }

    /// Id of the single active window when one exists.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .find(|window| window.active)
            .map(|window| &window.id)
    }

    /// Application ids with at least one open window, in first-opened order.
    /// Consumed by the dock's running indicator.
    pub fn running_app_ids(&self) -> Vec<&ApplicationId> {
        let mut running: Vec<&ApplicationId> = Vec::new();
        for window in &self.windows {
            if !running.contains(&&window.app_id) {
                running.push(&window.app_id);
            }
        }
        running
    }

    fn allocate_z_index(&mut self) -> u32 {
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        z_index
    }

    fn find_window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows
            .iter_mut()
            .find(|window| &window.id == window_id)
    }
}
