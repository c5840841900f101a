//! Pointer-driven drag and resize sessions.
//!
//! The manager stores geometry verbatim, so this module is the input-layer
//! collaborator that clamps to viewport bounds and minimum sizes before
//! calling [`WindowManager::update_position`] / [`WindowManager::update_size`].
//! Sessions are transient modes entered on pointer-down and exited on
//! pointer-up; losing the pointer unconditionally ends the mode with no
//! cancel-and-revert. One session at a time: the host dispatches pointer
//! events serially and each handler is scoped to a single window.

use app_catalog::Size;
use serde::{Deserialize, Serialize};

use crate::model::{Point, WindowId};
use crate::window_manager::WindowManager;

/// Height of the menu bar; windows may not be dragged underneath it.
pub const MENU_BAR_HEIGHT: i32 = 32;
/// Vertical band reserved for the dock at the bottom of the viewport.
pub const DOCK_RESERVE: i32 = 100;

/// Desktop viewport with the shell regions windows may not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
    /// Top region reserved for the menu bar.
    pub top_inset: i32,
    /// Bottom region reserved for the dock.
    pub bottom_inset: i32,
}

impl Viewport {
    /// Creates a viewport with the standard shell insets.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            top_inset: MENU_BAR_HEIGHT,
            bottom_inset: DOCK_RESERVE,
        }
    }
}

/// Active window-drag mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    window_id: WindowId,
    pointer_start: Point,
    position_start: Point,
}

/// Active window-resize mode (south-east handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    window_id: WindowId,
    pointer_start: Point,
    size_start: Size,
    min_size: Size,
}

/// Transient drag/resize state machine: idle -> dragging -> idle and
/// idle -> resizing -> idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    dragging: Option<DragSession>,
    resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Whether a resize session is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resizing.is_some()
    }

    /// Enters drag mode for `window_id` and focuses it, mirroring the
    /// pointer-down on a window header. No session starts for an unknown id.
    pub fn begin_move(
        &mut self,
        manager: &mut WindowManager,
        window_id: &WindowId,
        pointer: Point,
    ) -> bool {
        let Some(position_start) = manager.window(window_id).map(|w| w.position) else {
            return false;
        };
        manager.focus(window_id);
        self.dragging = Some(DragSession {
            window_id: window_id.clone(),
            pointer_start: pointer,
            position_start,
        });
        true
    }

    /// Applies one pointer-move to the active drag, clamped to the viewport.
    /// Maximized windows ignore drag moves.
    pub fn update_move(
        &mut self,
        manager: &mut WindowManager,
        viewport: Viewport,
        pointer: Point,
    ) -> bool {
        let Some(session) = self.dragging.as_ref() else {
            return false;
        };
        let Some(window) = manager.window(&session.window_id) else {
            // Window closed mid-drag; the session dies with it on pointer-up.
            return false;
        };
        if window.maximized {
            return false;
        }
        let size = window.size;
        let target = session.position_start.offset(
            pointer.x - session.pointer_start.x,
            pointer.y - session.pointer_start.y,
        );
        let clamped = clamp_to_viewport(target, size, viewport);
        manager.update_position(&session.window_id, clamped)
    }

    /// Enters resize mode for `window_id` and focuses it. The application's
    /// declared minimum size is captured here because the manager does not
    /// re-validate sizes.
    pub fn begin_resize(
        &mut self,
        manager: &mut WindowManager,
        window_id: &WindowId,
        min_size: Size,
        pointer: Point,
    ) -> bool {
        let Some(size_start) = manager.window(window_id).map(|w| w.size) else {
            return false;
        };
        manager.focus(window_id);
        self.resizing = Some(ResizeSession {
            window_id: window_id.clone(),
            pointer_start: pointer,
            size_start,
            min_size,
        });
        true
    }

    /// Applies one pointer-move to the active resize, floored at the minimum
    /// size. Maximized windows ignore resize moves.
    pub fn update_resize(&mut self, manager: &mut WindowManager, pointer: Point) -> bool {
        let Some(session) = self.resizing.as_ref() else {
            return false;
        };
        let Some(window) = manager.window(&session.window_id) else {
            return false;
        };
        if window.maximized {
            return false;
        }
        let resized = Size::new(
            session.size_start.width + (pointer.x - session.pointer_start.x),
            session.size_start.height + (pointer.y - session.pointer_start.y),
        )
        .clamped_min(session.min_size);
        manager.update_size(&session.window_id, resized)
    }

    /// Ends whichever mode is active; called on pointer-up or capture loss.
    pub fn pointer_released(&mut self) {
        self.dragging = None;
        self.resizing = None;
    }
}

fn clamp_to_viewport(target: Point, size: Size, viewport: Viewport) -> Point {
    let max_x = (viewport.width - size.width).max(0);
    let max_y = (viewport.height - size.height - viewport.bottom_inset).max(viewport.top_inset);
    Point {
        x: target.x.clamp(0, max_x),
        y: target.y.clamp(viewport.top_inset, max_y),
    }
}
