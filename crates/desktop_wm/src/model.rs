use app_catalog::{ApplicationId, Size};
use serde::{Deserialize, Serialize};

/// First z-index the manager hands out; later allocations only grow and are
/// never reused or compacted.
pub const INITIAL_Z_INDEX: u32 = 100;

/// Stable identifier for one open window, composed from the owning
/// application id and the open stamp drawn at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    /// Composes a window id from an application id and an open stamp.
    pub fn compose(app_id: &ApplicationId, open_stamp: u64) -> Self {
        Self(format!("{app_id}-{open_stamp}"))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-left coordinate in the desktop's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the desktop origin.
    pub x: i32,
    /// Vertical offset from the desktop origin.
    pub y: i32,
}

impl Point {
    /// Creates a point from x/y.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by a delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One open instance of an application.
///
/// Geometry is stored verbatim; clamping to viewport and minimum-size
/// constraints happens in the input layer before updates reach the manager.
/// `maximized` rendering uses a full-viewport layout computed by the
/// consumer, so `position`/`size` always hold the restore geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
    pub active: bool,
    pub z_index: u32,
}
