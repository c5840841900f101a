//! Application catalog contract between the desktop window manager and the
//! shell surfaces that launch applications.
//!
//! The catalog is the static side of the desktop: every launchable
//! application is described by an [`ApplicationDefinition`] and looked up by
//! [`ApplicationId`]. The window manager reads only the id, display name,
//! and default size when a window is opened; icon tokens, minimum sizes,
//! and visibility flags are consumed by the rendering and input layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a launchable application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an application id when `raw` conforms to the kebab-case policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, CatalogError> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(CatalogError::InvalidApplicationId(raw))
        }
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }

    for part in raw.split('-') {
        if part.is_empty() {
            return false;
        }
        if !part
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return false;
        }
    }
    true
}

/// Width/height pair in desktop coordinate-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Creates a size from width/height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns this size with both axes floored at `min`.
    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Static descriptor for one installable application.
///
/// Definitions are trusted host input; the catalog never mutates them after
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDefinition {
    /// Canonical application id.
    pub id: ApplicationId,
    /// Human-readable display name, used as the initial window title.
    pub name: String,
    /// Icon token resolved by the rendering layer.
    pub icon: String,
    /// Geometry for a freshly opened window.
    pub default_size: Size,
    /// Resize floor enforced by the input layer.
    pub min_size: Size,
    /// Whether the dock shows a launch button for this application.
    pub show_in_dock: bool,
    /// Whether the full-screen launcher lists this application.
    pub show_in_launcher: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by catalog id validation and registration.
pub enum CatalogError {
    /// The raw id text does not conform to the kebab-case policy.
    #[error("invalid application id `{0}`; expected lowercase kebab-case segments")]
    InvalidApplicationId(String),
    /// An application with the same id is already registered.
    #[error("application `{0}` is already registered")]
    DuplicateApplication(ApplicationId),
}

/// Ordered application registry consulted when opening windows and when
/// rendering launch surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCatalog {
    definitions: Vec<ApplicationDefinition>,
}

impl AppCatalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the catalog of stock applications shipped with the desktop.
    pub fn builtin() -> Self {
        Self {
            definitions: builtin_definitions(),
        }
    }

    /// Registers a definition, rejecting duplicate ids.
    pub fn register(&mut self, definition: ApplicationDefinition) -> Result<(), CatalogError> {
        if self.get(&definition.id).is_some() {
            return Err(CatalogError::DuplicateApplication(definition.id));
        }
        self.definitions.push(definition);
        Ok(())
    }

    /// Looks up a definition by id.
    pub fn get(&self, id: &ApplicationId) -> Option<&ApplicationDefinition> {
        self.definitions.iter().find(|def| &def.id == id)
    }

    /// Returns every registered definition in registration order.
    pub fn definitions(&self) -> &[ApplicationDefinition] {
        &self.definitions
    }

    /// Returns the definitions pinned to the dock, in dock order.
    pub fn dock_definitions(&self) -> Vec<&ApplicationDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.show_in_dock)
            .collect()
    }

    /// Returns the definitions listed by the launcher.
    pub fn launcher_definitions(&self) -> Vec<&ApplicationDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.show_in_launcher)
            .collect()
    }
}

fn builtin_definitions() -> Vec<ApplicationDefinition> {
    vec![
        ApplicationDefinition {
            id: ApplicationId::trusted("file-explorer"),
            name: "Files".to_string(),
            icon: "Folder".to_string(),
            default_size: Size::new(900, 650),
            min_size: Size::new(500, 400),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("notes"),
            name: "Notes".to_string(),
            icon: "FileText".to_string(),
            default_size: Size::new(800, 600),
            min_size: Size::new(500, 400),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("media-player"),
            name: "Music".to_string(),
            icon: "Music".to_string(),
            default_size: Size::new(700, 500),
            min_size: Size::new(500, 400),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("browser"),
            name: "Browser".to_string(),
            icon: "Globe".to_string(),
            default_size: Size::new(1200, 800),
            min_size: Size::new(800, 600),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("calculator"),
            name: "Calculator".to_string(),
            icon: "Calculator".to_string(),
            default_size: Size::new(320, 480),
            min_size: Size::new(300, 450),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("mail"),
            name: "Mail".to_string(),
            icon: "Mail".to_string(),
            default_size: Size::new(1000, 700),
            min_size: Size::new(600, 500),
            show_in_dock: true,
            show_in_launcher: true,
        },
        ApplicationDefinition {
            id: ApplicationId::trusted("ai-assistant"),
            name: "AI Assistant".to_string(),
            icon: "Bot".to_string(),
            default_size: Size::new(800, 600),
            min_size: Size::new(500, 400),
            show_in_dock: false,
            show_in_launcher: true,
        },
    ]
}
