//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core state stores (theme preference, sidebar, shortcuts)
//! - `infrastructure/` - External integrations (storage, platform, error)
//! - `services/` - Content discovery and page rendering
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod infrastructure;
pub mod messages;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::prefs::ThemePrefs;
pub use domain::shortcuts::{KeyCombo, KeyPress, SearchTarget, ShortcutAction};
pub use domain::sidebar::SidebarState;
pub use domain::UiState;
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use infrastructure::storage::{JsonFileStorage, MemoryStorage, Storage};
pub use messages::Message;
