//! Error type shared by the crate.

use egui::Id;
use thiserror::Error;

/// Errors raised while wiring a navigation bar together.
///
/// State transitions never fail; only claiming the pointer observer and
/// parsing dropdown keys can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Another controller already owns the outside-click observer for this id.
    #[error("outside-click observer already claimed for {0:?}")]
    ObserverConflict(Id),
    /// Text did not name a known dropdown.
    #[error("unknown dropdown key `{0}`")]
    UnknownDropdown(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NavError>;
