//! Camera-page toggle configuration.

use folio_core::{ConfigResult, Validate};
use serde::Deserialize;

/// Configuration for [`CameraPageToggle`](crate::CameraPageToggle).
///
/// ```toml
/// warn_on_missing_binding = true
/// resolve_book_from_scene = false
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Log once when the toggle goes inert for lack of a book or overlay.
    pub warn_on_missing_binding: bool,
    /// Search the scene for a book when none was supplied.
    pub resolve_book_from_scene: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            warn_on_missing_binding: true,
            resolve_book_from_scene: true,
        }
    }
}

impl Validate for ToggleConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
