//! Settings for status handling and logging
//!
//! Settings are assembled from ordered sources (defaults, a json/toml/yaml
//! file, `STATUSKIT_*` environment variables); later sources win.

mod loader;
mod settings;

pub use loader::{ENV_PREFIX, SettingsLoader, SettingsSource, load_from_file};
pub use settings::{DEFAULT_SUCCESS_MESSAGE, LoggingSettings, SettingsOverlay, StatusSettings};
