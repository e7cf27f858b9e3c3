use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::settings::settings_model::UserSettings;

/// Supplies the settings snapshot for one fill pass.
///
/// Loading never fails: sources degrade to `UserSettings::default()`.
pub trait SettingsSource {
    fn load(&self) -> UserSettings;
}

/// Fixed in-memory snapshot.
pub struct StaticSettings(pub UserSettings);

impl SettingsSource for StaticSettings {
    fn load(&self) -> UserSettings {
        self.0.clone()
    }
}

/// Settings read from a JSON or YAML file on every load.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SettingsSource for FileSettings {
    fn load(&self) -> UserSettings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings file unreadable, using defaults");
                return UserSettings::default();
            }
        };

        debug!(path = %self.path.display(), "loaded settings file");

        let is_json = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            UserSettings::from_json_str(&content)
        } else {
            UserSettings::from_yaml_str(&content)
        }
    }
}
