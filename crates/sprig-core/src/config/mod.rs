//! Keyboard configuration snapshot.
//!
//! Maps named actions to shortcut strings such as `"e"` or `"shift+3"`. The
//! JSON keys keep their historical camelCase names so existing config files
//! keep working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_DIR_NAME: &str = "sprig";
const CONFIG_FILE_NAME: &str = "configs.json";

/// Named keyboard shortcuts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configs {
    /// Open the current note in the editor
    pub actions_edit: String,
    /// Remove the current note
    pub actions_remove: String,
    /// Toggle the favorite star
    pub actions_rotate_star: String,
    /// Jump to the previous note in a list
    pub navigate_top: String,
    /// Jump to the next note in a list
    pub navigate_bottom: String,
}

impl Default for Configs {
    fn default() -> Self {
        Self {
            actions_edit: "e".to_string(),
            actions_remove: "shift+3".to_string(),
            actions_rotate_star: "s".to_string(),
            navigate_top: "k".to_string(),
            navigate_bottom: "j".to_string(),
        }
    }
}

impl Configs {
    /// Parse a configuration snapshot; missing keys keep their defaults.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Load a snapshot from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(payload) => Self::from_json(&payload),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Pretty JSON representation, as written to disk
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default location of the configuration file (`<config dir>/sprig/configs.json`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configs_default() {
        let configs = Configs::default();
        assert_eq!(configs.actions_edit, "e");
        assert_eq!(configs.actions_remove, "shift+3");
        assert_eq!(configs.actions_rotate_star, "s");
    }

    #[test]
    fn from_json_keeps_defaults_for_missing_keys() {
        let configs = Configs::from_json(r#"{"actionsEdit":"ctrl+e"}"#).unwrap();
        assert_eq!(configs.actions_edit, "ctrl+e");
        assert_eq!(configs.actions_remove, "shift+3");
    }

    #[test]
    fn from_json_rejects_malformed_payload() {
        assert!(matches!(
            Configs::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let configs = Configs::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(configs, Configs::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"actionsRotateStar":"f"}"#).unwrap();
        let configs = Configs::load(&path).unwrap();
        assert_eq!(configs.actions_rotate_star, "f");
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("sprig/configs.json"));
        }
    }
}
