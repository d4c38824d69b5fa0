use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "DefaultMarginCalculator";
const APP_NAME: &str = "DefaultMarginCalculator";

fn preferences_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

pub fn load_preferences() -> Option<Preferences> {
    let path = preferences_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match decode_preferences(&data) {
        Ok(preferences) => {
            debug!(path = %path.display(), "loaded preferences");
            Some(preferences)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
            None
        }
    }
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), PersistSaveError> {
    let path = preferences_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, encode_preferences(preferences)?)?;
    debug!(path = %path.display(), "saved preferences");
    Ok(())
}

fn decode_preferences(data: &str) -> Result<Preferences, SerdeError> {
    serde_json::from_str::<Preferences>(data).map(Preferences::sanitized)
}

fn encode_preferences(preferences: &Preferences) -> Result<String, SerdeError> {
    serde_json::to_string_pretty(preferences)
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
