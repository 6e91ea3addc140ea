use plexus_core::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user preferences
///
/// The theme flag is the only state that survives a restart; the field
/// itself is rebuilt from scratch every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
}

/// Default preferences location
pub fn default_path() -> PathBuf {
    PathBuf::from("prefs").join("plexus.bin")
}

/// Save preferences to disk as bincode
pub fn save_preferences(prefs: &Preferences, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    let data = bincode::serialize(prefs).map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}

/// Load preferences from disk
pub fn load_preferences(path: &Path) -> Result<Preferences, String> {
    let data = fs::read(path).map_err(|e| format!("Read error: {e}"))?;
    let prefs = bincode::deserialize(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    Ok(prefs)
}
