use std::path::{Path, PathBuf};

use mna_export::select::SinkPreference;
use serde::{Deserialize, Serialize};

/// Config schema written by this build. Older files go through [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// 0 for files written before the sink preference existed.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub sink: SinkPreference,
    /// Directory for the directory sink, and the starting directory of the
    /// save dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            sink: SinkPreference::Auto,
            output_dir: None,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.mna.console"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user's config, or the defaults when none has been saved yet.
pub fn load_config() -> eyre::Result<ConsoleConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConsoleConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ConsoleConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&text)?;
    let version = raw
        .get("config_version")
        .and_then(serde_json::Value::as_u64)
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    Ok(serde_json::from_value(migrate(raw, version)?)?)
}

/// Bring a raw config document from `from_version` to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    if from_version == 0 {
        let fields = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        fields.entry("sink").or_insert_with(|| serde_json::json!("auto"));
        fields.insert("config_version".into(), serde_json::json!(1));
        tracing::info!("config migrated to v1, sink preference defaults to auto");
    }

    Ok(json)
}

/// Persist `config` at `path` with the current version stamped in. The file
/// is readable by the owner only.
pub fn save_config_to(path: &Path, config: &ConsoleConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let stamped = ConsoleConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let body = serde_json::to_vec_pretty(&stamped)?;

    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(eyre::eyre!("failed to save config at {}: {e}", path.display()));
    }

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
