use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use arehab_export::styles::{DocumentStyles, Letterhead};

use crate::access::{hash_password, new_salt, AccessCredentials};
use crate::mail::SmtpSettings;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 3;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArehabConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub letterhead: Letterhead,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// JSON exercise catalog replacing the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Where exported documents go when `--out` is not given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub access: Option<AccessCredentials>,
    /// Outgoing mail server for `arehab send`.
    #[serde(default)]
    pub smtp: Option<SmtpSettings>,
    pub created_at: jiff::Timestamp,
}

impl Default for ArehabConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            letterhead: Letterhead::default(),
            styles: DocumentStyles::default(),
            catalog_path: None,
            output_dir: None,
            access: None,
            smtp: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Redacted config summary safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub path: String,
    pub clinic_name: String,
    pub catalog: String,
    pub output_dir: Option<String>,
    pub access_user: Option<String>,
    pub password_hint: Option<String>,
    pub smtp_server: Option<String>,
    pub created_at: String,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.arehab.med"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load the config at `path`, or a fresh default when the file does not exist.
pub fn load_or_default(path: &Path) -> eyre::Result<ArehabConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(ArehabConfig::default())
    }
}

pub fn load_config(path: &Path) -> eyre::Result<ArehabConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ArehabConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update arehab."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: top-level clinic_name/slogan move into letterhead
    if from_version < 1 {
        let mut letterhead = serde_json::to_value(Letterhead::default())?;
        for key in ["clinic_name", "slogan"] {
            if let Some(value) = obj.remove(key) {
                letterhead[key] = value;
            }
        }
        obj.entry("letterhead").or_insert(letterhead);
        obj.entry("created_at")
            .or_insert_with(|| serde_json::Value::String(jiff::Timestamp::now().to_string()));
        tracing::info!("migrated config v0 → v1 (letterhead)");
    }

    // v1 → v2: plain-text access password replaced by its salted SHA-256
    if from_version < 2 {
        if let Some(access) = obj.get_mut("access").and_then(|a| a.as_object_mut())
            && let Some(password) = access.remove("password")
        {
            let password = password
                .as_str()
                .ok_or_else(|| eyre::eyre!("access.password is not a string"))?;
            let salt = new_salt();
            access.insert(
                "password_sha256".to_string(),
                serde_json::Value::String(hash_password(&salt, password)),
            );
            access.insert("salt".to_string(), serde_json::Value::String(salt));
        }
        tracing::info!("migrated config v1 → v2 (hashed access password)");
    }

    // v2 → v3: optional smtp section and letterhead logo, both defaulted
    if from_version < 3 {
        tracing::info!("migrated config v2 → v3 (smtp, logo)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(path: &Path, config: &ArehabConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Holds the password hash
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(path: &Path, config: &ArehabConfig) -> ConfigInfo {
    ConfigInfo {
        path: path.display().to_string(),
        clinic_name: config.letterhead.clinic_name.clone(),
        catalog: config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        output_dir: config.output_dir.as_ref().map(|p| p.display().to_string()),
        access_user: config.access.as_ref().map(|a| a.username.clone()),
        password_hint: config
            .access
            .as_ref()
            .map(|a| redact_digest(&a.password_sha256)),
        smtp_server: config
            .smtp
            .as_ref()
            .map(|s| format!("{}:{} as {}", s.host, s.port, s.username)),
        created_at: config.created_at.to_string(),
    }
}

fn redact_digest(digest: &str) -> String {
    match digest.get(..4) {
        Some(prefix) if digest.len() > 8 => format!("{prefix}..."),
        _ => "****".to_string(),
    }
}
