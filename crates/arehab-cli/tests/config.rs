use arehab_cli::access::{hash_password, AccessCredentials};
use arehab_cli::mail::SmtpSettings;
use arehab_cli::config::{config_info, load_config, load_or_default, save_config, ArehabConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("config.json")).unwrap();
    assert_eq!(config.letterhead.clinic_name, "A-Rehab Med");
    assert!(config.access.is_none());
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = ArehabConfig::default();
    config.letterhead.clinic_name = "Studio Podologico".to_string();
    config.access = Some(AccessCredentials::new("Arehab", "Med"));
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &ArehabConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn v0_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "clinic_name": "Old Clinic",
            "slogan": "Old slogan",
            "access": { "username": "Arehab", "password": "Med" }
        }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 3);
    assert_eq!(config.letterhead.clinic_name, "Old Clinic");
    assert_eq!(config.letterhead.slogan, "Old slogan");
    let access = config.access.unwrap();
    assert_eq!(access.username, "Arehab");
    assert_eq!(access.salt.len(), 32);
    assert_eq!(access.password_sha256, hash_password(&access.salt, "Med"));
    assert!(access.verify("Arehab", "Med").is_ok());
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn info_redacts_password() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = ArehabConfig::default();
    config.access = Some(AccessCredentials::new("Arehab", "Med"));

    let info = config_info(&path, &config);
    assert_eq!(info.access_user.as_deref(), Some("Arehab"));
    assert_eq!(info.catalog, "built-in");
    let hint = info.password_hint.unwrap();
    assert!(hint.ends_with("..."));
    assert_eq!(hint.len(), 7);
}

#[test]
fn non_ascii_digest_is_redacted_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = ArehabConfig::default();
    config.access = Some(AccessCredentials {
        username: "Arehab".to_string(),
        salt: String::new(),
        password_sha256: "abc\u{e0}defghij".to_string(),
    });

    let info = config_info(&path, &config);
    assert_eq!(info.password_hint.as_deref(), Some("****"));
}

#[test]
fn smtp_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = ArehabConfig::default();
    config.smtp = Some(SmtpSettings {
        host: "smtp.example.org".to_string(),
        port: 587,
        username: "clinic@example.org".to_string(),
        sender: None,
        security: Default::default(),
    });
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.smtp, config.smtp);
    let info = config_info(&path, &loaded);
    assert_eq!(info.smtp_server.as_deref(), Some("smtp.example.org:587 as clinic@example.org"));
}

#[test]
fn v2_config_gets_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 2, "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 3);
    assert!(config.smtp.is_none());
    assert!(config.letterhead.logo_path.is_none());
}
