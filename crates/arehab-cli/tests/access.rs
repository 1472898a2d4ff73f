use arehab_cli::access::{check_access, hash_password, new_salt, AccessCredentials, AccessError};

#[test]
fn open_when_no_credentials_configured() {
    assert!(check_access(None, None, None).is_ok());
}

#[test]
fn right_password_is_accepted() {
    let creds = AccessCredentials::new("Arehab", "Med");
    assert!(check_access(Some(&creds), Some("Arehab"), Some("Med")).is_ok());
}

#[test]
fn wrong_password_or_user_is_denied() {
    let creds = AccessCredentials::new("Arehab", "Med");
    assert!(matches!(
        check_access(Some(&creds), Some("Arehab"), Some("med")),
        Err(AccessError::Denied(user)) if user == "Arehab"
    ));
    assert!(matches!(
        check_access(Some(&creds), Some("someone"), Some("Med")),
        Err(AccessError::Denied(_))
    ));
}

#[test]
fn missing_input_is_reported() {
    let creds = AccessCredentials::new("Arehab", "Med");
    assert!(matches!(
        check_access(Some(&creds), Some("Arehab"), None),
        Err(AccessError::Missing)
    ));
}

#[test]
fn unsalted_hash_is_plain_sha256_hex() {
    assert_eq!(
        hash_password("", "abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn password_is_stored_salted() {
    let creds = AccessCredentials::new("Arehab", "abc");
    assert_eq!(creds.salt.len(), 32);
    assert_eq!(creds.password_sha256, hash_password(&creds.salt, "abc"));
    assert_ne!(creds.password_sha256, hash_password("", "abc"));

    let again = AccessCredentials::new("Arehab", "abc");
    assert_ne!(creds.salt, again.salt);
    assert_ne!(creds.password_sha256, again.password_sha256);
    assert_ne!(new_salt(), new_salt());
}

#[test]
fn credentials_without_salt_still_verify() {
    let creds: AccessCredentials = serde_json::from_str(&format!(
        r#"{{"username": "Arehab", "password_sha256": "{}"}}"#,
        hash_password("", "Med")
    ))
    .unwrap();
    assert!(creds.salt.is_empty());
    assert!(check_access(Some(&creds), Some("Arehab"), Some("Med")).is_ok());
}
