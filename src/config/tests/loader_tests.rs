use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{expand_path, load_registry, resolve_registry, ConfigError};
use crate::core::{generate_iban, BankRegistry};

/// Helper: Creates a registry file with two synthetic banks
fn create_test_registry() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let registry_path = temp_dir.path().join("banks.conf");

    let content = r#"
# Test registry
Test Bank One = TST1, logos/one.png
Test Bank Two = TST2
"#;

    fs::write(&registry_path, content).unwrap();
    (temp_dir, registry_path)
}

#[test]
fn test_load_registry() {
    let (_temp_dir, registry_path) = create_test_registry();

    let registry = load_registry(&registry_path).unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.contains("TST1"));
    assert!(registry.contains("TST2"));
    assert!(!registry.contains("HABB"));
}

#[test]
fn test_loaded_registry_drives_generation() {
    let (_temp_dir, registry_path) = create_test_registry();
    let registry = load_registry(&registry_path).unwrap();

    let iban = generate_iban("1234", "TST1", &registry).unwrap();
    assert!(iban.compact().starts_with("PK"));
    assert!(iban.compact().ends_with("TST10000000000001234"));

    assert!(generate_iban("1234", "HABB", &registry).is_err());
}

#[test]
fn test_load_missing_registry() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nonexistent.conf");

    let result = load_registry(&missing);
    assert!(matches!(result, Err(ConfigError::NotFound(path)) if path == missing));
}

#[test]
fn test_load_invalid_registry() {
    let temp_dir = TempDir::new().unwrap();
    let registry_path = temp_dir.path().join("banks.conf");
    fs::write(&registry_path, "Valid = GOOD\nnot a bank line\n").unwrap();

    assert!(matches!(
        load_registry(&registry_path),
        Err(ConfigError::InvalidSyntax { line: 2, .. })
    ));
}

#[test]
fn test_resolve_registry_defaults_to_builtin() {
    let registry = resolve_registry(None).unwrap();
    assert_eq!(registry, BankRegistry::builtin());
}

#[test]
fn test_resolve_registry_with_path() {
    let (_temp_dir, registry_path) = create_test_registry();

    let registry = resolve_registry(Some(&registry_path)).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_expand_path_leaves_absolute_paths() {
    let path = PathBuf::from("/etc/pk-iban/banks.conf");
    assert_eq!(expand_path(&path).unwrap(), path);
}

#[test]
fn test_expand_path_tilde() {
    let expanded = expand_path(&PathBuf::from("~/banks.conf")).unwrap();
    assert!(expanded.ends_with("banks.conf"));
}
