// ==========================================
// AppConfig - загрузка конфигурации
// ==========================================

use jewelry_wax_mes::config::AppConfig;
use jewelry_wax_mes::domain::WaxMethod;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.weight_precision, 3);
    assert_eq!(config.erp_timeout_secs, 5);
    assert!(config.method_overrides.is_empty());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = AppConfig::load_or_default(Path::new("/нет/такого/config.json")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_full_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "weight_precision": 2,
            "erp_timeout_secs": 30,
            "method_overrides": {{ "GOLD-77": "rubber", "Х-12": "3d" }}
        }}"#
    )
    .unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.weight_precision, 2);
    assert_eq!(config.erp_timeout_secs, 30);
    assert_eq!(config.method_overrides["GOLD-77"], WaxMethod::Rubber);
    assert_eq!(config.method_overrides["Х-12"], WaxMethod::ThreeD);

    // классификатор уважает переопределения
    let classifier = config.method_classifier();
    assert_eq!(classifier.classify("GOLD-77"), WaxMethod::Rubber);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "erp_timeout_secs": 1 }}"#).unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.weight_precision, 3);
    assert_eq!(config.erp_timeout_secs, 1);
}

#[test]
fn test_broken_json_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ это не json").unwrap();
    assert!(AppConfig::load_or_default(file.path()).is_err());
}
