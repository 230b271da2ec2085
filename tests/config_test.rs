//! Archivo de configuración

use anpr_demo::config::Config;
use tempfile::tempdir;

/// Sin archivo → valores por defecto
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("no se pudo crear el directorio temporal");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// Guardar y volver a leer
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("no se pudo crear el directorio temporal");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config
        .set_endpoint(Some("http://localhost:8000/api/analyze".into()))
        .unwrap();
    config.analyzer.mock_delay_ms = 250;
    config.analyzer.max_upload_bytes = Some(10 * 1024 * 1024);
    config.save_to(&path).expect("no se pudo guardar");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// Archivo parcial: lo que falta toma el valor por defecto
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("no se pudo crear el directorio temporal");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"mock_delay_ms": 10}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.analyzer.mock_delay_ms, 10);
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.analyzer.endpoint.is_none());
}

/// JSON inválido
#[test]
fn test_load_invalid_file() {
    let dir = tempdir().expect("no se pudo crear el directorio temporal");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ no es json").unwrap();

    assert!(Config::load_from(&path).is_err());
}
