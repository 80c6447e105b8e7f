//! Integration tests: scripts driven through the file-backed gadget sink.
//!
//! A regular file stands in for `/dev/hidg0`.  Each report is written by a
//! fresh open at offset 0, so after any complete key press the file holds
//! the final release report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use keyscript_core::{KeyboardEngine, ManualClock, ModifierFlags, Timing};
use keyscript_gadget::infrastructure::config::{load_config, save_config, GadgetConfig};
use keyscript_gadget::{AutomationService, HidGadgetDevice};
use uuid::Uuid;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("keyscript-it-{name}-{}", Uuid::new_v4()))
}

fn service_for(path: &Path) -> AutomationService {
    let engine = KeyboardEngine::new(
        Arc::new(HidGadgetDevice::new(path)),
        Arc::new(ManualClock::new()),
        Timing::default(),
    );
    AutomationService::new(engine)
}

#[test]
fn test_script_leaves_device_released() {
    // Arrange
    let path = temp_path("released");
    std::fs::write(&path, b"").unwrap();
    let service = service_for(&path);

    // Act
    let response = service.run_script("GUI r\nSTRING Hi!\nENTER\n");

    // Assert
    assert!(response.success);
    assert_eq!(
        response.results.as_deref(),
        Some(&["Key(s): gui + r".to_string(), "Typed: Hi!".to_string(), "Key(s): enter".to_string()][..])
    );
    assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 8]);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_device_fails_every_line_but_script_completes() {
    // Arrange
    let service = service_for(&temp_path("absent"));

    // Act
    let response = service.run_script("STRING a\nDELAY 5\nCTRL c\n");

    // Assert
    assert!(response.success);
    let results = response.results.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].starts_with("Typed: a (failed: HID device"));
    assert_eq!(results[1], "Delayed: 5ms");
    assert!(results[2].contains("unavailable"));
}

#[test]
fn test_single_key_against_missing_device() {
    let service = service_for(&temp_path("absent-key"));

    let response = service.send_key("a", ModifierFlags::NONE);

    assert!(!response.success);
    assert_eq!(response.message, "Failed to send key");
}

#[test]
fn test_configured_device_path_is_used() {
    // Arrange
    let dir = temp_path("cfg");
    let device_path = dir.join("hidg-test");
    let config_path = dir.join("config.toml");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&device_path, b"").unwrap();
    let mut cfg = GadgetConfig::default();
    cfg.device.path = device_path.clone();
    save_config(&cfg, &config_path).unwrap();

    // Act
    let loaded = load_config(Some(&config_path)).unwrap();
    let engine = KeyboardEngine::new(
        Arc::new(HidGadgetDevice::new(&loaded.device.path)),
        Arc::new(ManualClock::new()),
        loaded.timing.to_timing(),
    );
    let sent = AutomationService::new(engine).send_combo("ctrl alt t");

    // Assert
    assert!(sent.success);
    assert_eq!(std::fs::read(&device_path).unwrap(), vec![0u8; 8]);
    std::fs::remove_dir_all(&dir).unwrap();
}
