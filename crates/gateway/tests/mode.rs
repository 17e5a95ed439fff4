//! Tests for data mode persistence.

use erika_gateway::{DataMode, ModeStore};
use tempfile::TempDir;

#[test]
fn defaults_to_mock_when_missing() {
    let dir = TempDir::new().unwrap();
    let store = ModeStore::at(dir.path().join("mode.toml"));
    assert_eq!(store.mode(), DataMode::Mock);
}

#[test]
fn set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = ModeStore::at(dir.path().join("mode.toml"));

    store.set_mode(DataMode::Live).unwrap();
    assert_eq!(store.mode(), DataMode::Live);

    store.set_mode(DataMode::Mock).unwrap();
    assert_eq!(store.mode(), DataMode::Mock);
}

#[test]
fn invalid_stored_value_reads_as_mock() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mode.toml");

    std::fs::write(&path, "mode = \"turbo\"\n").unwrap();
    assert_eq!(ModeStore::at(&path).mode(), DataMode::Mock);

    std::fs::write(&path, "not even toml {{{").unwrap();
    assert_eq!(ModeStore::at(&path).mode(), DataMode::Mock);
}

#[test]
fn mode_parses_and_displays_its_two_values() {
    assert_eq!("mock".parse::<DataMode>().unwrap(), DataMode::Mock);
    assert_eq!("live".parse::<DataMode>().unwrap(), DataMode::Live);
    assert!("demo".parse::<DataMode>().is_err());
    assert_eq!(DataMode::Live.to_string(), "live");
}

#[test]
fn store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = ModeStore::at(dir.path().join("nested").join("mode.toml"));
    store.set_mode(DataMode::Live).unwrap();
    assert_eq!(store.mode(), DataMode::Live);
}
