//! Integration Tests for Configuration Files

use gridconsole::config::{Config, ConfigLoader};
use gridconsole::console::Console;
use gridconsole::host::{ContainerNode, MemoryHost};
use gridconsole::init_with_config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_console_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[console]
columns = 40
rows = 8
prompt = "$ "

[ui]
font_size = 16.0
"#,
    )
    .unwrap();

    let config = init_with_config(&path).unwrap();
    assert_eq!(config.ui.font_size, 16.0);

    let mut host = MemoryHost::default();
    host.add_container(ContainerNode::new("div").with_class("console"));
    let mut console = Console::with_config(host, &config.console).unwrap();
    console.bind_to(".console").unwrap().prompt().unwrap();

    assert_eq!(console.line_count(), 8);
    assert_eq!(console.grid_size().columns(), 40);
    assert_eq!(console.current_line().unwrap().text(), "$ ");
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[console]\nrows = 0\n").unwrap();

    assert!(init_with_config(&path).is_err());
}

#[test]
fn test_console_rejects_zero_size_config() {
    let mut config = Config::default();
    config.console.columns = 0;
    assert!(Console::with_config(MemoryHost::default(), &config.console).is_err());
}

#[test]
fn test_save_then_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.console.prompt = "> ".to_string();
    config.console.rows = 30;

    let mut loader = ConfigLoader::new();
    loader.save_to_path(&config, &path).unwrap();
    assert_eq!(loader.load_from_path(&path).unwrap(), config);
}
