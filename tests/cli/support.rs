use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for syllabus running in `dir`, isolated from the user's config
pub fn syllabus(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("syllabus");
    cmd.current_dir(dir)
        .env("SYLLABUS_CONFIG_DIR", dir.join(".config"))
        .env_remove("SYLLABUS_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("SYLLABUS_LOG");
    cmd
}

/// Read the working record as JSON
pub fn read_record(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Write a config file into the isolated config directory
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}
