#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn mediatag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediatag").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create `rel` under `root` with placeholder mp3 bytes
pub fn write_mp3(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"ID3").unwrap();
}
