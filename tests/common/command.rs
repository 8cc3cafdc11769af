use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write file");
    file.path().to_path_buf()
}

pub fn run_diffmatch_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("diffmatch").expect("Failed to find diffmatch binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
