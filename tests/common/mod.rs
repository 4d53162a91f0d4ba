use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub use tarwalk::tar::testutil::ArchiveBuilder;

pub fn write_archive(dir: &Path, data: &[u8]) -> PathBuf {
    let path = dir.join("archive.tar");
    std::fs::write(&path, data).unwrap();
    path
}

/// Run the binary inside `cwd`.
pub fn tarwalk(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tarwalk"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
