use std::fs;
use std::path::PathBuf;

/// Writes `contents` to a file under the system temp directory and returns its path.
#[allow(dead_code)]
pub fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scalargrad-{}-{}.csv", name, std::process::id()));
    fs::write(&path, contents).expect("Failed to write temporary CSV");
    path
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
