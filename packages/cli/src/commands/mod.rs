pub mod compile;
pub mod init;
pub mod lint;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};

use crate::config::project_stem;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All project documents under `dir`, or `dir` itself when it is a file
pub(crate) fn find_projects(dir: &Path) -> Vec<PathBuf> {
    if dir.is_file() {
        return vec![dir.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && project_stem(path).is_some())
        .collect();
    files.sort();
    files
}
