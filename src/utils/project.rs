use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Pick the configuration directory. Nothing is created on disk.
///
/// An explicit override wins; otherwise the platform config dir for `txtstat` is used.
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => ProjectDirs::from("dev", "txtstat", "txtstat")
            .map(|dirs| dirs.config_dir().to_path_buf()),
    }
}

#[test]
fn config_dir_prefers_override_and_does_not_create_it() {
    let tmp = tempfile::tempdir().unwrap();
    let wanted = tmp.path().join("nested").join("cfg");

    let dir = config_dir(Some(&wanted));

    assert_eq!(dir, Some(wanted.clone()));
    assert!(!wanted.exists());
}
