//! Diff engine - Change detection and per-file decisions

mod compare;

pub use compare::{files_differ, truncate_to_second};

use crate::types::{FileEntry, SyncDecision};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decide what to do with `src` given the current state of `target_path`
///
/// The target is queried with `fs::metadata`, so a symlink in the target is
/// judged by what it points to.
pub fn decide(src: &FileEntry, target_path: &Path) -> SyncDecision {
    let metadata = match fs::metadata(target_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return SyncDecision::Create,
        Err(e) => return SyncDecision::Inaccessible(e),
    };

    let dest = match FileEntry::from_metadata(src.path.clone(), &metadata) {
        Ok(dest) => dest,
        Err(e) => return SyncDecision::Inaccessible(e),
    };

    if files_differ(src, &dest) {
        SyncDecision::Update
    } else {
        SyncDecision::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn snapshot(path: &Path, relative: &str) -> FileEntry {
        let metadata = fs::metadata(path).expect("read metadata");
        FileEntry::from_metadata(PathBuf::from(relative), &metadata).expect("mtime available")
    }

    #[test]
    fn test_missing_target_is_create() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("src.txt");
        fs::write(&src_path, b"hello").expect("write src");

        let decision = decide(&snapshot(&src_path, "src.txt"), &temp_dir.path().join("absent"));
        assert!(matches!(decision, SyncDecision::Create));
    }

    #[test]
    fn test_missing_parent_is_create() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("src.txt");
        fs::write(&src_path, b"hello").expect("write src");

        let target = temp_dir.path().join("no/such/dir/src.txt");
        assert!(matches!(
            decide(&snapshot(&src_path, "src.txt"), &target),
            SyncDecision::Create
        ));
    }

    #[test]
    fn test_equal_metadata_is_skip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("a.txt");
        let dst_path = temp_dir.path().join("b.txt");
        fs::write(&src_path, b"same").expect("write src");
        fs::write(&dst_path, b"SAME").expect("write dst");

        let mtime = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src_path, mtime).expect("set src mtime");
        filetime::set_file_mtime(&dst_path, mtime).expect("set dst mtime");
        let perms = fs::metadata(&src_path).expect("src metadata").permissions();
        fs::set_permissions(&dst_path, perms).expect("align permissions");

        let decision = decide(&snapshot(&src_path, "a.txt"), &dst_path);
        assert!(decision.is_skip(), "content is not compared");
    }

    #[test]
    fn test_older_target_is_update() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("config.json");
        let dst_path = temp_dir.path().join("config.copy.json");
        fs::write(&src_path, b"{\"a\":1}").expect("write src");
        fs::write(&dst_path, b"{\"a\":0}").expect("write dst");

        let ten_hours_ago = SystemTime::now() - Duration::from_secs(10 * 3600);
        filetime::set_file_mtime(&dst_path, FileTime::from_system_time(ten_hours_ago))
            .expect("age target");

        let decision = decide(&snapshot(&src_path, "config.json"), &dst_path);
        assert!(matches!(decision, SyncDecision::Update));
    }

    #[test]
    fn test_directory_in_place_of_file_is_update() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("a.txt");
        fs::write(&src_path, b"x").expect("write src");
        let dir_target = temp_dir.path().join("dir");
        fs::create_dir(&dir_target).expect("create dir");

        let decision = decide(&snapshot(&src_path, "a.txt"), &dir_target);
        assert!(matches!(decision, SyncDecision::Update));
    }

    #[test]
    #[cfg(unix)]
    fn test_file_in_place_of_parent_dir_is_inaccessible() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let src_path = temp_dir.path().join("a.txt");
        fs::write(&src_path, b"x").expect("write src");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"i am a file").expect("write blocker");

        // stat("blocker/a.txt") fails with ENOTDIR, not ENOENT
        let decision = decide(&snapshot(&src_path, "a.txt"), &blocker.join("a.txt"));
        assert!(matches!(decision, SyncDecision::Inaccessible(_)));
    }
}
