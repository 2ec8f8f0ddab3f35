//! Tests for staged file copy operations

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use treesync::executor::{copy_file, copy_file_or_create_dirs};
use treesync::logger::MemoryLogger;
use treesync::types::Transfer;

fn create_test_file(path: &Path, content: &[u8]) {
    let mut file = fs::File::create(path).expect("Failed to create test file");
    file.write_all(content).expect("Failed to write test content");
    file.flush().expect("Failed to flush");
}

fn set_file_mtime(path: &Path, mtime: SystemTime) {
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(path, filetime_mtime).expect("Failed to set mtime");
}

#[test]
fn test_copy_basic_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    let content = b"Hello, treesync! This is a test file.";
    create_test_file(&src_path, content);

    let dest_path = root.join("dest.txt");
    let mut logger = MemoryLogger::new();

    let copied = copy_file(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy_file should succeed");

    assert_eq!(copied.bytes, content.len() as u64);
    assert_eq!(fs::read(&dest_path).expect("Failed to read dest file"), content);
}

#[test]
fn test_copy_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("testfile.txt");
    create_test_file(&src_path, b"file content");

    let dest_path = root.join("target/sub/folder/testfile.txt");
    let mut logger = MemoryLogger::new();

    copy_file_or_create_dirs(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy should create parent directories");

    assert!(root.join("target/sub/folder").is_dir());
    let metadata = fs::metadata(&dest_path).expect("copied file should exist");
    assert_eq!(metadata.len(), 12);
}

#[test]
fn test_copy_preserves_mtime() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    create_test_file(&src_path, b"test content");
    set_file_mtime(&src_path, SystemTime::now() - Duration::from_secs(3600));

    let dest_path = root.join("dest.txt");
    let mut logger = MemoryLogger::new();

    copy_file(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy_file should succeed");

    let src_mtime = fs::metadata(&src_path)
        .and_then(|m| m.modified())
        .expect("Failed to get src mtime");
    let dest_mtime = fs::metadata(&dest_path)
        .and_then(|m| m.modified())
        .expect("Failed to get dest mtime");

    assert_eq!(
        treesync::diff::truncate_to_second(src_mtime),
        treesync::diff::truncate_to_second(dest_mtime),
        "mtime should be preserved to the second"
    );
}

#[test]
fn test_copy_large_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("large.bin");
    let size = 1024 * 1024;
    let content: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
    create_test_file(&src_path, &content);

    let dest_path = root.join("large_copy.bin");
    let mut logger = MemoryLogger::new();

    let copied = copy_file(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy_file should handle large files");

    assert_eq!(copied.bytes, size as u64);
    assert_eq!(fs::read(&dest_path).expect("Failed to read dest file"), content);
}

#[test]
fn test_copy_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("empty");
    create_test_file(&src_path, b"");

    let dest_path = root.join("empty_copy");
    let mut logger = MemoryLogger::new();

    let copied = copy_file(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy_file should handle empty files");

    assert_eq!(copied.bytes, 0);
    assert!(dest_path.exists());
}

#[test]
#[cfg(unix)]
fn test_copy_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("script.sh");
    create_test_file(&src_path, b"#!/bin/sh\necho hi\n");
    fs::set_permissions(&src_path, fs::Permissions::from_mode(0o755))
        .expect("Failed to set permissions");

    let dest_path = root.join("script_copy.sh");
    let mut logger = MemoryLogger::new();

    copy_file(&src_path, &dest_path, Transfer::Create, &mut logger)
        .expect("copy_file should succeed");

    let src_mode = fs::metadata(&src_path).expect("src metadata").permissions().mode();
    let dest_mode = fs::metadata(&dest_path).expect("dest metadata").permissions().mode();
    assert_eq!(src_mode, dest_mode, "Permissions should be preserved");
    assert_eq!(logger.warnings().count(), 0);
}
