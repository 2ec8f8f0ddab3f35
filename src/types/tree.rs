//! FileTree - Index of the regular files found under one root

use super::FileEntry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File index for one scanned root
#[derive(Debug, Clone, PartialEq)]
pub struct FileTree {
    /// Map: relative_path → FileEntry
    pub entries: HashMap<PathBuf, FileEntry>,

    /// Aggregate statistics
    pub total_size: u64,
    pub total_files: usize,
    pub total_dirs: usize,

    /// Per-entry errors recorded while scanning (the scan continued past them)
    pub scan_errors: usize,

    /// Scan metadata
    pub scan_duration: Duration,
    pub root_path: PathBuf,
}

impl FileTree {
    /// Create a new empty FileTree
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            entries: HashMap::new(),
            total_size: 0,
            total_files: 0,
            total_dirs: 0,
            scan_errors: 0,
            scan_duration: Duration::from_secs(0),
            root_path,
        }
    }

    /// Insert a file entry into the tree
    ///
    /// Updates aggregate statistics (total_size, total_files).
    /// If the path already exists, the old entry is replaced and statistics are adjusted.
    pub fn insert(&mut self, path: PathBuf, entry: FileEntry) {
        if let Some(old_entry) = self.entries.get(&path) {
            self.total_size = self.total_size.saturating_sub(old_entry.size);
            self.total_files = self.total_files.saturating_sub(1);
        }

        self.total_size += entry.size;
        self.total_files += 1;
        self.entries.insert(path, entry);
    }

    /// Get a file entry by relative path
    pub fn get(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    /// Check if a relative path exists in the tree
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over all entries (path, FileEntry pairs), in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileEntry)> {
        self.entries.iter()
    }

    /// Iterator over just the paths
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }

    /// Called during scanning for every directory traversed
    pub fn increment_dirs(&mut self) {
        self.total_dirs += 1;
    }

    /// Called during scanning for every entry that could not be indexed
    pub fn increment_errors(&mut self) {
        self.scan_errors += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn create_test_entry(name: &str, size: u64) -> FileEntry {
        FileEntry::new(
            PathBuf::from(name),
            size,
            UNIX_EPOCH + Duration::from_secs(1000),
            0o644,
        )
    }

    #[test]
    fn test_new_tree() {
        let root = PathBuf::from("/test/root");
        let tree = FileTree::new(root.clone());

        assert_eq!(tree.root_path, root);
        assert_eq!(tree.total_size, 0);
        assert_eq!(tree.total_files, 0);
        assert_eq!(tree.total_dirs, 0);
        assert_eq!(tree.scan_errors, 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insert_multiple_entries() {
        let mut tree = FileTree::new(PathBuf::from("/root"));

        for (name, size) in [("file1.txt", 100), ("file2.txt", 200), ("dir/file3.txt", 300)] {
            tree.insert(PathBuf::from(name), create_test_entry(name, size));
        }

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.total_files, 3);
        assert_eq!(tree.total_size, 600);
        assert!(tree.contains(Path::new("dir/file3.txt")));
        assert!(!tree.contains(Path::new("file3.txt")));
    }

    #[test]
    fn test_duplicate_insertion_keeps_one_entry_per_path() {
        let mut tree = FileTree::new(PathBuf::from("/root"));
        let path = PathBuf::from("file.txt");

        tree.insert(path.clone(), create_test_entry("file.txt", 1000));
        let replacement = create_test_entry("file.txt", 2000);
        tree.insert(path.clone(), replacement.clone());

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.total_files, 1);
        assert_eq!(tree.total_size, 2000);
        assert_eq!(tree.get(&path), Some(&replacement));
    }

    #[test]
    fn test_paths_iteration() {
        let mut tree = FileTree::new(PathBuf::from("/root"));
        for name in ["a.txt", "b.txt", "c.txt"] {
            tree.insert(PathBuf::from(name), create_test_entry(name, 1));
        }

        let mut paths: Vec<_> = tree.paths().cloned().collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("c.txt")
            ]
        );
        assert_eq!(tree.iter().count(), 3);
    }

    #[test]
    fn test_counters() {
        let mut tree = FileTree::new(PathBuf::from("/root"));

        tree.increment_dirs();
        tree.increment_dirs();
        tree.increment_errors();
        tree.set_scan_duration(Duration::from_millis(1500));

        assert_eq!(tree.total_dirs, 2);
        assert_eq!(tree.scan_errors, 1);
        assert_eq!(tree.scan_duration, Duration::from_millis(1500));
    }
}
