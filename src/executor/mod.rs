//! Executor module for file operations

pub mod copy;
pub mod delete;

pub use copy::{copy_file, copy_file_or_create_dirs, Copied};
pub use delete::{delete_missing_files, DeleteStats};
