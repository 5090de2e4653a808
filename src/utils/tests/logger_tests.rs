//! Tests for the file-backed logger

extern crate std;

use std::fs;

use tempfile::TempDir;

use crate::utils::logger::Logger;

#[test]
fn test_log_writes_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    let logger = Logger::new(&path).unwrap();

    logger.log("first").unwrap();
    logger.log("second").unwrap();

    std::assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn test_batch_summary_lists_failures() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.log");
    let logger = Logger::new(&path).unwrap();

    logger
        .log_batch_summary("rename", 2, &["a.jpg".to_string(), "b.jpg".to_string()])
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    std::assert_eq!(content, "rename: 2 succeeded, 2 failed\n  failed: a.jpg\n  failed: b.jpg\n");
}

#[test]
fn test_disabled_logger_accepts_messages() {
    let logger = Logger::disabled();
    std::assert!(logger.log("ignored").is_ok());
    std::assert!(logger.log_batch_summary("download", 0, &[]).is_ok());
}
