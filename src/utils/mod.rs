//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and file helpers used
//! throughout the application.

pub mod logger;
pub mod progress;
pub mod file_utils;

#[cfg(test)]
mod tests;
