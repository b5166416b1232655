//! Core utilities for the FPL season CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching of downloaded dataset files
//! - `http`: HTTP client and raw file fetching

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{dataset_cache_path, try_read_to_string, write_string};
pub use http::{fetch_text, http_client, DEFAULT_BASE_URL};
