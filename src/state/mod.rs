/// State management module
///
/// This module handles all viewer state, including:
/// - Shared data structures (data.rs)
/// - Configuration file and defaults (config.rs)
/// - The mode / fade / lightbox controller (viewer.rs)

pub mod config;
pub mod data;
pub mod viewer;
