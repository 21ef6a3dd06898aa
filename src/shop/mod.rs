/// Shop image resources
///
/// This module handles:
/// - Deriving image paths from a shop hash and view mode
/// - Reading the hash file written by the shop generator
/// - Listing archived shops
/// - Loading and decoding shop images off the UI thread

pub mod archive;
pub mod hash;
pub mod loader;
pub mod paths;
