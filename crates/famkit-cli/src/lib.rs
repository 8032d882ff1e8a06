//! CLI library components for famkit.

pub mod files;
pub mod logging;
