//! Workspace scanning for translation key usage.
pub mod types;
pub mod workspace;
