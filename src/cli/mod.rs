//! CLI command implementations

pub mod achievements;
pub mod demo;
pub mod init;
pub mod path;
pub mod report;
