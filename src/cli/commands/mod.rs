//! Command implementations for the stage-guard CLI

pub mod check;
pub mod config;
pub mod install;
pub mod uninstall;
pub mod version;
