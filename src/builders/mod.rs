//! Builders to construct the wired application from configuration.

pub mod app_builder;

pub use app_builder::{build_app, App};
