//! podctl - interactive pod shell picker for Kubernetes

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod prompt;
pub mod wizard;
