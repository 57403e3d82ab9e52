//! Command implementations

pub mod exec;
pub mod shell;

pub use exec::*;
pub use shell::*;
