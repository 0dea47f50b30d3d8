//! the main application
pub mod cli;
pub mod core;
pub mod logging;

pub use core::TingeApp;
