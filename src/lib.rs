//! tinge loads, validates and resolves utility-CSS theme configurations
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod macros;
pub mod palette;
pub mod resolve;
