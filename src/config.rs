//! configuration stuff
pub mod instance;
pub mod options;
pub mod validate;
