//! Library crate root re-exporting the classifier, resolver, config, and runtime modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod runtime;
