// maskfmt-core/src/engines/mod.rs
//! Implementations of the `ExtractionEngine` trait.
//!
//! Each engine is a separate file within this directory.

pub mod positional_engine;
pub mod regex_engine;
