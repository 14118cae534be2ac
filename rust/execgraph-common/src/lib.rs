//! Core definitions (errors and result helpers) shared by all execgraph-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
