//! Generated code for the execution result format definitions
//! and thin wrappers on top of those.

pub mod checksum;
pub mod defs;
pub mod ndarray;
pub mod result;
pub mod result_builder;
#[cfg(test)]
mod tests;
