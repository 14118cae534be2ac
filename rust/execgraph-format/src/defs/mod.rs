#[allow(clippy::needless_lifetimes)]
#[path = "./graph.fbs.rs"]
pub mod graph;

pub mod dtype_ext;
pub mod owned_ref;
pub mod pair_ext;
pub mod result_ext;

/// Size of the serialized message length prefix.
pub const MESSAGE_LEN_SIZE: usize = 4;

/// Size of the message checksum suffix.
pub const CHECKSUM_SIZE: usize = 4;

/// Minimum possible size of a sealed result message:
/// * payload_len:`u32`
/// * ... // flatbuffer payload
/// * checksum:`u32`
pub const RESULT_MESSAGE_MIN_SIZE: usize = MESSAGE_LEN_SIZE + CHECKSUM_SIZE;

/// Tolerance used by element-wise array comparison unless specified otherwise.
pub const DEFAULT_ARRAY_EPS: f64 = 1e-5;
