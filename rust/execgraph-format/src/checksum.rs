//! Framing of sealed result messages.
//!
//! A sealed message is laid out as `payload_len:u32 | payload | checksum:u32`,
//! both integers little-endian. The checksum is the 64-bit xxh3 hash of the
//! payload folded to 32 bits.

use std::io::Write;

use execgraph_common::{error::Error, verify_arg, verify_data};

use crate::defs::{CHECKSUM_SIZE, MESSAGE_LEN_SIZE, RESULT_MESSAGE_MIN_SIZE};

/// Validates a sealed message and returns its payload.
///
/// # Errors
///
/// Returns an error if the message is shorter than the framing overhead, if the
/// length prefix points past the end of the message, or if the checksum does
/// not match.
pub fn validate_message(message: &[u8]) -> execgraph_common::Result<&[u8]> {
    verify_arg!(message, message.len() >= RESULT_MESSAGE_MIN_SIZE);
    let size = read_u32(&message[..MESSAGE_LEN_SIZE]) as usize;
    verify_data!(size, size + RESULT_MESSAGE_MIN_SIZE <= message.len());
    let message = &message[MESSAGE_LEN_SIZE..];
    let payload = &message[..size];
    let checksum = read_u32(&message[size..size + CHECKSUM_SIZE]);
    validate_buffer(payload, checksum, Some("message"))?;
    Ok(payload)
}

/// Validates a buffer by comparing its computed checksum with the provided one.
///
/// `name` identifies the element in the reported error.
pub fn validate_buffer(
    buf: &[u8],
    checksum: u32,
    name: Option<&str>,
) -> execgraph_common::Result<()> {
    use execgraph_common::error::ErrorKind;

    let actual = compute(buf);
    if actual == checksum {
        Ok(())
    } else {
        log::debug!(
            "checksum mismatch for {}: expected {checksum:#010x}, actual {actual:#010x}",
            name.unwrap_or("buffer")
        );
        Err(ErrorKind::ChecksumMismatch {
            element: name.unwrap_or_default().to_string(),
        }
        .into())
    }
}

/// Computes the checksum of `buf`.
pub fn compute(buf: &[u8]) -> u32 {
    let h = xxhash_rust::xxh3::xxh3_64(buf);
    (h as u32) ^ ((h >> 32) as u32)
}

/// Builds a sealed message around `payload`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `payload` does not fit the `u32` length prefix.
pub fn create_message_vec(payload: &[u8]) -> execgraph_common::Result<Vec<u8>> {
    length_prefix(payload.len())?;
    let mut message = Vec::with_capacity(MESSAGE_LEN_SIZE + payload.len() + CHECKSUM_SIZE);
    write_message(payload, &mut message).map_err(|e| Error::io("sealing message", e))?;
    Ok(message)
}

/// Writes a sealed message around `payload` into `writer`.
pub fn write_message<W: Write>(payload: &[u8], writer: &mut W) -> std::io::Result<()> {
    let size = length_prefix(payload.len())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let checksum = compute(payload);

    writer.write_all(&size.to_le_bytes())?;
    writer.write_all(payload)?;
    writer.write_all(&checksum.to_le_bytes())?;

    Ok(())
}

fn length_prefix(payload_len: usize) -> execgraph_common::Result<u32> {
    u32::try_from(payload_len).map_err(|_| {
        Error::invalid_arg(
            "payload",
            format!("{payload_len} bytes do not fit the u32 length prefix"),
        )
    })
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes.try_into().expect("4-byte slice"))
}
