//! Common utilities for execgraph-cmd

use anyhow::{Context, Result};
use execgraph_bytes::Bytes;
use execgraph_format::result::ResultMessage;
use std::path::Path;

/// Installs the logger. `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Fails with a message naming `role` unless `path` is an existing regular file.
pub fn ensure_input_file(path: &str, role: &str) -> Result<()> {
    let meta = std::fs::metadata(Path::new(path))
        .with_context(|| format!("Cannot access {role} {path}"))?;
    anyhow::ensure!(meta.is_file(), "{role} {path} is not a regular file");
    Ok(())
}

/// Reads a result message from `path`, sealed unless `unframed` is set.
pub fn read_message(path: &str, unframed: bool) -> Result<ResultMessage> {
    ensure_input_file(path, "result message")?;
    let data = std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;
    log::info!("read {} from {path}", message_size(data.len()));
    let message = if unframed {
        ResultMessage::from_unframed(Bytes::from(data))
    } else {
        ResultMessage::new(Bytes::from(data))
    };
    message.with_context(|| format!("Invalid result message: {path}"))
}

/// Renders a message size as bytes below 1 KiB, otherwise in the largest
/// binary unit that keeps the value at or above one.
pub fn message_size(len: usize) -> String {
    const KIB: usize = 1 << 10;
    const MIB: usize = 1 << 20;
    const GIB: usize = 1 << 30;
    match len {
        0..KIB => format!("{len} bytes"),
        KIB..MIB => format!("{:.1} KiB", len as f64 / KIB as f64),
        MIB..GIB => format!("{:.1} MiB", len as f64 / MIB as f64),
        _ => format!("{:.1} GiB", len as f64 / GIB as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_size_units() {
        assert_eq!(message_size(0), "0 bytes");
        assert_eq!(message_size(1023), "1023 bytes");
        assert_eq!(message_size(1536), "1.5 KiB");
        assert_eq!(message_size(3 << 20), "3.0 MiB");
        assert_eq!(message_size(3 << 30), "3.0 GiB");
    }

    #[test]
    fn test_ensure_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("result.bin");
        std::fs::write(&file, b"x").unwrap();
        assert!(ensure_input_file(file.to_str().unwrap(), "result message").is_ok());

        let err = ensure_input_file(dir.path().to_str().unwrap(), "JSON input").unwrap_err();
        assert!(err.to_string().contains("is not a regular file"));
        let missing = dir.path().join("missing");
        let err = ensure_input_file(missing.to_str().unwrap(), "JSON input").unwrap_err();
        assert!(err.to_string().starts_with("Cannot access JSON input"));
    }
}
