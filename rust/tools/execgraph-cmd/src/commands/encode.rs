//! Encode command implementation

use std::{fs::File, io::BufReader};

use anyhow::{Context, Result};
use execgraph_format::{defs::graph::FlatResult, result_builder::ResultBuilder};

use crate::utils::{ensure_input_file, message_size};

pub fn run(json_path: String, output: String, unframed: bool) -> Result<()> {
    ensure_input_file(&json_path, "JSON input")?;
    let file = File::open(&json_path).with_context(|| format!("Failed to open {json_path}"))?;
    let result: FlatResult = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse execution result from {json_path}"))?;

    let builder = ResultBuilder::from_owned(result).context("Invalid execution result")?;
    let bytes = if unframed {
        builder.finish_unframed()
    } else {
        builder
            .finish_and_seal()
            .context("Failed to seal execution result")?
            .as_bytes()
            .to_vec()
    };

    std::fs::write(&output, &bytes).with_context(|| format!("Failed to write {output}"))?;
    println!(
        "Encoded {json_path} into {output} ({}{})",
        message_size(bytes.len()),
        if unframed { ", unframed" } else { "" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use execgraph_format::result::ResultMessage;

    use super::*;
    use crate::commands::testing::{path_str, sample_result, write_sample_json};

    #[test]
    fn test_encode_sealed() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_sample_json(dir.path());
        let out = dir.path().join("result.bin");
        run(path_str(&json), path_str(&out), false).unwrap();

        let message = ResultMessage::new(std::fs::read(&out).unwrap().into()).unwrap();
        assert_eq!(message.result().unwrap().to_owned_result().unwrap(), sample_result());
    }

    #[test]
    fn test_encode_unframed() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_sample_json(dir.path());
        let out = dir.path().join("result.fb");
        run(path_str(&json), path_str(&out), true).unwrap();

        let data = std::fs::read(&out).unwrap();
        assert!(ResultMessage::new(data.clone().into()).is_err());
        let message = ResultMessage::from_unframed(data.into()).unwrap();
        assert_eq!(message.result().unwrap().id().unwrap(), 17);
    }

    #[test]
    fn test_encode_rejects_duplicate_variables() {
        let dir = tempfile::tempdir().unwrap();
        let mut result = sample_result();
        let vars = result.variables.as_mut().unwrap();
        vars.push(vars[0].clone());
        let json = dir.path().join("dup.json");
        std::fs::write(&json, serde_json::to_string(&result).unwrap()).unwrap();

        let out = dir.path().join("dup.bin");
        assert!(run(path_str(&json), path_str(&out), false).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_encode_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("bad.json");
        std::fs::write(&json, "{\"id\": \"seventeen\"}").unwrap();
        let out = dir.path().join("bad.bin");
        assert!(run(path_str(&json), path_str(&out), false).is_err());
    }
}
