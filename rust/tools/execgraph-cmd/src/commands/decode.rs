//! Decode command implementation

use anyhow::{Context, Result};

use crate::utils::read_message;

pub fn run(input: String, output: Option<String>, unframed: bool) -> Result<()> {
    let json = decode_to_json(&input, unframed)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("Failed to write {path}"))?;
            println!("Decoded {input} into {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn decode_to_json(input: &str, unframed: bool) -> Result<String> {
    let message = read_message(input, unframed)?;
    let result = message
        .result()
        .and_then(|result| result.to_owned_result())
        .context("Failed to decode execution result")?;
    Ok(serde_json::to_string_pretty(&result)?)
}

#[cfg(test)]
mod tests {
    use execgraph_format::{defs::graph::FlatResult, result_builder::ResultBuilder};

    use super::*;
    use crate::commands::testing::{path_str, sample_result};

    #[test]
    fn test_decode_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("result.bin");
        std::fs::write(
            &input,
            ResultBuilder::create_result_message(&sample_result()).unwrap().as_bytes(),
        )
        .unwrap();

        let out = dir.path().join("result.json");
        run(path_str(&input), Some(path_str(&out)), false).unwrap();
        let decoded: FlatResult =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(decoded, sample_result());
    }

    #[test]
    fn test_decode_unframed_requires_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("result.fb");
        std::fs::write(&input, ResultBuilder::create_unframed(&sample_result())).unwrap();

        let json = decode_to_json(&path_str(&input), true).unwrap();
        assert!(json.contains("\"weights\""));
        assert!(decode_to_json(&path_str(&input), false).is_err());
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(path_str(&dir.path().join("none.bin")), None, false).is_err());
    }
}
