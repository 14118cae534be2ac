//! Verify command implementation

use anyhow::{Context, Result};
use execgraph_format::{result::ResultMessage, result_builder::ResultBuilder};

use crate::utils::{message_size, read_message};

#[derive(Debug, Default, PartialEq, Eq)]
struct VerifyReport {
    variables: usize,
    arrays: usize,
    timings: usize,
}

pub fn run(input: String, unframed: bool) -> Result<()> {
    let message = read_message(&input, unframed)?;
    let report = verify_message(&message)?;
    println!(
        "OK: {input} ({}): {} variables ({} with arrays), {} timings",
        message_size(message.as_bytes().len()),
        report.variables,
        report.arrays,
        report.timings
    );
    Ok(())
}

/// Reads every record of the message and re-checks the variable id uniqueness.
fn verify_message(message: &ResultMessage) -> Result<VerifyReport> {
    let result = message.result().context("Failed to open execution result")?;
    let mut report = VerifyReport::default();

    for (index, var) in result.variables()?.enumerate() {
        let var = var.with_context(|| format!("Variable {index} is malformed"))?;
        var.id()
            .and_then(|_| var.name())
            .and_then(|_| var.shape())
            .and_then(|_| var.device())
            .with_context(|| format!("Variable {index} is malformed"))?;
        if var
            .to_host_array()
            .with_context(|| format!("Array of variable {index} is invalid"))?
            .is_some()
        {
            report.arrays += 1;
        }
        report.variables += 1;
    }

    for (index, timing) in result.timings()?.enumerate() {
        let timing = timing.with_context(|| format!("Timing {index} is malformed"))?;
        timing
            .name()
            .and_then(|_| timing.outer_time())
            .and_then(|_| timing.inner_time())
            .with_context(|| format!("Timing {index} is malformed"))?;
        report.timings += 1;
    }

    let owned = result.to_owned_result()?;
    ResultBuilder::from_owned(owned).context("Execution result is inconsistent")?;
    log::debug!("verified {report:?}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use execgraph_format::defs::graph::{DType, FlatArray, FlatResult, FlatVariable, IntPair};

    use super::*;
    use crate::commands::testing::{path_str, sample_result};

    #[test]
    fn test_verify_valid_message() {
        let message = ResultBuilder::create_result_message(&sample_result()).unwrap();
        let report = verify_message(&message).unwrap();
        assert_eq!(
            report,
            VerifyReport {
                variables: 2,
                arrays: 1,
                timings: 1
            }
        );
    }

    #[test]
    fn test_verify_rejects_bad_array_length() {
        let result = FlatResult {
            variables: Some(vec![FlatVariable {
                id: Some(Box::new(IntPair::new(1, 0))),
                ndarray: Some(Box::new(FlatArray {
                    shape: Some(vec![4]),
                    buffer: Some(vec![0; 6]),
                    dtype: DType::Float,
                    ..Default::default()
                })),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let message = ResultBuilder::create_result_message(&result).unwrap();
        assert!(verify_message(&message).is_err());
    }

    #[test]
    fn test_verify_rejects_duplicate_ids() {
        let var = FlatVariable {
            id: Some(Box::new(IntPair::new(5, 1))),
            ..Default::default()
        };
        let result = FlatResult {
            variables: Some(vec![var.clone(), var]),
            ..Default::default()
        };
        let message = ResultBuilder::create_result_message(&result).unwrap();
        assert!(verify_message(&message).is_err());
    }

    #[test]
    fn test_verify_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("result.bin");
        let mut bytes = ResultBuilder::create_result_message(&sample_result()).unwrap()
            .as_bytes()
            .to_vec();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        std::fs::write(&input, bytes).unwrap();
        assert!(run(path_str(&input), false).is_err());
    }
}
