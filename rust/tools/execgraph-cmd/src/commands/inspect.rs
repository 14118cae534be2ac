//! Inspect command implementation

use anyhow::{Context, Result};
use execgraph_format::{
    ndarray::HostArray,
    result::{ResultMessage, Timing, Variable},
};
use serde::Serialize;

use crate::utils::read_message;

#[derive(Serialize)]
struct InspectSummary {
    message: MessageInfo,
    id: i64,
    footprint_forward: i64,
    footprint_backward: i64,
    variable_count: usize,
    timing_count: usize,
    total_timing: TimingTotals,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    variables: Vec<VariableInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    timings: Vec<TimingInfo>,
}

#[derive(Serialize)]
struct MessageInfo {
    size: u64,
    payload_size: u64,
    framed: bool,
}

#[derive(Serialize)]
struct TimingTotals {
    outer: i64,
    inner: i64,
}

#[derive(Serialize)]
struct VariableInfo {
    index: usize,
    node_id: i32,
    output_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    shape: Vec<i64>,
    device: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    array: Option<ArrayInfo>,
}

#[derive(Serialize)]
struct ArrayInfo {
    dtype: String,
    shape: Vec<i64>,
    length: usize,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ArrayStats>,
}

#[derive(Serialize)]
struct ArrayStats {
    sum: f64,
    mean: f64,
}

#[derive(Serialize)]
struct TimingInfo {
    index: usize,
    node_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    outer: i64,
    inner: i64,
}

pub fn run(verbose: u8, input: String, unframed: bool) -> Result<()> {
    println!("Inspecting result message: {input}");
    let message = read_message(&input, unframed)?;
    let summary = create_summary(&message, verbose)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn create_summary(message: &ResultMessage, verbose: u8) -> Result<InspectSummary> {
    let result = message.result().context("Failed to open execution result")?;
    let total = result.total_timing()?;

    let mut variables = Vec::new();
    let mut timings = Vec::new();
    if verbose > 0 {
        for (index, var) in result.variables()?.enumerate() {
            let var = var.with_context(|| format!("Failed to read variable {index}"))?;
            variables.push(create_variable_info(index, &var, verbose)?);
        }
        for (index, timing) in result.timings()?.enumerate() {
            let timing = timing.with_context(|| format!("Failed to read timing {index}"))?;
            timings.push(create_timing_info(index, &timing)?);
        }
    }

    Ok(InspectSummary {
        message: MessageInfo {
            size: message.as_bytes().len() as u64,
            payload_size: message.payload().len() as u64,
            framed: message.is_framed(),
        },
        id: result.id()?,
        footprint_forward: result.footprint_forward()?,
        footprint_backward: result.footprint_backward()?,
        variable_count: result.variable_count()?,
        timing_count: result.timing_count()?,
        total_timing: TimingTotals {
            outer: total.first,
            inner: total.second,
        },
        variables,
        timings,
    })
}

fn create_variable_info(index: usize, var: &Variable, verbose: u8) -> Result<VariableInfo> {
    let array = var
        .to_host_array()
        .with_context(|| format!("Failed to read array of variable {index}"))?
        .map(|array| create_array_info(&array, verbose));
    Ok(VariableInfo {
        index,
        node_id: var.node_id()?,
        output_index: var.output_index()?,
        name: var.name()?.map(str::to_string),
        shape: var.shape()?,
        device: var.device()?,
        array,
    })
}

fn create_array_info(array: &HostArray, verbose: u8) -> ArrayInfo {
    // Element types without a numeric reading (quantized, packed) get no stats.
    let stats = if verbose > 1 {
        match (array.sum_f64(), array.mean_f64()) {
            (Ok(sum), Ok(mean)) => Some(ArrayStats { sum, mean }),
            _ => None,
        }
    } else {
        None
    };
    ArrayInfo {
        dtype: array.dtype().to_string(),
        shape: array.shape().to_vec(),
        length: array.length(),
        size: array.data().len(),
        stats,
    }
}

fn create_timing_info(index: usize, timing: &Timing) -> Result<TimingInfo> {
    Ok(TimingInfo {
        index,
        node_id: timing.node_id()?,
        name: timing.name()?.map(str::to_string),
        outer: timing.outer_time()?,
        inner: timing.inner_time()?,
    })
}

#[cfg(test)]
mod tests {
    use execgraph_format::result_builder::ResultBuilder;

    use super::*;
    use crate::commands::testing::{path_str, sample_result};

    #[test]
    fn test_summary_counts() {
        let message = ResultBuilder::create_result_message(&sample_result()).unwrap();
        let summary = create_summary(&message, 0).unwrap();
        assert_eq!(summary.id, 17);
        assert_eq!(summary.footprint_forward, 4096);
        assert_eq!(summary.footprint_backward, 2048);
        assert_eq!(summary.variable_count, 2);
        assert_eq!(summary.timing_count, 1);
        assert_eq!(summary.total_timing.outer, 40);
        assert!(summary.message.framed);
        assert_eq!(summary.message.size, summary.message.payload_size + 8);
        assert!(summary.variables.is_empty());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("variables").is_none());
    }

    #[test]
    fn test_verbose_summary_details() {
        let message = ResultBuilder::create_result_message(&sample_result()).unwrap();
        let summary = create_summary(&message, 2).unwrap();
        assert_eq!(summary.variables.len(), 2);
        assert_eq!(summary.timings.len(), 1);

        let weights = &summary.variables[0];
        assert_eq!(weights.name.as_deref(), Some("weights"));
        let array = weights.array.as_ref().unwrap();
        assert_eq!(array.dtype, "Int32");
        assert_eq!(array.length, 3);
        assert_eq!(array.size, 12);
        let stats = array.stats.as_ref().unwrap();
        assert_eq!(stats.sum, 6.0);
        assert_eq!(stats.mean, 2.0);

        assert!(summary.variables[1].array.is_none());
        assert_eq!(summary.timings[0].inner, 30);
    }

    #[test]
    fn test_run_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("result.bin");
        std::fs::write(
            &input,
            ResultBuilder::create_result_message(&sample_result()).unwrap().as_bytes(),
        )
        .unwrap();
        run(1, path_str(&input), false).unwrap();
        assert!(run(0, path_str(&dir.path().join("missing.bin")), false).is_err());
    }
}
