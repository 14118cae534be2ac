use ahash::AHashSet;

use execgraph_common::{Result, error::Error};

use crate::{
    checksum,
    defs::graph::{self, IntPair, LongPair},
    ndarray::HostArray,
    result::ResultMessage,
};

/// A builder for an execution result message.
#[derive(Debug, Default)]
pub struct ResultBuilder {
    id: i64,
    variables: Vec<graph::FlatVariable>,
    timing: Vec<graph::FlatTiming>,
    footprint_forward: i64,
    footprint_backward: i64,
    /// `(node id, output index)` of every added variable.
    variable_ids: AHashSet<(i32, i32)>,
}

impl ResultBuilder {
    pub fn new(id: i64) -> ResultBuilder {
        ResultBuilder {
            id,
            ..Default::default()
        }
    }

    /// Creates a builder pre-populated from an owned result.
    ///
    /// # Errors
    ///
    /// Returns an error if two variables of `result` share the same id.
    pub fn from_owned(result: graph::FlatResult) -> Result<ResultBuilder> {
        let mut builder = ResultBuilder::new(result.id);
        builder.set_footprints(result.footprint_forward, result.footprint_backward);
        for var in result.variables.unwrap_or_default() {
            builder.push_variable(var)?;
        }
        builder.timing = result.timing.unwrap_or_default();
        Ok(builder)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_footprints(&mut self, forward: i64, backward: i64) {
        self.footprint_forward = forward;
        self.footprint_backward = backward;
    }

    /// Appends a variable.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if a variable with the same
    /// `(node id, output index)` was already added.
    pub fn add_variable(&mut self, variable: VariableBuilder) -> Result<()> {
        self.push_variable(variable.finish())
    }

    pub fn add_timing(&mut self, timing: TimingBuilder) {
        self.timing.push(timing.finish());
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn timing_count(&self) -> usize {
        self.timing.len()
    }

    /// Finishes the result. Empty collections are left out of the message.
    pub fn finish(self) -> graph::FlatResult {
        graph::FlatResult {
            id: self.id,
            variables: (!self.variables.is_empty()).then_some(self.variables),
            timing: (!self.timing.is_empty()).then_some(self.timing),
            footprint_forward: self.footprint_forward,
            footprint_backward: self.footprint_backward,
        }
    }

    /// Finishes building the result and returns it as a sealed message.
    pub fn finish_and_seal(self) -> Result<ResultMessage> {
        let result = self.finish();
        Self::create_result_message(&result)
    }

    /// Finishes building the result and returns the bare flatbuffer.
    pub fn finish_unframed(self) -> Vec<u8> {
        let result = self.finish();
        Self::create_unframed(&result)
    }

    /// Creates a valid (length-prefixed and checksummed) result message.
    ///
    /// # Errors
    ///
    /// Fails when the serialized result does not fit the `u32` length prefix.
    pub fn create_result_message(result: &graph::FlatResult) -> Result<ResultMessage> {
        let mut builder = planus::Builder::new();
        let fbs = builder.finish(result, None);
        log::debug!(
            "sealing result {}: {} variables, {} timings, {} bytes",
            result.id,
            result.variables.as_ref().map_or(0, Vec::len),
            result.timing.as_ref().map_or(0, Vec::len),
            fbs.len()
        );
        ResultMessage::new(checksum::create_message_vec(fbs)?.into())
    }

    pub fn create_unframed(result: &graph::FlatResult) -> Vec<u8> {
        let mut builder = planus::Builder::new();
        builder.finish(result, None).to_vec()
    }

    fn push_variable(&mut self, variable: graph::FlatVariable) -> Result<()> {
        let id = variable.id.as_deref().map_or((0, 0), |id| (id.first, id.second));
        if !self.variable_ids.insert(id) {
            return Err(Error::invalid_arg(
                "variable",
                format!("duplicate variable id ({}, {})", id.0, id.1),
            ));
        }
        log::trace!("adding variable {id:?} {:?}", variable.name);
        self.variables.push(variable);
        Ok(())
    }
}

/// A builder for a single output variable.
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    node_id: i32,
    output_index: i32,
    name: Option<String>,
    shape: Option<Vec<i64>>,
    array: Option<HostArray>,
    device: i32,
}

impl VariableBuilder {
    pub fn new(node_id: i32, output_index: i32) -> VariableBuilder {
        VariableBuilder {
            node_id,
            output_index,
            name: None,
            shape: None,
            array: None,
            device: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the declared shape. Without it the shape of the attached array is used.
    pub fn with_shape(mut self, shape: impl Into<Vec<i64>>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_array(mut self, array: HostArray) -> Self {
        self.array = Some(array);
        self
    }

    pub fn with_device(mut self, device: i32) -> Self {
        self.device = device;
        self
    }

    pub fn finish(self) -> graph::FlatVariable {
        let shape = self
            .shape
            .or_else(|| self.array.as_ref().map(|array| array.shape().to_vec()));
        graph::FlatVariable {
            id: Some(Box::new(IntPair::new(self.node_id, self.output_index))),
            name: self.name,
            shape,
            ndarray: self.array.map(|array| Box::new(array.to_flat_array())),
            device: self.device,
        }
    }
}

/// A builder for a node timing record.
#[derive(Debug, Clone)]
pub struct TimingBuilder {
    node_id: i32,
    name: Option<String>,
    times: Option<(i64, i64)>,
}

impl TimingBuilder {
    pub fn new(node_id: i32) -> TimingBuilder {
        TimingBuilder {
            node_id,
            name: None,
            times: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the outer (wall) and inner (op) times in microseconds.
    pub fn with_times(mut self, outer: i64, inner: i64) -> Self {
        self.times = Some((outer, inner));
        self
    }

    pub fn finish(self) -> graph::FlatTiming {
        graph::FlatTiming {
            id: self.node_id,
            name: self.name,
            timing: self.times.map(|times| Box::new(LongPair::from(times))),
        }
    }
}

#[cfg(test)]
mod tests {
    use execgraph_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_duplicate_variable_id_is_rejected() {
        let mut builder = ResultBuilder::new(1);
        builder
            .add_variable(VariableBuilder::new(3, 0).with_name("a"))
            .unwrap();
        builder
            .add_variable(VariableBuilder::new(3, 1).with_name("b"))
            .unwrap();
        let err = builder
            .add_variable(VariableBuilder::new(3, 0).with_name("c"))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert_eq!(builder.variable_count(), 2);
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let result = ResultBuilder::new(5).finish();
        assert_eq!(result.id, 5);
        assert!(result.variables.is_none());
        assert!(result.timing.is_none());
        assert!(result.is_empty());
    }

    #[test]
    fn test_variable_shape_defaults_to_array_shape() {
        let array = HostArray::from_slice(&[2, 1], &[1.5f32, 2.5]).unwrap();
        let var = VariableBuilder::new(1, 0).with_array(array.clone()).finish();
        assert_eq!(var.shape.as_deref(), Some(&[2, 1][..]));
        assert_eq!(var.ndarray.as_deref(), Some(&array.to_flat_array()));

        let var = VariableBuilder::new(1, 0)
            .with_shape(vec![2])
            .with_array(array)
            .finish();
        assert_eq!(var.shape.as_deref(), Some(&[2][..]));
    }

    #[test]
    fn test_timing_builder() {
        let timing = TimingBuilder::new(7).with_name("matmul").with_times(120, 95).finish();
        assert_eq!(timing.id, 7);
        assert_eq!(timing.name.as_deref(), Some("matmul"));
        assert_eq!(timing.timing.as_deref(), Some(&LongPair::new(120, 95)));

        let timing = TimingBuilder::new(8).finish();
        assert!(timing.timing.is_none());
    }

    #[test]
    fn test_from_owned_checks_duplicates() {
        let var = VariableBuilder::new(2, 2).finish();
        let result = graph::FlatResult {
            id: 9,
            variables: Some(vec![var.clone(), var]),
            ..Default::default()
        };
        assert!(ResultBuilder::from_owned(result).is_err());

        let result = graph::FlatResult {
            id: 9,
            variables: Some(vec![VariableBuilder::new(2, 2).finish()]),
            timing: Some(vec![TimingBuilder::new(2).finish()]),
            footprint_forward: 10,
            footprint_backward: 20,
        };
        let builder = ResultBuilder::from_owned(result.clone()).unwrap();
        assert_eq!(builder.id(), 9);
        assert_eq!(builder.timing_count(), 1);
        assert_eq!(builder.finish(), result);
    }

    #[test]
    fn test_seal_and_unframed_share_payload() {
        let mut builder = ResultBuilder::new(11);
        builder.add_timing(TimingBuilder::new(1).with_times(3, 2));
        let result = builder.finish();

        let sealed = ResultBuilder::create_result_message(&result).unwrap();
        let unframed = ResultBuilder::create_unframed(&result);
        assert!(sealed.is_framed());
        assert_eq!(sealed.payload(), unframed.as_slice());
        assert_eq!(sealed.as_bytes().len(), unframed.len() + 8);
    }
}
