//! Owned, zero-copy views over serialized execution results.

use execgraph_bytes::Bytes;
use execgraph_common::{Result, error::Error, try_or_ret_some_err};

use crate::{
    checksum::validate_message,
    defs::{
        MESSAGE_LEN_SIZE,
        graph::{self, FlatResultRef, LongPair},
        owned_ref::{ResultView, TimingView, VariableView},
    },
    ndarray::HostArray,
};

/// A serialized execution result, either sealed (length-prefixed and
/// checksummed) or a bare flatbuffer produced by another writer.
#[derive(Clone)]
pub struct ResultMessage {
    /// Complete message as received.
    buf: Bytes,
    /// The flatbuffer part of `buf`.
    payload: Bytes,
    framed: bool,
}

impl ResultMessage {
    /// Creates a `ResultMessage` from a sealed buffer after validating its
    /// length prefix and checksum.
    ///
    /// # Errors
    ///
    /// Returns an error if the framing is invalid or the checksum does not match.
    pub fn new(buf: Bytes) -> Result<ResultMessage> {
        let len = validate_message(&buf)?.len();
        let payload = buf.slice(MESSAGE_LEN_SIZE..MESSAGE_LEN_SIZE + len);
        log::debug!("opened sealed result message, payload {len} bytes");
        Ok(ResultMessage {
            buf,
            payload,
            framed: true,
        })
    }

    /// Wraps a bare flatbuffer that carries no framing.
    ///
    /// Only the root table offset is checked; there is no checksum to verify.
    pub fn from_unframed(payload: Bytes) -> Result<ResultMessage> {
        use planus::ReadAsRoot;

        log::warn!(
            "reading unframed result of {} bytes without checksum validation",
            payload.len()
        );
        FlatResultRef::read_as_root(&payload)
            .map_err(|e| Error::flatbuffer("FlatResult", e))?;
        Ok(ResultMessage {
            buf: payload.clone(),
            payload,
            framed: false,
        })
    }

    /// Opens the root result table.
    pub fn result(&self) -> Result<ExecutionResult> {
        Ok(ExecutionResult(ResultView::read_root(self.payload.clone())?))
    }

    /// The flatbuffer payload without framing.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The complete message bytes, including framing when present.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn is_framed(&self) -> bool {
        self.framed
    }
}

impl std::fmt::Debug for ResultMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultMessage")
            .field("len", &self.buf.len())
            .field("payload_len", &self.payload.len())
            .field("framed", &self.framed)
            .finish()
    }
}

/// The outcome of one executed graph: variables, timings and memory footprints.
///
/// Cloning is cheap; all clones share the underlying message buffer.
#[derive(Clone)]
pub struct ExecutionResult(ResultView);

impl ExecutionResult {
    pub fn id(&self) -> Result<i64> {
        Ok(self.0.view().id()?)
    }

    pub fn footprint_forward(&self) -> Result<i64> {
        Ok(self.0.view().footprint_forward()?)
    }

    pub fn footprint_backward(&self) -> Result<i64> {
        Ok(self.0.view().footprint_backward()?)
    }

    /// Number of variables; an absent collection counts as empty.
    pub fn variable_count(&self) -> Result<usize> {
        self.0.view().variables_len()
    }

    /// Returns the variable at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the record is malformed.
    pub fn variable_at(&self, index: usize) -> Result<Variable> {
        let var = self.0.project::<graph::FlatVariable, _>(|result, _| {
            result
                .variable_at(index)?
                .ok_or_else(|| Error::invalid_arg("index", "variable index out of range"))
        })?;
        Ok(Variable(var))
    }

    /// Iterates over the variables in their serialized order.
    pub fn variables(&self) -> Result<VariableIter> {
        Ok(VariableIter {
            result: self.clone(),
            pos: 0,
            len: self.variable_count()?,
        })
    }

    /// Finds the first variable with the given name.
    pub fn find_variable(&self, name: &str) -> Result<Option<Variable>> {
        self.0
            .view()
            .find_variable(name)?
            .map(|i| self.variable_at(i))
            .transpose()
    }

    /// Finds the variable produced by output `output_index` of node `node_id`.
    pub fn find_variable_by_id(&self, node_id: i32, output_index: i32) -> Result<Option<Variable>> {
        self.0
            .view()
            .find_variable_by_id(node_id, output_index)?
            .map(|i| self.variable_at(i))
            .transpose()
    }

    /// Number of timing records; an absent collection counts as empty.
    pub fn timing_count(&self) -> Result<usize> {
        self.0.view().timing_len()
    }

    /// Returns the timing record at `index`.
    pub fn timing_at(&self, index: usize) -> Result<Timing> {
        let timing = self.0.project::<graph::FlatTiming, _>(|result, _| {
            result
                .timing_at(index)?
                .ok_or_else(|| Error::invalid_arg("index", "timing index out of range"))
        })?;
        Ok(Timing(timing))
    }

    pub fn timings(&self) -> Result<TimingIter> {
        Ok(TimingIter {
            result: self.clone(),
            pos: 0,
            len: self.timing_count()?,
        })
    }

    /// Sum of outer (`first`) and inner (`second`) times over all timing records.
    pub fn total_timing(&self) -> Result<LongPair> {
        self.0.view().total_timing()
    }

    /// Deserializes the whole result into its owned representation.
    pub fn to_owned_result(&self) -> Result<graph::FlatResult> {
        Ok(graph::FlatResult::try_from(self.0.view())?)
    }

    /// Message payload this result is read from.
    pub fn buffer(&self) -> &Bytes {
        self.0.buffer()
    }
}

impl std::fmt::Debug for ExecutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0.view(), f)
    }
}

pub struct VariableIter {
    result: ExecutionResult,
    pos: usize,
    len: usize,
}

impl Iterator for VariableIter {
    type Item = Result<Variable>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let index = self.pos;
        self.pos += 1;
        let var = try_or_ret_some_err!(self.result.variable_at(index));
        Some(Ok(var))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VariableIter {}

pub struct TimingIter {
    result: ExecutionResult,
    pos: usize,
    len: usize,
}

impl Iterator for TimingIter {
    type Item = Result<Timing>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let index = self.pos;
        self.pos += 1;
        let timing = try_or_ret_some_err!(self.result.timing_at(index));
        Some(Ok(timing))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimingIter {}

/// A single output variable of an executed graph.
#[derive(Clone)]
pub struct Variable(VariableView);

impl Variable {
    /// `(node id, output index)` pair identifying the producing node output.
    pub fn id(&self) -> Result<(i32, i32)> {
        Ok((self.node_id()?, self.output_index()?))
    }

    pub fn node_id(&self) -> Result<i32> {
        self.0.view().node_id()
    }

    pub fn output_index(&self) -> Result<i32> {
        self.0.view().output_index()
    }

    pub fn name(&self) -> Result<Option<&str>> {
        Ok(self.0.view().name()?)
    }

    /// Declared shape of the variable, empty when absent.
    pub fn shape(&self) -> Result<Vec<i64>> {
        match self.0.view().shape()? {
            Some(shape) => Ok(shape.to_vec()?),
            None => Ok(Vec::new()),
        }
    }

    pub fn device(&self) -> Result<i32> {
        Ok(self.0.view().device()?)
    }

    pub fn has_array(&self) -> Result<bool> {
        Ok(self.0.view().ndarray()?.is_some())
    }

    /// Copies the variable's array into host memory, if the variable carries one.
    pub fn to_host_array(&self) -> Result<Option<HostArray>> {
        let Some(array) = self.0.view().ndarray()? else {
            return Ok(None);
        };
        let host = HostArray::from_flat_array(array)?;
        log::trace!(
            "variable {:?}: {} array with shape {:?}",
            self.id()?,
            host.dtype(),
            host.shape()
        );
        Ok(Some(host))
    }

    pub fn to_owned_variable(&self) -> Result<graph::FlatVariable> {
        Ok(graph::FlatVariable::try_from(self.0.view())?)
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0.view(), f)
    }
}

/// Elapsed time of one node, in microseconds.
#[derive(Clone)]
pub struct Timing(TimingView);

impl Timing {
    pub fn node_id(&self) -> Result<i32> {
        Ok(self.0.view().id()?)
    }

    pub fn name(&self) -> Result<Option<&str>> {
        Ok(self.0.view().name()?)
    }

    /// Wall time spent in the node, including scheduling overhead.
    pub fn outer_time(&self) -> Result<i64> {
        self.0.view().outer_time()
    }

    /// Time spent inside the op itself.
    pub fn inner_time(&self) -> Result<i64> {
        self.0.view().inner_time()
    }

    pub fn to_owned_timing(&self) -> Result<graph::FlatTiming> {
        Ok(graph::FlatTiming::try_from(self.0.view())?)
    }
}

impl std::fmt::Debug for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0.view(), f)
    }
}
