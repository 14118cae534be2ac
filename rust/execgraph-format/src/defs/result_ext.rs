//! Extension methods for the result, variable and timing records.
//!
//! The generated getters report an absent vector field as `None`. A reader of the
//! result format treats absence and emptiness the same way, so these helpers fold
//! the two cases together.

use execgraph_common::Result;

use super::graph::{FlatResult, FlatResultRef, FlatTimingRef, FlatVariableRef, LongPair};

impl<'a> FlatResultRef<'a> {
    /// Number of variable records, `0` when the field is absent.
    pub fn variables_len(&self) -> Result<usize> {
        Ok(self.variables()?.map_or(0, |vars| vars.len()))
    }

    /// Number of timing records, `0` when the field is absent.
    pub fn timing_len(&self) -> Result<usize> {
        Ok(self.timing()?.map_or(0, |timing| timing.len()))
    }

    /// Returns the variable at `index`, or `None` when the index is out of range
    /// or the field is absent.
    pub fn variable_at(&self, index: usize) -> Result<Option<FlatVariableRef<'a>>> {
        match self.variables()? {
            Some(vars) => Ok(vars.get(index).transpose()?),
            None => Ok(None),
        }
    }

    /// Returns the timing record at `index`, or `None` when the index is out of range
    /// or the field is absent.
    pub fn timing_at(&self, index: usize) -> Result<Option<FlatTimingRef<'a>>> {
        match self.timing()? {
            Some(timing) => Ok(timing.get(index).transpose()?),
            None => Ok(None),
        }
    }

    /// Finds the position of the first variable with the given symbolic name.
    pub fn find_variable(&self, name: &str) -> Result<Option<usize>> {
        let Some(vars) = self.variables()? else {
            return Ok(None);
        };
        for (i, var) in vars.iter().enumerate() {
            if var?.name()? == Some(name) {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Finds the position of the variable produced by output `output_index`
    /// of node `node_id`.
    pub fn find_variable_by_id(&self, node_id: i32, output_index: i32) -> Result<Option<usize>> {
        let Some(vars) = self.variables()? else {
            return Ok(None);
        };
        for (i, var) in vars.iter().enumerate() {
            let var = var?;
            if var.node_id()? == node_id && var.output_index()? == output_index {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Sums outer (`first`) and inner (`second`) times over all timing records.
    pub fn total_timing(&self) -> Result<LongPair> {
        let mut total = LongPair::default();
        if let Some(timing) = self.timing()? {
            for record in timing.iter() {
                let record = record?;
                total.first = total.first.saturating_add(record.outer_time()?);
                total.second = total.second.saturating_add(record.inner_time()?);
            }
        }
        Ok(total)
    }
}

impl FlatVariableRef<'_> {
    /// Id of the node that produced the variable, `0` when absent.
    pub fn node_id(&self) -> Result<i32> {
        match self.id()? {
            Some(id) => Ok(id.first()?),
            None => Ok(0),
        }
    }

    /// Output index of the producing node, `0` when absent.
    pub fn output_index(&self) -> Result<i32> {
        match self.id()? {
            Some(id) => Ok(id.second()?),
            None => Ok(0),
        }
    }
}

impl FlatTimingRef<'_> {
    /// Outer (wall) time in microseconds, `0` when absent.
    pub fn outer_time(&self) -> Result<i64> {
        match self.timing()? {
            Some(timing) => Ok(timing.first()?),
            None => Ok(0),
        }
    }

    /// Inner (op) time in microseconds, `0` when absent.
    pub fn inner_time(&self) -> Result<i64> {
        match self.timing()? {
            Some(timing) => Ok(timing.second()?),
            None => Ok(0),
        }
    }
}

impl FlatResult {
    /// Returns `true` if the result carries neither variables nor timing records.
    pub fn is_empty(&self) -> bool {
        self.variables.as_ref().is_none_or(|vars| vars.is_empty())
            && self.timing.as_ref().is_none_or(|timing| timing.is_empty())
    }
}
