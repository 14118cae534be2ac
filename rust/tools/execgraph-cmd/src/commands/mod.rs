//! Command implementations for execgraph-cmd

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod verify;

#[cfg(test)]
pub(crate) mod testing {
    use std::path::{Path, PathBuf};

    use execgraph_format::{
        defs::graph::FlatResult,
        ndarray::HostArray,
        result_builder::{ResultBuilder, TimingBuilder, VariableBuilder},
    };

    pub fn sample_result() -> FlatResult {
        let mut builder = ResultBuilder::new(17);
        builder.set_footprints(4096, 2048);
        builder
            .add_variable(
                VariableBuilder::new(1, 0)
                    .with_name("weights")
                    .with_array(HostArray::from_slice(&[3], &[1i32, 2, 3]).unwrap()),
            )
            .unwrap();
        builder
            .add_variable(VariableBuilder::new(2, 0).with_name("output").with_shape(vec![1]))
            .unwrap();
        builder.add_timing(TimingBuilder::new(1).with_name("weights").with_times(40, 30));
        builder.finish()
    }

    pub fn write_sample_json(dir: &Path) -> PathBuf {
        let path = dir.join("result.json");
        std::fs::write(&path, serde_json::to_string(&sample_result()).unwrap()).unwrap();
        path
    }

    pub fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }
}
