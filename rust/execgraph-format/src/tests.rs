use execgraph_bytes::Bytes;
use execgraph_common::error::ErrorKind;
use planus::ReadAsRoot;

use crate::{
    defs::graph::{DType, FlatResult, FlatResultRef, FlatVariable, IntPair},
    ndarray::HostArray,
    result::ResultMessage,
    result_builder::{ResultBuilder, TimingBuilder, VariableBuilder},
};

fn sample_builder() -> ResultBuilder {
    let mut builder = ResultBuilder::new(42);
    builder.set_footprints(1 << 20, 3 << 19);
    builder
        .add_variable(
            VariableBuilder::new(1, 0)
                .with_name("input")
                .with_array(HostArray::from_slice(&[2, 2], &[1f32, 2., 3., 4.]).unwrap()),
        )
        .unwrap();
    builder
        .add_variable(
            VariableBuilder::new(2, 1)
                .with_name("logits")
                .with_shape(vec![-1, 10])
                .with_device(1),
        )
        .unwrap();
    builder.add_timing(TimingBuilder::new(1).with_name("input").with_times(15, 10));
    builder.add_timing(TimingBuilder::new(2).with_name("dense").with_times(250, 200));
    builder
}

#[test]
fn test_result_roundtrip() {
    let message = sample_builder().finish_and_seal().unwrap();
    let message = ResultMessage::new(Bytes::copy_from_slice(message.as_bytes())).unwrap();
    let result = message.result().unwrap();

    assert_eq!(result.id().unwrap(), 42);
    assert_eq!(result.footprint_forward().unwrap(), 1 << 20);
    assert_eq!(result.footprint_backward().unwrap(), 3 << 19);
    assert_eq!(result.variable_count().unwrap(), 2);
    assert_eq!(result.timing_count().unwrap(), 2);

    let input = result.variable_at(0).unwrap();
    assert_eq!(input.id().unwrap(), (1, 0));
    assert_eq!(input.name().unwrap(), Some("input"));
    assert_eq!(input.shape().unwrap(), vec![2, 2]);
    assert_eq!(input.device().unwrap(), 0);
    let array = input.to_host_array().unwrap().unwrap();
    assert_eq!(array.to_vec::<f32>().unwrap(), vec![1., 2., 3., 4.]);
    assert_eq!(array.rows(), Some(2));

    let logits = result.find_variable("logits").unwrap().unwrap();
    assert_eq!(logits.id().unwrap(), (2, 1));
    assert_eq!(logits.shape().unwrap(), vec![-1, 10]);
    assert_eq!(logits.device().unwrap(), 1);
    assert!(!logits.has_array().unwrap());
    assert!(logits.to_host_array().unwrap().is_none());

    let timings = result
        .timings()
        .unwrap()
        .collect::<execgraph_common::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(timings.len(), 2);
    assert_eq!(timings[1].node_id().unwrap(), 2);
    assert_eq!(timings[1].name().unwrap(), Some("dense"));
    assert_eq!(timings[1].outer_time().unwrap(), 250);
    assert_eq!(timings[1].inner_time().unwrap(), 200);
    assert_eq!(
        result.total_timing().unwrap(),
        crate::defs::graph::LongPair::new(265, 210)
    );
}

#[test]
fn test_variable_iteration_and_lookup() {
    let result = sample_builder().finish_and_seal().unwrap().result().unwrap();
    let names = result
        .variables()
        .unwrap()
        .map(|var| var.and_then(|var| Ok(var.name()?.map(str::to_string))))
        .collect::<execgraph_common::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(
        names,
        vec![Some("input".to_string()), Some("logits".to_string())]
    );
    assert_eq!(result.variables().unwrap().len(), 2);

    assert!(result.find_variable("missing").unwrap().is_none());
    let by_id = result.find_variable_by_id(1, 0).unwrap().unwrap();
    assert_eq!(by_id.name().unwrap(), Some("input"));
    assert!(result.find_variable_by_id(1, 1).unwrap().is_none());

    let err = result.variable_at(2).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    assert!(result.timing_at(5).is_err());
}

#[test]
fn test_owned_result_matches_builder_output() {
    let expected = sample_builder().finish();
    let message = ResultBuilder::create_result_message(&expected).unwrap();
    let owned = message.result().unwrap().to_owned_result().unwrap();
    assert_eq!(owned, expected);

    let var = message
        .result()
        .unwrap()
        .variable_at(1)
        .unwrap()
        .to_owned_variable()
        .unwrap();
    assert_eq!(&var, &expected.variables.as_ref().unwrap()[1]);
}

#[test]
fn test_empty_result_reads_as_defaults() {
    let message = ResultBuilder::new(0).finish_and_seal().unwrap();
    let result = message.result().unwrap();
    assert_eq!(result.id().unwrap(), 0);
    assert_eq!(result.footprint_forward().unwrap(), 0);
    assert_eq!(result.footprint_backward().unwrap(), 0);
    assert_eq!(result.variable_count().unwrap(), 0);
    assert_eq!(result.timing_count().unwrap(), 0);
    assert_eq!(result.variables().unwrap().count(), 0);
    assert_eq!(
        result.total_timing().unwrap(),
        crate::defs::graph::LongPair::default()
    );
    assert!(result.to_owned_result().unwrap().is_empty());
}

#[test]
fn test_absent_fields_through_raw_create() {
    let mut builder = planus::Builder::new();
    let offset = FlatResult::create(
        &mut builder,
        7i64,
        (),
        (),
        planus::DefaultValue,
        -3i64,
    );
    let bytes = builder.finish(offset, None).to_vec();

    let root = FlatResultRef::read_as_root(&bytes).unwrap();
    assert_eq!(root.id().unwrap(), 7);
    assert!(root.variables().unwrap().is_none());
    assert!(root.timing().unwrap().is_none());
    assert_eq!(root.variables_len().unwrap(), 0);
    assert_eq!(root.footprint_forward().unwrap(), 0);
    assert_eq!(root.footprint_backward().unwrap(), -3);
    assert!(root.variable_at(0).unwrap().is_none());
}

#[test]
fn test_variable_without_id_reads_as_zero() {
    let result = FlatResult {
        variables: Some(vec![FlatVariable {
            name: Some("anonymous".into()),
            ..Default::default()
        }]),
        ..Default::default()
    };
    let message = ResultBuilder::create_result_message(&result).unwrap();
    let var = message.result().unwrap().variable_at(0).unwrap();
    assert_eq!(var.id().unwrap(), (0, 0));
    assert!(var.shape().unwrap().is_empty());

    let result = message.result().unwrap();
    assert!(result.find_variable_by_id(0, 0).unwrap().is_some());
}

#[test]
fn test_unframed_message() {
    let payload = sample_builder().finish_unframed();
    let message = ResultMessage::from_unframed(Bytes::from(payload.clone())).unwrap();
    assert!(!message.is_framed());
    assert_eq!(message.as_bytes(), payload.as_slice());
    assert_eq!(message.result().unwrap().id().unwrap(), 42);

    assert!(ResultMessage::from_unframed(Bytes::from(vec![1u8, 2])).is_err());
}

#[test]
fn test_corrupted_message_is_rejected() {
    let message = sample_builder().finish_and_seal().unwrap();
    let mut bytes = message.as_bytes().to_vec();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0x5a;
    let err = ResultMessage::new(Bytes::from(bytes)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ChecksumMismatch { .. }));

    let truncated = &message.as_bytes()[..message.as_bytes().len() - 3];
    assert!(ResultMessage::new(Bytes::copy_from_slice(truncated)).is_err());
}

#[test]
fn test_big_endian_variable_array() {
    let array = crate::defs::graph::FlatArray {
        shape: Some(vec![3]),
        buffer: Some(
            [1u16, 0x0102, 0xfffe]
                .iter()
                .flat_map(|v| v.to_be_bytes())
                .collect(),
        ),
        dtype: DType::UInt16,
        byte_order: crate::defs::graph::ByteOrder::BigEndian,
    };
    let result = FlatResult {
        variables: Some(vec![FlatVariable {
            id: Some(Box::new(IntPair::new(4, 0))),
            ndarray: Some(Box::new(array)),
            ..Default::default()
        }]),
        ..Default::default()
    };
    let message = ResultBuilder::create_result_message(&result).unwrap();
    let host = message
        .result()
        .unwrap()
        .variable_at(0)
        .unwrap()
        .to_host_array()
        .unwrap()
        .unwrap();
    assert_eq!(host.to_vec::<u16>().unwrap(), vec![1, 0x0102, 0xfffe]);
}

#[test]
fn test_owned_result_serde_json() {
    let expected = sample_builder().finish();
    let json = serde_json::to_string(&expected).unwrap();
    let back: FlatResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expected);

    let minimal: FlatResult = serde_json::from_str(
        r#"{"id":3,"variables":null,"timing":null,"footprint_forward":0,"footprint_backward":0}"#,
    )
    .unwrap();
    assert_eq!(minimal.id, 3);
    assert!(minimal.is_empty());
}

#[test]
fn test_results_are_shareable_across_threads() {
    let result = sample_builder().finish_and_seal().unwrap().result().unwrap();
    let handle = {
        let result = result.clone();
        std::thread::spawn(move || result.variable_count().unwrap())
    };
    assert_eq!(handle.join().unwrap(), 2);
    assert_eq!(result.id().unwrap(), 42);
}

fn read_u16(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes(buf[pos..pos + 2].try_into().unwrap())
}

fn read_u32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes(buf[pos..pos + 4].try_into().unwrap())
}

fn read_i64(buf: &[u8], pos: usize) -> i64 {
    i64::from_le_bytes(buf[pos..pos + 8].try_into().unwrap())
}

/// Returns the root table position and its vtable field offsets.
fn root_vtable_slots(buf: &[u8]) -> (usize, Vec<u16>) {
    let table = read_u32(buf, 0) as usize;
    let soffset = i32::from_le_bytes(buf[table..table + 4].try_into().unwrap());
    let vtable = (table as i64 - soffset as i64) as usize;
    let vtable_size = read_u16(buf, vtable) as usize;
    let slots = (4..vtable_size)
        .step_by(2)
        .map(|pos| read_u16(buf, vtable + pos))
        .collect();
    (table, slots)
}

#[test]
fn test_written_result_field_slots() {
    let mut builder = planus::Builder::new();
    let offset = FlatResult::create(&mut builder, 7i64, (), (), 11i64, 13i64);
    let bytes = builder.finish(offset, None).to_vec();

    let (table, slots) = root_vtable_slots(&bytes);
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[1], 0);
    assert_eq!(slots[2], 0);
    assert_eq!(read_i64(&bytes, table + slots[0] as usize), 7);
    assert_eq!(read_i64(&bytes, table + slots[3] as usize), 11);
    assert_eq!(read_i64(&bytes, table + slots[4] as usize), 13);

    let message = sample_builder().finish_unframed();
    let (table, slots) = root_vtable_slots(&message);
    assert_eq!(slots.len(), 5);
    assert_eq!(read_i64(&message, table + slots[0] as usize), 42);
    // Both collections are offsets to vectors of table offsets.
    let vars_field = table + slots[1] as usize;
    let vars = vars_field + read_u32(&message, vars_field) as usize;
    assert_eq!(read_u32(&message, vars), 2);
    let timing_field = table + slots[2] as usize;
    let timing = timing_field + read_u32(&message, timing_field) as usize;
    assert_eq!(read_u32(&message, timing), 2);
}

#[test]
fn test_hand_built_result_layout() {
    let mut buf = vec![0u8; 88];
    let put_u16 = |buf: &mut Vec<u8>, pos: usize, v: u16| {
        buf[pos..pos + 2].copy_from_slice(&v.to_le_bytes())
    };
    let put_u32 = |buf: &mut Vec<u8>, pos: usize, v: u32| {
        buf[pos..pos + 4].copy_from_slice(&v.to_le_bytes())
    };
    let put_i64 = |buf: &mut Vec<u8>, pos: usize, v: i64| {
        buf[pos..pos + 8].copy_from_slice(&v.to_le_bytes())
    };

    // Root offset to the FlatResult table at 24.
    put_u32(&mut buf, 0, 24);
    // FlatResult vtable at 4: 5 slots, table of 32 bytes.
    for (i, v) in [14u16, 32, 8, 4, 0, 16, 24].into_iter().enumerate() {
        put_u16(&mut buf, 4 + 2 * i, v);
    }
    put_u32(&mut buf, 24, 20);
    // variables: offset from 28 to the vector at 56.
    put_u32(&mut buf, 28, 28);
    put_i64(&mut buf, 32, -9);
    put_i64(&mut buf, 40, 1 << 40);
    put_i64(&mut buf, 48, 77);
    // Vector of one table offset, pointing from 60 to the FlatVariable at 80.
    put_u32(&mut buf, 56, 1);
    put_u32(&mut buf, 60, 20);
    // FlatVariable vtable at 64: only `device` (slot 4) is present.
    for (i, v) in [14u16, 8, 0, 0, 0, 0, 4].into_iter().enumerate() {
        put_u16(&mut buf, 64 + 2 * i, v);
    }
    put_u32(&mut buf, 80, 16);
    put_u32(&mut buf, 84, 3);

    let root = FlatResultRef::read_as_root(&buf).unwrap();
    assert_eq!(root.id().unwrap(), -9);
    assert_eq!(root.footprint_forward().unwrap(), 1 << 40);
    assert_eq!(root.footprint_backward().unwrap(), 77);
    assert!(root.timing().unwrap().is_none());
    assert_eq!(root.variables_len().unwrap(), 1);
    let var = root.variable_at(0).unwrap().unwrap();
    assert_eq!(var.device().unwrap(), 3);
    assert_eq!(var.node_id().unwrap(), 0);
    assert!(var.name().unwrap().is_none());

    let message = ResultMessage::from_unframed(Bytes::from(buf)).unwrap();
    let owned = message.result().unwrap().to_owned_result().unwrap();
    assert_eq!(owned.id, -9);
    assert_eq!(owned.variables.unwrap()[0].device, 3);
}
