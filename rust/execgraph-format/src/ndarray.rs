//! Host-side n-dimensional arrays and their conversion to and from the
//! serialized `FlatArray` table.
//!
//! A [`HostArray`] always keeps its elements in little-endian byte order and
//! C (row-major) layout. Arrays serialized in big-endian order are normalized
//! when they are read.

use execgraph_bytes::{Bytes, BytesMut};
use execgraph_common::{Result, error::Error, verify_arg};

use crate::defs::{
    DEFAULT_ARRAY_EPS,
    graph::{ByteOrder, DType, FlatArray, FlatArrayRef},
};

/// Element types that can be stored in a [`HostArray`] and accessed as typed slices.
pub trait Element: bytemuck::Pod {
    const DTYPE: DType;

    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($ty:ty, $dtype:ident, $v:ident => $conv:expr) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                let $v = self;
                $conv
            }
        }
    };
}

impl_element!(f32, Float, v => v as f64);
impl_element!(f64, Double, v => v);
impl_element!(i8, Int8, v => v as f64);
impl_element!(i16, Int16, v => v as f64);
impl_element!(i32, Int32, v => v as f64);
impl_element!(i64, Int64, v => v as f64);
impl_element!(u8, UInt8, v => v as f64);
impl_element!(u16, UInt16, v => v as f64);
impl_element!(u32, UInt32, v => v as f64);
impl_element!(u64, UInt64, v => v as f64);
impl_element!(half::f16, Half, v => v.to_f64());
impl_element!(half::bf16, BFloat16, v => v.to_f64());

/// A dense array held in host memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostArray {
    shape: Vec<i64>,
    dtype: DType,
    data: Bytes,
}

impl HostArray {
    /// Creates an array over little-endian element bytes.
    ///
    /// # Errors
    ///
    /// Fails if `dtype` has no storage size, if any dimension is negative or
    /// does not fit the serialized `int` shape, or if `data` does not hold
    /// exactly `length * element size` bytes.
    pub fn new(dtype: DType, shape: Vec<i64>, data: Bytes) -> Result<HostArray> {
        let elem_size = element_size(dtype)?;
        verify_arg!(
            shape,
            shape
                .iter()
                .all(|&dim| (0..=i32::MAX as i64).contains(&dim))
        );
        let length = shape_length(&shape)?;
        let expected = length
            .checked_mul(elem_size)
            .ok_or_else(|| Error::invalid_arg("shape", "array byte size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_arg(
                "data",
                format!(
                    "expected {expected} bytes for {length} {dtype} elements, got {}",
                    data.len()
                ),
            ));
        }
        Ok(HostArray { shape, dtype, data })
    }

    /// Creates an array of the given shape from typed values.
    pub fn from_slice<T: Element>(shape: &[i64], values: &[T]) -> Result<HostArray> {
        let mut data = BytesMut::with_capacity(std::mem::size_of_val(values));
        data.extend_from_typed_slice(values);
        if cfg!(target_endian = "big") {
            swap_units(&mut data, std::mem::size_of::<T>());
        }
        HostArray::new(T::DTYPE, shape.to_vec(), data.into_bytes())
    }

    /// Creates a rank-0 array holding a single value.
    pub fn scalar<T: Element>(value: T) -> HostArray {
        let mut data = BytesMut::with_capacity(std::mem::size_of::<T>());
        data.extend_from_typed_slice(&[value]);
        if cfg!(target_endian = "big") {
            swap_units(&mut data, std::mem::size_of::<T>());
        }
        HostArray {
            shape: Vec::new(),
            dtype: T::DTYPE,
            data: data.into_bytes(),
        }
    }

    /// Creates a zero-filled array.
    pub fn zeros(dtype: DType, shape: &[i64]) -> Result<HostArray> {
        let elem_size = element_size(dtype)?;
        let length = shape_length(shape)?;
        // Allocations are capped at `isize::MAX` bytes.
        let size = length
            .checked_mul(elem_size)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or_else(|| Error::invalid_arg("shape", "array byte size overflows usize"))?;
        let data = BytesMut::zeroed(size).into_bytes();
        HostArray::new(dtype, shape.to_vec(), data)
    }

    /// Copies the contents of a serialized array.
    ///
    /// An absent shape reads as a rank-0 array and an absent buffer as empty data.
    /// Big-endian buffers are converted to little-endian.
    pub fn from_flat_array(array: FlatArrayRef<'_>) -> Result<HostArray> {
        let dtype = array.dtype()?;
        let byte_order = array.byte_order()?;
        let shape = match array.shape()? {
            Some(shape) => shape.iter().map(i64::from).collect::<Vec<_>>(),
            None => Vec::new(),
        };
        let buffer = array.buffer()?.unwrap_or_default();

        let data = if byte_order == ByteOrder::LittleEndian {
            Bytes::copy_from_slice(buffer)
        } else {
            log::warn!(
                "converting big-endian {dtype} array of {} bytes to little-endian",
                buffer.len()
            );
            let mut data = BytesMut::with_capacity(buffer.len());
            data.extend_from_slice(buffer);
            swap_units(&mut data, dtype.swap_unit().unwrap_or(1));
            data.into_bytes()
        };
        HostArray::new(dtype, shape, data)
    }

    /// Converts the array into its serialized form, always in little-endian order.
    pub fn to_flat_array(&self) -> FlatArray {
        FlatArray {
            shape: Some(self.shape.iter().map(|&dim| dim as i32).collect()),
            buffer: Some(self.data.to_vec()),
            dtype: self.dtype,
            byte_order: ByteOrder::LittleEndian,
        }
    }

    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Raw little-endian element bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements; a rank-0 array holds one.
    pub fn length(&self) -> usize {
        self.shape.iter().map(|&dim| dim as usize).product()
    }

    /// First dimension of a rank-2 array.
    pub fn rows(&self) -> Option<i64> {
        self.is_matrix().then(|| self.shape[0])
    }

    /// Second dimension of a rank-2 array.
    pub fn columns(&self) -> Option<i64> {
        self.is_matrix().then(|| self.shape[1])
    }

    pub fn is_scalar(&self) -> bool {
        self.length() == 1 && self.shape.iter().all(|&dim| dim == 1)
    }

    /// A rank-1 array, or a rank-2 array with a single row or column.
    pub fn is_vector(&self) -> bool {
        match self.shape.as_slice() {
            [_] => true,
            [rows, cols] => *rows == 1 || *cols == 1,
            _ => false,
        }
    }

    pub fn is_matrix(&self) -> bool {
        self.shape.len() == 2
    }

    /// Arrays have the same shape when ranks and all dimensions are equal.
    pub fn is_same_shape(&self, other: &HostArray) -> bool {
        self.shape == other.shape
    }

    /// Borrows the elements as a typed slice when the buffer alignment permits.
    pub fn as_slice<T: Element>(&self) -> Result<Option<&[T]>> {
        self.verify_element_type::<T>()?;
        if cfg!(target_endian = "big") && std::mem::size_of::<T>() > 1 {
            return Ok(None);
        }
        Ok(self.data.typed_data::<T>())
    }

    /// Copies the elements out as typed values.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.verify_element_type::<T>()?;
        Ok(self
            .data
            .chunks_exact(std::mem::size_of::<T>())
            .map(read_le::<T>)
            .collect())
    }

    /// Reads the element at linear `index` widened to `f64`.
    pub fn value_at_f64(&self, index: usize) -> Result<f64> {
        verify_arg!(index, index < self.length());
        let size = element_size(self.dtype)?;
        let bytes = &self.data[index * size..(index + 1) * size];
        let value = match self.dtype {
            DType::Bool => (bytes[0] != 0) as u8 as f64,
            DType::Float => read_le::<f32>(bytes).to_f64(),
            DType::Double => read_le::<f64>(bytes),
            DType::Half => read_le::<half::f16>(bytes).to_f64(),
            DType::BFloat16 => read_le::<half::bf16>(bytes).to_f64(),
            DType::Int8 => read_le::<i8>(bytes).to_f64(),
            DType::Int16 => read_le::<i16>(bytes).to_f64(),
            DType::Int32 => read_le::<i32>(bytes).to_f64(),
            DType::Int64 => read_le::<i64>(bytes).to_f64(),
            DType::UInt8 => read_le::<u8>(bytes).to_f64(),
            DType::UInt16 => read_le::<u16>(bytes).to_f64(),
            DType::UInt32 => read_le::<u32>(bytes).to_f64(),
            DType::UInt64 => read_le::<u64>(bytes).to_f64(),
            DType::Inherit | DType::Float8 | DType::Half2 | DType::QInt8 | DType::QInt16 => {
                return Err(Error::unsupported_data_type(
                    self.dtype.name(),
                    "element access",
                ));
            }
        };
        Ok(value)
    }

    /// Sum of all elements.
    pub fn sum_f64(&self) -> Result<f64> {
        let mut sum = 0f64;
        for i in 0..self.length() {
            sum += self.value_at_f64(i)?;
        }
        Ok(sum)
    }

    /// Mean of all elements, `NaN` for an empty array.
    pub fn mean_f64(&self) -> Result<f64> {
        Ok(self.sum_f64()? / self.length() as f64)
    }

    /// Element-wise comparison within `eps`; arrays of different shape are never equal.
    pub fn equals_to(&self, other: &HostArray, eps: f64) -> Result<bool> {
        if !self.is_same_shape(other) {
            return Ok(false);
        }
        for i in 0..self.length() {
            let a = self.value_at_f64(i)?;
            let b = other.value_at_f64(i)?;
            if (a - b).abs() > eps {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// [`equals_to`](Self::equals_to) with the default tolerance.
    pub fn approx_eq(&self, other: &HostArray) -> Result<bool> {
        self.equals_to(other, DEFAULT_ARRAY_EPS)
    }

    fn verify_element_type<T: Element>(&self) -> Result<()> {
        if T::DTYPE != self.dtype {
            return Err(Error::invalid_arg(
                "T",
                format!("requested {} elements from a {} array", T::DTYPE, self.dtype),
            ));
        }
        Ok(())
    }
}

fn element_size(dtype: DType) -> Result<usize> {
    dtype
        .size_in_bytes()
        .ok_or_else(|| Error::unsupported_data_type(dtype.name(), "host arrays"))
}

fn shape_length(shape: &[i64]) -> Result<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| {
        let dim = usize::try_from(dim)
            .map_err(|_| Error::invalid_arg("shape", format!("negative dimension {dim}")))?;
        acc.checked_mul(dim)
            .ok_or_else(|| Error::invalid_arg("shape", "element count overflows usize"))
    })
}

fn read_le<T: bytemuck::Pod>(bytes: &[u8]) -> T {
    if cfg!(target_endian = "big") {
        let mut buf = bytes.to_vec();
        buf.reverse();
        bytemuck::pod_read_unaligned(&buf)
    } else {
        bytemuck::pod_read_unaligned(bytes)
    }
}

fn swap_units(data: &mut [u8], unit: usize) {
    if unit > 1 {
        for chunk in data.chunks_exact_mut(unit) {
            chunk.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use planus::ReadAsRoot;

    use super::*;

    #[test]
    fn test_from_slice_shape_queries() {
        let arr = HostArray::from_slice(&[2, 3], &[1f32, 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(arr.rank(), 2);
        assert_eq!(arr.length(), 6);
        assert_eq!(arr.rows(), Some(2));
        assert_eq!(arr.columns(), Some(3));
        assert!(arr.is_matrix());
        assert!(!arr.is_vector());
        assert!(!arr.is_scalar());
        assert_eq!(arr.dtype(), DType::Float);
        assert_eq!(arr.data().len(), 24);

        let row = HostArray::from_slice(&[1, 4], &[0i32; 4]).unwrap();
        assert!(row.is_vector());
        assert!(!row.is_same_shape(&arr));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        assert!(HostArray::from_slice(&[2, 2], &[1f64, 2., 3.]).is_err());
        assert!(HostArray::from_slice(&[-1], &[1u8]).is_err());
        assert!(HostArray::zeros(DType::Inherit, &[1]).is_err());
    }

    #[test]
    fn test_scalar_and_zeros() {
        let s = HostArray::scalar(42i64);
        assert_eq!(s.rank(), 0);
        assert_eq!(s.length(), 1);
        assert!(s.is_scalar());
        assert_eq!(s.value_at_f64(0).unwrap(), 42.0);

        let z = HostArray::zeros(DType::Half, &[3]).unwrap();
        assert_eq!(z.data().len(), 6);
        assert_eq!(z.sum_f64().unwrap(), 0.0);

        let empty = HostArray::zeros(DType::Double, &[0, 4]).unwrap();
        assert_eq!(empty.length(), 0);
        assert!(empty.mean_f64().unwrap().is_nan());
    }

    #[test]
    fn test_zeros_with_oversized_shape_fails() {
        let dim = i32::MAX as i64;
        let err = HostArray::zeros(DType::Double, &[dim, dim, dim]).unwrap_err();
        assert!(matches!(
            err.kind(),
            execgraph_common::error::ErrorKind::InvalidArgument { .. }
        ));
        assert!(HostArray::zeros(DType::Double, &[dim, dim]).is_err());
        assert!(HostArray::zeros(DType::UInt8, &[dim, dim, 4]).is_err());
    }

    #[test]
    fn test_typed_access() {
        let arr = HostArray::from_slice(&[3], &[1i16, -2, 3]).unwrap();
        assert_eq!(arr.to_vec::<i16>().unwrap(), vec![1, -2, 3]);
        assert!(arr.to_vec::<i32>().is_err());
        if let Some(slice) = arr.as_slice::<i16>().unwrap() {
            assert_eq!(slice, &[1, -2, 3]);
        }
        assert_eq!(arr.sum_f64().unwrap(), 2.0);
        assert!((arr.mean_f64().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!(arr.value_at_f64(3).is_err());
    }

    #[test]
    fn test_half_precision_values() {
        let values = [half::f16::from_f32(0.5), half::f16::from_f32(-1.25)];
        let arr = HostArray::from_slice(&[2], &values).unwrap();
        assert_eq!(arr.dtype(), DType::Half);
        assert_eq!(arr.value_at_f64(1).unwrap(), -1.25);

        let arr = HostArray::from_slice(&[1], &[half::bf16::from_f32(2.0)]).unwrap();
        assert_eq!(arr.value_at_f64(0).unwrap(), 2.0);
    }

    #[test]
    fn test_unsupported_element_access() {
        let arr = HostArray::new(DType::QInt8, vec![2], Bytes::from(vec![1u8, 2])).unwrap();
        let err = arr.value_at_f64(0).unwrap_err();
        assert!(matches!(
            err.kind(),
            execgraph_common::error::ErrorKind::UnsupportedDataType { .. }
        ));
    }

    #[test]
    fn test_equals_to_with_tolerance() {
        let a = HostArray::from_slice(&[2], &[1.0f64, 2.0]).unwrap();
        let b = HostArray::from_slice(&[2], &[1.000001f64, 2.0]).unwrap();
        let c = HostArray::from_slice(&[2], &[1.1f64, 2.0]).unwrap();
        let d = HostArray::from_slice(&[1, 2], &[1.0f64, 2.0]).unwrap();
        assert!(a.approx_eq(&b).unwrap());
        assert!(!a.approx_eq(&c).unwrap());
        assert!(a.equals_to(&c, 0.2).unwrap());
        assert!(!a.approx_eq(&d).unwrap());

        let ints = HostArray::from_slice(&[2], &[1i32, 2]).unwrap();
        assert!(a.approx_eq(&ints).unwrap());
    }

    #[test]
    fn test_flat_array_roundtrip() {
        let arr = HostArray::from_slice(&[2, 2], &[1i64, 2, 3, 4]).unwrap();
        let flat = arr.to_flat_array();
        assert_eq!(flat.shape.as_deref(), Some(&[2, 2][..]));
        assert_eq!(flat.byte_order, ByteOrder::LittleEndian);

        let bytes = planus::Builder::new().finish(&flat, None).to_vec();
        let flat_ref = FlatArrayRef::read_as_root(&bytes).unwrap();
        let back = HostArray::from_flat_array(flat_ref).unwrap();
        assert_eq!(back, arr);
    }

    #[test]
    fn test_big_endian_buffer_is_normalized() {
        let flat = FlatArray {
            shape: Some(vec![2]),
            buffer: Some([1i32.to_be_bytes(), (-7i32).to_be_bytes()].concat()),
            dtype: DType::Int32,
            byte_order: ByteOrder::BigEndian,
        };
        let bytes = planus::Builder::new().finish(&flat, None).to_vec();
        let arr = HostArray::from_flat_array(FlatArrayRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(arr.to_vec::<i32>().unwrap(), vec![1, -7]);
        assert_eq!(arr.to_flat_array().byte_order, ByteOrder::LittleEndian);
    }

    #[test]
    fn test_absent_fields_read_as_empty_scalar() {
        let flat = FlatArray {
            dtype: DType::UInt8,
            buffer: Some(vec![9]),
            ..Default::default()
        };
        let bytes = planus::Builder::new().finish(&flat, None).to_vec();
        let arr = HostArray::from_flat_array(FlatArrayRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(arr.rank(), 0);
        assert_eq!(arr.to_vec::<u8>().unwrap(), vec![9]);

        let bytes = planus::Builder::new()
            .finish(&FlatArray::default(), None)
            .to_vec();
        assert!(HostArray::from_flat_array(FlatArrayRef::read_as_root(&bytes).unwrap()).is_err());
    }
}
