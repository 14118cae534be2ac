//! Extension methods for the array element type and byte order enums.

use super::graph::{ByteOrder, DType};

impl DType {
    /// Returns the size of a single element in bytes, or `None` for `Inherit`,
    /// which carries no storage of its own.
    pub fn size_in_bytes(&self) -> Option<usize> {
        match self {
            DType::Inherit => None,
            DType::Bool | DType::Float8 | DType::Int8 | DType::UInt8 | DType::QInt8 => Some(1),
            DType::Half | DType::Int16 | DType::UInt16 | DType::QInt16 | DType::BFloat16 => Some(2),
            DType::Half2 | DType::Float | DType::Int32 | DType::UInt32 => Some(4),
            DType::Double | DType::Int64 | DType::UInt64 => Some(8),
        }
    }

    /// Returns the width of the scalar units that must be byte-swapped when
    /// converting between byte orders.
    ///
    /// Equal to the element size for everything except `Half2`, which is a pair
    /// of independent 16-bit halves.
    pub fn swap_unit(&self) -> Option<usize> {
        match self {
            DType::Half2 => Some(2),
            _ => self.size_in_bytes(),
        }
    }

    /// Returns `true` for the floating-point element types.
    pub fn is_floating_point(&self) -> bool {
        matches!(
            self,
            DType::Float8
                | DType::Half
                | DType::Half2
                | DType::Float
                | DType::Double
                | DType::BFloat16
        )
    }

    /// Returns `true` for plain and quantized integer types.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DType::Int8
                | DType::Int16
                | DType::Int32
                | DType::Int64
                | DType::UInt8
                | DType::UInt16
                | DType::UInt32
                | DType::UInt64
                | DType::QInt8
                | DType::QInt16
        )
    }

    pub fn is_signed(&self) -> bool {
        self.is_floating_point()
            || matches!(
                self,
                DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64 | DType::QInt8 | DType::QInt16
            )
    }

    /// Schema name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Inherit => "Inherit",
            DType::Bool => "Bool",
            DType::Float8 => "Float8",
            DType::Half => "Half",
            DType::Half2 => "Half2",
            DType::Float => "Float",
            DType::Double => "Double",
            DType::Int8 => "Int8",
            DType::Int16 => "Int16",
            DType::Int32 => "Int32",
            DType::Int64 => "Int64",
            DType::UInt8 => "UInt8",
            DType::UInt16 => "UInt16",
            DType::UInt32 => "UInt32",
            DType::UInt64 => "UInt64",
            DType::QInt8 => "QInt8",
            DType::QInt16 => "QInt16",
            DType::BFloat16 => "BFloat16",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DType {
    type Err = execgraph_common::error::Error;

    /// Parses a type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ENUM_VALUES
            .into_iter()
            .find(|dtype| dtype.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| execgraph_common::error::Error::unsupported_data_type(s, "type name"))
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::LittleEndian => f.write_str("LE"),
            ByteOrder::BigEndian => f.write_str("BE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::graph::FlatArray;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::Inherit.size_in_bytes(), None);
        assert_eq!(DType::Bool.size_in_bytes(), Some(1));
        assert_eq!(DType::Half.size_in_bytes(), Some(2));
        assert_eq!(DType::Half2.size_in_bytes(), Some(4));
        assert_eq!(DType::Half2.swap_unit(), Some(2));
        assert_eq!(DType::Double.size_in_bytes(), Some(8));
        assert_eq!(DType::UInt64.swap_unit(), Some(8));
        for dtype in DType::ENUM_VALUES {
            if dtype != DType::Inherit {
                assert!(dtype.size_in_bytes().is_some(), "{dtype}");
            }
        }
    }

    #[test]
    fn test_dtype_classification() {
        assert!(DType::BFloat16.is_floating_point());
        assert!(!DType::BFloat16.is_integer());
        assert!(DType::QInt16.is_integer());
        assert!(DType::QInt16.is_signed());
        assert!(!DType::UInt32.is_signed());
        assert!(!DType::Bool.is_integer());
        assert!(!DType::Bool.is_floating_point());
    }

    #[test]
    fn test_dtype_names_match_variants() {
        for dtype in DType::ENUM_VALUES {
            assert_eq!(format!("{dtype:?}"), dtype.name());
        }
    }

    #[test]
    fn test_byte_order_wire_values() {
        assert_eq!(ByteOrder::LittleEndian as u8, 0);
        assert_eq!(ByteOrder::BigEndian as u8, 1);
        assert_eq!(FlatArray::default().byte_order, ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::LittleEndian.to_string(), "LE");
        assert_eq!(ByteOrder::BigEndian.to_string(), "BE");
    }

    #[test]
    fn test_dtype_from_str() {
        assert_eq!("bfloat16".parse::<DType>().unwrap(), DType::BFloat16);
        assert_eq!("Int32".parse::<DType>().unwrap(), DType::Int32);
        for dtype in DType::ENUM_VALUES {
            assert_eq!(dtype.name().parse::<DType>().unwrap(), dtype);
        }
        assert!("complex64".parse::<DType>().is_err());
    }
}
