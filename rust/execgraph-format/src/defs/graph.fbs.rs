pub use root::*;

const _: () = ::planus::check_version_compatibility("planus-1.1.1");

/// The root namespace
///
/// Generated from these locations:
/// * File `proto_defs/graph_format/graph.fbs`
#[no_implicit_prelude]
#[allow(dead_code, clippy::needless_lifetimes)]
mod root {
    /// The enum `DType`
    ///
    /// Generated from these locations:
    /// * Enum `DType` in the file `proto_defs/graph_format/graph.fbs:1`
    #[derive(
        Copy,
        Clone,
        Debug,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        ::serde::Serialize,
        ::serde::Deserialize,
    )]
    #[repr(u8)]
    pub enum DType {
        /// The variant `Inherit` in the enum `DType`
        Inherit = 0,

        /// The variant `Bool` in the enum `DType`
        Bool = 1,

        /// The variant `Float8` in the enum `DType`
        Float8 = 2,

        /// The variant `Half` in the enum `DType`
        Half = 3,

        /// The variant `Half2` in the enum `DType`
        Half2 = 4,

        /// The variant `Float` in the enum `DType`
        Float = 5,

        /// The variant `Double` in the enum `DType`
        Double = 6,

        /// The variant `Int8` in the enum `DType`
        Int8 = 7,

        /// The variant `Int16` in the enum `DType`
        Int16 = 8,

        /// The variant `Int32` in the enum `DType`
        Int32 = 9,

        /// The variant `Int64` in the enum `DType`
        Int64 = 10,

        /// The variant `UInt8` in the enum `DType`
        UInt8 = 11,

        /// The variant `UInt16` in the enum `DType`
        UInt16 = 12,

        /// The variant `UInt32` in the enum `DType`
        UInt32 = 13,

        /// The variant `UInt64` in the enum `DType`
        UInt64 = 14,

        /// The variant `QInt8` in the enum `DType`
        QInt8 = 15,

        /// The variant `QInt16` in the enum `DType`
        QInt16 = 16,

        /// The variant `BFloat16` in the enum `DType`
        BFloat16 = 17,
    }

    impl DType {
        /// Array containing all valid variants of DType
        pub const ENUM_VALUES: [Self; 18] = [
            Self::Inherit,
            Self::Bool,
            Self::Float8,
            Self::Half,
            Self::Half2,
            Self::Float,
            Self::Double,
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::UInt8,
            Self::UInt16,
            Self::UInt32,
            Self::UInt64,
            Self::QInt8,
            Self::QInt16,
            Self::BFloat16,
        ];
    }

    impl ::core::convert::TryFrom<u8> for DType {
        type Error = ::planus::errors::UnknownEnumTagKind;
        #[inline]
        fn try_from(
            value: u8,
        ) -> ::core::result::Result<Self, ::planus::errors::UnknownEnumTagKind> {
            #[allow(clippy::match_single_binding)]
            match value {
                0 => ::core::result::Result::Ok(DType::Inherit),
                1 => ::core::result::Result::Ok(DType::Bool),
                2 => ::core::result::Result::Ok(DType::Float8),
                3 => ::core::result::Result::Ok(DType::Half),
                4 => ::core::result::Result::Ok(DType::Half2),
                5 => ::core::result::Result::Ok(DType::Float),
                6 => ::core::result::Result::Ok(DType::Double),
                7 => ::core::result::Result::Ok(DType::Int8),
                8 => ::core::result::Result::Ok(DType::Int16),
                9 => ::core::result::Result::Ok(DType::Int32),
                10 => ::core::result::Result::Ok(DType::Int64),
                11 => ::core::result::Result::Ok(DType::UInt8),
                12 => ::core::result::Result::Ok(DType::UInt16),
                13 => ::core::result::Result::Ok(DType::UInt32),
                14 => ::core::result::Result::Ok(DType::UInt64),
                15 => ::core::result::Result::Ok(DType::QInt8),
                16 => ::core::result::Result::Ok(DType::QInt16),
                17 => ::core::result::Result::Ok(DType::BFloat16),

                _ => ::core::result::Result::Err(::planus::errors::UnknownEnumTagKind {
                    tag: value as i128,
                }),
            }
        }
    }

    impl ::core::convert::From<DType> for u8 {
        #[inline]
        fn from(value: DType) -> Self {
            value as u8
        }
    }

    /// # Safety
    /// The Planus compiler correctly calculates `ALIGNMENT` and `SIZE`.
    unsafe impl ::planus::Primitive for DType {
        const ALIGNMENT: usize = 1;
        const SIZE: usize = 1;
    }

    impl ::planus::WriteAsPrimitive<DType> for DType {
        #[inline]
        fn write<const N: usize>(&self, cursor: ::planus::Cursor<'_, N>, buffer_position: u32) {
            (*self as u8).write(cursor, buffer_position);
        }
    }

    impl ::planus::WriteAs<DType> for DType {
        type Prepared = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> DType {
            *self
        }
    }

    impl ::planus::WriteAsDefault<DType, DType> for DType {
        type Prepared = Self;

        #[inline]
        fn prepare(
            &self,
            _builder: &mut ::planus::Builder,
            default: &DType,
        ) -> ::core::option::Option<DType> {
            if self == default {
                ::core::option::Option::None
            } else {
                ::core::option::Option::Some(*self)
            }
        }
    }

    impl ::planus::WriteAsOptional<DType> for DType {
        type Prepared = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> ::core::option::Option<DType> {
            ::core::option::Option::Some(*self)
        }
    }

    impl<'buf> ::planus::TableRead<'buf> for DType {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'buf>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            let n: u8 = ::planus::TableRead::from_buffer(buffer, offset)?;
            ::core::result::Result::Ok(::core::convert::TryInto::try_into(n)?)
        }
    }

    impl<'buf> ::planus::VectorReadInner<'buf> for DType {
        type Error = ::planus::errors::UnknownEnumTag;
        const STRIDE: usize = 1;
        #[inline]
        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'buf>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::UnknownEnumTag> {
            let value = unsafe { *buffer.buffer.get_unchecked(offset) };
            let value: ::core::result::Result<Self, _> = ::core::convert::TryInto::try_into(value);
            value.map_err(|error_kind| {
                error_kind.with_error_location(
                    "DType",
                    "VectorRead::from_buffer",
                    buffer.offset_from_start,
                )
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<DType> for DType {
        const STRIDE: usize = 1;

        type Value = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> Self {
            *self
        }

        #[inline]
        unsafe fn write_values(
            values: &[Self],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 1];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - i as u32,
                );
            }
        }
    }

    /// The enum `ByteOrder`
    ///
    /// Generated from these locations:
    /// * Enum `ByteOrder` in the file `proto_defs/graph_format/graph.fbs:22`
    #[derive(
        Copy,
        Clone,
        Debug,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        ::serde::Serialize,
        ::serde::Deserialize,
    )]
    #[repr(u8)]
    pub enum ByteOrder {
        /// The variant `LittleEndian` in the enum `ByteOrder`
        LittleEndian = 0,

        /// The variant `BigEndian` in the enum `ByteOrder`
        BigEndian = 1,
    }

    impl ByteOrder {
        /// Array containing all valid variants of ByteOrder
        pub const ENUM_VALUES: [Self; 2] = [
            Self::LittleEndian,
            Self::BigEndian,
        ];
    }

    impl ::core::convert::TryFrom<u8> for ByteOrder {
        type Error = ::planus::errors::UnknownEnumTagKind;
        #[inline]
        fn try_from(
            value: u8,
        ) -> ::core::result::Result<Self, ::planus::errors::UnknownEnumTagKind> {
            #[allow(clippy::match_single_binding)]
            match value {
                0 => ::core::result::Result::Ok(ByteOrder::LittleEndian),
                1 => ::core::result::Result::Ok(ByteOrder::BigEndian),

                _ => ::core::result::Result::Err(::planus::errors::UnknownEnumTagKind {
                    tag: value as i128,
                }),
            }
        }
    }

    impl ::core::convert::From<ByteOrder> for u8 {
        #[inline]
        fn from(value: ByteOrder) -> Self {
            value as u8
        }
    }

    /// # Safety
    /// The Planus compiler correctly calculates `ALIGNMENT` and `SIZE`.
    unsafe impl ::planus::Primitive for ByteOrder {
        const ALIGNMENT: usize = 1;
        const SIZE: usize = 1;
    }

    impl ::planus::WriteAsPrimitive<ByteOrder> for ByteOrder {
        #[inline]
        fn write<const N: usize>(&self, cursor: ::planus::Cursor<'_, N>, buffer_position: u32) {
            (*self as u8).write(cursor, buffer_position);
        }
    }

    impl ::planus::WriteAs<ByteOrder> for ByteOrder {
        type Prepared = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> ByteOrder {
            *self
        }
    }

    impl ::planus::WriteAsDefault<ByteOrder, ByteOrder> for ByteOrder {
        type Prepared = Self;

        #[inline]
        fn prepare(
            &self,
            _builder: &mut ::planus::Builder,
            default: &ByteOrder,
        ) -> ::core::option::Option<ByteOrder> {
            if self == default {
                ::core::option::Option::None
            } else {
                ::core::option::Option::Some(*self)
            }
        }
    }

    impl ::planus::WriteAsOptional<ByteOrder> for ByteOrder {
        type Prepared = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> ::core::option::Option<ByteOrder> {
            ::core::option::Option::Some(*self)
        }
    }

    impl<'buf> ::planus::TableRead<'buf> for ByteOrder {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'buf>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            let n: u8 = ::planus::TableRead::from_buffer(buffer, offset)?;
            ::core::result::Result::Ok(::core::convert::TryInto::try_into(n)?)
        }
    }

    impl<'buf> ::planus::VectorReadInner<'buf> for ByteOrder {
        type Error = ::planus::errors::UnknownEnumTag;
        const STRIDE: usize = 1;
        #[inline]
        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'buf>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::UnknownEnumTag> {
            let value = unsafe { *buffer.buffer.get_unchecked(offset) };
            let value: ::core::result::Result<Self, _> = ::core::convert::TryInto::try_into(value);
            value.map_err(|error_kind| {
                error_kind.with_error_location(
                    "ByteOrder",
                    "VectorRead::from_buffer",
                    buffer.offset_from_start,
                )
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<ByteOrder> for ByteOrder {
        const STRIDE: usize = 1;

        type Value = Self;

        #[inline]
        fn prepare(&self, _builder: &mut ::planus::Builder) -> Self {
            *self
        }

        #[inline]
        unsafe fn write_values(
            values: &[Self],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 1];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - i as u32,
                );
            }
        }
    }

    /// The table `IntPair`
    ///
    /// Generated from these locations:
    /// * Table `IntPair` in the file `proto_defs/graph_format/graph.fbs:27`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct IntPair {
        /// The field `first` in the table `IntPair`
        pub first: i32,
        /// The field `second` in the table `IntPair`
        pub second: i32,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for IntPair {
        fn default() -> Self {
            Self {
                first: 0,
                second: 0,
            }
        }
    }

    impl IntPair {
        /// Creates a [IntPairBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> IntPairBuilder<()> {
            IntPairBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_first: impl ::planus::WriteAsDefault<i32, i32>,
            field_second: impl ::planus::WriteAsDefault<i32, i32>,
        ) -> ::planus::Offset<Self> {
            let prepared_first = field_first.prepare(builder, &0);
            let prepared_second = field_second.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<8> =
                ::core::default::Default::default();
            if prepared_first.is_some() {
                table_writer.write_entry::<i32>(0);
            }
            if prepared_second.is_some() {
                table_writer.write_entry::<i32>(1);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_first) = prepared_first {
                        object_writer.write::<_, _, 4>(&prepared_first);
                    }
                    if let ::core::option::Option::Some(prepared_second) = prepared_second {
                        object_writer.write::<_, _, 4>(&prepared_second);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<IntPair>> for IntPair {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<IntPair> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<IntPair>> for IntPair {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<IntPair>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<IntPair> for IntPair {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<IntPair> {
            IntPair::create(
                builder,
                self.first,
                self.second,
            )
        }
    }

    /// Builder for serializing an instance of the [IntPair] type.
    ///
    /// Can be created using the [IntPair::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct IntPairBuilder<State>(State);

    impl IntPairBuilder<()> {
        /// Setter for the [`first` field](IntPair#structfield.first).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first<T0>(self, value: T0) -> IntPairBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<i32, i32>,
        {
            IntPairBuilder((value,))
        }

        /// Sets the [`first` field](IntPair#structfield.first) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first_as_default(self) -> IntPairBuilder<(::planus::DefaultValue,)> {
            self.first(::planus::DefaultValue)
        }
    }

    impl<T0> IntPairBuilder<(T0,)> {
        /// Setter for the [`second` field](IntPair#structfield.second).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn second<T1>(self, value: T1) -> IntPairBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<i32, i32>,
        {
            let (v0,) = self.0;
            IntPairBuilder((v0, value))
        }

        /// Sets the [`second` field](IntPair#structfield.second) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn second_as_default(self) -> IntPairBuilder<(T0, ::planus::DefaultValue)> {
            self.second(::planus::DefaultValue)
        }
    }

    impl<T0, T1> IntPairBuilder<(T0, T1)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [IntPair].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<IntPair>
        where
            Self: ::planus::WriteAsOffset<IntPair>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAs<::planus::Offset<IntPair>> for IntPairBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<IntPair>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<IntPair> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOptional<::planus::Offset<IntPair>> for IntPairBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<IntPair>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<IntPair>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOffset<IntPair> for IntPairBuilder<(T0, T1)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<IntPair> {
            let (v0, v1) = &self.0;
            IntPair::create(builder, v0, v1)
        }
    }

    /// Reference to a deserialized [IntPair].
    #[derive(Copy, Clone)]
    pub struct IntPairRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> IntPairRef<'a> {
        /// Getter for the [`first` field](IntPair#structfield.first).
        #[inline]
        pub fn first(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "IntPair", "first")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`second` field](IntPair#structfield.second).
        #[inline]
        pub fn second(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "IntPair", "second")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for IntPairRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("IntPairRef");
            f.field("first", &self.first());
            f.field("second", &self.second());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<IntPairRef<'a>> for IntPair {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: IntPairRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                first: ::core::convert::TryInto::try_into(value.first()?)?,
                second: ::core::convert::TryInto::try_into(value.second()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for IntPairRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for IntPairRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[IntPairRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<IntPair>> for IntPair {
        type Value = ::planus::Offset<IntPair>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<IntPair>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for IntPairRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[IntPairRef]", "read_as_root", 0))
        }
    }

    /// The table `LongPair`
    ///
    /// Generated from these locations:
    /// * Table `LongPair` in the file `proto_defs/graph_format/graph.fbs:32`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct LongPair {
        /// The field `first` in the table `LongPair`
        pub first: i64,
        /// The field `second` in the table `LongPair`
        pub second: i64,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for LongPair {
        fn default() -> Self {
            Self {
                first: 0,
                second: 0,
            }
        }
    }

    impl LongPair {
        /// Creates a [LongPairBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> LongPairBuilder<()> {
            LongPairBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_first: impl ::planus::WriteAsDefault<i64, i64>,
            field_second: impl ::planus::WriteAsDefault<i64, i64>,
        ) -> ::planus::Offset<Self> {
            let prepared_first = field_first.prepare(builder, &0);
            let prepared_second = field_second.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<8> =
                ::core::default::Default::default();
            if prepared_first.is_some() {
                table_writer.write_entry::<i64>(0);
            }
            if prepared_second.is_some() {
                table_writer.write_entry::<i64>(1);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_first) = prepared_first {
                        object_writer.write::<_, _, 8>(&prepared_first);
                    }
                    if let ::core::option::Option::Some(prepared_second) = prepared_second {
                        object_writer.write::<_, _, 8>(&prepared_second);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<LongPair>> for LongPair {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LongPair> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<LongPair>> for LongPair {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<LongPair>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<LongPair> for LongPair {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LongPair> {
            LongPair::create(
                builder,
                self.first,
                self.second,
            )
        }
    }

    /// Builder for serializing an instance of the [LongPair] type.
    ///
    /// Can be created using the [LongPair::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct LongPairBuilder<State>(State);

    impl LongPairBuilder<()> {
        /// Setter for the [`first` field](LongPair#structfield.first).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first<T0>(self, value: T0) -> LongPairBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<i64, i64>,
        {
            LongPairBuilder((value,))
        }

        /// Sets the [`first` field](LongPair#structfield.first) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn first_as_default(self) -> LongPairBuilder<(::planus::DefaultValue,)> {
            self.first(::planus::DefaultValue)
        }
    }

    impl<T0> LongPairBuilder<(T0,)> {
        /// Setter for the [`second` field](LongPair#structfield.second).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn second<T1>(self, value: T1) -> LongPairBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsDefault<i64, i64>,
        {
            let (v0,) = self.0;
            LongPairBuilder((v0, value))
        }

        /// Sets the [`second` field](LongPair#structfield.second) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn second_as_default(self) -> LongPairBuilder<(T0, ::planus::DefaultValue)> {
            self.second(::planus::DefaultValue)
        }
    }

    impl<T0, T1> LongPairBuilder<(T0, T1)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [LongPair].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<LongPair>
        where
            Self: ::planus::WriteAsOffset<LongPair>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAs<::planus::Offset<LongPair>> for LongPairBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<LongPair>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LongPair> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOptional<::planus::Offset<LongPair>> for LongPairBuilder<(T0, T1)>
    {
        type Prepared = ::planus::Offset<LongPair>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<LongPair>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOffset<LongPair> for LongPairBuilder<(T0, T1)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<LongPair> {
            let (v0, v1) = &self.0;
            LongPair::create(builder, v0, v1)
        }
    }

    /// Reference to a deserialized [LongPair].
    #[derive(Copy, Clone)]
    pub struct LongPairRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> LongPairRef<'a> {
        /// Getter for the [`first` field](LongPair#structfield.first).
        #[inline]
        pub fn first(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "LongPair", "first")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`second` field](LongPair#structfield.second).
        #[inline]
        pub fn second(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(1, "LongPair", "second")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for LongPairRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("LongPairRef");
            f.field("first", &self.first());
            f.field("second", &self.second());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<LongPairRef<'a>> for LongPair {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: LongPairRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                first: ::core::convert::TryInto::try_into(value.first()?)?,
                second: ::core::convert::TryInto::try_into(value.second()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for LongPairRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for LongPairRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[LongPairRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<LongPair>> for LongPair {
        type Value = ::planus::Offset<LongPair>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<LongPair>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for LongPairRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[LongPairRef]", "read_as_root", 0))
        }
    }

    /// The table `FlatArray`
    ///
    /// Generated from these locations:
    /// * Table `FlatArray` in the file `proto_defs/graph_format/graph.fbs:37`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct FlatArray {
        /// The field `shape` in the table `FlatArray`
        pub shape: ::core::option::Option<::planus::alloc::vec::Vec<i32>>,
        /// The field `buffer` in the table `FlatArray`
        pub buffer: ::core::option::Option<::planus::alloc::vec::Vec<u8>>,
        /// The field `dtype` in the table `FlatArray`
        pub dtype: self::DType,
        /// The field `byte_order` in the table `FlatArray`
        pub byte_order: self::ByteOrder,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for FlatArray {
        fn default() -> Self {
            Self {
                shape: ::core::default::Default::default(),
                buffer: ::core::default::Default::default(),
                dtype: self::DType::Inherit,
                byte_order: self::ByteOrder::LittleEndian,
            }
        }
    }

    impl FlatArray {
        /// Creates a [FlatArrayBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> FlatArrayBuilder<()> {
            FlatArrayBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_shape: impl ::planus::WriteAsOptional<::planus::Offset<[i32]>>,
            field_buffer: impl ::planus::WriteAsOptional<::planus::Offset<[u8]>>,
            field_dtype: impl ::planus::WriteAsDefault<self::DType, self::DType>,
            field_byte_order: impl ::planus::WriteAsDefault<self::ByteOrder, self::ByteOrder>,
        ) -> ::planus::Offset<Self> {
            let prepared_shape = field_shape.prepare(builder);
            let prepared_buffer = field_buffer.prepare(builder);
            let prepared_dtype = field_dtype.prepare(builder, &self::DType::Inherit);
            let prepared_byte_order = field_byte_order.prepare(builder, &self::ByteOrder::LittleEndian);

            let mut table_writer: ::planus::table_writer::TableWriter<12> =
                ::core::default::Default::default();
            if prepared_shape.is_some() {
                table_writer.write_entry::<::planus::Offset<[i32]>>(0);
            }
            if prepared_buffer.is_some() {
                table_writer.write_entry::<::planus::Offset<[u8]>>(1);
            }
            if prepared_dtype.is_some() {
                table_writer.write_entry::<self::DType>(2);
            }
            if prepared_byte_order.is_some() {
                table_writer.write_entry::<self::ByteOrder>(3);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_shape) = prepared_shape {
                        object_writer.write::<_, _, 4>(&prepared_shape);
                    }
                    if let ::core::option::Option::Some(prepared_buffer) = prepared_buffer {
                        object_writer.write::<_, _, 4>(&prepared_buffer);
                    }
                    if let ::core::option::Option::Some(prepared_dtype) = prepared_dtype {
                        object_writer.write::<_, _, 1>(&prepared_dtype);
                    }
                    if let ::core::option::Option::Some(prepared_byte_order) = prepared_byte_order {
                        object_writer.write::<_, _, 1>(&prepared_byte_order);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<FlatArray>> for FlatArray {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatArray> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<FlatArray>> for FlatArray {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatArray>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<FlatArray> for FlatArray {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatArray> {
            FlatArray::create(
                builder,
                &self.shape,
                &self.buffer,
                self.dtype,
                self.byte_order,
            )
        }
    }

    /// Builder for serializing an instance of the [FlatArray] type.
    ///
    /// Can be created using the [FlatArray::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct FlatArrayBuilder<State>(State);

    impl FlatArrayBuilder<()> {
        /// Setter for the [`shape` field](FlatArray#structfield.shape).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn shape<T0>(self, value: T0) -> FlatArrayBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<[i32]>>,
        {
            FlatArrayBuilder((value,))
        }

        /// Sets the [`shape` field](FlatArray#structfield.shape) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn shape_as_null(self) -> FlatArrayBuilder<((),)> {
            self.shape(())
        }
    }

    impl<T0> FlatArrayBuilder<(T0,)> {
        /// Setter for the [`buffer` field](FlatArray#structfield.buffer).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn buffer<T1>(self, value: T1) -> FlatArrayBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<[u8]>>,
        {
            let (v0,) = self.0;
            FlatArrayBuilder((v0, value))
        }

        /// Sets the [`buffer` field](FlatArray#structfield.buffer) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn buffer_as_null(self) -> FlatArrayBuilder<(T0, ())> {
            self.buffer(())
        }
    }

    impl<T0, T1> FlatArrayBuilder<(T0, T1)> {
        /// Setter for the [`dtype` field](FlatArray#structfield.dtype).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn dtype<T2>(self, value: T2) -> FlatArrayBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsDefault<self::DType, self::DType>,
        {
            let (v0, v1) = self.0;
            FlatArrayBuilder((v0, v1, value))
        }

        /// Sets the [`dtype` field](FlatArray#structfield.dtype) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn dtype_as_default(self) -> FlatArrayBuilder<(T0, T1, ::planus::DefaultValue)> {
            self.dtype(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2> FlatArrayBuilder<(T0, T1, T2)> {
        /// Setter for the [`byte_order` field](FlatArray#structfield.byte_order).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn byte_order<T3>(self, value: T3) -> FlatArrayBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsDefault<self::ByteOrder, self::ByteOrder>,
        {
            let (v0, v1, v2) = self.0;
            FlatArrayBuilder((v0, v1, v2, value))
        }

        /// Sets the [`byte_order` field](FlatArray#structfield.byte_order) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn byte_order_as_default(self) -> FlatArrayBuilder<(T0, T1, T2, ::planus::DefaultValue)> {
            self.byte_order(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3> FlatArrayBuilder<(T0, T1, T2, T3)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [FlatArray].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatArray>
        where
            Self: ::planus::WriteAsOffset<FlatArray>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[i32]>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[u8]>>,
            T2: ::planus::WriteAsDefault<self::DType, self::DType>,
            T3: ::planus::WriteAsDefault<self::ByteOrder, self::ByteOrder>,
        > ::planus::WriteAs<::planus::Offset<FlatArray>> for FlatArrayBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<FlatArray>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatArray> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[i32]>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[u8]>>,
            T2: ::planus::WriteAsDefault<self::DType, self::DType>,
            T3: ::planus::WriteAsDefault<self::ByteOrder, self::ByteOrder>,
        > ::planus::WriteAsOptional<::planus::Offset<FlatArray>> for FlatArrayBuilder<(T0, T1, T2, T3)>
    {
        type Prepared = ::planus::Offset<FlatArray>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatArray>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<[i32]>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[u8]>>,
            T2: ::planus::WriteAsDefault<self::DType, self::DType>,
            T3: ::planus::WriteAsDefault<self::ByteOrder, self::ByteOrder>,
        > ::planus::WriteAsOffset<FlatArray> for FlatArrayBuilder<(T0, T1, T2, T3)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatArray> {
            let (v0, v1, v2, v3) = &self.0;
            FlatArray::create(builder, v0, v1, v2, v3)
        }
    }

    /// Reference to a deserialized [FlatArray].
    #[derive(Copy, Clone)]
    pub struct FlatArrayRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> FlatArrayRef<'a> {
        /// Getter for the [`shape` field](FlatArray#structfield.shape).
        #[inline]
        pub fn shape(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, i32>>> {
            self.0.access(0, "FlatArray", "shape")
        }

        /// Getter for the [`buffer` field](FlatArray#structfield.buffer).
        #[inline]
        pub fn buffer(&self) -> ::planus::Result<::core::option::Option<&'a [u8]>> {
            self.0.access(1, "FlatArray", "buffer")
        }

        /// Getter for the [`dtype` field](FlatArray#structfield.dtype).
        #[inline]
        pub fn dtype(&self) -> ::planus::Result<self::DType> {
            ::core::result::Result::Ok(
                self.0
                    .access(2, "FlatArray", "dtype")?
                    .unwrap_or(self::DType::Inherit),
            )
        }

        /// Getter for the [`byte_order` field](FlatArray#structfield.byte_order).
        #[inline]
        pub fn byte_order(&self) -> ::planus::Result<self::ByteOrder> {
            ::core::result::Result::Ok(
                self.0
                    .access(3, "FlatArray", "byte_order")?
                    .unwrap_or(self::ByteOrder::LittleEndian),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for FlatArrayRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("FlatArrayRef");
            if let ::core::option::Option::Some(field_shape) = self.shape().transpose() {
                f.field("shape", &field_shape);
            }
            if let ::core::option::Option::Some(field_buffer) = self.buffer().transpose() {
                f.field("buffer", &field_buffer);
            }
            f.field("dtype", &self.dtype());
            f.field("byte_order", &self.byte_order());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<FlatArrayRef<'a>> for FlatArray {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: FlatArrayRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                shape: if let ::core::option::Option::Some(shape) = value.shape()? {
                    ::core::option::Option::Some(shape.to_vec()?)
                } else {
                    ::core::option::Option::None
                },
                buffer: value.buffer()?.map(|v| v.to_vec()),
                dtype: ::core::convert::TryInto::try_into(value.dtype()?)?,
                byte_order: ::core::convert::TryInto::try_into(value.byte_order()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for FlatArrayRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for FlatArrayRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[FlatArrayRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<FlatArray>> for FlatArray {
        type Value = ::planus::Offset<FlatArray>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<FlatArray>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for FlatArrayRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[FlatArrayRef]", "read_as_root", 0))
        }
    }

    /// The table `FlatVariable`
    ///
    /// Generated from these locations:
    /// * Table `FlatVariable` in the file `proto_defs/graph_format/graph.fbs:46`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct FlatVariable {
        /// The field `id` in the table `FlatVariable`
        pub id: ::core::option::Option<::planus::alloc::boxed::Box<self::IntPair>>,
        /// The field `name` in the table `FlatVariable`
        pub name: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `shape` in the table `FlatVariable`
        pub shape: ::core::option::Option<::planus::alloc::vec::Vec<i64>>,
        /// The field `ndarray` in the table `FlatVariable`
        pub ndarray: ::core::option::Option<::planus::alloc::boxed::Box<self::FlatArray>>,
        /// The field `device` in the table `FlatVariable`
        pub device: i32,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for FlatVariable {
        fn default() -> Self {
            Self {
                id: ::core::default::Default::default(),
                name: ::core::default::Default::default(),
                shape: ::core::default::Default::default(),
                ndarray: ::core::default::Default::default(),
                device: 0,
            }
        }
    }

    impl FlatVariable {
        /// Creates a [FlatVariableBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> FlatVariableBuilder<()> {
            FlatVariableBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_id: impl ::planus::WriteAsOptional<::planus::Offset<self::IntPair>>,
            field_name: impl ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            field_shape: impl ::planus::WriteAsOptional<::planus::Offset<[i64]>>,
            field_ndarray: impl ::planus::WriteAsOptional<::planus::Offset<self::FlatArray>>,
            field_device: impl ::planus::WriteAsDefault<i32, i32>,
        ) -> ::planus::Offset<Self> {
            let prepared_id = field_id.prepare(builder);
            let prepared_name = field_name.prepare(builder);
            let prepared_shape = field_shape.prepare(builder);
            let prepared_ndarray = field_ndarray.prepare(builder);
            let prepared_device = field_device.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<14> =
                ::core::default::Default::default();
            if prepared_id.is_some() {
                table_writer.write_entry::<::planus::Offset<self::IntPair>>(0);
            }
            if prepared_name.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_shape.is_some() {
                table_writer.write_entry::<::planus::Offset<[i64]>>(2);
            }
            if prepared_ndarray.is_some() {
                table_writer.write_entry::<::planus::Offset<self::FlatArray>>(3);
            }
            if prepared_device.is_some() {
                table_writer.write_entry::<i32>(4);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_id) = prepared_id {
                        object_writer.write::<_, _, 4>(&prepared_id);
                    }
                    if let ::core::option::Option::Some(prepared_name) = prepared_name {
                        object_writer.write::<_, _, 4>(&prepared_name);
                    }
                    if let ::core::option::Option::Some(prepared_shape) = prepared_shape {
                        object_writer.write::<_, _, 4>(&prepared_shape);
                    }
                    if let ::core::option::Option::Some(prepared_ndarray) = prepared_ndarray {
                        object_writer.write::<_, _, 4>(&prepared_ndarray);
                    }
                    if let ::core::option::Option::Some(prepared_device) = prepared_device {
                        object_writer.write::<_, _, 4>(&prepared_device);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<FlatVariable>> for FlatVariable {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatVariable> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<FlatVariable>> for FlatVariable {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatVariable>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<FlatVariable> for FlatVariable {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatVariable> {
            FlatVariable::create(
                builder,
                &self.id,
                &self.name,
                &self.shape,
                &self.ndarray,
                self.device,
            )
        }
    }

    /// Builder for serializing an instance of the [FlatVariable] type.
    ///
    /// Can be created using the [FlatVariable::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct FlatVariableBuilder<State>(State);

    impl FlatVariableBuilder<()> {
        /// Setter for the [`id` field](FlatVariable#structfield.id).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id<T0>(self, value: T0) -> FlatVariableBuilder<(T0,)>
        where
            T0: ::planus::WriteAsOptional<::planus::Offset<self::IntPair>>,
        {
            FlatVariableBuilder((value,))
        }

        /// Sets the [`id` field](FlatVariable#structfield.id) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id_as_null(self) -> FlatVariableBuilder<((),)> {
            self.id(())
        }
    }

    impl<T0> FlatVariableBuilder<(T0,)> {
        /// Setter for the [`name` field](FlatVariable#structfield.name).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name<T1>(self, value: T1) -> FlatVariableBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
        {
            let (v0,) = self.0;
            FlatVariableBuilder((v0, value))
        }

        /// Sets the [`name` field](FlatVariable#structfield.name) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name_as_null(self) -> FlatVariableBuilder<(T0, ())> {
            self.name(())
        }
    }

    impl<T0, T1> FlatVariableBuilder<(T0, T1)> {
        /// Setter for the [`shape` field](FlatVariable#structfield.shape).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn shape<T2>(self, value: T2) -> FlatVariableBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<[i64]>>,
        {
            let (v0, v1) = self.0;
            FlatVariableBuilder((v0, v1, value))
        }

        /// Sets the [`shape` field](FlatVariable#structfield.shape) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn shape_as_null(self) -> FlatVariableBuilder<(T0, T1, ())> {
            self.shape(())
        }
    }

    impl<T0, T1, T2> FlatVariableBuilder<(T0, T1, T2)> {
        /// Setter for the [`ndarray` field](FlatVariable#structfield.ndarray).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn ndarray<T3>(self, value: T3) -> FlatVariableBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsOptional<::planus::Offset<self::FlatArray>>,
        {
            let (v0, v1, v2) = self.0;
            FlatVariableBuilder((v0, v1, v2, value))
        }

        /// Sets the [`ndarray` field](FlatVariable#structfield.ndarray) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn ndarray_as_null(self) -> FlatVariableBuilder<(T0, T1, T2, ())> {
            self.ndarray(())
        }
    }

    impl<T0, T1, T2, T3> FlatVariableBuilder<(T0, T1, T2, T3)> {
        /// Setter for the [`device` field](FlatVariable#structfield.device).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn device<T4>(self, value: T4) -> FlatVariableBuilder<(T0, T1, T2, T3, T4)>
        where
            T4: ::planus::WriteAsDefault<i32, i32>,
        {
            let (v0, v1, v2, v3) = self.0;
            FlatVariableBuilder((v0, v1, v2, v3, value))
        }

        /// Sets the [`device` field](FlatVariable#structfield.device) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn device_as_default(self) -> FlatVariableBuilder<(T0, T1, T2, T3, ::planus::DefaultValue)> {
            self.device(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4> FlatVariableBuilder<(T0, T1, T2, T3, T4)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [FlatVariable].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatVariable>
        where
            Self: ::planus::WriteAsOffset<FlatVariable>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<self::IntPair>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[i64]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::FlatArray>>,
            T4: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAs<::planus::Offset<FlatVariable>> for FlatVariableBuilder<(T0, T1, T2, T3, T4)>
    {
        type Prepared = ::planus::Offset<FlatVariable>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatVariable> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<self::IntPair>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[i64]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::FlatArray>>,
            T4: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOptional<::planus::Offset<FlatVariable>> for FlatVariableBuilder<(T0, T1, T2, T3, T4)>
    {
        type Prepared = ::planus::Offset<FlatVariable>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatVariable>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsOptional<::planus::Offset<self::IntPair>>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[i64]>>,
            T3: ::planus::WriteAsOptional<::planus::Offset<self::FlatArray>>,
            T4: ::planus::WriteAsDefault<i32, i32>,
        > ::planus::WriteAsOffset<FlatVariable> for FlatVariableBuilder<(T0, T1, T2, T3, T4)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatVariable> {
            let (v0, v1, v2, v3, v4) = &self.0;
            FlatVariable::create(builder, v0, v1, v2, v3, v4)
        }
    }

    /// Reference to a deserialized [FlatVariable].
    #[derive(Copy, Clone)]
    pub struct FlatVariableRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> FlatVariableRef<'a> {
        /// Getter for the [`id` field](FlatVariable#structfield.id).
        #[inline]
        pub fn id(&self) -> ::planus::Result<::core::option::Option<self::IntPairRef<'a>>> {
            self.0.access(0, "FlatVariable", "id")
        }

        /// Getter for the [`name` field](FlatVariable#structfield.name).
        #[inline]
        pub fn name(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "FlatVariable", "name")
        }

        /// Getter for the [`shape` field](FlatVariable#structfield.shape).
        #[inline]
        pub fn shape(&self) -> ::planus::Result<::core::option::Option<::planus::Vector<'a, i64>>> {
            self.0.access(2, "FlatVariable", "shape")
        }

        /// Getter for the [`ndarray` field](FlatVariable#structfield.ndarray).
        #[inline]
        pub fn ndarray(&self) -> ::planus::Result<::core::option::Option<self::FlatArrayRef<'a>>> {
            self.0.access(3, "FlatVariable", "ndarray")
        }

        /// Getter for the [`device` field](FlatVariable#structfield.device).
        #[inline]
        pub fn device(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(4, "FlatVariable", "device")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for FlatVariableRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("FlatVariableRef");
            if let ::core::option::Option::Some(field_id) = self.id().transpose() {
                f.field("id", &field_id);
            }
            if let ::core::option::Option::Some(field_name) = self.name().transpose() {
                f.field("name", &field_name);
            }
            if let ::core::option::Option::Some(field_shape) = self.shape().transpose() {
                f.field("shape", &field_shape);
            }
            if let ::core::option::Option::Some(field_ndarray) = self.ndarray().transpose() {
                f.field("ndarray", &field_ndarray);
            }
            f.field("device", &self.device());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<FlatVariableRef<'a>> for FlatVariable {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: FlatVariableRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                id: if let ::core::option::Option::Some(id) = value.id()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(id)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
                name: value.name()?.map(::core::convert::Into::into),
                shape: if let ::core::option::Option::Some(shape) = value.shape()? {
                    ::core::option::Option::Some(shape.to_vec()?)
                } else {
                    ::core::option::Option::None
                },
                ndarray: if let ::core::option::Option::Some(ndarray) = value.ndarray()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(ndarray)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
                device: ::core::convert::TryInto::try_into(value.device()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for FlatVariableRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for FlatVariableRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[FlatVariableRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<FlatVariable>> for FlatVariable {
        type Value = ::planus::Offset<FlatVariable>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<FlatVariable>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for FlatVariableRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[FlatVariableRef]", "read_as_root", 0))
        }
    }

    /// The table `FlatTiming`
    ///
    /// Generated from these locations:
    /// * Table `FlatTiming` in the file `proto_defs/graph_format/graph.fbs:55`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct FlatTiming {
        /// The field `id` in the table `FlatTiming`
        pub id: i32,
        /// The field `name` in the table `FlatTiming`
        pub name: ::core::option::Option<::planus::alloc::string::String>,
        /// The field `timing` in the table `FlatTiming`
        pub timing: ::core::option::Option<::planus::alloc::boxed::Box<self::LongPair>>,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for FlatTiming {
        fn default() -> Self {
            Self {
                id: 0,
                name: ::core::default::Default::default(),
                timing: ::core::default::Default::default(),
            }
        }
    }

    impl FlatTiming {
        /// Creates a [FlatTimingBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> FlatTimingBuilder<()> {
            FlatTimingBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_id: impl ::planus::WriteAsDefault<i32, i32>,
            field_name: impl ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            field_timing: impl ::planus::WriteAsOptional<::planus::Offset<self::LongPair>>,
        ) -> ::planus::Offset<Self> {
            let prepared_id = field_id.prepare(builder, &0);
            let prepared_name = field_name.prepare(builder);
            let prepared_timing = field_timing.prepare(builder);

            let mut table_writer: ::planus::table_writer::TableWriter<10> =
                ::core::default::Default::default();
            if prepared_id.is_some() {
                table_writer.write_entry::<i32>(0);
            }
            if prepared_name.is_some() {
                table_writer.write_entry::<::planus::Offset<str>>(1);
            }
            if prepared_timing.is_some() {
                table_writer.write_entry::<::planus::Offset<self::LongPair>>(2);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_id) = prepared_id {
                        object_writer.write::<_, _, 4>(&prepared_id);
                    }
                    if let ::core::option::Option::Some(prepared_name) = prepared_name {
                        object_writer.write::<_, _, 4>(&prepared_name);
                    }
                    if let ::core::option::Option::Some(prepared_timing) = prepared_timing {
                        object_writer.write::<_, _, 4>(&prepared_timing);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<FlatTiming>> for FlatTiming {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatTiming> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<FlatTiming>> for FlatTiming {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatTiming>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<FlatTiming> for FlatTiming {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatTiming> {
            FlatTiming::create(
                builder,
                self.id,
                &self.name,
                &self.timing,
            )
        }
    }

    /// Builder for serializing an instance of the [FlatTiming] type.
    ///
    /// Can be created using the [FlatTiming::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct FlatTimingBuilder<State>(State);

    impl FlatTimingBuilder<()> {
        /// Setter for the [`id` field](FlatTiming#structfield.id).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id<T0>(self, value: T0) -> FlatTimingBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<i32, i32>,
        {
            FlatTimingBuilder((value,))
        }

        /// Sets the [`id` field](FlatTiming#structfield.id) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id_as_default(self) -> FlatTimingBuilder<(::planus::DefaultValue,)> {
            self.id(::planus::DefaultValue)
        }
    }

    impl<T0> FlatTimingBuilder<(T0,)> {
        /// Setter for the [`name` field](FlatTiming#structfield.name).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name<T1>(self, value: T1) -> FlatTimingBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
        {
            let (v0,) = self.0;
            FlatTimingBuilder((v0, value))
        }

        /// Sets the [`name` field](FlatTiming#structfield.name) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn name_as_null(self) -> FlatTimingBuilder<(T0, ())> {
            self.name(())
        }
    }

    impl<T0, T1> FlatTimingBuilder<(T0, T1)> {
        /// Setter for the [`timing` field](FlatTiming#structfield.timing).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timing<T2>(self, value: T2) -> FlatTimingBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<self::LongPair>>,
        {
            let (v0, v1) = self.0;
            FlatTimingBuilder((v0, v1, value))
        }

        /// Sets the [`timing` field](FlatTiming#structfield.timing) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timing_as_null(self) -> FlatTimingBuilder<(T0, T1, ())> {
            self.timing(())
        }
    }

    impl<T0, T1, T2> FlatTimingBuilder<(T0, T1, T2)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [FlatTiming].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatTiming>
        where
            Self: ::planus::WriteAsOffset<FlatTiming>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<self::LongPair>>,
        > ::planus::WriteAs<::planus::Offset<FlatTiming>> for FlatTimingBuilder<(T0, T1, T2)>
    {
        type Prepared = ::planus::Offset<FlatTiming>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatTiming> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<self::LongPair>>,
        > ::planus::WriteAsOptional<::planus::Offset<FlatTiming>> for FlatTimingBuilder<(T0, T1, T2)>
    {
        type Prepared = ::planus::Offset<FlatTiming>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatTiming>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i32, i32>,
            T1: ::planus::WriteAsOptional<::planus::Offset<::core::primitive::str>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<self::LongPair>>,
        > ::planus::WriteAsOffset<FlatTiming> for FlatTimingBuilder<(T0, T1, T2)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatTiming> {
            let (v0, v1, v2) = &self.0;
            FlatTiming::create(builder, v0, v1, v2)
        }
    }

    /// Reference to a deserialized [FlatTiming].
    #[derive(Copy, Clone)]
    pub struct FlatTimingRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> FlatTimingRef<'a> {
        /// Getter for the [`id` field](FlatTiming#structfield.id).
        #[inline]
        pub fn id(&self) -> ::planus::Result<i32> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "FlatTiming", "id")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`name` field](FlatTiming#structfield.name).
        #[inline]
        pub fn name(&self) -> ::planus::Result<::core::option::Option<&'a ::core::primitive::str>> {
            self.0.access(1, "FlatTiming", "name")
        }

        /// Getter for the [`timing` field](FlatTiming#structfield.timing).
        #[inline]
        pub fn timing(&self) -> ::planus::Result<::core::option::Option<self::LongPairRef<'a>>> {
            self.0.access(2, "FlatTiming", "timing")
        }
    }

    impl<'a> ::core::fmt::Debug for FlatTimingRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("FlatTimingRef");
            f.field("id", &self.id());
            if let ::core::option::Option::Some(field_name) = self.name().transpose() {
                f.field("name", &field_name);
            }
            if let ::core::option::Option::Some(field_timing) = self.timing().transpose() {
                f.field("timing", &field_timing);
            }
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<FlatTimingRef<'a>> for FlatTiming {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: FlatTimingRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                id: ::core::convert::TryInto::try_into(value.id()?)?,
                name: value.name()?.map(::core::convert::Into::into),
                timing: if let ::core::option::Option::Some(timing) = value.timing()? {
                    ::core::option::Option::Some(::planus::alloc::boxed::Box::new(
                        ::core::convert::TryInto::try_into(timing)?,
                    ))
                } else {
                    ::core::option::Option::None
                },
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for FlatTimingRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for FlatTimingRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[FlatTimingRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<FlatTiming>> for FlatTiming {
        type Value = ::planus::Offset<FlatTiming>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<FlatTiming>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for FlatTimingRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[FlatTimingRef]", "read_as_root", 0))
        }
    }

    /// The table `FlatResult`
    ///
    /// Generated from these locations:
    /// * Table `FlatResult` in the file `proto_defs/graph_format/graph.fbs:62`
    #[derive(
        Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
    )]
    pub struct FlatResult {
        /// The field `id` in the table `FlatResult`
        pub id: i64,
        /// The field `variables` in the table `FlatResult`
        pub variables: ::core::option::Option<::planus::alloc::vec::Vec<self::FlatVariable>>,
        /// The field `timing` in the table `FlatResult`
        pub timing: ::core::option::Option<::planus::alloc::vec::Vec<self::FlatTiming>>,
        /// The field `footprint_forward` in the table `FlatResult`
        pub footprint_forward: i64,
        /// The field `footprint_backward` in the table `FlatResult`
        pub footprint_backward: i64,
    }

    #[allow(clippy::derivable_impls)]
    impl ::core::default::Default for FlatResult {
        fn default() -> Self {
            Self {
                id: 0,
                variables: ::core::default::Default::default(),
                timing: ::core::default::Default::default(),
                footprint_forward: 0,
                footprint_backward: 0,
            }
        }
    }

    impl FlatResult {
        /// Creates a [FlatResultBuilder] for serializing an instance of this table.
        #[inline]
        pub fn builder() -> FlatResultBuilder<()> {
            FlatResultBuilder(())
        }

        #[allow(clippy::too_many_arguments)]
        pub fn create(
            builder: &mut ::planus::Builder,
            field_id: impl ::planus::WriteAsDefault<i64, i64>,
            field_variables: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>,
            field_timing: impl ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>,
            field_footprint_forward: impl ::planus::WriteAsDefault<i64, i64>,
            field_footprint_backward: impl ::planus::WriteAsDefault<i64, i64>,
        ) -> ::planus::Offset<Self> {
            let prepared_id = field_id.prepare(builder, &0);
            let prepared_variables = field_variables.prepare(builder);
            let prepared_timing = field_timing.prepare(builder);
            let prepared_footprint_forward = field_footprint_forward.prepare(builder, &0);
            let prepared_footprint_backward = field_footprint_backward.prepare(builder, &0);

            let mut table_writer: ::planus::table_writer::TableWriter<14> =
                ::core::default::Default::default();
            if prepared_id.is_some() {
                table_writer.write_entry::<i64>(0);
            }
            if prepared_footprint_forward.is_some() {
                table_writer.write_entry::<i64>(3);
            }
            if prepared_footprint_backward.is_some() {
                table_writer.write_entry::<i64>(4);
            }
            if prepared_variables.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>(1);
            }
            if prepared_timing.is_some() {
                table_writer.write_entry::<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>(2);
            }

            unsafe {
                table_writer.finish(builder, |object_writer| {
                    if let ::core::option::Option::Some(prepared_id) = prepared_id {
                        object_writer.write::<_, _, 8>(&prepared_id);
                    }
                    if let ::core::option::Option::Some(prepared_footprint_forward) = prepared_footprint_forward {
                        object_writer.write::<_, _, 8>(&prepared_footprint_forward);
                    }
                    if let ::core::option::Option::Some(prepared_footprint_backward) = prepared_footprint_backward {
                        object_writer.write::<_, _, 8>(&prepared_footprint_backward);
                    }
                    if let ::core::option::Option::Some(prepared_variables) = prepared_variables {
                        object_writer.write::<_, _, 4>(&prepared_variables);
                    }
                    if let ::core::option::Option::Some(prepared_timing) = prepared_timing {
                        object_writer.write::<_, _, 4>(&prepared_timing);
                    }
                });
            }
            builder.current_offset()
        }
    }

    impl ::planus::WriteAs<::planus::Offset<FlatResult>> for FlatResult {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatResult> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl ::planus::WriteAsOptional<::planus::Offset<FlatResult>> for FlatResult {
        type Prepared = ::planus::Offset<Self>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatResult>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl ::planus::WriteAsOffset<FlatResult> for FlatResult {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatResult> {
            FlatResult::create(
                builder,
                self.id,
                &self.variables,
                &self.timing,
                self.footprint_forward,
                self.footprint_backward,
            )
        }
    }

    /// Builder for serializing an instance of the [FlatResult] type.
    ///
    /// Can be created using the [FlatResult::builder] method.
    #[derive(Debug)]
    #[must_use]
    pub struct FlatResultBuilder<State>(State);

    impl FlatResultBuilder<()> {
        /// Setter for the [`id` field](FlatResult#structfield.id).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id<T0>(self, value: T0) -> FlatResultBuilder<(T0,)>
        where
            T0: ::planus::WriteAsDefault<i64, i64>,
        {
            FlatResultBuilder((value,))
        }

        /// Sets the [`id` field](FlatResult#structfield.id) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn id_as_default(self) -> FlatResultBuilder<(::planus::DefaultValue,)> {
            self.id(::planus::DefaultValue)
        }
    }

    impl<T0> FlatResultBuilder<(T0,)> {
        /// Setter for the [`variables` field](FlatResult#structfield.variables).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn variables<T1>(self, value: T1) -> FlatResultBuilder<(T0, T1)>
        where
            T1: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>,
        {
            let (v0,) = self.0;
            FlatResultBuilder((v0, value))
        }

        /// Sets the [`variables` field](FlatResult#structfield.variables) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn variables_as_null(self) -> FlatResultBuilder<(T0, ())> {
            self.variables(())
        }
    }

    impl<T0, T1> FlatResultBuilder<(T0, T1)> {
        /// Setter for the [`timing` field](FlatResult#structfield.timing).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timing<T2>(self, value: T2) -> FlatResultBuilder<(T0, T1, T2)>
        where
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>,
        {
            let (v0, v1) = self.0;
            FlatResultBuilder((v0, v1, value))
        }

        /// Sets the [`timing` field](FlatResult#structfield.timing) to null.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn timing_as_null(self) -> FlatResultBuilder<(T0, T1, ())> {
            self.timing(())
        }
    }

    impl<T0, T1, T2> FlatResultBuilder<(T0, T1, T2)> {
        /// Setter for the [`footprint_forward` field](FlatResult#structfield.footprint_forward).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn footprint_forward<T3>(self, value: T3) -> FlatResultBuilder<(T0, T1, T2, T3)>
        where
            T3: ::planus::WriteAsDefault<i64, i64>,
        {
            let (v0, v1, v2) = self.0;
            FlatResultBuilder((v0, v1, v2, value))
        }

        /// Sets the [`footprint_forward` field](FlatResult#structfield.footprint_forward) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn footprint_forward_as_default(self) -> FlatResultBuilder<(T0, T1, T2, ::planus::DefaultValue)> {
            self.footprint_forward(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3> FlatResultBuilder<(T0, T1, T2, T3)> {
        /// Setter for the [`footprint_backward` field](FlatResult#structfield.footprint_backward).
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn footprint_backward<T4>(self, value: T4) -> FlatResultBuilder<(T0, T1, T2, T3, T4)>
        where
            T4: ::planus::WriteAsDefault<i64, i64>,
        {
            let (v0, v1, v2, v3) = self.0;
            FlatResultBuilder((v0, v1, v2, v3, value))
        }

        /// Sets the [`footprint_backward` field](FlatResult#structfield.footprint_backward) to the default value.
        #[inline]
        #[allow(clippy::type_complexity)]
        pub fn footprint_backward_as_default(self) -> FlatResultBuilder<(T0, T1, T2, T3, ::planus::DefaultValue)> {
            self.footprint_backward(::planus::DefaultValue)
        }
    }

    impl<T0, T1, T2, T3, T4> FlatResultBuilder<(T0, T1, T2, T3, T4)> {
        /// Finish writing the builder to get an [Offset](::planus::Offset) to a serialized [FlatResult].
        #[inline]
        pub fn finish(self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatResult>
        where
            Self: ::planus::WriteAsOffset<FlatResult>,
        {
            ::planus::WriteAsOffset::prepare(&self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>,
            T3: ::planus::WriteAsDefault<i64, i64>,
            T4: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAs<::planus::Offset<FlatResult>> for FlatResultBuilder<(T0, T1, T2, T3, T4)>
    {
        type Prepared = ::planus::Offset<FlatResult>;

        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatResult> {
            ::planus::WriteAsOffset::prepare(self, builder)
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>,
            T3: ::planus::WriteAsDefault<i64, i64>,
            T4: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOptional<::planus::Offset<FlatResult>> for FlatResultBuilder<(T0, T1, T2, T3, T4)>
    {
        type Prepared = ::planus::Offset<FlatResult>;

        #[inline]
        fn prepare(
            &self,
            builder: &mut ::planus::Builder,
        ) -> ::core::option::Option<::planus::Offset<FlatResult>> {
            ::core::option::Option::Some(::planus::WriteAsOffset::prepare(self, builder))
        }
    }

    impl<
            T0: ::planus::WriteAsDefault<i64, i64>,
            T1: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatVariable>]>>,
            T2: ::planus::WriteAsOptional<::planus::Offset<[::planus::Offset<self::FlatTiming>]>>,
            T3: ::planus::WriteAsDefault<i64, i64>,
            T4: ::planus::WriteAsDefault<i64, i64>,
        > ::planus::WriteAsOffset<FlatResult> for FlatResultBuilder<(T0, T1, T2, T3, T4)>
    {
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> ::planus::Offset<FlatResult> {
            let (v0, v1, v2, v3, v4) = &self.0;
            FlatResult::create(builder, v0, v1, v2, v3, v4)
        }
    }

    /// Reference to a deserialized [FlatResult].
    #[derive(Copy, Clone)]
    pub struct FlatResultRef<'a>(::planus::table_reader::Table<'a>);

    impl<'a> FlatResultRef<'a> {
        /// Getter for the [`id` field](FlatResult#structfield.id).
        #[inline]
        pub fn id(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(0, "FlatResult", "id")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`variables` field](FlatResult#structfield.variables).
        #[inline]
        pub fn variables(&self) -> ::planus::Result<
            ::core::option::Option<::planus::Vector<'a, ::planus::Result<self::FlatVariableRef<'a>>>>,
        > {
            self.0.access(1, "FlatResult", "variables")
        }

        /// Getter for the [`timing` field](FlatResult#structfield.timing).
        #[inline]
        pub fn timing(&self) -> ::planus::Result<
            ::core::option::Option<::planus::Vector<'a, ::planus::Result<self::FlatTimingRef<'a>>>>,
        > {
            self.0.access(2, "FlatResult", "timing")
        }

        /// Getter for the [`footprint_forward` field](FlatResult#structfield.footprint_forward).
        #[inline]
        pub fn footprint_forward(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(3, "FlatResult", "footprint_forward")?
                    .unwrap_or(0),
            )
        }

        /// Getter for the [`footprint_backward` field](FlatResult#structfield.footprint_backward).
        #[inline]
        pub fn footprint_backward(&self) -> ::planus::Result<i64> {
            ::core::result::Result::Ok(
                self.0
                    .access(4, "FlatResult", "footprint_backward")?
                    .unwrap_or(0),
            )
        }
    }

    impl<'a> ::core::fmt::Debug for FlatResultRef<'a> {
        fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            let mut f = f.debug_struct("FlatResultRef");
            f.field("id", &self.id());
            if let ::core::option::Option::Some(field_variables) = self.variables().transpose() {
                f.field("variables", &field_variables);
            }
            if let ::core::option::Option::Some(field_timing) = self.timing().transpose() {
                f.field("timing", &field_timing);
            }
            f.field("footprint_forward", &self.footprint_forward());
            f.field("footprint_backward", &self.footprint_backward());
            f.finish()
        }
    }

    impl<'a> ::core::convert::TryFrom<FlatResultRef<'a>> for FlatResult {
        type Error = ::planus::Error;

        #[allow(unreachable_code)]
        fn try_from(value: FlatResultRef<'a>) -> ::planus::Result<Self> {
            ::core::result::Result::Ok(Self {
                id: ::core::convert::TryInto::try_into(value.id()?)?,
                variables: if let ::core::option::Option::Some(variables) = value.variables()? {
                    ::core::option::Option::Some(variables.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                timing: if let ::core::option::Option::Some(timing) = value.timing()? {
                    ::core::option::Option::Some(timing.to_vec_result()?)
                } else {
                    ::core::option::Option::None
                },
                footprint_forward: ::core::convert::TryInto::try_into(value.footprint_forward()?)?,
                footprint_backward: ::core::convert::TryInto::try_into(value.footprint_backward()?)?,
            })
        }
    }

    impl<'a> ::planus::TableRead<'a> for FlatResultRef<'a> {
        #[inline]
        fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::core::result::Result<Self, ::planus::errors::ErrorKind> {
            ::core::result::Result::Ok(Self(::planus::table_reader::Table::from_buffer(
                buffer, offset,
            )?))
        }
    }

    impl<'a> ::planus::VectorReadInner<'a> for FlatResultRef<'a> {
        type Error = ::planus::Error;
        const STRIDE: usize = 4;

        unsafe fn from_buffer(
            buffer: ::planus::SliceWithStartOffset<'a>,
            offset: usize,
        ) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(buffer, offset).map_err(|error_kind| {
                error_kind.with_error_location("[FlatResultRef]", "get", buffer.offset_from_start)
            })
        }
    }

    /// # Safety
    /// The planus compiler generates implementations that initialize
    /// the bytes in `write_values`.
    unsafe impl ::planus::VectorWrite<::planus::Offset<FlatResult>> for FlatResult {
        type Value = ::planus::Offset<FlatResult>;
        const STRIDE: usize = 4;
        #[inline]
        fn prepare(&self, builder: &mut ::planus::Builder) -> Self::Value {
            ::planus::WriteAs::prepare(self, builder)
        }

        #[inline]
        unsafe fn write_values(
            values: &[::planus::Offset<FlatResult>],
            bytes: *mut ::core::mem::MaybeUninit<u8>,
            buffer_position: u32,
        ) {
            let bytes = bytes as *mut [::core::mem::MaybeUninit<u8>; 4];
            for (i, v) in ::core::iter::Iterator::enumerate(values.iter()) {
                ::planus::WriteAsPrimitive::write(
                    v,
                    ::planus::Cursor::new(unsafe { &mut *bytes.add(i) }),
                    buffer_position - (Self::STRIDE * i) as u32,
                );
            }
        }
    }

    impl<'a> ::planus::ReadAsRoot<'a> for FlatResultRef<'a> {
        fn read_as_root(slice: &'a [u8]) -> ::planus::Result<Self> {
            ::planus::TableRead::from_buffer(
                ::planus::SliceWithStartOffset {
                    buffer: slice,
                    offset_from_start: 0,
                },
                0,
            )
            .map_err(|error_kind| error_kind.with_error_location("[FlatResultRef]", "read_as_root", 0))
        }
    }
}
