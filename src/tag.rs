/// The kind discriminant shared by value trees and schema trees.
///
/// Tags 0-12 are the standard NBT tag types. [`Tag::DoubleArray`] (13) is the
/// double-precision array extension; it behaves like the other array tags in
/// every operation.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
    DoubleArray = 13,
}

impl Tag {
    /// Creates a `Tag` from a raw byte value.
    ///
    /// Returns `None` if `value` is not a valid tag type (0-13).
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_schema::Tag;
    ///
    /// assert_eq!(Tag::from_u8(3), Some(Tag::Int));
    /// assert_eq!(Tag::from_u8(13), Some(Tag::DoubleArray));
    /// assert_eq!(Tag::from_u8(14), None);
    /// ```
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 => Self::LongArray,
            13 => Self::DoubleArray,
            _ => return None,
        })
    }

    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: End, Byte, Short, Int, Long, Float, Double.
    /// These tags store their values directly without additional structure.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_schema::Tag;
    ///
    /// assert!(Tag::Int.is_primitive());
    /// assert!(Tag::Double.is_primitive());
    /// assert!(!Tag::List.is_primitive());
    /// assert!(!Tag::ByteArray.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::End
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns `true` if this is an array tag type.
    ///
    /// Array tags are: ByteArray, IntArray, LongArray, DoubleArray.
    /// These store contiguous sequences of primitive values.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_schema::Tag;
    ///
    /// assert!(Tag::ByteArray.is_array());
    /// assert!(Tag::DoubleArray.is_array());
    /// assert!(!Tag::List.is_array());
    /// ```
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ByteArray | Self::IntArray | Self::LongArray | Self::DoubleArray
        )
    }

    /// Returns `true` if this is a composite tag type.
    ///
    /// Composite tags are: List, Compound.
    /// These contain other NBT values as children.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_schema::Tag;
    ///
    /// assert!(Tag::List.is_composite());
    /// assert!(Tag::Compound.is_composite());
    /// assert!(!Tag::Int.is_composite());
    /// ```
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}
