use std::fmt::{self, Display};

use crate::{
    ByteArray, Compound, DoubleArray, Error, Index, IntArray, List, LongArray, Result, Tag,
};

/// One node of an NBT tree, tagged with its kind.
///
/// A value deeply owns its children; no subtree is ever shared between
/// trees. [`Clone`] is therefore a deep copy: mutating a clone never affects
/// the value it was cloned from, and vice versa, however deeply nested.
///
/// The typed accessors (`as_byte`, `as_compound`, ...) return the payload
/// only when the kind matches and fail with [`Error::TagMismatch`]
/// otherwise. There is no cross-kind coercion.
///
/// # Example
///
/// ```
/// use nbt_schema::{Compound, Tag, Value};
///
/// let mut root = Compound::new();
/// root.insert("id", 42i32);
/// root.insert("name", "oak");
///
/// let value = Value::from(root);
/// assert_eq!(value.tag(), Tag::Compound);
/// assert_eq!(value.get("id").unwrap().as_int().unwrap(), 42);
/// assert!(value.get("name").unwrap().as_int().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
    DoubleArray(DoubleArray),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::End
    }
}

macro_rules! as_scalar {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $type:ty) => {
        $(#[$doc])*
        pub fn $name(&self) -> Result<$type> {
            match self {
                Value::$variant(value) => Ok(*value),
                other => Err(Error::TagMismatch {
                    expected: Tag::$variant,
                    actual: other.tag(),
                }),
            }
        }
    };
}

macro_rules! as_payload {
    ($name:ident, $name_mut:ident, $variant:ident, $type:ty) => {
        pub fn $name(&self) -> Result<&$type> {
            match self {
                Value::$variant(value) => Ok(value),
                other => Err(Error::TagMismatch {
                    expected: Tag::$variant,
                    actual: other.tag(),
                }),
            }
        }

        pub fn $name_mut(&mut self) -> Result<&mut $type> {
            match self {
                Value::$variant(value) => Ok(value),
                other => Err(Error::TagMismatch {
                    expected: Tag::$variant,
                    actual: other.tag(),
                }),
            }
        }
    };
}

impl Value {
    /// The kind discriminant of this value. Never fails; always consistent
    /// with the payload the value actually holds.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::DoubleArray(_) => Tag::DoubleArray,
        }
    }

    as_scalar!(
        /// The payload of a [`Value::Byte`], or [`Error::TagMismatch`].
        as_byte,
        Byte,
        i8
    );
    as_scalar!(as_short, Short, i16);
    as_scalar!(as_int, Int, i32);
    as_scalar!(as_long, Long, i64);
    as_scalar!(as_float, Float, f32);
    as_scalar!(as_double, Double, f64);

    /// The payload of a [`Value::String`], or [`Error::TagMismatch`].
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(Error::TagMismatch {
                expected: Tag::String,
                actual: other.tag(),
            }),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(Error::TagMismatch {
                expected: Tag::String,
                actual: other.tag(),
            }),
        }
    }

    as_payload!(as_byte_array, as_byte_array_mut, ByteArray, ByteArray);
    as_payload!(as_int_array, as_int_array_mut, IntArray, IntArray);
    as_payload!(as_long_array, as_long_array_mut, LongArray, LongArray);
    as_payload!(
        as_double_array,
        as_double_array_mut,
        DoubleArray,
        DoubleArray
    );
    as_payload!(as_list, as_list_mut, List, List);
    as_payload!(as_compound, as_compound_mut, Compound, Compound);

    pub fn into_list(self) -> Result<List> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(Error::TagMismatch {
                expected: Tag::List,
                actual: other.tag(),
            }),
        }
    }

    pub fn into_compound(self) -> Result<Compound> {
        match self {
            Value::Compound(compound) => Ok(compound),
            other => Err(Error::TagMismatch {
                expected: Tag::Compound,
                actual: other.tag(),
            }),
        }
    }

    /// Single-level child access: a `usize` indexes a list, a string name
    /// looks up a compound entry.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_schema::{List, Value};
    ///
    /// let mut list = List::new();
    /// list.push(1i32).unwrap();
    /// list.push(2i32).unwrap();
    ///
    /// let value = Value::from(list);
    /// assert_eq!(value.get(1), Some(&Value::Int(2)));
    /// assert_eq!(value.get(5), None);
    /// assert_eq!(value.get("name"), None);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    pub fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<i8>> for Value {
    fn from(value: Vec<i8>) -> Self {
        Value::ByteArray(value.into())
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Value::IntArray(value.into())
    }
}

impl From<Vec<i64>> for Value {
    fn from(value: Vec<i64>) -> Self {
        Value::LongArray(value.into())
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::DoubleArray(value.into())
    }
}

impl From<ByteArray> for Value {
    fn from(value: ByteArray) -> Self {
        Value::ByteArray(value)
    }
}

impl From<IntArray> for Value {
    fn from(value: IntArray) -> Self {
        Value::IntArray(value)
    }
}

impl From<LongArray> for Value {
    fn from(value: LongArray) -> Self {
        Value::LongArray(value)
    }
}

impl From<DoubleArray> for Value {
    fn from(value: DoubleArray) -> Self {
        Value::DoubleArray(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Compound> for Value {
    fn from(value: Compound) -> Self {
        Value::Compound(value)
    }
}

fn write_joined<T: Display>(
    formatter: &mut fmt::Formatter,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            formatter.write_str(",")?;
        }
        write!(formatter, "{item}")?;
    }
    Ok(())
}

/// SNBT-flavored textual rendering. Advisory only; not a stable format.
impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::End => formatter.write_str("END"),
            Value::Byte(value) => write!(formatter, "{value}b"),
            Value::Short(value) => write!(formatter, "{value}s"),
            Value::Int(value) => write!(formatter, "{value}"),
            Value::Long(value) => write!(formatter, "{value}L"),
            Value::Float(value) => write!(formatter, "{value}f"),
            Value::Double(value) => write!(formatter, "{value}d"),
            Value::ByteArray(array) => {
                formatter.write_str("[B;")?;
                write_joined(formatter, array.iter())?;
                formatter.write_str("]")
            }
            Value::String(value) => write!(formatter, "{value:?}"),
            Value::List(list) => {
                formatter.write_str("[")?;
                write_joined(formatter, list.iter())?;
                formatter.write_str("]")
            }
            Value::Compound(compound) => {
                formatter.write_str("{")?;
                for (i, (name, value)) in compound.iter().enumerate() {
                    if i > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, "{name}:{value}")?;
                }
                formatter.write_str("}")
            }
            Value::IntArray(array) => {
                formatter.write_str("[I;")?;
                write_joined(formatter, array.iter())?;
                formatter.write_str("]")
            }
            Value::LongArray(array) => {
                formatter.write_str("[L;")?;
                write_joined(formatter, array.iter())?;
                formatter.write_str("]")
            }
            Value::DoubleArray(array) => {
                formatter.write_str("[D;")?;
                write_joined(formatter, array.iter())?;
                formatter.write_str("]")
            }
        }
    }
}
