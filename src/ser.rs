//! Serde serialization for value trees.
//!
//! # Value to Serde Mapping
//!
//! | Value | Serde call |
//! |-------|------------|
//! | `End` | `serialize_unit` |
//! | `Byte` .. `Double` | exact-width `serialize_i8` .. `serialize_f64` |
//! | `String` | `serialize_str` |
//! | `ByteArray`, `IntArray`, `LongArray`, `DoubleArray` | sequence |
//! | `List` | sequence |
//! | `Compound` | map |
//!
//! Typed arrays and lists both serialize as sequences, so array identity is
//! not preserved through a self-describing format: a re-read `IntArray`
//! comes back as a `List` of ints.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{Compound, Value};

fn serialize_elements<T: Serialize, S: Serializer>(
    serializer: S,
    len: usize,
    elements: impl Iterator<Item = T>,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(len))?;
    for element in elements {
        seq.serialize_element(&element)?;
    }
    seq.end()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(value) => serializer.serialize_i8(*value),
            Value::Short(value) => serializer.serialize_i16(*value),
            Value::Int(value) => serializer.serialize_i32(*value),
            Value::Long(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f32(*value),
            Value::Double(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::ByteArray(array) => {
                serialize_elements(serializer, array.len(), array.iter())
            }
            Value::IntArray(array) => serialize_elements(serializer, array.len(), array.iter()),
            Value::LongArray(array) => serialize_elements(serializer, array.len(), array.iter()),
            Value::DoubleArray(array) => {
                serialize_elements(serializer, array.len(), array.iter())
            }
            Value::List(list) => serialize_elements(serializer, list.len(), list.iter()),
            Value::Compound(compound) => compound.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
