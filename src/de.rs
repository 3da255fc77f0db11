//! Serde deserialization for value trees.
//!
//! # Serde to Value Mapping
//!
//! | Serde input | Value |
//! |-------------|-------|
//! | `bool` | `Byte` (0 or 1) |
//! | `i8` / `i16` / `i32` / `i64` | `Byte` / `Short` / `Int` / `Long` |
//! | `u8` / `u16` / `u32` | next wider signed kind |
//! | `u64` | `Long`, or an error past `i64::MAX` |
//! | `f32` / `f64` | `Float` / `Double` |
//! | string, `char` | `String` |
//! | bytes | `ByteArray` |
//! | sequence | `List` (elements must share one kind) |
//! | map | `Compound` |
//! | unit, none | `End` |
//!
//! A heterogeneous sequence fails with the underlying
//! [`TagMismatch`](crate::Error::TagMismatch) surfaced as a
//! deserialization error.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::{Compound, List, Value};

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an NBT-representable value")
    }

    fn visit_bool<E: Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Byte(value as i8))
    }

    fn visit_i8<E: Error>(self, value: i8) -> Result<Value, E> {
        Ok(Value::Byte(value))
    }

    fn visit_i16<E: Error>(self, value: i16) -> Result<Value, E> {
        Ok(Value::Short(value))
    }

    fn visit_i32<E: Error>(self, value: i32) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Long(value))
    }

    fn visit_u8<E: Error>(self, value: u8) -> Result<Value, E> {
        Ok(Value::Short(value as i16))
    }

    fn visit_u16<E: Error>(self, value: u16) -> Result<Value, E> {
        Ok(Value::Int(value as i32))
    }

    fn visit_u32<E: Error>(self, value: u32) -> Result<Value, E> {
        Ok(Value::Long(value as i64))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Value, E> {
        i64::try_from(value)
            .map(Value::Long)
            .map_err(|_| E::custom("integer does not fit in an NBT long"))
    }

    fn visit_f32<E: Error>(self, value: f32) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Double(value))
    }

    fn visit_char<E: Error>(self, value: char) -> Result<Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E: Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_bytes<E: Error>(self, value: &[u8]) -> Result<Value, E> {
        Ok(Value::ByteArray(
            value.iter().map(|&byte| byte as i8).collect(),
        ))
    }

    fn visit_byte_buf<E: Error>(self, value: Vec<u8>) -> Result<Value, E> {
        self.visit_bytes(&value)
    }

    fn visit_unit<E: Error>(self) -> Result<Value, E> {
        Ok(Value::End)
    }

    fn visit_none<E: Error>(self) -> Result<Value, E> {
        Ok(Value::End)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut list = List::new();
        while let Some(element) = seq.next_element::<Value>()? {
            list.push(element).map_err(A::Error::custom)?;
        }
        Ok(Value::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut compound = Compound::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            compound.insert(name, value);
        }
        Ok(Value::Compound(compound))
    }
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CompoundVisitor)
    }
}

struct CompoundVisitor;

impl<'de> Visitor<'de> for CompoundVisitor {
    type Value = Compound;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of tag names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Compound, A::Error> {
        let mut compound = Compound::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            compound.insert(name, value);
        }
        Ok(compound)
    }
}
