//! Reading NBT binary data into owned value trees.
//!
//! [`read_document`] parses a complete byte slice into a [`Document`]. The
//! byte order is chosen by type parameter, so the same function reads both
//! Java Edition (big-endian) and Bedrock Edition (little-endian) data:
//!
//! ```
//! use nbt_schema::{BigEndian, Tag, read_document};
//!
//! // A root compound holding one byte entry named "a".
//! let data = [10, 0, 0, 1, 0, 1, b'a', 5, 0];
//! let document = read_document::<BigEndian>(&data).unwrap();
//! assert_eq!(document.root().tag(), Tag::Compound);
//! ```

use std::marker::PhantomData;

use zerocopy::byteorder;

use crate::{ByteOrder, Compound, Error, List, Result, Tag, Value, cold_path};

/// A parsed NBT document: the root tag's name and the root value.
///
/// NBT streams carry exactly one named root tag; the name is usually empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    name: String,
    root: Value,
}

impl Document {
    pub fn new(name: impl Into<String>, root: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// The root tag's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root value of the document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.root)
    }
}

/// Reads an NBT document from a byte slice.
///
/// The entire slice must be consumed; remaining bytes after the root tag
/// are reported as [`Error::TrailingData`]. A single `End` byte is the
/// empty document.
pub fn read_document<O: ByteOrder>(source: &[u8]) -> Result<Document> {
    let mut reader = Reader::<O> {
        source,
        pos: 0,
        _marker: PhantomData,
    };
    let document = reader.read_document()?;
    let remaining = source.len() - reader.pos;
    if remaining != 0 {
        cold_path();
        return Err(Error::TrailingData(remaining));
    }
    Ok(document)
}

struct Reader<'s, O: ByteOrder> {
    source: &'s [u8],
    pos: usize,
    _marker: PhantomData<O>,
}

impl<'s, O: ByteOrder> Reader<'s, O> {
    fn read_u8(&mut self) -> Result<u8> {
        let byte = *self.source.get(self.pos).ok_or(Error::EndOfFile)?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'s [u8]> {
        let end = self.pos.checked_add(len).ok_or(Error::EndOfFile)?;
        let bytes = self.source.get(self.pos..end).ok_or(Error::EndOfFile)?;
        self.pos = end;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.read_bytes(N)?.try_into().map_err(|_| Error::EndOfFile)
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let byte = self.read_u8()?;
        match Tag::from_u8(byte) {
            Some(tag) => Ok(tag),
            None => {
                cold_path();
                Err(Error::InvalidTagType(byte))
            }
        }
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(byteorder::U16::<O>::from_bytes(self.read_array::<2>()?).get())
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(byteorder::U32::<O>::from_bytes(self.read_array::<4>()?).get())
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.read_bytes(len)?;
        let decoded = simd_cesu8::mutf8::decode(bytes).map_err(|_| Error::InvalidString)?;
        Ok(decoded.into_owned())
    }

    fn read_document(&mut self) -> Result<Document> {
        let tag = self.read_tag()?;
        if tag == Tag::End {
            cold_path();
            return Ok(Document::new(String::new(), Value::End));
        }
        let name = self.read_string()?;
        let root = self.read_payload(tag)?;
        Ok(Document::new(name, root))
    }

    fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.read_u8()? as i8),
            Tag::Short => {
                Value::Short(byteorder::I16::<O>::from_bytes(self.read_array::<2>()?).get())
            }
            Tag::Int => Value::Int(byteorder::I32::<O>::from_bytes(self.read_array::<4>()?).get()),
            Tag::Long => {
                Value::Long(byteorder::I64::<O>::from_bytes(self.read_array::<8>()?).get())
            }
            Tag::Float => {
                Value::Float(byteorder::F32::<O>::from_bytes(self.read_array::<4>()?).get())
            }
            Tag::Double => {
                Value::Double(byteorder::F64::<O>::from_bytes(self.read_array::<8>()?).get())
            }
            Tag::ByteArray => {
                let len = self.read_u32()? as usize;
                let bytes = self.read_bytes(len)?;
                Value::ByteArray(bytes.iter().map(|&byte| byte as i8).collect())
            }
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
            Tag::IntArray => {
                let len = self.read_u32()? as usize;
                let bytes = self.read_bytes(len.checked_mul(4).ok_or(Error::EndOfFile)?)?;
                let mut data = Vec::with_capacity(len);
                for chunk in bytes.chunks_exact(4) {
                    let raw: [u8; 4] = chunk.try_into().map_err(|_| Error::EndOfFile)?;
                    data.push(byteorder::I32::<O>::from_bytes(raw).get());
                }
                Value::IntArray(data.into())
            }
            Tag::LongArray => {
                let len = self.read_u32()? as usize;
                let bytes = self.read_bytes(len.checked_mul(8).ok_or(Error::EndOfFile)?)?;
                let mut data = Vec::with_capacity(len);
                for chunk in bytes.chunks_exact(8) {
                    let raw: [u8; 8] = chunk.try_into().map_err(|_| Error::EndOfFile)?;
                    data.push(byteorder::I64::<O>::from_bytes(raw).get());
                }
                Value::LongArray(data.into())
            }
            Tag::DoubleArray => {
                let len = self.read_u32()? as usize;
                let bytes = self.read_bytes(len.checked_mul(8).ok_or(Error::EndOfFile)?)?;
                let mut data = Vec::with_capacity(len);
                for chunk in bytes.chunks_exact(8) {
                    let raw: [u8; 8] = chunk.try_into().map_err(|_| Error::EndOfFile)?;
                    data.push(byteorder::F64::<O>::from_bytes(raw).get());
                }
                Value::DoubleArray(data.into())
            }
        })
    }

    fn read_list(&mut self) -> Result<List> {
        let element_tag = self.read_tag()?;
        let len = self.read_u32()? as usize;
        if element_tag == Tag::End && len > 0 {
            cold_path();
            return Err(Error::InvalidTagType(Tag::End as u8));
        }
        let mut list = List::with_element_tag(element_tag);
        for _ in 0..len {
            let value = self.read_payload(element_tag)?;
            list.push_unchecked(value);
        }
        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                return Ok(compound);
            }
            let name = self.read_string()?;
            let value = self.read_payload(tag)?;
            compound.insert(name, value);
        }
    }
}
