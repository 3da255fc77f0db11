//! Writing owned value trees as NBT binary data.
//!
//! [`write_document`] is the exact inverse of
//! [`read_document`](crate::read_document) for any tree the reader can
//! produce. The byte order is chosen by type parameter, as on the read
//! side.

use std::io::Write;

use zerocopy::byteorder;

use crate::{ByteOrder, Compound, Document, Error, List, Result, Tag, Value, cold_path};

/// Encodes a document to a byte vector.
///
/// # Example
///
/// ```
/// use nbt_schema::{BigEndian, Compound, Document, read_document, write_document};
///
/// let mut root = Compound::new();
/// root.insert("a", 5i8);
/// let document = Document::new("", root);
///
/// let data = write_document::<BigEndian>(&document).unwrap();
/// assert_eq!(read_document::<BigEndian>(&data).unwrap(), document);
/// ```
pub fn write_document<O: ByteOrder>(document: &Document) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_root::<O>(document, &mut out)?;
    Ok(out)
}

/// Encodes a document to a writer.
pub fn write_document_to<O: ByteOrder>(document: &Document, mut writer: impl Write) -> Result<()> {
    let mut out = Vec::new();
    write_root::<O>(document, &mut out)?;
    writer.write_all(&out).map_err(Error::IO)
}

fn write_root<O: ByteOrder>(document: &Document, out: &mut Vec<u8>) -> Result<()> {
    let root = document.root();
    if let Value::End = root {
        cold_path();
        out.push(Tag::End as u8);
        return Ok(());
    }
    out.push(root.tag() as u8);
    write_string::<O>(document.name(), out)?;
    write_payload::<O>(root, out)
}

fn write_string<O: ByteOrder>(text: &str, out: &mut Vec<u8>) -> Result<()> {
    let encoded = simd_cesu8::mutf8::encode(text);
    if encoded.len() > u16::MAX as usize {
        cold_path();
        return Err(Error::StringTooLong(encoded.len()));
    }
    out.extend_from_slice(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes());
    out.extend_from_slice(&encoded);
    Ok(())
}

fn write_len<O: ByteOrder>(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len > u32::MAX as usize {
        cold_path();
        return Err(Error::ListTooLong(len));
    }
    out.extend_from_slice(&byteorder::U32::<O>::new(len as u32).to_bytes());
    Ok(())
}

fn write_payload<O: ByteOrder>(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::End => {
            cold_path();
            Err(Error::InvalidTagType(Tag::End as u8))
        }
        Value::Byte(value) => {
            out.push(*value as u8);
            Ok(())
        }
        Value::Short(value) => {
            out.extend_from_slice(&byteorder::I16::<O>::new(*value).to_bytes());
            Ok(())
        }
        Value::Int(value) => {
            out.extend_from_slice(&byteorder::I32::<O>::new(*value).to_bytes());
            Ok(())
        }
        Value::Long(value) => {
            out.extend_from_slice(&byteorder::I64::<O>::new(*value).to_bytes());
            Ok(())
        }
        Value::Float(value) => {
            out.extend_from_slice(&byteorder::F32::<O>::new(*value).to_bytes());
            Ok(())
        }
        Value::Double(value) => {
            out.extend_from_slice(&byteorder::F64::<O>::new(*value).to_bytes());
            Ok(())
        }
        Value::ByteArray(array) => {
            write_len::<O>(array.len(), out)?;
            out.extend(array.iter().map(|&byte| byte as u8));
            Ok(())
        }
        Value::String(text) => write_string::<O>(text, out),
        Value::List(list) => write_list::<O>(list, out),
        Value::Compound(compound) => write_compound::<O>(compound, out),
        Value::IntArray(array) => {
            write_len::<O>(array.len(), out)?;
            for &element in array.iter() {
                out.extend_from_slice(&byteorder::I32::<O>::new(element).to_bytes());
            }
            Ok(())
        }
        Value::LongArray(array) => {
            write_len::<O>(array.len(), out)?;
            for &element in array.iter() {
                out.extend_from_slice(&byteorder::I64::<O>::new(element).to_bytes());
            }
            Ok(())
        }
        Value::DoubleArray(array) => {
            write_len::<O>(array.len(), out)?;
            for &element in array.iter() {
                out.extend_from_slice(&byteorder::F64::<O>::new(element).to_bytes());
            }
            Ok(())
        }
    }
}

fn write_list<O: ByteOrder>(list: &List, out: &mut Vec<u8>) -> Result<()> {
    out.push(list.element_tag() as u8);
    write_len::<O>(list.len(), out)?;
    for value in list.iter() {
        if value.tag() != list.element_tag() {
            cold_path();
            return Err(Error::TagMismatch {
                expected: list.element_tag(),
                actual: value.tag(),
            });
        }
        write_payload::<O>(value, out)?;
    }
    Ok(())
}

fn write_compound<O: ByteOrder>(compound: &Compound, out: &mut Vec<u8>) -> Result<()> {
    for (name, value) in compound.iter() {
        let tag = value.tag();
        if tag == Tag::End {
            cold_path();
            return Err(Error::InvalidTagType(Tag::End as u8));
        }
        out.push(tag as u8);
        write_string::<O>(name, out)?;
        write_payload::<O>(value, out)?;
    }
    out.push(Tag::End as u8);
    Ok(())
}
