//! Tests for the Tag enum

use nbt_schema::Tag;

#[test]
fn test_tag_values() {
    assert_eq!(Tag::End as u8, 0);
    assert_eq!(Tag::Byte as u8, 1);
    assert_eq!(Tag::Short as u8, 2);
    assert_eq!(Tag::Int as u8, 3);
    assert_eq!(Tag::Long as u8, 4);
    assert_eq!(Tag::Float as u8, 5);
    assert_eq!(Tag::Double as u8, 6);
    assert_eq!(Tag::ByteArray as u8, 7);
    assert_eq!(Tag::String as u8, 8);
    assert_eq!(Tag::List as u8, 9);
    assert_eq!(Tag::Compound as u8, 10);
    assert_eq!(Tag::IntArray as u8, 11);
    assert_eq!(Tag::LongArray as u8, 12);
    assert_eq!(Tag::DoubleArray as u8, 13);
}

#[test]
fn test_tag_from_u8() {
    assert_eq!(Tag::from_u8(0), Some(Tag::End));
    assert_eq!(Tag::from_u8(1), Some(Tag::Byte));
    assert_eq!(Tag::from_u8(6), Some(Tag::Double));
    assert_eq!(Tag::from_u8(10), Some(Tag::Compound));
    assert_eq!(Tag::from_u8(13), Some(Tag::DoubleArray));

    assert_eq!(Tag::from_u8(14), None);
    assert_eq!(Tag::from_u8(0x80), None);
    assert_eq!(Tag::from_u8(u8::MAX), None);
}

#[test]
fn test_tag_is_primitive() {
    assert!(Tag::End.is_primitive());
    assert!(Tag::Byte.is_primitive());
    assert!(Tag::Short.is_primitive());
    assert!(Tag::Int.is_primitive());
    assert!(Tag::Long.is_primitive());
    assert!(Tag::Float.is_primitive());
    assert!(Tag::Double.is_primitive());

    assert!(!Tag::ByteArray.is_primitive());
    assert!(!Tag::String.is_primitive());
    assert!(!Tag::List.is_primitive());
    assert!(!Tag::Compound.is_primitive());
    assert!(!Tag::IntArray.is_primitive());
    assert!(!Tag::LongArray.is_primitive());
    assert!(!Tag::DoubleArray.is_primitive());
}

#[test]
fn test_tag_is_array() {
    assert!(Tag::ByteArray.is_array());
    assert!(Tag::IntArray.is_array());
    assert!(Tag::LongArray.is_array());
    assert!(Tag::DoubleArray.is_array());

    assert!(!Tag::End.is_array());
    assert!(!Tag::Byte.is_array());
    assert!(!Tag::Short.is_array());
    assert!(!Tag::Int.is_array());
    assert!(!Tag::Long.is_array());
    assert!(!Tag::Float.is_array());
    assert!(!Tag::Double.is_array());
    assert!(!Tag::String.is_array());
    assert!(!Tag::List.is_array());
    assert!(!Tag::Compound.is_array());
}

#[test]
fn test_tag_is_composite() {
    assert!(Tag::List.is_composite());
    assert!(Tag::Compound.is_composite());

    assert!(!Tag::End.is_composite());
    assert!(!Tag::Byte.is_composite());
    assert!(!Tag::Short.is_composite());
    assert!(!Tag::Int.is_composite());
    assert!(!Tag::Long.is_composite());
    assert!(!Tag::Float.is_composite());
    assert!(!Tag::Double.is_composite());
    assert!(!Tag::ByteArray.is_composite());
    assert!(!Tag::String.is_composite());
    assert!(!Tag::IntArray.is_composite());
    assert!(!Tag::LongArray.is_composite());
    assert!(!Tag::DoubleArray.is_composite());
}

#[test]
fn test_tag_equality() {
    assert_eq!(Tag::End, Tag::End);
    assert_eq!(Tag::Byte, Tag::Byte);
    assert_ne!(Tag::End, Tag::Byte);
    assert_ne!(Tag::List, Tag::Compound);
}

#[test]
fn test_tag_ordering() {
    assert!(Tag::End < Tag::Byte);
    assert!(Tag::Byte < Tag::Short);
    assert!(Tag::Short < Tag::Int);
    assert!(Tag::Int < Tag::Long);
    assert!(Tag::Long < Tag::Float);
    assert!(Tag::Float < Tag::Double);
    assert!(Tag::Double < Tag::ByteArray);
    assert!(Tag::ByteArray < Tag::String);
    assert!(Tag::String < Tag::List);
    assert!(Tag::List < Tag::Compound);
    assert!(Tag::Compound < Tag::IntArray);
    assert!(Tag::IntArray < Tag::LongArray);
    assert!(Tag::LongArray < Tag::DoubleArray);
}

#[test]
fn test_tag_debug() {
    assert_eq!(format!("{:?}", Tag::End), "End");
    assert_eq!(format!("{:?}", Tag::Byte), "Byte");
    assert_eq!(format!("{:?}", Tag::Compound), "Compound");
    assert_eq!(format!("{:?}", Tag::DoubleArray), "DoubleArray");
}

#[test]
fn test_tag_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Tag::Byte);
    set.insert(Tag::Int);
    set.insert(Tag::Byte); // duplicate

    assert_eq!(set.len(), 2);
    assert!(set.contains(&Tag::Byte));
    assert!(set.contains(&Tag::Int));
    assert!(!set.contains(&Tag::Long));
}
