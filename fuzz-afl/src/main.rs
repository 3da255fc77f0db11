use nbt_schema::{BigEndian, LittleEndian, read_document, write_document};

#[macro_use]
extern crate afl;
extern crate nbt_schema;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(doc) = read_document::<BigEndian>(data) {
            let _ = write_document::<BigEndian>(&doc);
            let _ = write_document::<LittleEndian>(&doc);
        }
        if let Ok(doc) = read_document::<LittleEndian>(data) {
            let _ = write_document::<LittleEndian>(&doc);
            let _ = write_document::<BigEndian>(&doc);
        }
    });
}
