pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod array;
mod compound;
#[cfg(feature = "serde")]
mod de;
mod error;
mod index;
mod list;
mod read;
mod schema;
#[cfg(feature = "serde")]
mod ser;
mod tag;
mod util;
mod value;
mod verify;
mod write;

pub use array::*;
pub use compound::*;
pub use error::*;
pub use index::*;
pub use list::*;
pub use read::*;
pub use schema::*;
pub use tag::*;
pub use util::*;
pub use value::*;
pub use verify::*;
pub use write::*;
