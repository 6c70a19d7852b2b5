//! Pure data structures for the inventory.

mod product;
mod record;

pub use product::{Product, ProductCreate, ProductKind, ProductUpdate};
pub use record::{ProductRecord, RecordKind};
