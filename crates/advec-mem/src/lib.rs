#[macro_use]
mod macros;

pub mod raw_storage;
pub mod vec_types;

mod capacity_error;
mod capacity_policy;
mod global_alloc;

pub use capacity_error::CapacityError;
pub use raw_storage::RawStorage;
pub use vec_types::{Vector, IntoIter, Pointer};
