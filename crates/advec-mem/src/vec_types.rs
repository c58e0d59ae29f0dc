mod pointer;
mod vector;
mod iter;
mod impls;

pub use pointer::Pointer;
pub use vector::Vector;
pub use iter::IntoIter;

pub type Result<T> = core::result::Result<T, crate::CapacityError>;
