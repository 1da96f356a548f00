//! Product selection by id or (fuzzy) name.

pub mod fuzzy;
pub mod lookup;

pub use lookup::resolve;
