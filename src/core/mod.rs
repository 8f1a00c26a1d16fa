pub mod column;
pub mod primitives;
pub mod table;

pub use column::{Column, ColumnData, ColumnKind};
pub use table::{Index, Table};
