pub mod traits;
pub mod connection;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use connection::{ConnectionGraph, ConnectionRecord, DuplicatePolicy};
