pub mod priority_queue;

pub use priority_queue::LazyMinQueue;
