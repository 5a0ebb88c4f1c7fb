pub mod directory;
pub mod record;

pub use directory::StationDirectory;
pub use record::{Station, StationId, StationKey, StationRecord};
