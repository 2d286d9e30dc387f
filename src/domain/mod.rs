pub mod models;
pub mod reports;
pub mod snapshot;

pub use models::*;
pub use reports::*;
pub use snapshot::PoolSnapshot;
