pub mod audit;
pub mod columns;
pub mod connection;
pub mod matches;
pub mod predictions;
pub mod rules;
pub mod setup;
pub mod snapshot;
pub mod tournaments;
pub mod users;
pub mod winner_predictions;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use tournaments::NewTournament;
