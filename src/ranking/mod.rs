pub mod aggregation;
pub mod medals;
pub mod order;
pub mod progress;
pub mod records;
pub mod streaks;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregation::{Scope, aggregate};
pub use medals::{medal_counts, tournament_winners};
pub use order::{compare_entries, rank_entries};
pub use progress::leaderboard_progress;
pub use records::tournament_records;
pub use streaks::{Streaks, longest_streaks};
