pub mod engine;

pub use engine::{is_one_goal_miss, score_match};
