pub mod settings;

pub use settings::{AppConfig, DatabaseSettings, DefaultRules, LockTimeSettings};
