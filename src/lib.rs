pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod localization;
pub mod models;

pub use error::TallyError;

// Re-export commonly used types
pub use classifier::{classify, classify_default, Classifier};
pub use models::{AliasTable, Category, GenderCounts, TallyReport};

pub use config::TallyConfig;

pub use cli::CliHandler;
