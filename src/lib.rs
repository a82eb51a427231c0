//! Dog Training Assistant - training answers, a session training log and a provider directory
//!
//! Everything runs locally and lives in memory for the length of a session:
//!
//! - [`assistant`]: keyword-matched canned answers, related questions and a bounded search history
//! - [`directory`]: the fixed list of local dog service providers, filtered and sorted, with
//!   contact launching
//! - [`training`]: the training session log with success filtering and summary counts
//!
//! The binary exposes these as one-shot commands and as an interactive terminal front-end.
//!
//! # Example
//!
//! ```
//! use dog_training_assistant::models::{CategoryFilter, SortKey};
//! use dog_training_assistant::{query_providers, seed_providers, synthesize};
//!
//! let answer = synthesize("How do I stop leash pulling?");
//! assert_eq!(answer.suggestion_list.len(), 4);
//!
//! let nearest = query_providers(&seed_providers(), "", CategoryFilter::All, SortKey::Distance);
//! assert!(nearest.windows(2).all(|w| w[0].distance <= w[1].distance));
//! ```

pub mod assistant;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod models;
pub mod training;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use assistant::{SearchSession, synthesize};
pub use config::AppConfig;
pub use directory::{query_providers, seed_providers};
pub use error::{ConfigError, LaunchError, PickerError, ValidationError};
pub use training::{InMemoryTrainingLog, TrainingLogStore};
