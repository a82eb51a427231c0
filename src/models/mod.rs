//! Data models for the dog training assistant.
//!
//! - [`AnswerResult`] / [`SearchHistoryItem`] - canned answers and the per-session search history
//! - [`ServiceProvider`] / [`Review`] - read-only provider directory records
//! - [`TrainingEntry`] / [`NewEntryDraft`] - user-created training session records
//!
//! All models derive serde so they can be printed as JSON by the CLI.

pub mod answer;
pub mod provider;
pub mod training;

pub use answer::{AnswerResult, SearchHistoryItem, Topic};
pub use provider::{CategoryFilter, PriceRange, Review, ServiceProvider, ServiceType, SortKey};
pub use training::{
    ACTIVITY_CATEGORIES, NewEntryDraft, PhotoRef, SuccessFilter, SuccessLevel, SummaryCounts,
    TrainingEntry,
};
