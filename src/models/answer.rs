use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic selected by keyword dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Sniffing,
    Biting,
    Leash,
    General,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Sniffing => "Sniffing & Enrichment",
            Topic::Biting => "Puppy Biting",
            Topic::Leash => "Leash Training",
            Topic::General => "General Training",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub topic: Topic,
    pub answer_text: String,
    pub source_list: Vec<String>,
    pub suggestion_list: Vec<String>,
    pub confidence_score: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub id: String,
    pub query: String,
    pub timestamp: DateTime<Utc>,
}
