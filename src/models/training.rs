use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activities offered as presets in the entry form; free text is also accepted
pub const ACTIVITY_CATEGORIES: [&str; 8] = [
    "Leash Training",
    "Recall Training",
    "Sit Command",
    "Stay Command",
    "Crate Training",
    "Scent Work",
    "Socialization",
    "Trick Training",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl SuccessLevel {
    pub const ALL: [SuccessLevel; 3] = [SuccessLevel::High, SuccessLevel::Medium, SuccessLevel::Low];

    pub fn label(&self) -> &'static str {
        match self {
            SuccessLevel::High => "High",
            SuccessLevel::Medium => "Medium",
            SuccessLevel::Low => "Low",
        }
    }

    /// Cycle High -> Medium -> Low -> High
    pub fn next(&self) -> SuccessLevel {
        match self {
            SuccessLevel::High => SuccessLevel::Medium,
            SuccessLevel::Medium => SuccessLevel::Low,
            SuccessLevel::Low => SuccessLevel::High,
        }
    }
}

impl fmt::Display for SuccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SuccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(SuccessLevel::High),
            "medium" => Ok(SuccessLevel::Medium),
            "low" => Ok(SuccessLevel::Low),
            other => Err(format!("unknown success level '{}'", other)),
        }
    }
}

/// Success-tier view applied to the training log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessFilter {
    #[default]
    All,
    Level(SuccessLevel),
}

impl SuccessFilter {
    pub fn matches(&self, level: SuccessLevel) -> bool {
        match self {
            SuccessFilter::All => true,
            SuccessFilter::Level(wanted) => *wanted == level,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuccessFilter::All => "All",
            SuccessFilter::Level(level) => level.label(),
        }
    }

    /// All -> High -> Medium -> Low -> All
    pub fn next(&self) -> SuccessFilter {
        match self {
            SuccessFilter::All => SuccessFilter::Level(SuccessLevel::High),
            SuccessFilter::Level(SuccessLevel::High) => SuccessFilter::Level(SuccessLevel::Medium),
            SuccessFilter::Level(SuccessLevel::Medium) => SuccessFilter::Level(SuccessLevel::Low),
            SuccessFilter::Level(SuccessLevel::Low) => SuccessFilter::All,
        }
    }
}

/// Reference to an image on the local device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef(pub PathBuf);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub id: String,
    pub dog_name: String,
    pub date: NaiveDate,
    pub activity: String,
    pub notes: String,
    pub duration: String,
    pub success: SuccessLevel,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
}

/// User-supplied fields for a new training entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntryDraft {
    pub dog_name: String,
    pub activity: String,
    pub notes: String,
    pub duration: String,
    pub success: SuccessLevel,
    pub photos: Vec<PhotoRef>,
    pub goals: Option<String>,
    pub next_steps: Option<String>,
}

impl NewEntryDraft {
    pub fn new(dog_name: impl Into<String>, activity: impl Into<String>) -> Self {
        Self { dog_name: dog_name.into(), activity: activity.into(), ..Default::default() }
    }

    pub fn success(mut self, success: SuccessLevel) -> Self {
        self.success = success;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}
