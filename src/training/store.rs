//! Training session log.
//!
//! The store is newest-first and session-only. Callers depend on [`TrainingLogStore`] so a
//! persistent backend can be swapped in without changing the screens.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::{NewEntryDraft, SuccessFilter, SuccessLevel, SummaryCounts, TrainingEntry};

pub trait TrainingLogStore {
    /// Validate and prepend a new entry
    fn add(&mut self, draft: NewEntryDraft) -> Result<TrainingEntry, ValidationError>;

    /// Remove by id. Unknown ids are ignored and return `false`.
    fn remove(&mut self, id: &str) -> bool;

    /// All entries, newest first
    fn entries(&self) -> &[TrainingEntry];

    fn filter_by_success(&self, filter: SuccessFilter) -> Vec<TrainingEntry> {
        self.entries().iter().filter(|e| filter.matches(e.success)).cloned().collect()
    }

    /// Counts over the whole log, independent of any filtered view
    fn summary_counts(&self) -> SummaryCounts {
        self.entries().iter().fold(
            SummaryCounts { total: 0, high: 0, medium: 0, low: 0 },
            |mut counts, entry| {
                counts.total += 1;
                match entry.success {
                    SuccessLevel::High => counts.high += 1,
                    SuccessLevel::Medium => counts.medium += 1,
                    SuccessLevel::Low => counts.low += 1,
                }
                counts
            },
        )
    }

    fn get(&self, id: &str) -> Option<&TrainingEntry> {
        self.entries().iter().find(|e| e.id == id)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTrainingLog {
    entries: Vec<TrainingEntry>,
    last_id_millis: i64,
}

impl InMemoryTrainingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pre-filled with two example sessions
    pub fn with_sample_entries() -> Self {
        Self {
            entries: vec![
                sample_entry(
                    "1",
                    "Max",
                    (2024, 1, 15),
                    "Leash Training",
                    "Practiced loose leash walking in the park. Max showed improvement with \
                     fewer pulls.",
                    "30 min",
                ),
                sample_entry(
                    "2",
                    "Bella",
                    (2024, 1, 14),
                    "Scent Work",
                    "Introduced basic scent detection games. Bella was very engaged and found \
                     treats quickly.",
                    "15 min",
                ),
            ],
            last_id_millis: 0,
        }
    }

    /// Creation-time id, bumped when two entries land in the same millisecond
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis.to_string()
    }
}

fn sample_entry(
    id: &str,
    dog_name: &str,
    (year, month, day): (i32, u32, u32),
    activity: &str,
    notes: &str,
    duration: &str,
) -> TrainingEntry {
    TrainingEntry {
        id: id.to_string(),
        dog_name: dog_name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        activity: activity.to_string(),
        notes: notes.to_string(),
        duration: duration.to_string(),
        success: SuccessLevel::High,
        photos: Vec::new(),
        goals: None,
        next_steps: None,
    }
}

fn validate(draft: &NewEntryDraft) -> Result<(), ValidationError> {
    if draft.dog_name.trim().is_empty() {
        return Err(ValidationError::MissingDogName);
    }
    if draft.activity.trim().is_empty() {
        return Err(ValidationError::MissingActivity);
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl TrainingLogStore for InMemoryTrainingLog {
    fn add(&mut self, draft: NewEntryDraft) -> Result<TrainingEntry, ValidationError> {
        if let Err(e) = validate(&draft) {
            debug!(error = %e, "rejected training entry");
            return Err(e);
        }

        let entry = TrainingEntry {
            id: self.next_id(),
            dog_name: draft.dog_name.trim().to_string(),
            date: Utc::now().date_naive(),
            activity: draft.activity.trim().to_string(),
            notes: draft.notes.trim().to_string(),
            duration: draft.duration.trim().to_string(),
            success: draft.success,
            photos: draft.photos,
            goals: non_blank(draft.goals),
            next_steps: non_blank(draft.next_steps),
        };

        info!(id = %entry.id, dog = %entry.dog_name, activity = %entry.activity, "training entry added");
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!(id, "training entry removed");
        } else {
            debug!(id, "remove ignored, no such entry");
        }
        removed
    }

    fn entries(&self) -> &[TrainingEntry] {
        &self.entries
    }
}
