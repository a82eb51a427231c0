//! New training entry form.

use crate::error::PickerError;
use crate::models::{ACTIVITY_CATEGORIES, NewEntryDraft, SuccessLevel};
use crate::training::{MediaLibrary, parse_photo_list};

const MAX_FIELD_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    DogName,
    Activity,
    Duration,
    Success,
    Notes,
    Goals,
    NextSteps,
    Photos,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::DogName,
        FormField::Activity,
        FormField::Duration,
        FormField::Success,
        FormField::Notes,
        FormField::Goals,
        FormField::NextSteps,
        FormField::Photos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::DogName => "Dog name *",
            FormField::Activity => "Activity *",
            FormField::Duration => "Duration",
            FormField::Success => "Success",
            FormField::Notes => "Notes",
            FormField::Goals => "Goals",
            FormField::NextSteps => "Next steps",
            FormField::Photos => "Photos",
        }
    }

    /// Text fields take typed characters; Success is chosen with Left/Right
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Success)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub dog_name: String,
    pub activity: String,
    pub duration: String,
    pub success: SuccessLevel,
    pub notes: String,
    pub goals: String,
    pub next_steps: String,
    /// Comma-separated image paths
    pub photos: String,
    focus: usize,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::DogName => &self.dog_name,
            FormField::Activity => &self.activity,
            FormField::Duration => &self.duration,
            FormField::Success => self.success.label(),
            FormField::Notes => &self.notes,
            FormField::Goals => &self.goals,
            FormField::NextSteps => &self.next_steps,
            FormField::Photos => &self.photos,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus() {
            FormField::DogName => Some(&mut self.dog_name),
            FormField::Activity => Some(&mut self.activity),
            FormField::Duration => Some(&mut self.duration),
            FormField::Success => None,
            FormField::Notes => Some(&mut self.notes),
            FormField::Goals => Some(&mut self.goals),
            FormField::NextSteps => Some(&mut self.next_steps),
            FormField::Photos => Some(&mut self.photos),
        }
    }

    pub fn input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.focused_text_mut()
            && text.chars().count() < MAX_FIELD_CHARS
        {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Left/Right: cycles the success level, or steps through the activity categories
    pub fn cycle(&mut self, forward: bool) {
        match self.focus() {
            FormField::Success => {
                self.success = if forward {
                    self.success.next()
                } else {
                    // three levels, so two steps forward is one back
                    self.success.next().next()
                };
            }
            FormField::Activity => {
                let current = ACTIVITY_CATEGORIES.iter().position(|c| *c == self.activity);
                let len = ACTIVITY_CATEGORIES.len();
                let idx = match (current, forward) {
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                    (None, true) => 0,
                    (None, false) => len - 1,
                };
                self.activity = ACTIVITY_CATEGORIES[idx].to_string();
            }
            _ => {}
        }
    }

    /// Resolve photos through the media library and build the draft.
    /// Required-field validation is left to the store.
    pub fn to_draft(&self, media: &mut dyn MediaLibrary) -> Result<NewEntryDraft, PickerError> {
        let photos = media.pick(&parse_photo_list(&self.photos))?;
        Ok(NewEntryDraft {
            dog_name: self.dog_name.clone(),
            activity: self.activity.clone(),
            notes: self.notes.clone(),
            duration: self.duration.clone(),
            success: self.success,
            photos,
            goals: Some(self.goals.clone()),
            next_steps: Some(self.next_steps.clone()),
        })
    }
}
