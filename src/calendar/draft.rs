use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::event::Event;

/// Text inputs of the create dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    TrainerName,
    ExerciseName,
    CustomerName,
    Start,
    End,
    ImagePath,
}

/// A single change to a draft. Every editable field has a variant, so new
/// fields need a new variant rather than a new handler.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Text(TextField, String),
    AllDay(bool),
    /// Result of an image read. `None` drops any earlier image.
    ImageUrl(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("trainer name is required")]
    MissingTrainer,
    #[error("invalid start time: {0:?}")]
    InvalidStart(String),
    #[error("invalid end time: {0:?}")]
    InvalidEnd(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub id: i64,
    pub title: String,
    pub trainer_name: String,
    pub exercise_name: String,
    pub customer_name: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub image_path: String,
    pub image_url: Option<String>,
}

impl EventDraft {
    /// Draft staged by clicking a date cell.
    pub fn at(id: i64, at: NaiveDateTime, all_day: bool) -> Self {
        let stamp = format_input(at, all_day);
        Self {
            id,
            start: stamp.clone(),
            end: stamp,
            all_day,
            ..Self::default()
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::TrainerName => &self.trainer_name,
            TextField::ExerciseName => &self.exercise_name,
            TextField::CustomerName => &self.customer_name,
            TextField::Start => &self.start,
            TextField::End => &self.end,
            TextField::ImagePath => &self.image_path,
        }
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Text(field, value) => {
                let slot = match field {
                    TextField::Title => &mut self.title,
                    TextField::TrainerName => &mut self.trainer_name,
                    TextField::ExerciseName => &mut self.exercise_name,
                    TextField::CustomerName => &mut self.customer_name,
                    TextField::Start => &mut self.start,
                    TextField::End => &mut self.end,
                    TextField::ImagePath => {
                        // A loaded image belongs to the path it was read from.
                        if self.image_path != value {
                            self.image_url = None;
                        }
                        &mut self.image_path
                    }
                };
                *slot = value;
            }
            DraftUpdate::AllDay(all_day) => self.all_day = all_day,
            DraftUpdate::ImageUrl(url) => self.image_url = url,
        }
    }

    /// Submission is allowed only with both a title and a trainer.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.trainer_name.trim().is_empty()
    }

    pub fn to_event(&self) -> Result<Event, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.trainer_name.trim().is_empty() {
            return Err(DraftError::MissingTrainer);
        }
        let start = parse_datetime(&self.start)
            .ok_or_else(|| DraftError::InvalidStart(self.start.clone()))?;
        let end = if self.end.trim().is_empty() {
            start
        } else {
            parse_datetime(&self.end).ok_or_else(|| DraftError::InvalidEnd(self.end.clone()))?
        };

        Ok(Event {
            id: self.id,
            title: self.title.clone(),
            trainer_name: self.trainer_name.clone(),
            customer_name: self.customer_name.clone(),
            exercise_name: self.exercise_name.clone(),
            start,
            end,
            all_day: self.all_day,
            image_url: self.image_url.clone(),
        })
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS`.
/// A space is allowed in place of the `T`.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_input(at: NaiveDateTime, all_day: bool) -> String {
    if all_day {
        at.format("%Y-%m-%d").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M").to_string()
    }
}
