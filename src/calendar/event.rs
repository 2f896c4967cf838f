use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub trainer_name: String,
    pub customer_name: String,
    pub exercise_name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    /// `data:<mime>;base64,...`
    pub image_url: Option<String>,
}

impl Event {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether the event covers any part of `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let end = self.end.max(self.start).date();
        self.start.date() <= date && date <= end
    }

    pub fn start_iso(&self) -> String {
        iso(self.start, self.all_day)
    }

    pub fn end_iso(&self) -> String {
        iso(self.end, self.all_day)
    }

    pub fn duration_display(&self) -> String {
        if self.all_day {
            "All day".to_string()
        } else {
            let start = self.start.format("%H:%M");
            let end = self.end.format("%H:%M");
            format!("{} - {}", start, end)
        }
    }

    /// Approximate decoded image size in bytes.
    pub fn image_size(&self) -> Option<usize> {
        let url = self.image_url.as_deref()?;
        let payload = url.split_once(',').map(|(_, p)| p).unwrap_or(url);
        Some(payload.len() / 4 * 3)
    }
}

fn iso(dt: NaiveDateTime, all_day: bool) -> String {
    if all_day {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
