use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::calendar::{Event, EventDraft, Store};
use crate::components::event_form::EventFormState;
use crate::config::Config;
use crate::theme::{Theme, ThemeMode, Themes};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Calendar,
    Palette,
}

/// At most one overlay is open at a time.
#[derive(Debug)]
pub enum Modal {
    None,
    Create(EventFormState),
    Delete { id: i64 },
    Help,
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub focus: Focus,
    pub modal: Modal,
    pub selected_date: NaiveDate,
    pub selected_hour: u32,
    pub today: NaiveDate,
    pub theme_mode: ThemeMode,
    pub palette: Vec<String>,
    pub palette_index: usize,
    /// Palette label picked up and waiting to be dropped.
    pub dragging: Option<String>,
    /// Index into `day_events` of the highlighted event.
    pub event_index: Option<usize>,
    pub day_events: Vec<Event>,
    pub status_message: Option<String>,
    pub hour_start: u32,
    pub hour_end: u32,
    themes: Themes,
    store: Store,
}

impl App {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        let mut app = Self {
            running: true,
            view_mode: ViewMode::Month,
            focus: Focus::Calendar,
            modal: Modal::None,
            selected_date: today,
            selected_hour: config.start_hour(),
            today,
            theme_mode: config.theme.mode,
            palette: config.palette.items.clone(),
            palette_index: 0,
            dragging: None,
            event_index: None,
            day_events: Vec::new(),
            status_message: None,
            hour_start: config.calendar.hour_start,
            hour_end: config.calendar.hour_end,
            themes: config.themes(),
            store: Store::new(),
        };
        app.refresh_events();
        app
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    pub fn form(&self) -> Option<&EventFormState> {
        match &self.modal {
            Modal::Create(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EventFormState> {
        match &mut self.modal {
            Modal::Create(form) => Some(form),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match self.modal {
            Modal::Delete { id } => Some(id),
            _ => None,
        }
    }

    // ── calendar interactions ──

    /// Stage a draft at `at` and open the create dialog. The store is not
    /// touched until the dialog is submitted.
    pub fn date_click(&mut self, at: NaiveDateTime, all_day: bool) {
        let id = self.store.allocate_id();
        debug!(%at, all_day, id, "date clicked");
        self.modal = Modal::Create(EventFormState::new(EventDraft::at(id, at, all_day)));
    }

    /// Append an event built from a dropped label. No dialog.
    pub fn drop_item(&mut self, label: &str, at: NaiveDateTime, all_day: bool) -> i64 {
        let id = self.store.allocate_id();
        self.store.add(Event {
            id,
            title: label.to_string(),
            trainer_name: String::new(),
            customer_name: String::new(),
            exercise_name: String::new(),
            start: at,
            end: at,
            all_day,
            image_url: None,
        });
        info!(id, title = label, %at, all_day, "event dropped");
        self.refresh_events();
        id
    }

    /// Open the delete confirmation for `id`.
    pub fn event_click(&mut self, id: i64) {
        debug!(id, "event clicked");
        self.modal = Modal::Delete { id };
    }

    /// The cursor position as a click target: whole days in month view,
    /// the hour row in week and day views.
    pub fn cursor_target(&self) -> (NaiveDateTime, bool) {
        match self.view_mode {
            ViewMode::Month => (self.selected_date.and_time(Default::default()), true),
            ViewMode::Week | ViewMode::Day => {
                let at = self
                    .selected_date
                    .and_hms_opt(self.selected_hour, 0, 0)
                    .unwrap_or_else(|| self.selected_date.and_time(Default::default()));
                (at, false)
            }
        }
    }

    /// Enter on the calendar: drop the carried item, or click the cursor.
    pub fn activate_cursor(&mut self) {
        let (at, all_day) = self.cursor_target();
        match self.dragging.take() {
            Some(label) => {
                self.drop_item(&label, at, all_day);
                self.status_message = Some(format!("Dropped \"{}\"", label));
            }
            None => self.date_click(at, all_day),
        }
    }

    pub fn click_selected_event(&mut self) {
        let id = self
            .event_index
            .and_then(|i| self.day_events.get(i))
            .map(|e| e.id);
        match id {
            Some(id) => self.event_click(id),
            None => self.status_message = Some("No event selected".to_string()),
        }
    }

    // ── create dialog ──

    /// Commit the draft. Returns the new id, or `None` when the draft is
    /// rejected (the dialog stays open with the reason).
    pub fn submit_create(&mut self) -> Option<i64> {
        let result = self.form()?.draft.to_event();
        match result {
            Ok(event) => {
                let id = event.id;
                info!(
                    id,
                    title = %event.title,
                    start = %event.start_iso(),
                    end = %event.end_iso(),
                    "event created"
                );
                self.store.add(event);
                self.modal = Modal::None;
                self.refresh_events();
                Some(id)
            }
            Err(err) => {
                debug!(error = %err, "create blocked");
                if let Some(form) = self.form_mut() {
                    form.error = Some(capitalize(&err.to_string()));
                }
                None
            }
        }
    }

    /// Close the dialog, dropping the draft and any image read it owns.
    pub fn cancel_create(&mut self) {
        if matches!(self.modal, Modal::Create(_)) {
            self.modal = Modal::None;
        }
    }

    // ── delete dialog ──

    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete() else {
            return false;
        };
        let removed = self.store.remove(id);
        info!(id, removed, "event deleted");
        self.modal = Modal::None;
        self.refresh_events();
        removed
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.modal, Modal::Delete { .. }) {
            self.modal = Modal::None;
        }
    }

    // ── theme, palette ──

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        info!(mode = %self.theme_mode, "theme toggled");
    }

    pub fn toggle_palette_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Calendar if !self.palette.is_empty() => Focus::Palette,
            _ => Focus::Calendar,
        };
    }

    pub fn palette_next(&mut self) {
        if !self.palette.is_empty() {
            self.palette_index = (self.palette_index + 1) % self.palette.len();
        }
    }

    pub fn palette_prev(&mut self) {
        if !self.palette.is_empty() {
            self.palette_index = (self.palette_index + self.palette.len() - 1) % self.palette.len();
        }
    }

    /// Pick up the highlighted palette item and hand focus back to the grid.
    pub fn pick_up(&mut self) {
        if let Some(label) = self.palette.get(self.palette_index) {
            self.dragging = Some(label.clone());
            self.status_message = Some(format!("Carrying \"{}\": Enter to drop, Esc to cancel", label));
            self.focus = Focus::Calendar;
        }
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Merge finished image reads. Called once per frame.
    pub fn tick(&mut self) {
        if let Some(form) = self.form_mut() {
            form.poll_image();
        }
    }

    // ── event selection ──

    pub fn select_next_event(&mut self) {
        let n = self.day_events.len();
        if n == 0 {
            self.event_index = None;
            return;
        }
        self.event_index = Some(self.event_index.map_or(0, |i| (i + 1) % n));
    }

    pub fn select_prev_event(&mut self) {
        let n = self.day_events.len();
        if n == 0 {
            self.event_index = None;
            return;
        }
        self.event_index = Some(self.event_index.map_or(n - 1, |i| (i + n - 1) % n));
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.event_index.and_then(|i| self.day_events.get(i))
    }

    // ── navigation ──

    pub fn refresh_events(&mut self) {
        let selected = self.selected_event().map(|e| e.id);
        self.day_events = self.store.events_for_date(self.selected_date);
        self.event_index = selected.and_then(|id| self.day_events.iter().position(|e| e.id == id));
    }

    /// Days of the selected month that have at least one event, counting
    /// every day a multi-day event covers.
    pub fn days_with_events(&self) -> Vec<u32> {
        let (year, month) = (self.selected_date.year(), self.selected_date.month());
        let events = self.store.events_for_month(year, month);
        (1..=days_in_month(year, month))
            .filter(|&day| {
                NaiveDate::from_ymd_opt(year, month, day)
                    .is_some_and(|date| events.iter().any(|e| e.occurs_on(date)))
            })
            .collect()
    }

    pub fn week_start(&self) -> NaiveDate {
        let offset = self.selected_date.weekday().num_days_from_sunday() as i64;
        self.selected_date - Duration::days(offset)
    }

    pub fn week_events(&self) -> Vec<Event> {
        let start = self.week_start();
        self.store.events_in_range(start, start + Duration::days(7))
    }

    pub fn next_day(&mut self) {
        self.move_to(self.selected_date.succ_opt().unwrap_or(self.selected_date));
    }

    pub fn prev_day(&mut self) {
        self.move_to(self.selected_date.pred_opt().unwrap_or(self.selected_date));
    }

    pub fn next_week(&mut self) {
        self.move_to(self.selected_date + Duration::weeks(1));
    }

    pub fn prev_week(&mut self) {
        self.move_to(self.selected_date - Duration::weeks(1));
    }

    pub fn next_month(&mut self) {
        self.move_to(shift_months(self.selected_date, 1));
    }

    pub fn prev_month(&mut self) {
        self.move_to(shift_months(self.selected_date, -1));
    }

    pub fn next_year(&mut self) {
        self.move_to(shift_months(self.selected_date, 12));
    }

    pub fn prev_year(&mut self) {
        self.move_to(shift_months(self.selected_date, -12));
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.move_to(self.today);
    }

    pub fn hour_up(&mut self) {
        self.selected_hour = self.selected_hour.saturating_sub(1).max(self.hour_start);
    }

    pub fn hour_down(&mut self) {
        self.selected_hour = (self.selected_hour + 1).min(self.hour_end);
    }

    fn move_to(&mut self, date: NaiveDate) {
        if date != self.selected_date {
            self.selected_date = date;
            self.event_index = None;
            self.refresh_events();
        }
    }
}

/// Move by whole months, clamping the day to the target month's length.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let (year, month) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Write;
    use std::time::Duration as StdDuration;

    use super::*;
    use crate::calendar::{DraftUpdate, TextField};
    use crate::components::event_form::ImageStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        App::new(&Config::default(), date(2024, 1, 1))
    }

    fn set(app: &mut App, field: TextField, value: &str) {
        app.form_mut()
            .expect("create dialog open")
            .draft
            .apply(DraftUpdate::Text(field, value.to_string()));
    }

    fn create(app: &mut App, title: &str, trainer: &str) -> Option<i64> {
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(app, TextField::Title, title);
        set(app, TextField::TrainerName, trainer);
        app.submit_create()
    }

    #[test]
    fn create_scenario_stores_all_fields() {
        let mut app = app();
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(&mut app, TextField::Title, "Squat");
        set(&mut app, TextField::TrainerName, "Sam");
        set(&mut app, TextField::CustomerName, "Alex");
        set(&mut app, TextField::Start, "2024-01-01T09:00");
        set(&mut app, TextField::End, "2024-01-01T10:00");

        let id = app.submit_create().expect("submitted");
        assert!(matches!(app.modal, Modal::None));

        let events = app.store().events();
        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.id, id);
        assert_ne!(ev.id, 0);
        assert_eq!(ev.title, "Squat");
        assert_eq!(ev.trainer_name, "Sam");
        assert_eq!(ev.customer_name, "Alex");
        assert_eq!(ev.start_iso(), "2024-01-01T09:00:00");
        assert_eq!(ev.end_iso(), "2024-01-01T10:00:00");
    }

    #[test]
    fn n_creates_give_n_unique_ids() {
        let mut app = app();
        for i in 0..20 {
            assert!(create(&mut app, &format!("s{}", i), "Sam").is_some());
        }
        assert_eq!(app.store().len(), 20);
        let ids: HashSet<_> = app.store().events().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn date_click_opens_dialog_without_storing() {
        let mut app = app();
        app.date_click(date(2024, 2, 5).and_hms_opt(0, 0, 0).unwrap(), true);

        let form = app.form().expect("create dialog open");
        assert_eq!(form.draft.start, "2024-02-05");
        assert!(form.draft.all_day);
        assert_ne!(form.draft.id, 0);
        assert!(app.store().is_empty());
    }

    #[test]
    fn month_view_cursor_clicks_all_day() {
        let mut app = app();
        app.selected_date = date(2024, 2, 5);
        app.activate_cursor();
        let form = app.form().unwrap();
        assert_eq!(form.draft.start, "2024-02-05");
        assert!(form.draft.all_day);

        app.cancel_create();
        app.view_mode = ViewMode::Week;
        app.selected_hour = 14;
        app.activate_cursor();
        let form = app.form().unwrap();
        assert_eq!(form.draft.start, "2024-02-05T14:00");
        assert!(!form.draft.all_day);
    }

    #[test]
    fn drop_appends_without_dialog() {
        let mut app = app();
        app.drop_item("Bench Press", date(2024, 3, 10).and_hms_opt(0, 0, 0).unwrap(), true);

        assert!(matches!(app.modal, Modal::None));
        let events = app.store().events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Bench Press");
        assert_eq!(events[0].start_iso(), "2024-03-10");
        assert_eq!(events[0].end_iso(), "2024-03-10");
    }

    #[test]
    fn drag_from_palette_then_drop_on_cursor() {
        let mut app = app();
        app.toggle_palette_focus();
        assert_eq!(app.focus, Focus::Palette);
        app.palette_next();
        app.pick_up();
        assert_eq!(app.dragging.as_deref(), Some("Bench Press"));
        assert_eq!(app.focus, Focus::Calendar);

        app.selected_date = date(2024, 3, 10);
        app.activate_cursor();
        assert!(app.dragging.is_none());
        assert!(app.form().is_none());
        assert_eq!(app.store().events()[0].title, "Bench Press");
    }

    #[test]
    fn cancelled_drag_drops_nothing() {
        let mut app = app();
        app.pick_up();
        app.cancel_drag();
        app.activate_cursor();
        assert!(app.form().is_some());
        assert!(app.store().is_empty());
    }

    #[test]
    fn blank_title_and_trainer_blocks_submit() {
        let mut app = app();
        assert_eq!(create(&mut app, "", ""), None);
        assert!(app.store().is_empty());
        let form = app.form().expect("dialog stays open");
        assert!(!form.draft.can_submit());
        assert!(form.error.is_some());
    }

    #[test]
    fn title_without_trainer_is_blocked() {
        let mut app = app();
        assert_eq!(create(&mut app, "Squat", ""), None);
        assert!(app.store().is_empty());
    }

    #[test]
    fn cancel_create_leaves_store_alone() {
        let mut app = app();
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(&mut app, TextField::Title, "Squat");
        app.cancel_create();
        assert!(app.form().is_none());
        assert!(app.store().is_empty());

        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        assert_eq!(app.form().unwrap().draft.title, "");
    }

    #[test]
    fn delete_confirm_and_cancel() {
        let mut app = app();
        let keep = create(&mut app, "keep", "Sam").unwrap();
        let gone = create(&mut app, "gone", "Sam").unwrap();

        app.event_click(gone);
        assert_eq!(app.pending_delete(), Some(gone));
        app.cancel_delete();
        assert_eq!(app.store().len(), 2);

        app.event_click(gone);
        assert!(app.confirm_delete());
        assert!(matches!(app.modal, Modal::None));
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().events()[0].id, keep);
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut app = app();
        create(&mut app, "keep", "Sam").unwrap();
        app.event_click(12345);
        assert!(!app.confirm_delete());
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn selected_event_click_opens_delete() {
        let mut app = app();
        let id = create(&mut app, "Squat", "Sam").unwrap();
        app.click_selected_event();
        assert!(app.pending_delete().is_none());

        app.select_next_event();
        app.click_selected_event();
        assert_eq!(app.pending_delete(), Some(id));
    }

    #[test]
    fn theme_toggle_round_trips_and_keeps_events() {
        let mut app = app();
        create(&mut app, "Squat", "Sam").unwrap();
        let before = app.store().events().to_vec();
        let mode = app.theme_mode;
        let theme = app.theme().clone();

        app.toggle_theme();
        assert_ne!(app.theme_mode, mode);
        assert_ne!(app.theme(), &theme);
        app.toggle_theme();

        assert_eq!(app.theme_mode, mode);
        assert_eq!(app.store().events(), before.as_slice());
    }

    #[test]
    fn navigation_clamps_month_days() {
        let mut app = App::new(&Config::default(), date(2024, 1, 31));
        app.next_month();
        assert_eq!(app.selected_date, date(2024, 2, 29));
        app.next_year();
        assert_eq!(app.selected_date, date(2025, 2, 28));
        app.prev_month();
        app.prev_month();
        assert_eq!(app.selected_date, date(2024, 12, 28));
    }

    #[test]
    fn shift_months_crosses_years() {
        assert_eq!(shift_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_months(date(2024, 1, 15), -1), date(2023, 12, 15));
        assert_eq!(shift_months(date(2024, 3, 31), -13), date(2023, 2, 28));
    }

    #[test]
    fn hour_cursor_stays_in_range() {
        let mut app = app();
        for _ in 0..30 {
            app.hour_down();
        }
        assert_eq!(app.selected_hour, app.hour_end);
        for _ in 0..30 {
            app.hour_up();
        }
        assert_eq!(app.selected_hour, app.hour_start);
    }

    #[test]
    fn week_start_is_sunday() {
        let mut app = app();
        app.selected_date = date(2024, 1, 3);
        assert_eq!(app.week_start(), date(2023, 12, 31));
    }

    #[test]
    fn days_with_events_marks_month() {
        let mut app = app();
        app.drop_item("a", date(2024, 1, 5).and_hms_opt(0, 0, 0).unwrap(), true);
        app.drop_item("b", date(2024, 1, 5).and_hms_opt(0, 0, 0).unwrap(), true);
        app.drop_item("c", date(2024, 2, 5).and_hms_opt(0, 0, 0).unwrap(), true);
        assert_eq!(app.days_with_events(), [5]);
    }

    #[test]
    fn overnight_event_marks_every_day_it_covers() {
        let mut app = app();
        app.date_click(date(2024, 1, 31).and_hms_opt(22, 0, 0).unwrap(), false);
        set(&mut app, TextField::Title, "Overnight");
        set(&mut app, TextField::TrainerName, "Sam");
        set(&mut app, TextField::End, "2024-02-02T10:00");
        app.submit_create().unwrap();

        app.selected_date = date(2024, 2, 1);
        app.refresh_events();
        assert_eq!(app.day_events.len(), 1);
        assert_eq!(app.days_with_events(), [1, 2]);

        app.selected_date = date(2024, 1, 10);
        assert_eq!(app.days_with_events(), [31]);
    }

    #[tokio::test]
    async fn closing_dialog_discards_in_flight_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();

        let mut app = app();
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(&mut app, TextField::ImagePath, &file.path().display().to_string());
        app.form_mut().unwrap().load_image();
        app.cancel_create();

        app.date_click(date(2024, 1, 2).and_hms_opt(9, 0, 0).unwrap(), false);
        tokio::time::sleep(StdDuration::from_millis(50)).await;
        app.tick();

        let form = app.form().unwrap();
        assert!(form.draft.image_url.is_none());
        assert_eq!(form.image_status, ImageStatus::Empty);
    }

    #[tokio::test]
    async fn image_is_carried_into_created_event() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(b"jpeg").unwrap();

        let mut app = app();
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(&mut app, TextField::Title, "Squat");
        set(&mut app, TextField::TrainerName, "Sam");
        set(&mut app, TextField::ImagePath, &file.path().display().to_string());
        app.form_mut().unwrap().load_image();

        for _ in 0..200 {
            app.tick();
            if !app.form().unwrap().is_loading_image() {
                break;
            }
            tokio::time::sleep(StdDuration::from_millis(5)).await;
        }
        app.submit_create().unwrap();

        let url = app.store().events()[0].image_url.clone().unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    async fn settle_image(app: &mut App) {
        for _ in 0..200 {
            app.tick();
            if !app.form().unwrap().is_loading_image() {
                break;
            }
            tokio::time::sleep(StdDuration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn unreadable_reload_submits_without_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"png").unwrap();
        let dir = tempfile::tempdir().unwrap();

        let mut app = app();
        app.date_click(date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(), false);
        set(&mut app, TextField::Title, "Squat");
        set(&mut app, TextField::TrainerName, "Sam");
        set(&mut app, TextField::ImagePath, &file.path().display().to_string());
        app.form_mut().unwrap().load_image();
        settle_image(&mut app).await;
        assert!(app.form().unwrap().draft.image_url.is_some());

        let missing = dir.path().join("x.png").display().to_string();
        set(&mut app, TextField::ImagePath, &missing);
        app.form_mut().unwrap().load_image();
        settle_image(&mut app).await;
        assert!(matches!(app.form().unwrap().image_status, ImageStatus::Unreadable(_)));

        app.submit_create().unwrap();
        assert!(app.store().events()[0].image_url.is_none());
    }
}
