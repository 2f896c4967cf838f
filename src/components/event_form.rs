use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::info;

use crate::calendar::{DraftUpdate, EventDraft, ImageLoad, ImagePoll, TextField};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Trainer,
    Exercise,
    Customer,
    Start,
    End,
    AllDay,
    Image,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Trainer,
            FormField::Trainer => FormField::Exercise,
            FormField::Exercise => FormField::Customer,
            FormField::Customer => FormField::Start,
            FormField::Start => FormField::End,
            FormField::End => FormField::AllDay,
            FormField::AllDay => FormField::Image,
            FormField::Image => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Image,
            FormField::Trainer => FormField::Title,
            FormField::Exercise => FormField::Trainer,
            FormField::Customer => FormField::Exercise,
            FormField::Start => FormField::Customer,
            FormField::End => FormField::Start,
            FormField::AllDay => FormField::End,
            FormField::Image => FormField::AllDay,
        }
    }

    fn text_field(&self) -> Option<TextField> {
        match self {
            FormField::Title => Some(TextField::Title),
            FormField::Trainer => Some(TextField::TrainerName),
            FormField::Exercise => Some(TextField::ExerciseName),
            FormField::Customer => Some(TextField::CustomerName),
            FormField::Start => Some(TextField::Start),
            FormField::End => Some(TextField::End),
            FormField::Image => Some(TextField::ImagePath),
            FormField::AllDay => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageStatus {
    Empty,
    Loading(PathBuf),
    Loaded,
    Unreadable(PathBuf),
}

/// The create dialog. Owns the draft and any image read started from it.
#[derive(Debug)]
pub struct EventFormState {
    pub draft: EventDraft,
    pub active_field: FormField,
    pub image_status: ImageStatus,
    pub error: Option<String>,
    image_load: Option<ImageLoad>,
}

impl EventFormState {
    pub fn new(draft: EventDraft) -> Self {
        Self {
            draft,
            active_field: FormField::Title,
            image_status: ImageStatus::Empty,
            error: None,
            image_load: None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field.text_field() {
            let mut value = self.draft.text(field).to_string();
            value.push(c);
            self.draft.apply(DraftUpdate::Text(field, value));
            self.sync_image_status(field);
            self.error = None;
        }
    }

    fn sync_image_status(&mut self, field: TextField) {
        if field == TextField::ImagePath
            && self.image_status == ImageStatus::Loaded
            && self.draft.image_url.is_none()
        {
            self.image_status = ImageStatus::Empty;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field.text_field() {
            let mut value = self.draft.text(field).to_string();
            value.pop();
            self.draft.apply(DraftUpdate::Text(field, value));
            self.sync_image_status(field);
        }
    }

    pub fn toggle_all_day(&mut self) {
        let all_day = !self.draft.all_day;
        self.draft.apply(DraftUpdate::AllDay(all_day));
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Start reading the file named in the image field. Replaces (and so
    /// aborts) any read already in flight. Needs a tokio runtime.
    pub fn load_image(&mut self) {
        let path = self.draft.image_path.trim();
        if path.is_empty() {
            return;
        }
        let path = PathBuf::from(path);
        info!(path = %path.display(), "loading event image");
        self.draft.apply(DraftUpdate::ImageUrl(None));
        self.image_status = ImageStatus::Loading(path.clone());
        self.image_load = Some(ImageLoad::spawn(path));
    }

    pub fn is_loading_image(&self) -> bool {
        self.image_load.is_some()
    }

    /// Merge a finished image read into the draft.
    pub fn poll_image(&mut self) {
        let Some(load) = self.image_load.as_mut() else {
            return;
        };
        match load.poll() {
            ImagePoll::Pending => {}
            ImagePoll::Ready(url) => {
                self.draft.apply(DraftUpdate::ImageUrl(Some(url)));
                self.image_status = ImageStatus::Loaded;
                self.image_load = None;
            }
            ImagePoll::Failed => {
                self.image_status = ImageStatus::Unreadable(load.path().to_path_buf());
                self.image_load = None;
            }
        }
    }
}

pub struct EventForm;

impl EventForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &EventFormState, theme: &Theme) {
        // Center the form popup
        let form_w = area.width.clamp(30, 56);
        let form_h = area.height.clamp(12, 16);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h).intersection(area);

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(" New Session ")
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent)
            .style(theme.base);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // trainer
            Constraint::Length(1), // exercise
            Constraint::Length(1), // customer
            Constraint::Length(1), // start
            Constraint::Length(1), // end
            Constraint::Length(1), // all day
            Constraint::Length(1), // image
            Constraint::Length(1), // image status / error
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let draft = &state.draft;
        let active = state.active_field;
        let fields = [
            (FormField::Title, "Title:", draft.title.as_str()),
            (FormField::Trainer, "Trainer:", draft.trainer_name.as_str()),
            (FormField::Exercise, "Exercise:", draft.exercise_name.as_str()),
            (FormField::Customer, "Customer:", draft.customer_name.as_str()),
            (FormField::Start, "Start:", draft.start.as_str()),
            (FormField::End, "End:", draft.end.as_str()),
        ];
        for (i, (field, label, value)) in fields.into_iter().enumerate() {
            render_field(frame, rows[i], label, value, active == field, theme);
        }

        let all_day_val = if draft.all_day { "[x] All Day" } else { "[ ] All Day" };
        render_field(frame, rows[6], "", all_day_val, active == FormField::AllDay, theme);
        render_field(
            frame,
            rows[7],
            "Image:",
            &draft.image_path,
            active == FormField::Image,
            theme,
        );

        let note = if let Some(ref err) = state.error {
            Span::styled(err.clone(), theme.danger)
        } else {
            match &state.image_status {
                ImageStatus::Empty => Span::styled("Ctrl-O loads the image path", theme.dim),
                ImageStatus::Loading(_) => Span::styled("Loading image...", theme.dim),
                ImageStatus::Loaded => {
                    let kb = draft
                        .image_url
                        .as_ref()
                        .map(|u| u.len() * 3 / 4 / 1024)
                        .unwrap_or(0);
                    Span::styled(format!("Image attached ({} KB)", kb), theme.accent)
                }
                ImageStatus::Unreadable(_) => Span::styled("No image (file unreadable)", theme.dim),
            }
        };
        frame.render_widget(Paragraph::new(Line::from(note)), rows[8]);

        let save_style = if draft.can_submit() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            theme.dim.add_modifier(Modifier::CROSSED_OUT)
        };
        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme.dim),
            Span::styled("Enter", save_style),
            Span::styled(":Create ", theme.dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme.dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[9]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool, theme: &Theme) {
    let label_w = if label.is_empty() { 0 } else { 10 };
    let cursor = if active { "_" } else { "" };

    let style = if active { theme.accent } else { Style::default() };

    let mut spans = Vec::new();
    if !label.is_empty() {
        spans.push(Span::styled(
            format!("{:<width$}", label, width = label_w),
            theme.dim,
        ));
    }
    spans.push(Span::styled(format!("{}{}", value, cursor), style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
