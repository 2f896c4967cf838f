use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Modal, ViewMode};

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = app.theme().status;

        let mode_str = match app.view_mode {
            ViewMode::Month => "[1]Month",
            ViewMode::Week => "[2]Week",
            ViewMode::Day => "[3]Day",
        };

        let context = match (&app.modal, app.focus) {
            (Modal::Create(_), _) => " [New Session]".to_string(),
            (Modal::Delete { .. }, _) => " [Delete]".to_string(),
            (_, Focus::Palette) => " [Palette]".to_string(),
            _ => match app.dragging {
                Some(ref label) => format!(" [Carrying {}]", label),
                None => String::new(),
            },
        };

        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            hints(app, w).to_string()
        };

        let left = format!(" {}{} {} ", mode_str, context, app.theme_mode);
        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right_text.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right_text, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn hints(app: &App, w: usize) -> &'static str {
    match (&app.modal, app.focus) {
        (Modal::Create(_), _) => " Tab:Field Sp:AllDay ^O:Image Enter:Create Esc:Cancel",
        (Modal::Delete { .. }, _) => " y:Delete n:Cancel",
        (_, Focus::Palette) if w >= 50 => " jk:Select Enter:Pick up p/Esc:Back",
        _ if w >= 90 => " hjkl:Nav [/]:Mon {/}:Yr Enter:New Tab:Select d:Del p:Palette T:Theme ?:Help q:Quit",
        _ if w >= 60 => " Enter:New Tab:Select d:Del p:Palette T:Theme ?:Help q:Quit",
        _ => " ?:Help q:Quit",
    }
}
