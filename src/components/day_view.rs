use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::calendar::Event;
use crate::theme::Theme;

pub struct DayView;

impl DayView {
    /// `cursor_hour` is shown as the slot Enter will create at; `None` in
    /// month layout where clicks are all-day.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        date: NaiveDate,
        events: &[Event],
        selected: Option<usize>,
        cursor_hour: Option<u32>,
        theme: &Theme,
    ) {
        let w = area.width as usize;

        let title = if w >= 30 {
            format!(" {} ", date.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", date.format("%b %d, %Y"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };

        let mut footer = String::new();
        if !events.is_empty() {
            let n = events.len();
            footer.push_str(&format!(" {} session{} ", n, if n == 1 { "" } else { "s" }));
        }
        if let Some(hour) = cursor_hour {
            footer.push_str(&format!(" new at {:02}:00 ", hour));
        }

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(footer, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No sessions").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = events.iter().map(|ev| format_event(ev, theme)).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlight)
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn format_event(ev: &Event, theme: &Theme) -> ListItem<'static> {
    let marker = Span::styled("  ", Style::default().bg(theme.event.bg.unwrap_or_default()));
    let time = Span::styled(
        format!(" {} ", ev.duration_display()),
        Style::default().add_modifier(Modifier::DIM),
    );
    let title = Span::styled(ev.title.clone(), Style::default().add_modifier(Modifier::BOLD));

    let mut header = vec![marker, time, title];
    if ev.image_url.is_some() {
        header.push(Span::styled(" [img]", theme.dim));
    }

    let people: Vec<String> = [
        ("exercise", &ev.exercise_name),
        ("trainer", &ev.trainer_name),
        ("customer", &ev.customer_name),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .map(|(k, v)| format!("{}: {}", k, v))
    .collect();

    let mut lines = vec![Line::from(header)];
    if !people.is_empty() {
        lines.push(Line::from(Span::styled(format!("    {}", people.join("  ")), theme.dim)));
    }
    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn lists_session_details() {
        let start = NaiveDateTime::parse_from_str("2024-01-01T09:00", "%Y-%m-%dT%H:%M").unwrap();
        let events = vec![Event {
            id: 1,
            title: "Squat".into(),
            trainer_name: "Sam".into(),
            customer_name: "Alex".into(),
            exercise_name: String::new(),
            start,
            end: start + chrono::Duration::hours(1),
            all_day: false,
            image_url: Some("data:image/png;base64,AA==".into()),
        }];

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| {
                DayView::render(
                    frame,
                    frame.area(),
                    start.date(),
                    &events,
                    Some(0),
                    Some(9),
                    &Theme::light(),
                )
            })
            .unwrap();

        let text = crate::components::buffer_text(terminal.backend().buffer());
        assert!(text.contains("Monday, January 01, 2024"));
        assert!(text.contains("09:00 - 10:00"));
        assert!(text.contains("Squat [img]"));
        assert!(text.contains("trainer: Sam  customer: Alex"));
        assert!(text.contains("1 session"));
        assert!(text.contains("new at 09:00"));
    }

    #[test]
    fn empty_day_says_so() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        terminal
            .draw(|frame| DayView::render(frame, frame.area(), date, &[], None, None, &Theme::dark()))
            .unwrap();
        let text = crate::components::buffer_text(terminal.backend().buffer());
        assert!(text.contains("No sessions"));
    }
}
