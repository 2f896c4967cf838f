use chrono::{Duration, NaiveDate, Timelike};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::Event;
use crate::theme::Theme;

pub struct WeekView;

/// Cursor and grid bounds shared by the timed views.
#[derive(Debug, Clone, Copy)]
pub struct HourGrid {
    pub hour_start: u32,
    pub hour_end: u32,
    pub selected_hour: u32,
    /// Current wall-clock hour, drawn as a line on today's column.
    pub now_hour: Option<u32>,
}

impl WeekView {
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        selected_date: NaiveDate,
        today: NaiveDate,
        week_start: NaiveDate,
        events: &[Event],
        selected_event: Option<i64>,
        grid: HourGrid,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(format!(" Week of {} ", week_start.format("%b %d, %Y")))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 10 || inner.height < 3 {
            return;
        }

        let time_col_w: u16 = if inner.width >= 70 { 6 } else { 4 };
        let col_w = (inner.width.saturating_sub(time_col_w) / 7).max(1);

        let mut col_constraints = vec![Constraint::Length(time_col_w)];
        col_constraints.extend((0..7).map(|_| Constraint::Length(col_w)));
        col_constraints.push(Constraint::Min(0));
        let cols = Layout::horizontal(col_constraints).split(inner);

        // One header row, then as many hours as fit, scrolled so the cursor
        // hour stays visible.
        let content_rows = inner.height.saturating_sub(1) as u32;
        let total_hours = grid.hour_end - grid.hour_start + 1;
        let visible_hours = content_rows.min(total_hours);
        let first_hour = grid
            .selected_hour
            .saturating_sub(visible_hours.saturating_sub(1))
            .max(grid.hour_start)
            .min(grid.hour_end + 1 - visible_hours);

        let mut row_constraints = vec![Constraint::Length(1)];
        row_constraints.extend((0..visible_hours).map(|_| Constraint::Length(1)));
        row_constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(row_constraints).split(inner);

        for day_offset in 0..7usize {
            let date = week_start + Duration::days(day_offset as i64);
            let col = cols[day_offset + 1];

            let day_label = if col_w >= 10 {
                date.format("%a %d").to_string()
            } else if col_w >= 5 {
                date.format("%a").to_string()
            } else {
                date.format("%d").to_string()
            };

            let style = if date == selected_date {
                theme.selected
            } else if date == today {
                theme.today
            } else {
                theme.header
            };

            let label = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", day_label, width = col_w as usize),
                style,
            )));
            frame.render_widget(label, col.intersection(rows[0]));
        }

        let today_in_week = today >= week_start && today < week_start + Duration::days(7);
        for hour_idx in 0..visible_hours {
            let hour = first_hour + hour_idx;
            let row = rows[hour_idx as usize + 1];

            let time_label = if time_col_w >= 6 {
                format!("{:>2}:00 ", hour)
            } else {
                format!("{:>2} ", hour)
            };
            let time_style = if hour == grid.selected_hour {
                theme.selected
            } else if today_in_week && grid.now_hour == Some(hour) {
                theme.danger
            } else {
                theme.dim
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(time_label, time_style))),
                cols[0].intersection(row),
            );

            for day_offset in 0..7usize {
                let date = week_start + Duration::days(day_offset as i64);
                let cell_area = cols[day_offset + 1].intersection(row);
                if cell_area.width == 0 || cell_area.height == 0 {
                    continue;
                }

                let is_cursor = date == selected_date && hour == grid.selected_hour;
                let is_now = date == today && grid.now_hour == Some(hour);
                let covers = |ev: &&Event| covers_hour(ev, date, hour, first_hour);
                // The selected event wins the cell over anything it overlaps.
                let picked = (date == selected_date)
                    .then(|| {
                        events
                            .iter()
                            .filter(covers)
                            .find(|ev| Some(ev.id) == selected_event)
                    })
                    .flatten();
                let cell_event = picked.or_else(|| events.iter().find(covers));

                let width = cell_area.width as usize;
                let (text, style) = match cell_event {
                    Some(ev) => {
                        let (text, mut style) = if picked.is_some() {
                            (format!(">{}", ev.title), theme.selected.add_modifier(Modifier::BOLD))
                        } else {
                            (ev.title.clone(), theme.event)
                        };
                        if is_cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        if is_now {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        (text.chars().take(width).collect(), style)
                    }
                    None if is_cursor && is_now => ("─".repeat(width), theme.highlight.patch(theme.danger)),
                    None if is_cursor => (String::new(), theme.highlight),
                    None if is_now => ("─".repeat(width), theme.danger),
                    None => continue,
                };

                frame.render_widget(
                    Paragraph::new(Span::styled(format!("{:<width$}", text, width = width), style)),
                    cell_area,
                );
            }
        }
    }
}

/// Whether `ev` occupies `hour` on `date`. All-day events sit in the first
/// visible row.
fn covers_hour(ev: &Event, date: NaiveDate, hour: u32, first_hour: u32) -> bool {
    if !ev.occurs_on(date) {
        return false;
    }
    if ev.all_day {
        return hour == first_hour;
    }

    let start_hour = if ev.start.date() < date { 0 } else { ev.start.hour() };
    let end = ev.end.max(ev.start);
    let end_hour = if end.date() > date {
        23
    } else if end.minute() > 0 || end == ev.start {
        end.hour()
    } else {
        end.hour().saturating_sub(1).max(start_hour)
    };
    hour >= start_hour && hour <= end_hour
}
