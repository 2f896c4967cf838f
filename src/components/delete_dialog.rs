use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::calendar::Event;
use crate::theme::Theme;

pub struct DeleteDialog;

impl DeleteDialog {
    /// `event` is `None` when the staged id no longer exists; confirming is
    /// then a no-op.
    pub fn render(frame: &mut Frame, area: Rect, event: Option<&Event>, theme: &Theme) {
        let popup_w = area.width.clamp(30, 54);
        let popup_h = area.height.clamp(8, 11);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Delete Session ")
            .title_style(theme.danger.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.danger)
            .style(theme.base);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            "Are you sure you want to delete this event?",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));

        match event {
            Some(ev) => {
                lines.push(Line::from(vec![
                    Span::styled("Title: ", theme.dim),
                    Span::raw(ev.title.clone()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("When:  ", theme.dim),
                    Span::raw(format!(
                        "{} {}",
                        ev.start.format("%a %b %d, %Y"),
                        ev.duration_display()
                    )),
                ]));
                if !ev.trainer_name.is_empty() {
                    lines.push(Line::from(vec![
                        Span::styled("Trainer: ", theme.dim),
                        Span::raw(ev.trainer_name.clone()),
                    ]));
                }
                if let Some(size) = ev.image_size() {
                    lines.push(Line::from(Span::styled(
                        format!("Image attached ({} KB)", size / 1024),
                        theme.dim,
                    )));
                }
            }
            None => lines.push(Line::from(Span::styled("(event no longer exists)", theme.dim))),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("y", theme.danger.add_modifier(Modifier::BOLD)),
            Span::styled(":Delete  ", theme.dim),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("/", theme.dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme.dim),
        ]));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
