use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// The column of draggable session labels.
pub struct Palette;

impl Palette {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        items: &[String],
        selected_index: usize,
        focused: bool,
        dragging: Option<&str>,
        theme: &Theme,
    ) {
        let border_style = if focused { theme.accent } else { theme.border };

        let block = Block::default()
            .title(" Sessions ")
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        if items.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new("No items").style(theme.dim), inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;

        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let carried = dragging == Some(label.as_str());
                let style = if i == selected_index && focused {
                    theme.selected
                } else if carried {
                    theme.accent.add_modifier(Modifier::ITALIC)
                } else {
                    Style::default()
                };
                let grip = if carried { "\u{2192} " } else { "\u{2261} " };
                ListItem::new(Line::from(vec![
                    Span::styled(grip, theme.dim),
                    Span::styled(truncate(label, inner_w.saturating_sub(2)), style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(list_items).block(block), area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
