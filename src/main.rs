mod app;
mod calendar;
mod components;
mod config;
mod event;
mod logging;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, Focus, Modal, ViewMode};
use chrono::{Local, Timelike};
use color_eyre::Result;
use config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;
use tracing::info;

use crate::components::event_form::FormField;
use crate::components::HourGrid;
use crate::theme::Theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let log_file = logging::init();
    let config = Config::load()?;
    info!(?log_file, palette = config.palette.items.len(), mode = %config.theme.mode, "starting");

    let mut app = App::new(&config, Local::now().date_naive());

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;
    info!(events = app.store().len(), "exiting");
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();
            let theme = app.theme();

            // Root style first so every widget sits on the mode's background.
            frame.render_widget(Block::default().style(theme.base), area);

            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
            render_main(frame, layout[0], app, theme);

            match &app.modal {
                Modal::Create(form) => components::EventForm::render(frame, area, form, theme),
                Modal::Delete { id } => {
                    components::DeleteDialog::render(frame, area, app.store().get(*id), theme)
                }
                Modal::Help => render_help(frame, area, theme),
                Modal::None => {}
            }

            components::StatusBar::render(frame, layout[1], app);
        })?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            app.status_message = None;
            handle_key(app, key);
        }

        // Let the image reader make progress between frames.
        tokio::task::yield_now().await;
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    match app.modal {
        Modal::Create(_) => handle_form_input(app, key.code, key.modifiers),
        Modal::Delete { .. } => handle_delete_input(app, key.code),
        Modal::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.modal = Modal::None;
            }
        }
        Modal::None => match app.focus {
            Focus::Palette => handle_palette_input(app, key.code),
            Focus::Calendar => handle_normal_input(app, key.code),
        },
    }
}

fn handle_normal_input(app: &mut App, code: KeyCode) {
    let timed = app.view_mode != ViewMode::Month;
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc if app.dragging.is_some() => {
            app.cancel_drag();
            app.status_message = Some("Drag cancelled".to_string());
        }
        KeyCode::Char('1') => app.view_mode = ViewMode::Month,
        KeyCode::Char('2') => app.view_mode = ViewMode::Week,
        KeyCode::Char('3') => app.view_mode = ViewMode::Day,
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('p') => app.toggle_palette_focus(),
        KeyCode::Enter | KeyCode::Char('n') => app.activate_cursor(),
        KeyCode::Tab => app.select_next_event(),
        KeyCode::BackTab => app.select_prev_event(),
        KeyCode::Char('d') | KeyCode::Delete => app.click_selected_event(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_day(),
        KeyCode::Right | KeyCode::Char('l') => app.next_day(),
        KeyCode::Up | KeyCode::Char('k') if timed => app.hour_up(),
        KeyCode::Down | KeyCode::Char('j') if timed => app.hour_down(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_week(),
        KeyCode::Down | KeyCode::Char('j') => app.next_week(),
        KeyCode::Char('[') => app.prev_month(),
        KeyCode::Char(']') => app.next_month(),
        KeyCode::Char('{') => app.prev_year(),
        KeyCode::Char('}') => app.next_year(),
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
}

fn handle_palette_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('p') => app.toggle_palette_focus(),
        KeyCode::Up | KeyCode::Char('k') => app.palette_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.palette_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.pick_up(),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Enter {
        if app.submit_create().is_some() {
            app.status_message = Some("Session created".to_string());
        }
        return;
    }
    if code == KeyCode::Esc {
        app.cancel_create();
        return;
    }

    let Some(form) = app.form_mut() else {
        return;
    };
    match code {
        KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => form.load_image(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(' ') if form.active_field == FormField::AllDay => form.toggle_all_day(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => form.input_char(c),
        _ => {}
    }
}

fn handle_delete_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Enter => {
            if app.confirm_delete() {
                app.status_message = Some("Session deleted".to_string());
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn render_main(frame: &mut ratatui::Frame, area: Rect, app: &App, theme: &Theme) {
    let total_width = area.width;
    let show_palette = total_width >= 70 && !app.palette.is_empty();
    let palette_w = if show_palette { 20 } else { 0 };

    let columns = Layout::horizontal([Constraint::Min(20), Constraint::Length(palette_w)]).split(area);
    let content_area = columns[0];

    if show_palette {
        components::Palette::render(
            frame,
            columns[1],
            &app.palette,
            app.palette_index,
            app.focus == Focus::Palette,
            app.dragging.as_deref(),
            theme,
        );
    }

    let grid = HourGrid {
        hour_start: app.hour_start,
        hour_end: app.hour_end,
        selected_hour: app.selected_hour,
        now_hour: Some(Local::now().hour()),
    };

    match app.view_mode {
        ViewMode::Month => render_month_layout(frame, content_area, app, theme),
        ViewMode::Week => components::WeekView::render(
            frame,
            content_area,
            app.selected_date,
            app.today,
            app.week_start(),
            &app.week_events(),
            app.selected_event().map(|e| e.id),
            grid,
            theme,
        ),
        ViewMode::Day => components::DayView::render(
            frame,
            content_area,
            app.selected_date,
            &app.day_events,
            app.event_index,
            Some(app.selected_hour),
            theme,
        ),
    }
}

fn render_month_layout(frame: &mut ratatui::Frame, area: Rect, app: &App, theme: &Theme) {
    let days = app.days_with_events();
    if area.width < 60 {
        components::MonthView::render(frame, area, app.selected_date, app.today, &days, theme);
        return;
    }

    let month_w = if area.width >= 100 { 44 } else { 37 };
    let content = Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)]).split(area);

    components::MonthView::render(frame, content[0], app.selected_date, app.today, &days, theme);
    components::DayView::render(
        frame,
        content[1],
        app.selected_date,
        &app.day_events,
        app.event_index,
        None,
        theme,
    );
}

fn render_help(frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.clamp(30, 56);
    let popup_h = area.height.clamp(12, 26);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme.accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.accent)
        .style(theme.base);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = theme.accent.add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Navigation", section_style)),
        entry("h/l", "Previous/next day"),
        entry("j/k", "Next/previous week (hour in week/day)"),
        entry("[/]  {/}", "Previous/next month, year"),
        entry("t", "Jump to today"),
        entry("1/2/3", "Month / Week / Day view"),
        Line::from(""),
        Line::from(Span::styled("Sessions", section_style)),
        entry("Enter/n", "New session at cursor (or drop)"),
        entry("Tab", "Select session on the day"),
        entry("d", "Delete selected session"),
        entry("p", "Palette: pick up an item to drop"),
        entry("Esc", "Cancel drag / close dialog"),
        Line::from(""),
        Line::from(Span::styled("Other", section_style)),
        entry("T", "Toggle light/dark theme"),
        entry("?", "This help"),
        entry("q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
