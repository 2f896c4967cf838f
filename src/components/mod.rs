pub mod day_view;
pub mod delete_dialog;
pub mod event_form;
pub mod month_view;
pub mod palette;
pub mod status_bar;
pub mod week_view;

pub use day_view::DayView;
pub use delete_dialog::DeleteDialog;
pub use event_form::EventForm;
pub use month_view::MonthView;
pub use palette::Palette;
pub use status_bar::StatusBar;
pub use week_view::{HourGrid, WeekView};

/// Flatten a rendered buffer into rows of text for assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push_str(cell.symbol());
    }
    out
}
