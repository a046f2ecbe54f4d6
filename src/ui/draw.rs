use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::App;
use super::widgets::{draw_controls, draw_now_playing, draw_seek_bar};

/// Draw the remote: now-playing text above the seek bar, controls below.
///
/// The seek bar and control rows come from the hit geometry so that what is
/// drawn is exactly what reacts to the pointer.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.interaction.resize(area.width, area.height);

    f.render_widget(
        Block::default().style(Style::default().fg(app.palette.fg).bg(app.palette.bg)),
        area,
    );

    let window = app.interaction.window();
    let geometry = *app.interaction.geometry();
    let seek_row = geometry.seek_row(window);
    let control_row = geometry.control_row(window);

    if let Some(rows) = rows_at(area, seek_row - 3, 2) {
        draw_now_playing(f, rows, app);
    }

    if let Some(row) = rows_at(area, seek_row, 1) {
        draw_seek_bar(f, rows_at(area, seek_row - 1, 1), row, app);
    }

    if let Some(row) = rows_at(area, control_row, 1) {
        draw_controls(f, row, app);
    }
}

/// Full-width strip starting at `top`, None unless it fits inside `area`
fn rows_at(area: Rect, top: i32, height: u16) -> Option<Rect> {
    let first = i32::from(area.y);
    let last = first + i32::from(area.height);
    if top < first || top + i32::from(height) > last {
        return None;
    }
    Some(Rect::new(area.x, top as u16, area.width, height))
}
