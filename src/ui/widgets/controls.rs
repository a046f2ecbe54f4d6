use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::click_regions::Extent;

const PREVIOUS_GLYPH: &str = "|<<";
const NEXT_GLYPH: &str = ">>|";
const PAUSE_GLYPH: &str = "||";
const PLAY_GLYPH: &str = ">";

/// Previous, play/pause and next buttons on the control row.
/// Each glyph is drawn inside the hit zone that triggers it.
pub fn draw_controls(f: &mut Frame, row: Rect, app: &App) {
    let geometry = app.interaction.geometry();
    let mid = app.interaction.window().mid_x();
    let style = Style::default()
        .fg(app.palette.fg)
        .bg(app.palette.bg)
        .add_modifier(Modifier::BOLD);

    let play_pause = if app.status.playing { PAUSE_GLYPH } else { PLAY_GLYPH };

    for (extent, glyph) in [
        (geometry.previous, PREVIOUS_GLYPH),
        (geometry.play_pause, play_pause),
        (geometry.next, NEXT_GLYPH),
    ] {
        if let Some(area) = zone_rect(extent, mid, row) {
            f.render_widget(
                Paragraph::new(glyph)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(style),
                area,
            );
        }
    }
}

/// Clip a zone to the row; None when it falls entirely outside
fn zone_rect(extent: Extent, mid: i32, row: Rect) -> Option<Rect> {
    let left = i32::from(row.x);
    let right = left + i32::from(row.width);
    let start = extent.start(mid).max(left);
    let end = (extent.start(mid) + extent.len()).min(right);
    if start >= end {
        return None;
    }
    Some(Rect::new(start as u16, row.y, (end - start) as u16, 1))
}
