use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::app::App;

/// Longest title or artist shown before eliding
const LABEL_COLUMNS: usize = 16;

/// Cut `text` to at most `columns` display columns, appending `...` when cut
pub fn truncate_label(text: &str, columns: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            out.push_str("...");
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Title/artist and album lines, centered. `area` must be two rows high.
pub fn draw_now_playing(f: &mut Frame, area: Rect, app: &App) {
    let status = &app.status;
    let headline = format!(
        "{}  -  {}",
        truncate_label(&status.title, LABEL_COLUMNS),
        truncate_label(&status.artist, LABEL_COLUMNS)
    );

    let mut style = Style::default().fg(app.palette.fg).bg(app.palette.bg);
    if !status.playing {
        style = style.add_modifier(Modifier::DIM);
    }

    let lines = vec![Line::from(headline), Line::from(status.album.clone())];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);

    f.render_widget(paragraph, area);
}
