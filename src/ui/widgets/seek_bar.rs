use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;

/// `MM:SS`, negative values shown as zero
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

const PLAYHEAD_GLYPH: &str = "●";

/// Timing label on the row above `area`, progress bar on `area` itself.
/// `area` is one row high and spans the full window width.
///
/// While the pointer hovers over the bar or drags it, the label turns bold
/// and a playhead marks the current position.
pub fn draw_seek_bar(f: &mut Frame, label_area: Option<Rect>, area: Rect, app: &App) {
    let status = &app.status;
    let style = Style::default().fg(app.palette.fg).bg(app.palette.bg);
    let highlighted = app.interaction.is_seek_highlighted();

    if let Some(label_area) = label_area {
        let mut label_style = style;
        if highlighted {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let label = format!(
            "{} / {}",
            format_clock(status.position),
            format_clock(status.duration)
        );
        f.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(label_style),
            label_area,
        );
    }

    let width = usize::from(area.width);
    let (played, head) = bar_split(status.progress(), width, highlighted);

    let line = Line::from(vec![
        Span::styled("━".repeat(played), style.add_modifier(Modifier::BOLD)),
        Span::styled(PLAYHEAD_GLYPH.repeat(head), style.add_modifier(Modifier::BOLD)),
        Span::styled(
            "─".repeat(width - played - head),
            style.add_modifier(Modifier::DIM),
        ),
    ]);
    f.render_widget(Paragraph::new(line).style(style), area);
}

/// Played cells and playhead cells (0 or 1) for a bar `width` cells wide
fn bar_split(progress: f64, width: usize, with_head: bool) -> (usize, usize) {
    let head = usize::from(with_head && width > 0);
    let played = (progress * width as f64).round() as usize;
    (played.min(width - head), head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(42), "00:42");
        assert_eq!(format_clock(180), "03:00");
        assert_eq!(format_clock(3671), "61:11");
        assert_eq!(format_clock(-5), "00:00");
    }

    #[test]
    fn bar_split_reserves_a_cell_for_the_playhead() {
        assert_eq!(bar_split(0.25, 40, false), (10, 0));
        assert_eq!(bar_split(0.25, 40, true), (10, 1));
        assert_eq!(bar_split(1.0, 40, true), (39, 1));
        assert_eq!(bar_split(0.5, 0, true), (0, 0));
    }
}
