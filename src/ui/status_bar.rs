//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let plotter = &app.plotter;
    let region = plotter.current_region();
    let name = if region.title().is_empty() {
        String::new()
    } else {
        format!(" {}", region.title())
    };
    let line = Line::from(vec![
        Span::styled(
            format!(
                " [{}/{}]{} ",
                plotter.current_index() + 1,
                plotter.number_of_regions(),
                name
            ),
            Style::default().fg(colors.yellow),
        ),
        Span::raw(app.status.as_str()),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().fg(colors.fg0).bg(colors.bg1));

    f.render_widget(paragraph, area);
}
