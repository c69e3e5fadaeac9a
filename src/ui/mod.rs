//! User interface rendering.

mod colormaps;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub use colormaps::ColorPalette;
pub use theme::{Theme, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = app.colors();

    // Plot canvas with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    app.plotter.draw(chunks[0], f.buffer_mut(), &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
