mod detail_page;
mod helper;
mod list_page;

pub use helper::Palette;

use detail_page::draw_panel;
use list_page::{draw_blocks, draw_transactions};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::format::unix_now;

const NAV_HELP: &str =
    "Tab focus • / search • ↑↓ select • Enter open • b back • r refresh • t theme • Esc quit";
const SEARCH_HELP: &str = "Enter search • Tab focus • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    draw_at(frame, app, unix_now());
}

/// Draw with an explicit clock for block ages
pub fn draw_at(frame: &mut Frame, app: &App, now: u64) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Min(0),    // Body
        Constraint::Length(1), // Help
    ])
    .split(area);

    draw_search_bar(frame, app, &palette, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let lists = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    draw_blocks(frame, app, &palette, lists[0], now);
    draw_transactions(frame, app, &palette, lists[1]);
    draw_panel(frame, app, &palette, columns[1]);

    let help_text = if app.focus == Focus::Search {
        SEARCH_HELP
    } else {
        NAV_HELP
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Search;
    let block = palette.pane(" 🔍 Search ".to_string(), focused);

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Block number / Tx hash / Block hash / Address",
            Style::default().fg(palette.muted),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(palette.text))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show the cursor while typing
    if focused {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < (area.x + area.width).saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
