use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::helper::Palette;
use crate::app::{App, Focus, Listing};
use crate::view::{block_rows, tx_rows, BlockRow, TxRow};

pub fn draw_blocks(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, now: u64) {
    let focused = app.focus == Focus::Blocks;
    let block = palette.pane(" Latest Blocks ".to_string(), focused);

    let rows = match &app.blocks {
        Listing::Ready(blocks) => block_rows(blocks, now),
        other => return draw_placeholder(frame, palette, block, other, area),
    };

    if rows.is_empty() {
        let empty = Paragraph::new("No blocks").style(Style::default().fg(palette.muted));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| block_item(palette, row)).collect();
    draw_list(frame, palette, block, items, app.block_selected, focused, area);
}

pub fn draw_transactions(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Transactions;
    let block = palette.pane(" Recent Transactions ".to_string(), focused);

    let rows = match &app.transactions {
        Listing::Ready(txs) => tx_rows(txs),
        other => return draw_placeholder(frame, palette, block, other, area),
    };

    if rows.is_empty() {
        let empty =
            Paragraph::new("No recent transactions").style(Style::default().fg(palette.muted));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| tx_item(palette, row)).collect();
    draw_list(frame, palette, block, items, app.tx_selected, focused, area);
}

/// Loading or failure text in place of a list
fn draw_placeholder<T>(
    frame: &mut Frame,
    palette: &Palette,
    block: ratatui::widgets::Block,
    listing: &Listing<T>,
    area: Rect,
) {
    let (text, color) = match listing {
        Listing::Failed(e) => (format!("Failed to load: {e}"), palette.error),
        _ => ("Loading...".to_string(), palette.loading),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_list(
    frame: &mut Frame,
    palette: &Palette,
    block: ratatui::widgets::Block,
    items: Vec<ListItem>,
    selected: usize,
    focused: bool,
    area: Rect,
) {
    let highlight = if focused {
        palette.selected()
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn block_item<'a>(palette: &Palette, row: &BlockRow) -> ListItem<'a> {
    let line = Line::from(vec![
        Span::styled(format!("{:<11}", row.number), Style::default().fg(palette.accent)),
        Span::styled(format!("{} ", row.hash), Style::default().fg(palette.text)),
        Span::styled(format!("{:>7} ", row.tx_count), Style::default().fg(palette.value)),
        Span::styled(row.age.clone(), Style::default().fg(palette.muted)),
    ]);
    ListItem::new(line)
}

fn tx_item<'a>(palette: &Palette, row: &TxRow) -> ListItem<'a> {
    let to_style = if row.to == "contract" {
        Style::default().fg(palette.value)
    } else {
        Style::default().fg(palette.text)
    };

    let line = Line::from(vec![
        Span::styled(format!("{} ", row.hash), Style::default().fg(palette.accent)),
        Span::styled(row.from.clone(), Style::default().fg(palette.text)),
        Span::styled(" → ", Style::default().fg(palette.muted)),
        Span::styled(format!("{:<21}", row.to), to_style),
        Span::styled(row.value.clone(), Style::default().fg(palette.value)),
    ]);
    ListItem::new(line)
}
