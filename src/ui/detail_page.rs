use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helper::*;
use crate::app::{App, DetailPanel, Focus, Panel};
use crate::view::DetailKind;

const TITLE_ART: &str = r#"
███████╗████████╗██╗  ██╗███████╗██╗  ██╗
██╔════╝╚══██╔══╝██║  ██║██╔════╝╚██╗██╔╝
█████╗     ██║   ███████║█████╗   ╚███╔╝
██╔══╝     ██║   ██╔══██║██╔══╝   ██╔██╗
███████╗   ██║   ██║  ██║███████╗██╔╝ ██╗
╚══════╝   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
"#;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_panel(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Detail;

    match &app.panel {
        Panel::Welcome => draw_welcome(frame, app, palette, area, focused),
        Panel::Loading(msg) => draw_loading(frame, palette, msg, area, focused),
        Panel::Detail(panel) => draw_detail(frame, panel, palette, area, focused),
        Panel::Error(msg) => draw_error(frame, palette, msg, area, focused),
    }
}

fn draw_welcome(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, focused: bool) {
    let block = palette.pane(" Explorer ".to_string(), focused);

    let mut lines: Vec<Line> = TITLE_ART
        .lines()
        .map(|l| Line::from(l.to_string()).fg(palette.accent).bold())
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from("Terminal Block Explorer").fg(palette.muted));
    lines.push(Line::from(""));
    lines.push(Line::from("Search by block number, transaction hash or address").fg(palette.text));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("RPC: ", Style::default().fg(palette.muted)),
        Span::styled(app.rpc_url.clone(), Style::default().fg(palette.accent)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_loading(frame: &mut Frame, palette: &Palette, msg: &str, area: Rect, focused: bool) {
    let block = palette.pane(" Loading ".to_string(), focused);

    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let frame_idx = (millis / 100) as usize % SPINNER.len();

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(format!("{} {msg}", SPINNER[frame_idx]))
        .style(Style::default().fg(palette.loading))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect_fixed(inner.width, 1, inner));
}

fn draw_error(frame: &mut Frame, palette: &Palette, msg: &str, area: Rect, focused: bool) {
    let block = palette.pane(" Error ".to_string(), focused);

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(palette.error))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from("b back • / search").fg(palette.muted));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded_rect(inner, 1));
}

fn draw_detail(frame: &mut Frame, panel: &DetailPanel, palette: &Palette, area: Rect, focused: bool) {
    let view = &panel.view;
    let icon = match view.kind {
        DetailKind::Block => "📦",
        DetailKind::Transaction => "📄",
        DetailKind::Address => "👤",
    };
    let block = palette.pane(format!(" {icon} {} ", view.title), focused);

    // Links are numbered in the same order as `DetailView::links`
    let mut link_idx = 0;
    let mut is_selected = || {
        let selected = focused && link_idx == panel.selected;
        link_idx += 1;
        selected
    };

    let mut lines = Vec::with_capacity(view.fields.len() + view.rows.len() + 2);
    for field in &view.fields {
        if field.link.is_some() {
            lines.push(format_kv_link(palette, field.label, &field.value, is_selected()));
        } else {
            lines.push(format_kv(palette, field.label, &field.value));
        }
    }

    if !view.rows.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("── Transactions ({}) ──", view.rows.len())).fg(palette.muted));

        for row in &view.rows {
            let hash_style = if is_selected() {
                palette.selected()
            } else {
                Style::default().fg(palette.accent)
            };
            lines.push(Line::from(vec![
                Span::styled(row.hash.clone(), hash_style),
                Span::styled(format!(" {} → {} ", row.from, row.to), Style::default().fg(palette.text)),
                Span::styled(row.value.clone(), Style::default().fg(palette.value)),
            ]));
        }
    }

    // Keep the selected row in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = match panel.selected.checked_sub(link_count(&view.fields)) {
        Some(row) if focused => (view.fields.len() + 2 + row + 1).saturating_sub(inner_height),
        _ => 0,
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn link_count(fields: &[crate::view::Field]) -> usize {
    fields.iter().filter(|f| f.link.is_some()).count()
}
