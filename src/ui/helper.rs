use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::config::Theme;

// ============================================================================
// Palette
// ============================================================================

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub value: Color,
    pub error: Color,
    pub loading: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                value: Color::Yellow,
                error: Color::Red,
                loading: Color::Yellow,
                selected_fg: Color::Black,
                selected_bg: Color::Cyan,
            },
            Theme::Light => Self {
                bg: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                value: Color::Magenta,
                error: Color::Red,
                loading: Color::Blue,
                selected_fg: Color::White,
                selected_bg: Color::Blue,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Bordered pane, highlighted when it has focus
    pub fn pane<'a>(&self, title: String, focused: bool) -> Block<'a> {
        let border = if focused { self.accent } else { self.muted };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_style(Style::default().fg(border))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub fn format_kv(palette: &Palette, key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(palette.muted)),
        Span::styled(value.to_string(), Style::default().fg(palette.text)),
    ])
}

pub fn format_kv_link(palette: &Palette, key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        palette.selected()
    } else {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(palette.muted)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);

    horizontal[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
