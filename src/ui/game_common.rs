//! Shared UI pieces: the framed layout, the status bar, and banners.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play area - top left, inside outer border
    pub content: Rect,
    /// Status bar, `STATUS_BAR_HEIGHT` rows under the play area
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Rows reserved under the play area for the status message and key hints.
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Frame `area` with a titled border and carve it into play area, status bar
/// and a fixed-width info panel on the right.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [play area]                   │  [info]     │
/// │ [status bar]                    │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// The play area keeps at least `content_min_height` rows; the status bar
/// gives way first on a short terminal.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);
    let (left, info_panel) = (columns[0], columns[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(content_min_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(left);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel,
    }
}

/// Status message on the first row, `(key, action)` hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < STATUS_BAR_HEIGHT || controls.is_empty() {
        return;
    }
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let separator = (i > 0).then(|| Span::raw("  "));
            separator.into_iter().chain([
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Render a line of centered text on one row of `area`, without clearing
/// the rest of the row's background.
pub fn render_centered_text(frame: &mut Frame, area: Rect, row: u16, text: &str, style: Style) {
    if row >= area.height {
        return;
    }
    let paragraph = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect {
            y: area.y + row,
            height: 1,
            ..area
        },
    );
}

/// Render a compact banner centered in `area`, leaving the scene visible
/// around it.
pub fn render_banner(frame: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let banner_height: u16 = 4;
    let banner_width = (title.chars().count().max(message.chars().count()) as u16 + 6)
        .min(area.width);
    if area.height < banner_height || banner_width < 4 {
        return;
    }

    let banner_area = Rect {
        x: area.x + (area.width - banner_width) / 2,
        y: area.y + (area.height - banner_height) / 2,
        width: banner_width,
        height: banner_height,
    };
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
