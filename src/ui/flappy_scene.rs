//! UI rendering for the game scene: play area, status bar and info panel.

use crate::assets::SpriteSet;
use crate::game::{GamePhase, GameState, SpriteId};
use crate::ui::game_common::{
    create_game_layout, render_banner, render_centered_text, render_info_panel_frame,
    render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;
/// Fewest rows the play area shrinks to before the status bar gives way.
const PLAY_AREA_MIN_ROWS: u16 = 8;

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    Ground,
    Flyer(char),
}

/// Render the whole game scene.
pub fn render_game(frame: &mut Frame, area: Rect, game: &GameState, sprites: &SpriteSet) {
    let layout = create_game_layout(
        frame,
        area,
        " Floppy Fish ",
        Color::Cyan,
        PLAY_AREA_MIN_ROWS,
        INFO_PANEL_WIDTH,
    );

    render_play_area(frame, layout.content, game, sprites);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Glyph for the flyer, nose up while climbing and down while diving.
pub fn flyer_glyph(tilt_degrees: f64, resting: char) -> char {
    if tilt_degrees > 10.0 {
        '▲'
    } else if tilt_degrees < -10.0 {
        '▼'
    } else {
        resting
    }
}

/// Sample the draw list onto a `width` x `height` cell grid.
///
/// Each cell takes the topmost sprite covering its center. The flyer is
/// smaller than a cell at most terminal sizes, so its center cell is always
/// stamped afterwards.
pub fn rasterize(
    game: &GameState,
    sprites: &SpriteSet,
    width: usize,
    height: usize,
) -> Vec<Vec<CellKind>> {
    let mut grid = vec![vec![CellKind::Sky; width]; height];
    if width == 0 || height == 0 {
        return grid;
    }

    let config = game.config();
    let x_scale = config.play_width / width as f64;
    let y_scale = config.play_height / height as f64;
    let commands = game.draw_list();
    let flyer_cell = CellKind::Flyer(flyer_glyph(
        game.flyer.tilt_degrees(),
        sprites.flyer.glyph,
    ));

    for (row, cells) in grid.iter_mut().enumerate() {
        let py = (row as f64 + 0.5) * y_scale;
        for (col, cell) in cells.iter_mut().enumerate() {
            let px = (col as f64 + 0.5) * x_scale;
            let hit = commands
                .iter()
                .rev()
                .find(|command| command.bounds.contains(px, py));
            *cell = match hit.map(|command| command.sprite) {
                Some(SpriteId::Flyer) => flyer_cell,
                Some(SpriteId::PipeTop | SpriteId::PipeBottom) => CellKind::Pipe,
                Some(SpriteId::Ground) => CellKind::Ground,
                None => CellKind::Sky,
            };
        }
    }

    let col = ((game.flyer.x() / x_scale) as usize).min(width - 1);
    let row = (game.flyer.y / y_scale).clamp(0.0, (height - 1) as f64) as usize;
    grid[row][col] = flyer_cell;

    grid
}

fn cell_span(cell: CellKind, sprites: &SpriteSet) -> Span<'static> {
    match cell {
        CellKind::Sky => Span::raw(" "),
        CellKind::Pipe => Span::styled(
            sprites.pipe.glyph.to_string(),
            Style::default().fg(Color::Green),
        ),
        CellKind::Ground => Span::styled(
            sprites.ground.glyph.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        CellKind::Flyer(glyph) => Span::styled(
            glyph.to_string(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Render the play area with pipes, ground, flyer and the score/prompts on top.
fn render_play_area(frame: &mut Frame, area: Rect, game: &GameState, sprites: &SpriteSet) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let lines: Vec<Line> = rasterize(game, sprites, width, height)
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(|c| cell_span(c, sprites)).collect::<Vec<_>>()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    render_centered_text(
        frame,
        area,
        1,
        &game.score().to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    match game.phase() {
        GamePhase::NotStarted => render_centered_text(
            frame,
            area,
            area.height / 2 + 2,
            "Press Space / Click to Start",
            Style::default().fg(Color::Yellow),
        ),
        GamePhase::Dead => render_banner(
            frame,
            area,
            "GAME OVER",
            "Press R to retry",
            Color::Red,
        ),
        GamePhase::Playing => {}
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &GameState) {
    let controls = [
        ("[Space/Click]", "Flap"),
        ("[R]", "Reset"),
        ("[Esc/Q]", "Quit"),
    ];
    match game.phase() {
        GamePhase::NotStarted => render_status_bar(
            frame,
            area,
            "Press Space / Click to Start",
            Color::Yellow,
            &controls,
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score()),
            Color::Green,
            &controls,
        ),
        GamePhase::Dead => render_status_bar(
            frame,
            area,
            &format!("Crashed after {} pipes", game.score()),
            Color::Red,
            &controls,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GameState) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let config = game.config();
    let (state_text, state_color) = match game.phase() {
        GamePhase::NotStarted => ("Ready", Color::Yellow),
        GamePhase::Playing => ("Flying", Color::Green),
        GamePhase::Dead => ("Crashed", Color::Red),
    };

    let row = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state_text),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Score", game.score().to_string(), Color::White),
        row("Pipes", game.obstacles.len().to_string(), Color::Green),
        Line::from(""),
        row("Speed", format!("{:.1}", config.scroll_speed), Color::Cyan),
        row("Gap", format!("{:.0}", config.gap_size), Color::Cyan),
        row("Height", format!("{:.0}", game.flyer.y), Color::Cyan),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
