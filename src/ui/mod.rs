//! Terminal rendering.
//!
//! The simulation only hands over positions and bounding shapes (via
//! `GameState::draw_list`); everything visual is decided here.

pub mod flappy_scene;
pub mod game_common;

use crate::assets::SpriteSet;
use crate::game::GameState;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;

/// Draws one frame of the game. Never mutates the game.
pub trait Renderer {
    fn render(&mut self, game: &GameState) -> io::Result<()>;
}

/// Renders into any ratatui backend (crossterm in the binary, `TestBackend` in tests).
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    sprites: SpriteSet,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B, sprites: SpriteSet) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            sprites,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, game: &GameState) -> io::Result<()> {
        let sprites = &self.sprites;
        self.terminal.draw(|frame| {
            let area = frame.size();
            flappy_scene::render_game(frame, area, game, sprites);
        })?;
        Ok(())
    }
}
