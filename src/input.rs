//! Input handling: turns raw terminal events into game input events.
//!
//! The game loop drains an `InputSource` once per tick; every event is
//! consumed exactly once.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Discrete player intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game.
    Quit,
    /// Space / Up / Enter / left click.
    FlapOrClick,
    /// `R`: start over.
    ResetRequested,
}

/// Something that can be polled for the events of one tick.
pub trait InputSource {
    /// Drain every pending event without blocking.
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Map a key press to an input event. Anything else is ignored.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(InputEvent::FlapOrClick),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::ResetRequested),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Map any terminal event (keys and mouse) to an input event.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(InputEvent::FlapOrClick)
        }
        _ => None,
    }
}

/// Keyboard and mouse input from the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = map_event(event::read()?) {
                events.push(input);
            }
        }
        Ok(events)
    }
}

/// Replays prepared batches, one batch per poll. Empty once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered by the next unused poll.
    pub fn push_tick(&mut self, events: Vec<InputEvent>) -> &mut Self {
        self.batches.push_back(events);
        self
    }

    /// Queue `count` polls with no events.
    pub fn idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.batches.push_back(Vec::new());
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
