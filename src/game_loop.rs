//! The frame loop: clock, input, simulation, render, once per frame.

use crate::clock::FrameClock;
use crate::game::{Control, GameState, TickReport};
use crate::input::InputSource;
use crate::ui::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

/// Owns the game and drives it with injected collaborators.
pub struct GameLoop<R: Renderer, I: InputSource, C: FrameClock, G: Rng = StdRng> {
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
    rng: G,
    frames: u64,
}

impl<R: Renderer, I: InputSource, C: FrameClock> GameLoop<R, I, C, StdRng> {
    /// Loop with an entropy-seeded RNG, or a fixed seed for reproducible runs.
    pub fn new(state: GameState, renderer: R, input: I, clock: C, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(state, renderer, input, clock, rng)
    }
}

impl<R: Renderer, I: InputSource, C: FrameClock, G: Rng> GameLoop<R, I, C, G> {
    pub fn with_rng(state: GameState, renderer: R, input: I, clock: C, rng: G) -> Self {
        Self {
            state,
            renderer,
            input,
            clock,
            rng,
            frames: 0,
        }
    }

    /// Run until a quit event arrives.
    pub fn run(&mut self) -> io::Result<()> {
        self.renderer.render(&self.state)?;
        while self.step()? == Control::Continue {}
        log::info!(
            "quit after {} frames, final score {}",
            self.frames,
            self.state.score()
        );
        Ok(())
    }

    /// One frame: wait for the clock, drain and apply input, simulate, render.
    ///
    /// A quit event stops the frame at the tick boundary: nothing after it is
    /// applied, simulated or drawn.
    pub fn step(&mut self) -> io::Result<Control> {
        self.clock.tick();
        let now = self.clock.now_ms();

        for event in self.input.poll()? {
            if self.state.handle_input(event, now) == Control::Quit {
                return Ok(Control::Quit);
            }
        }

        let report: TickReport = self.state.tick(now, &mut self.rng);
        if report.scored > 0 {
            log::debug!("score {} (+{})", self.state.score(), report.scored);
        }

        self.renderer.render(&self.state)?;
        self.frames += 1;
        Ok(Control::Continue)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
