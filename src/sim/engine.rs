//! Simulation engine facade for hosts
//!
//! Owns the [`GameState`] exclusively. Hosts feed it commands and one
//! `tick()` per frame, and read it back through shared references only.

use super::state::{GameEvent, GamePhase, GameState, Hud};
use super::tick::{Command, apply_command, tick};
use crate::tuning::{Tuning, TuningError};

#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Engine in the menu with the default tuning
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
        }
    }

    /// Engine in the menu with a custom, validated tuning table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::with_tuning(seed, tuning),
        })
    }

    /// Resume from a previously captured state
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        tick(&mut self.state);
    }

    /// Apply an input command. Returns false if it was ignored.
    pub fn command(&mut self, command: Command) -> bool {
        apply_command(&mut self.state, command)
    }

    /// Apply the command bound to a `KeyboardEvent.code`, if any
    pub fn key_down(&mut self, code: &str) -> bool {
        match Command::from_key(code, self.state.phase) {
            Some(command) => self.command(command),
            None => false,
        }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn hud(&self) -> Hud {
        self.state.hud()
    }

    /// Take all notifications raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
