//! Headless session driver.
//!
//! The engine has no clock. A driver decides when time passes and which
//! commands arrive; this module provides the two drivers the binary uses:
//! replaying a command script and a seeded random autoplayer that advances time
//! in fixed steps.

use serde::Serialize;

use crate::core::{GameEvent, GameState};
use crate::types::Command;

/// Fixed simulation timestep (seconds)
pub const STEP_SECS: f64 = 1.0 / 60.0;

/// Default step budget for [`Autoplay`]
pub const DEFAULT_MAX_STEPS: u64 = 20_000;

/// Outcome of a driven session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub episode_id: u32,
    /// Commands handed to the engine, ticks included
    pub commands: u64,
    /// Commands that changed the state
    pub accepted: u64,
    pub pieces_locked: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// Running tally while a session is driven
#[derive(Debug, Default)]
struct Tally {
    commands: u64,
    accepted: u64,
    pieces_locked: u32,
}

impl Tally {
    fn apply(&mut self, state: &mut GameState, command: Command) {
        self.commands += 1;
        if state.apply(command) {
            self.accepted += 1;
        }
        for event in state.drain_events() {
            match event {
                GameEvent::Locked { .. } => self.pieces_locked += 1,
                GameEvent::LevelUp { level } => log::debug!("autoplay reached level {}", level),
                _ => {}
            }
        }
    }

    fn finish(self, state: &GameState) -> SessionSummary {
        SessionSummary {
            seed: state.seed(),
            episode_id: state.episode_id(),
            commands: self.commands,
            accepted: self.accepted,
            pieces_locked: self.pieces_locked,
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
            game_over: state.game_over(),
        }
    }
}

/// Apply `commands` in order, starting the game first if needed.
///
/// Commands after game over (other than `Restart`) are still handed to the
/// engine; it ignores them and they count as not accepted.
pub fn run_script(state: &mut GameState, commands: &[Command]) -> SessionSummary {
    state.start();

    let mut tally = Tally::default();
    for &command in commands {
        tally.apply(state, command);
    }
    tally.finish(state)
}

/// Seeded random player.
///
/// Each step it may issue one player command, then advances the fall timer by
/// one [`STEP_SECS`] tick. It stops at game over or after `max_steps` steps.
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: fastrand::Rng,
    max_steps: u64,
}

impl Autoplay {
    pub fn new(seed: u64, max_steps: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            max_steps,
        }
    }

    fn choose(&mut self) -> Option<Command> {
        match self.rng.u8(..100) {
            0..=9 => Some(Command::MoveLeft),
            10..=19 => Some(Command::MoveRight),
            20..=27 => Some(Command::RotateClockwise),
            28..=32 => Some(Command::SoftDropOneCell),
            33..=35 => Some(Command::HardDropToBottom),
            _ => None,
        }
    }

    pub fn run(&mut self, state: &mut GameState) -> SessionSummary {
        state.start();

        let mut tally = Tally::default();
        for _ in 0..self.max_steps {
            if state.game_over() {
                break;
            }
            if let Some(command) = self.choose() {
                tally.apply(state, command);
            }
            tally.apply(state, Command::Tick(STEP_SECS));
        }

        let summary = tally.finish(state);
        log::info!(
            "autoplay finished: score {}, lines {}, {} pieces, game over: {}",
            summary.score,
            summary.lines,
            summary.pieces_locked,
            summary.game_over
        );
        summary
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(1, DEFAULT_MAX_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_script_starts_game() {
        let mut state = GameState::new(5);
        let summary = run_script(&mut state, &[Command::HardDropToBottom]);

        assert!(state.started());
        assert_eq!(summary.commands, 1);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.pieces_locked, 1);
        assert!(summary.score > 0);
    }

    #[test]
    fn test_autoplay_respects_step_budget() {
        let mut state = GameState::new(9);
        let summary = Autoplay::new(9, 10).run(&mut state);

        // One tick per step plus at most one player command
        assert!(summary.commands >= 10);
        assert!(summary.commands <= 20);
    }
}
