//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, randomizer and scoring.
//! It owns the spawn controller, applies player commands and the automatic fall,
//! and runs the lock → clear → spawn sequence.
//!
//! Commands issued before [`GameState::start`] or after game over (other than
//! `Restart`) are driver contract violations; they are ignored and reported as
//! "nothing changed".

use crate::collision::{collides, drop_distance};
use crate::config::{ConfigError, EngineConfig, Rules};
use crate::events::{EventLog, GameEvent};
use crate::lock::{clear_rows, find_completed_rows, lock};
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::Progress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, WALL_KICKS};
use crate::Board;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    randomizer: PieceRandomizer,
    rules: Rules,
    progress: Progress,
    /// Seconds accumulated since the last automatic descent
    fall_timer: f64,
    game_over: bool,
    started: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    events: EventLog,
}

impl GameState {
    /// Create a new game with the given RNG seed and default rules
    pub fn new(seed: u64) -> Self {
        Self::from_parts(PieceRandomizer::new(seed), Rules::default())
    }

    /// Create a game with custom rules; rejects rules that fail [`Rules::validate`]
    pub fn with_rules(seed: u64, rules: Rules) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::from_parts(PieceRandomizer::new(seed), rules))
    }

    /// Create a game from a config; an absent seed is drawn at random.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.rules.validate()?;
        let randomizer = match config.seed {
            Some(seed) => PieceRandomizer::new(seed),
            None => PieceRandomizer::from_entropy(),
        };
        Ok(Self::from_parts(randomizer, config.rules))
    }

    fn from_parts(randomizer: PieceRandomizer, rules: Rules) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            randomizer,
            progress: Progress::new(&rules),
            rules,
            fall_timer: 0.0,
            game_over: false,
            started: false,
            episode_id: 0,
            events: EventLog::new(),
        }
    }

    /// Start the game and spawn the first pieces
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn fall_interval(&self) -> f64 {
        self.progress.fall_interval
    }

    pub fn fall_timer(&self) -> f64 {
        self.fall_timer
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, for scenario setup like [`Self::board_mut`].
    ///
    /// Ignored before start and after game over.
    pub fn set_active(&mut self, piece: Piece) {
        if self.started && !self.game_over {
            self.active = Some(piece);
        }
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Take all events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_code_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.map(|p| p.kind());
        out.started = self.started;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.randomizer.seed();
        out.score = self.progress.score;
        out.level = self.progress.level;
        out.lines = self.progress.lines;
        out.fall_interval = self.progress.fall_interval;
        out.fall_timer = self.fall_timer;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn controller.
    ///
    /// The first call fills both slots with fresh random pieces. Later calls
    /// promote the queued piece to the spawn origin, queue a new one, and end the
    /// game if the promoted piece overlaps the board. Returns false on game over.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            log::debug!("spawn ignored after game over");
            return false;
        }

        match self.next.take() {
            None => {
                self.active = Some(Piece::spawn(self.randomizer.next_kind()));
                self.next = Some(Piece::spawn(self.randomizer.next_kind()));
            }
            Some(mut promoted) => {
                promoted.reset_origin();
                self.active = Some(promoted);
                self.next = Some(Piece::spawn(self.randomizer.next_kind()));

                if collides(&promoted, &self.board, 0, 0) {
                    self.set_game_over();
                }
            }
        }

        self.fall_timer = 0.0;

        if self.game_over {
            return false;
        }

        if let (Some(active), Some(next)) = (self.active, self.next) {
            log::trace!("spawned {:?}, next {:?}", active.kind(), next.kind());
            self.events.push(GameEvent::Spawned {
                kind: active.kind(),
                next: next.kind(),
            });
        }
        true
    }

    fn set_game_over(&mut self) {
        self.game_over = true;
        log::info!(
            "game over: score {}, level {}, lines {}",
            self.progress.score,
            self.progress.level,
            self.progress.lines
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.progress.score,
        });
    }

    /// Active piece, if commands may currently touch it
    fn playable_piece(&self) -> Option<Piece> {
        if !self.started || self.game_over {
            log::debug!(
                "command ignored: started={}, game_over={}",
                self.started,
                self.game_over
            );
            return None;
        }
        self.active
    }

    /// Try to move the active piece; nothing changes on collision.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(mut piece) = self.playable_piece() else {
            return false;
        };

        if collides(&piece, &self.board, dx, dy) {
            return false;
        }

        piece.translate(dx, dy);
        self.active = Some(piece);
        true
    }

    /// Rotate clockwise, then resolve a collision with the fixed kick list.
    ///
    /// If no kick fits, the piece is left exactly as it was.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(original) = self.playable_piece() else {
            return false;
        };

        if original.kind().is_square() {
            return false;
        }

        let mut rotated = original;
        rotated.rotate();

        if !collides(&rotated, &self.board, 0, 0) {
            self.active = Some(rotated);
            return true;
        }

        for &(dx, dy) in WALL_KICKS.iter() {
            if !collides(&rotated, &self.board, dx, dy) {
                rotated.translate(dx, dy);
                self.active = Some(rotated);
                return true;
            }
        }

        false
    }

    /// Player-commanded single-cell descent, +1 point when it moves
    pub(crate) fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.progress.add_soft_drop(&self.rules);
        }
        moved
    }

    /// Drop to the bottom, credit 2 points per cell, then lock and spawn.
    ///
    /// Returns the distance dropped, or `None` if no piece was playable.
    pub(crate) fn hard_drop(&mut self) -> Option<u32> {
        let mut piece = self.playable_piece()?;

        let distance = drop_distance(&piece, &self.board);
        piece.translate(0, distance as i8);

        self.active = Some(piece);
        self.progress.add_hard_drop(distance as u32, &self.rules);
        self.lock_and_spawn();
        Some(distance as u32)
    }

    /// Lock the active piece, clear completed rows and spawn the next piece
    pub fn lock_and_spawn(&mut self) {
        let Some(piece) = self.playable_piece() else {
            return;
        };

        let written = lock(&piece, &mut self.board);
        log::trace!(
            "locked {:?} at ({}, {}), {} cells written",
            piece.kind(),
            piece.x(),
            piece.y(),
            written
        );
        self.events.push(GameEvent::Locked {
            kind: piece.kind(),
            cells_written: written as u8,
        });

        let rows = find_completed_rows(&self.board);
        let result = clear_rows(&rows, &mut self.board, &mut self.progress, &self.rules);
        if result.rows > 0 {
            log::debug!("cleared {} rows for {} points", result.rows, result.points);
            self.events.push(GameEvent::LinesCleared {
                rows: result.rows as u8,
                points: result.points,
            });
        }
        if let Some(level) = result.level_up {
            log::info!(
                "level {} reached, fall interval {:.3}s",
                level,
                self.progress.fall_interval
            );
            self.events.push(GameEvent::LevelUp { level });
        }

        self.spawn_piece();
    }

    /// Automatic fall.
    ///
    /// Accumulates `elapsed_secs`; once the timer reaches the fall interval it
    /// resets and the piece moves down one row, or locks if it cannot.
    /// At most one descent happens per call. Returns true if the piece descended
    /// or locked. Negative or non-finite durations are ignored.
    pub fn tick(&mut self, elapsed_secs: f64) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
            log::debug!("tick ignored: elapsed {}", elapsed_secs);
            return false;
        }

        self.fall_timer += elapsed_secs;
        if self.fall_timer < self.progress.fall_interval {
            return false;
        }
        self.fall_timer = 0.0;

        if collides(&piece, &self.board, 0, 1) {
            self.lock_and_spawn();
        } else {
            let mut piece = piece;
            piece.translate(0, 1);
            self.active = Some(piece);
        }
        true
    }

    /// Discard the session and start a fresh one.
    ///
    /// The board is cleared and every counter reset; the randomizer keeps its
    /// stream so the new session deals different pieces.
    pub fn restart(&mut self) {
        let randomizer = self.randomizer.clone();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::from_parts(randomizer, self.rules);
        self.episode_id = next_episode;
        log::debug!("restarted, episode {}", next_episode);
        self.events.push(GameEvent::Restarted {
            episode_id: next_episode,
        });
        self.start();
    }

    /// Apply one command. Returns true if the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::RotateClockwise => self.try_rotate(),
            Command::SoftDropOneCell => self.soft_drop(),
            Command::HardDropToBottom => self.hard_drop().is_some(),
            Command::Tick(elapsed_secs) => self.tick(elapsed_secs),
            Command::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
