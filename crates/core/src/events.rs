//! Engine events for observing collaborators (audio cues, high-score storage).
//!
//! The engine only records events; it never calls out. Events queue in a bounded
//! buffer until the driver drains them. When the buffer is full new events are
//! dropped, so drivers that care should drain after every command.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::PieceKind;

/// Maximum number of undrained events
pub const EVENT_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A new active piece entered the board
    Spawned { kind: PieceKind, next: PieceKind },
    /// A piece was committed to the board
    Locked { kind: PieceKind, cells_written: u8 },
    /// One or more rows were removed
    LinesCleared { rows: u8, points: u32 },
    LevelUp { level: u32 },
    /// The promoted piece could not be placed; `final_score` is the session result
    GameOver { final_score: u32 },
    Restarted { episode_id: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pending: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        if self.pending.try_push(event).is_err() {
            log::trace!("event log full, dropping {:?}", event);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter()
    }

    /// Remove and return all pending events, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order() {
        let mut log = EventLog::new();
        log.push(GameEvent::LevelUp { level: 2 });
        log.push(GameEvent::GameOver { final_score: 10 });

        let drained: Vec<_> = log.drain().collect();
        assert_eq!(
            drained,
            vec![
                GameEvent::LevelUp { level: 2 },
                GameEvent::GameOver { final_score: 10 }
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_overflow_drops_newest() {
        let mut log = EventLog::new();
        for level in 0..(EVENT_CAPACITY as u32 + 5) {
            log.push(GameEvent::LevelUp { level });
        }
        assert_eq!(log.len(), EVENT_CAPACITY);
        assert_eq!(log.iter().next(), Some(&GameEvent::LevelUp { level: 0 }));
    }
}
