//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! They are plain data with no engine logic, so they can be shared by the rules
//! engine, input dispatch and any rendering or persistence collaborator.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: `(BOARD_WIDTH / 2 - 2, 0)` = `(3, 0)` for every piece
//!
//! # Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_INTERVAL_SECS` | 0.5 | Seconds between automatic descents at level 1 |
//! | `SPEED_MULTIPLIER` | 0.9 | Interval factor applied per level gained |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//! | `STARTING_LEVEL` | 1 | Level of a fresh session |
//! | `MAX_LEVEL` | 15 | Level cap |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert!(PieceKind::O.is_square());
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDropToBottom));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin column: `floor(W / 2) - 2`
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn origin row
pub const SPAWN_Y: i8 = 0;

/// Fall interval at level 1, in seconds
pub const INITIAL_FALL_INTERVAL_SECS: f64 = 0.5;

/// Fall interval factor per level (10% faster each level)
pub const SPEED_MULTIPLIER: f64 = 0.9;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh session
pub const STARTING_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 15;

/// Line clear base points, indexed by `min(rows, 4) - 1`.
///
/// Multiplied by the current level when awarded.
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Points per cell moved by an explicit soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell traversed by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Offsets tried, in order, after a rotation lands in a colliding position.
pub const WALL_KICKS: [(i8, i8); 5] = [(-1, 0), (1, 0), (-2, 0), (2, 0), (0, -1)];

/// The seven piece kinds
///
/// Each kind has a fixed shape and color in the shape catalog:
/// - **I**: Cyan, four in a row
/// - **O**: Yellow, 2x2 square (never rotates)
/// - **T**: Purple
/// - **L**: Orange
/// - **J**: Blue
/// - **S**: Green
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Uppercase letter used by text renderings
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Compact numeric code (1..=7); 0 is reserved for empty cells.
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// The square kind suppresses rotation.
    pub fn is_square(&self) -> bool {
        matches!(self, PieceKind::O)
    }
}

/// A cell on the game board
///
/// Occupied cells remember the kind that produced them and that piece's
/// rotation state at lock time, so a renderer can pick an oriented sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { kind: PieceKind, rotation: u8 },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied { .. })
    }

    /// Kind that produced this cell, if occupied
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { kind, .. } => Some(*kind),
        }
    }

    /// 0 for empty, otherwise [`PieceKind::code`]
    pub fn code(&self) -> u8 {
        self.kind().map_or(0, |k| k.code())
    }
}

/// Abstract commands accepted by the engine
///
/// The input dispatcher decides which physical key maps to which command;
/// the engine never sees physical input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise, resolving collisions with wall kicks
    RotateClockwise,
    /// Move piece one cell down (+1 point)
    SoftDropOneCell,
    /// Drop piece to its lowest position and lock it (+2 points per cell)
    HardDropToBottom,
    /// Advance the fall timer by the given number of seconds
    Tick(f64),
    /// Discard the session and start a fresh one
    Restart,
}

impl Command {
    /// Parse a parameterless command from string (case-insensitive)
    ///
    /// Accepts the camel-case command names and short aliases. `Tick` carries a
    /// duration and is not produced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::RotateClockwise));
    /// assert_eq!(Command::from_str("drop"), Some(Command::HardDropToBottom));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "rotateclockwise" | "rotatecw" | "rotate" => Some(Command::RotateClockwise),
            "softdroponecell" | "softdrop" | "down" => Some(Command::SoftDropOneCell),
            "harddroptobottom" | "harddrop" | "drop" => Some(Command::HardDropToBottom),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateClockwise => "rotateClockwise",
            Command::SoftDropOneCell => "softDropOneCell",
            Command::HardDropToBottom => "hardDropToBottom",
            Command::Tick(_) => "tick",
            Command::Restart => "restart",
        }
    }
}
