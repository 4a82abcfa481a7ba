//! Shared types - plain data used by the core, the input layer and presenters
//!
//! Everything here is a pure data structure. No game rules live in this crate,
//! so a presenter can depend on it without pulling in the state machine.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 10 | Columns (indexed 0-9, left to right) |
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Rows (indexed 0-19, top to bottom) |
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Automatic drop interval |
//! | `POINTS_PER_LINE` | 100 | Score awarded per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), "#800080");
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Default automatic-drop interval (one row per second)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Score awarded for each row removed by a single lock
pub const POINTS_PER_LINE: u32 = 100;

/// Smallest accepted board dimension (the I piece needs four columns)
pub const MIN_BOARD_DIMENSION: u8 = 4;

/// Largest accepted board dimension (keeps every coordinate inside `i8`)
pub const MAX_BOARD_DIMENSION: u8 = 64;

/// The seven piece variants
///
/// The display attribute of each variant is its colour:
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All variants in catalog order. Used for uniform selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
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
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter naming the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display colour as a CSS-style hex string
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::T => "#800080",
            PieceKind::O => "#FFFF00",
            PieceKind::I => "#00FFFF",
            PieceKind::L => "#FFA500",
            PieceKind::J => "#0000FF",
            PieceKind::S => "#00FF00",
            PieceKind::Z => "#FF0000",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(kind)`: occupied by a locked cell of that variant
pub type Cell = Option<PieceKind>;

/// Horizontal direction for [`Command::MoveLeft`] / [`Command::MoveRight`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step in this direction
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Inputs accepted by the game controller
///
/// User intents and the periodic tick share this type so both can be fed
/// through one serialized stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Lower the piece one row now, locking it if it cannot fall
    SoftDropNow,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Time-driven fall, carrying milliseconds elapsed since the last automatic drop
    Tick {
        #[serde(rename = "elapsedMs")]
        elapsed_ms: u64,
    },
}

impl Command {
    /// Parse a user command from its camelCase name
    ///
    /// `Tick` carries data and is never produced by this parser.
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("softDropNow"), Some(Command::SoftDropNow));
    /// assert_eq!(Command::from_str("tick"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdropnow" | "softdrop" => Some(Command::SoftDropNow),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// camelCase name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDropNow => "softDropNow",
            Command::Rotate => "rotate",
            Command::Tick { .. } => "tick",
        }
    }

    /// Shorthand for a tick command
    pub fn tick(elapsed_ms: u64) -> Self {
        Command::Tick { elapsed_ms }
    }
}
