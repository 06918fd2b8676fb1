//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Track Geometry
//!
//! Positions are measured in track units along a horizontal track. A piece's
//! `position` is its leading (left) edge.
//!
//! - **Piece width**: 100 units
//! - **Track**: `[0, 442]` (`GAME_WIDTH - PIECE_WIDTH + 142`)
//! - **Spawn position**: 150, moving right
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Reference tick that `delta_units = 1.0` stands for |
//! | `BASE_SPEED` | 4 | Track units per reference tick at multiplier 1 |
//! | `SPEED_STEP` | 1 | Extra speed per multiplier step |
//! | `MILESTONE_HEIGHT` | 15 | Tower height that triggers a reset and multiplier bump |
//! | `MILESTONE_RESET_MS` | 100 | Delay before the milestone reset fires |
//! | `TOPPLE_FRAMES` | 50 | Length of the collapse animation |
//! | `HAPPY_MOOD_MS` | 500 | How long the happy indicator lingers |
//!
//! # Stability Thresholds
//!
//! Both are fractions of `PIECE_WIDTH`:
//!
//! - `NEAR_CENTER_RATIO` (0.1): pieces closer than this to the base center are ignored
//! - `STABILITY_RATIO` (0.4): weighted center of mass must stay below this
//!
//! # Examples
//!
//! ```
//! use cheese_stack_types::{speed_for_multiplier, GameAction, Lean, BASE_SPEED};
//!
//! assert_eq!(GameAction::from_str("ACT"), Some(GameAction::Act));
//! assert_eq!(Lean::from_value(-3.5), Lean::Left);
//! assert_eq!(speed_for_multiplier(1), BASE_SPEED);
//! ```

/// Width of one slice in track units.
pub const PIECE_WIDTH: f32 = 100.0;

/// Height of one slice in track units (rendering only).
pub const PIECE_HEIGHT: f32 = 20.0;

/// Width of the play area in track units.
pub const GAME_WIDTH: f32 = 400.0;

/// Leftmost position of the moving piece.
pub const TRACK_MIN: f32 = 0.0;

/// Rightmost position of the moving piece.
pub const TRACK_MAX: f32 = GAME_WIDTH - PIECE_WIDTH + 142.0;

/// Where the moving piece appears at round start.
pub const START_POSITION: f32 = 150.0;

/// Reference tick in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Motion speed at multiplier 1, in track units per reference tick.
pub const BASE_SPEED: f32 = 4.0;

/// Speed added for every multiplier step above 1.
pub const SPEED_STEP: f32 = 1.0;

/// Tower height that triggers the milestone reset.
pub const MILESTONE_HEIGHT: usize = 15;

/// Delay between reaching the milestone and the tower reset.
pub const MILESTONE_RESET_MS: u32 = 100;

/// Number of frames in the collapse animation.
pub const TOPPLE_FRAMES: u32 = 50;

/// Offsets up to this fraction of the piece width do not count toward lean.
pub const NEAR_CENTER_RATIO: f32 = 0.1;

/// The weighted center of mass must stay below this fraction of the piece width.
pub const STABILITY_RATIO: f32 = 0.4;

/// Duration of the happy indicator after a good placement.
pub const HAPPY_MOOD_MS: u32 = 500;

/// Motion speed for a given multiplier.
///
/// Grows linearly so every milestone makes the piece faster.
pub fn speed_for_multiplier(multiplier: u32) -> f32 {
    BASE_SPEED + (multiplier.saturating_sub(1) as f32) * SPEED_STEP
}


/// Lifecycle of a round.
///
/// `Ended` keeps the last tower around for display; `Idle` has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    #[default]
    Idle,
    Playing,
    Toppling,
    Ended,
}

impl RoundState {
    /// A round is in progress (moving piece or collapse animation).
    pub fn is_active(self) -> bool {
        matches!(self, RoundState::Playing | RoundState::Toppling)
    }

    /// `start()` is only meaningful from these states.
    pub fn can_start(self) -> bool {
        matches!(self, RoundState::Idle | RoundState::Ended)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundState::Idle => "idle",
            RoundState::Playing => "playing",
            RoundState::Toppling => "toppling",
            RoundState::Ended => "ended",
        }
    }
}

/// Travel direction of the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_f32(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Sign of the tower's weighted center-of-mass offset from its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lean {
    Left,
    #[default]
    Center,
    Right,
}

impl Lean {
    /// Sign of `value`; exactly zero maps to `Center`.
    pub fn from_value(value: f32) -> Self {
        if value > 0.0 {
            Lean::Right
        } else if value < 0.0 {
            Lean::Left
        } else {
            Lean::Center
        }
    }

    pub fn as_f32(self) -> f32 {
        self.as_i8() as f32
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Lean::Left => -1,
            Lean::Center => 0,
            Lean::Right => 1,
        }
    }
}

/// Result of an accepted `act()` call, for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActOutcome {
    /// A new round was started.
    Started,
    /// The base piece of the tower was placed.
    FirstPiece,
    /// The tower grew and is still stable.
    Extended,
    /// The piece missed the top of the tower; the round is over.
    Missed,
    /// The piece landed but tipped the tower; the collapse animation runs.
    Collapsing,
}

impl ActOutcome {
    /// Outcomes that grew the tower and awarded points.
    pub fn is_success(self) -> bool {
        matches!(self, ActOutcome::FirstPiece | ActOutcome::Extended)
    }
}

/// Front-end intents that reach the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a round if none is running, otherwise drop the moving piece.
    Act,
    /// Abandon whatever is running and begin a fresh round.
    Restart,
    Quit,
}

impl GameAction {
    /// Parse a game action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cheese_stack_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("act"), Some(GameAction::Act));
    /// assert_eq!(GameAction::from_str("drop"), Some(GameAction::Act));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("fly"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "act" | "drop" | "place" => Some(GameAction::Act),
            "restart" | "reset" => Some(GameAction::Restart),
            "quit" | "exit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::Act => "act",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}
