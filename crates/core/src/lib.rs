//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same calls in the same order always produce the same tower
//! - **Testable**: Every rule is a plain function or a method on [`GameState`]
//! - **Portable**: Can run behind any front-end (terminal, GUI, headless)
//! - **Allocation-free**: The tower is a fixed-capacity `ArrayVec`
//!
//! # Module Structure
//!
//! - [`piece`]: Placed slices and the [`Tower`] they form
//! - [`stability`]: Weighted center-of-mass stability check
//! - [`placement`]: Overlap test and drop resolution
//! - [`motion`]: The oscillating piece with clamp-and-reflect boundaries
//! - [`topple`]: Fixed-length collapse animation
//! - [`game_state`]: Round lifecycle, scoring, multiplier and milestone reset
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **First piece**: Always lands, wherever it is dropped
//! - **Overlap**: A drop with no horizontal overlap with the top piece ends the round
//! - **Stability**: A landed piece that pushes the weighted center of mass past 40%
//!   of the piece width topples the tower (no points for that drop)
//! - **Scoring**: Each landed piece is worth the current multiplier
//! - **Milestone**: At 15 pieces the tower is cleared shortly after and the
//!   multiplier (and speed) goes up by one
//!
//! # Example
//!
//! ```
//! use cheese_stack_core::GameState;
//! use cheese_stack_core::types::{ActOutcome, RoundState};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.act(), Some(ActOutcome::Started));
//!
//! // The first drop always lands.
//! assert_eq!(game.act(), Some(ActOutcome::FirstPiece));
//! assert_eq!(game.score(), 1);
//!
//! // Dropping again without moving lands squarely on top.
//! assert_eq!(game.act(), Some(ActOutcome::Extended));
//! assert_eq!(game.round(), RoundState::Playing);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`] takes elapsed time in reference ticks of
//! [`TICK_MS`](types::TICK_MS) (16ms). Speeds are expressed per reference tick,
//! so the result does not depend on how often the front-end calls `tick`.
//! The collapse animation is the exception: it advances one frame per call.

pub mod game_state;
pub mod motion;
pub mod piece;
pub mod placement;
pub mod snapshot;
pub mod stability;
pub mod topple;

pub use cheese_stack_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use motion::{advance, MotionState};
pub use piece::{Piece, Tower};
pub use placement::{overlap, resolve_placement, Placement};
pub use snapshot::GameSnapshot;
pub use stability::{evaluate, Stability};
pub use topple::{advance_topple, ToppleState};
