//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of any drawing concerns
//! - Read game state only through `GameSnapshot`
//! - Scale track units to terminal columns so the whole track fits

pub mod fb;
pub mod game_view;
pub mod mood;
pub mod render_throttle;
pub mod renderer;

pub use cheese_stack_core as core;
pub use cheese_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use mood::{Mood, MoodTracker};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame, TerminalRenderer};
