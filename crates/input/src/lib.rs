//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides an
//! input handler that turns held keys and rapid repeats into a single drop.

pub mod handler;
pub mod map;

pub use cheese_stack_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
