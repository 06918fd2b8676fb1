//! Cheese Stack (workspace facade crate).
//!
//! The game logic, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `cheese_stack::{core,input,term,types}` and adds the binary's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use cheese_stack_core as core;
pub use cheese_stack_input as input;
pub use cheese_stack_term as term;
pub use cheese_stack_types as types;

pub use config::AppConfig;
