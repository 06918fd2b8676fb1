//! Drop input handler for terminal environments.
//!
//! A drop is a one-shot intent: holding a key must not keep dropping pieces.
//! Terminals without key-release events report a held key as a stream of
//! presses, so the handler treats any press of the same key that arrives
//! within `repeat_guard_ms` of the previous one as part of the same hold.

use crossterm::event::KeyCode;

use crate::map::handle_key_event;
use crate::types::GameAction;

// Typical terminal auto-repeat fires every 30-50ms after an initial ~250-500ms
// delay; a guard above the repeat interval swallows the stream.
const DEFAULT_REPEAT_GUARD_MS: u32 = 120;

/// Filters raw key presses into game actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<KeyCode>,
    since_last_press_ms: u32,
    repeat_guard_ms: u32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_guard_ms(DEFAULT_REPEAT_GUARD_MS)
    }

    pub fn with_repeat_guard_ms(repeat_guard_ms: u32) -> Self {
        Self {
            held: None,
            since_last_press_ms: 0,
            repeat_guard_ms,
        }
    }

    /// Handle a key press. Returns the action to apply, if any.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = handle_key_event(code.into())?;

        let repeated =
            self.held == Some(code) && self.since_last_press_ms < self.repeat_guard_ms;
        self.held = Some(code);
        self.since_last_press_ms = 0;

        if repeated {
            None
        } else {
            Some(action)
        }
    }

    /// Handle a key release (terminals that report them).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if self.held == Some(code) {
            self.held = None;
        }
    }

    /// Advance the handler's clock.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.since_last_press_ms = self.since_last_press_ms.saturating_add(elapsed_ms);
        if self.since_last_press_ms >= self.repeat_guard_ms {
            self.held = None;
        }
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_press_acts() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Act));
        assert!(h.is_holding());
    }

    #[test]
    fn auto_repeat_is_swallowed() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Act));
        for _ in 0..10 {
            h.update(40);
            assert_eq!(h.handle_key_press(KeyCode::Char(' ')), None);
        }
    }

    #[test]
    fn press_after_pause_acts_again() {
        let mut h = InputHandler::new();
        assert!(h.handle_key_press(KeyCode::Char(' ')).is_some());
        h.update(DEFAULT_REPEAT_GUARD_MS);
        assert!(!h.is_holding());
        assert_eq!(h.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Act));
    }

    #[test]
    fn release_allows_immediate_press() {
        let mut h = InputHandler::new();
        assert!(h.handle_key_press(KeyCode::Enter).is_some());
        h.handle_key_release(KeyCode::Enter);
        assert_eq!(h.handle_key_press(KeyCode::Enter), Some(GameAction::Act));
    }

    #[test]
    fn different_key_is_not_a_repeat() {
        let mut h = InputHandler::new();
        assert!(h.handle_key_press(KeyCode::Char(' ')).is_some());
        assert_eq!(h.handle_key_press(KeyCode::Enter), Some(GameAction::Act));
        assert_eq!(
            h.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn unmapped_keys_do_not_reset_hold() {
        let mut h = InputHandler::new();
        assert!(h.handle_key_press(KeyCode::Char(' ')).is_some());
        assert_eq!(h.handle_key_press(KeyCode::Char('x')), None);
        h.update(10);
        assert_eq!(h.handle_key_press(KeyCode::Char(' ')), None);
    }
}
