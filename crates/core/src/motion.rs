//! Motion controller - the oscillating piece waiting to be dropped.
//!
//! Boundary policy is clamp-and-reflect: a step that reaches or passes an end
//! of the track stops exactly on it and only flips the direction, so the
//! reversed motion starts on the following step. Overshoot is discarded.

use crate::types::{Direction, START_POSITION};

/// Position and heading of the unplaced piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub position: f32,
    pub direction: Direction,
}

impl MotionState {
    pub fn new(position: f32, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Where every round begins.
    pub fn initial() -> Self {
        Self::new(START_POSITION, Direction::Right)
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Advance `motion` by `delta_units` reference ticks at `speed` units per tick.
pub fn advance(
    motion: MotionState,
    delta_units: f32,
    speed: f32,
    track_min: f32,
    track_max: f32,
) -> MotionState {
    let next = motion.position + motion.direction.as_f32() * speed * delta_units;

    if next >= track_max {
        MotionState::new(track_max, Direction::Left)
    } else if next <= track_min {
        MotionState::new(track_min, Direction::Right)
    } else {
        MotionState::new(next, motion.direction)
    }
}
