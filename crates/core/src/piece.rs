//! Placed slices and the tower they form.

use arrayvec::ArrayVec;

use crate::types::{MILESTONE_HEIGHT, PIECE_WIDTH};

/// The stack of placed pieces, base first.
///
/// Capacity is the milestone height: the tower is cleared as soon as it gets
/// there, so it never needs to grow past it.
pub type Tower = ArrayVec<Piece, MILESTONE_HEIGHT>;

/// One placed slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    /// Leading (left) edge along the track.
    pub position: f32,
    /// Degrees; stays 0 until the tower collapses.
    pub rotation: f32,
    pub id: u32,
}

impl Piece {
    /// A freshly placed piece, snapped to whole track units.
    pub fn placed(position: f32, id: u32) -> Self {
        Self {
            position: position.round(),
            rotation: 0.0,
            id,
        }
    }

    /// Horizontal center.
    pub fn center(&self) -> f32 {
        self.position + PIECE_WIDTH / 2.0
    }

    /// Trailing (right) edge, exclusive.
    pub fn end(&self) -> f32 {
        self.position + PIECE_WIDTH
    }
}
