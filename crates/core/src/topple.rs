//! Collapse animator - the fixed-length toppling sequence.
//!
//! Every frame each piece rotates by `2 * lean * (i + 1)` degrees and slides
//! one unit toward the lean, so upper pieces fall faster than lower ones.
//! There is no rest condition: the animation always runs [`TOPPLE_FRAMES`].

use crate::piece::Piece;
use crate::types::{Lean, TOPPLE_FRAMES};

/// Progress of an in-flight collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppleState {
    pub lean: Lean,
    /// Frames produced so far.
    pub frame: u32,
}

impl ToppleState {
    pub fn new(lean: Lean) -> Self {
        Self { lean, frame: 0 }
    }

    /// Produce the next frame. Returns true once the animation is complete.
    pub fn step(&mut self, pieces: &mut [Piece]) -> bool {
        let done = advance_topple(pieces, self.lean, self.frame);
        self.frame += 1;
        done
    }
}

/// Apply one collapse frame in place.
///
/// `frame` is the number of frames already produced; the return value is
/// true when this call produced the last one.
pub fn advance_topple(pieces: &mut [Piece], lean: Lean, frame: u32) -> bool {
    let sign = lean.as_f32();
    for (i, piece) in pieces.iter_mut().enumerate() {
        piece.rotation += 2.0 * sign * (i + 1) as f32;
        piece.position += sign;
    }
    frame + 1 >= TOPPLE_FRAMES
}
