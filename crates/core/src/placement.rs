//! Placement resolver - decides what a drop does to the tower.

use tracing::warn;

use crate::piece::{Piece, Tower};
use crate::stability::evaluate;
use crate::types::{Lean, PIECE_WIDTH};

/// Result of dropping the moving piece.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The tower was empty; the base piece is always accepted.
    FirstPiece(Tower),
    /// The piece landed and the tower is still stable.
    Extended(Tower),
    /// No horizontal overlap with the top piece. The tower is untouched.
    Missed,
    /// The piece landed but tipped the tower over.
    ///
    /// The returned tower includes the destabilizing piece.
    Collapsing { tower: Tower, lean: Lean },
}

/// Horizontal overlap `[start, end)` between two pieces starting at `a` and `b`.
///
/// Returns `None` when the interval is empty.
pub fn overlap(a: f32, b: f32) -> Option<(f32, f32)> {
    let start = a.max(b);
    let end = (a + PIECE_WIDTH).min(b + PIECE_WIDTH);
    if end <= start {
        None
    } else {
        Some((start, end))
    }
}

/// Resolve a drop of the moving piece at `moving_position` onto `tower`.
///
/// The position is rounded to whole track units once, here; `id` becomes the
/// new piece's identifier if it lands.
pub fn resolve_placement(moving_position: f32, tower: &Tower, id: u32) -> Placement {
    let piece = Piece::placed(moving_position, id);

    let Some(top) = tower.last() else {
        let mut next = Tower::new();
        next.push(piece);
        return Placement::FirstPiece(next);
    };

    if overlap(piece.position, top.position).is_none() {
        return Placement::Missed;
    }

    let mut next = tower.clone();
    if next.try_push(piece).is_err() {
        warn!(height = tower.len(), "tower is full, rejecting placement");
        return Placement::Missed;
    }

    let stability = evaluate(&next);
    if stability.stable {
        Placement::Extended(next)
    } else {
        Placement::Collapsing {
            tower: next,
            lean: stability.lean,
        }
    }
}
