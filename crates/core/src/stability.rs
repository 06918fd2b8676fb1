//! Stability evaluator - weighted center-of-mass heuristic
//!
//! The tower is judged against the center of its base piece. Every piece whose
//! center sits noticeably off that line pulls the center of mass toward its
//! side, and higher pieces pull harder (weight `i + 1`). Pieces within
//! [`NEAR_CENTER_RATIO`] of the piece width are treated as perfectly aligned.
//!
//! The result is deterministic and depends only on piece positions and their
//! order in the tower.

use crate::piece::Piece;
use crate::types::{Lean, NEAR_CENTER_RATIO, PIECE_WIDTH, STABILITY_RATIO};

/// Outcome of a stability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stability {
    pub stable: bool,
    /// Reported even when stable so a collapse can be oriented.
    pub lean: Lean,
    /// Weighted offset from the base center, in track units.
    pub center_of_mass: f32,
}

impl Stability {
    const SETTLED: Self = Self {
        stable: true,
        lean: Lean::Center,
        center_of_mass: 0.0,
    };
}

/// Evaluate whether `pieces` (base first) stays upright.
///
/// # Examples
///
/// ```
/// use cheese_stack_core::{evaluate, Piece};
/// use cheese_stack_core::types::Lean;
///
/// let tower = [Piece::placed(100.0, 1), Piece::placed(100.0, 2)];
/// let s = evaluate(&tower);
/// assert!(s.stable);
/// assert_eq!(s.lean, Lean::Center);
///
/// let leaning = [Piece::placed(100.0, 1), Piece::placed(145.0, 2)];
/// let s = evaluate(&leaning);
/// assert!(!s.stable);
/// assert_eq!(s.lean, Lean::Right);
/// ```
pub fn evaluate(pieces: &[Piece]) -> Stability {
    if pieces.len() < 2 {
        return Stability::SETTLED;
    }

    let base_center = pieces[0].center();
    let ignore_within = PIECE_WIDTH * NEAR_CENTER_RATIO;

    let mut moment = 0.0f32;
    let mut total_weight = 0.0f32;
    for (i, piece) in pieces.iter().enumerate() {
        let offset = piece.center() - base_center;
        if offset.abs() <= ignore_within {
            continue;
        }
        let weight = (i + 1) as f32;
        moment += offset * weight;
        total_weight += weight;
    }

    let center_of_mass = if total_weight == 0.0 {
        0.0
    } else {
        moment / total_weight
    };

    Stability {
        stable: center_of_mass.abs() < PIECE_WIDTH * STABILITY_RATIO,
        lean: Lean::from_value(center_of_mass),
        center_of_mass,
    }
}
