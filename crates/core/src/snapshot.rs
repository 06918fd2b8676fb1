use crate::motion::MotionState;
use crate::piece::Tower;
use crate::types::{Lean, RoundState};

/// Read-only copy of everything a front-end needs to draw a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub round: RoundState,
    pub tower: Tower,
    /// The piece waiting to be dropped; only present while playing.
    pub moving: Option<MotionState>,
    pub score: u32,
    pub multiplier: u32,
    pub high_score: u32,
    pub speed: f32,
    /// Collapse progress, only while toppling.
    pub topple_frame: Option<u32>,
    pub lean: Lean,
    pub milestone_pending: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Whether an `act` would currently drop a piece.
    pub fn playable(&self) -> bool {
        self.round == RoundState::Playing && !self.milestone_pending
    }

    /// Nothing moves between frames in this state.
    pub fn is_static(&self) -> bool {
        !self.round.is_active()
    }

    /// Stable FNV-1a hash of the visible state.
    ///
    /// Used to skip redraws when nothing changed.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write_u32(self.round as u32);
        h.write_u32(self.tower.len() as u32);
        for piece in &self.tower {
            h.write_u32(piece.position.to_bits());
            h.write_u32(piece.rotation.to_bits());
            h.write_u32(piece.id);
        }
        match self.moving {
            Some(m) => {
                h.write_u32(1);
                h.write_u32(m.position.to_bits());
            }
            None => h.write_u32(0),
        }
        h.write_u32(self.score);
        h.write_u32(self.multiplier);
        h.write_u32(self.high_score);
        h.write_u32(self.topple_frame.unwrap_or(u32::MAX));
        h.write_u32(self.milestone_pending as u32);
        h.write_u32(self.episode_id);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            round: RoundState::Idle,
            tower: Tower::new(),
            moving: None,
            score: 0,
            multiplier: 1,
            high_score: 0,
            speed: 0.0,
            topple_frame: None,
            lean: Lean::Center,
            milestone_pending: false,
            episode_id: 0,
        }
    }
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write_u32(&mut self, v: u32) {
        for b in v.to_le_bytes() {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
