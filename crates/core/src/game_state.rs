//! Game state module - owns the round lifecycle
//!
//! This module ties together the motion controller, placement resolver and
//! collapse animator. It is the only thing front-ends talk to:
//!
//! - [`GameState::start`] / [`GameState::restart`] begin a round
//! - [`GameState::act`] is the single "drop" intent
//! - [`GameState::tick`] advances motion, the pending milestone and collapse
//!
//! Every call is synchronous and leaves the state consistent before returning.

use tracing::{debug, info};

use crate::motion::{advance, MotionState};
use crate::piece::Tower;
use crate::placement::{resolve_placement, Placement};
use crate::snapshot::GameSnapshot;
use crate::topple::ToppleState;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    round: RoundState,
    tower: Tower,
    motion: MotionState,
    topple: Option<ToppleState>,
    /// Milliseconds until the milestone reset fires. Cleared by every new round.
    milestone_reset_ms: Option<f32>,
    score: u32,
    multiplier: u32,
    /// Best score of the process lifetime; only ever raised.
    high_score: u32,
    /// Monotonic round id (increments on every start).
    episode_id: u32,
    /// Id handed to the next placed piece.
    next_piece_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: RoundState::Idle,
            tower: Tower::new(),
            motion: MotionState::initial(),
            topple: None,
            milestone_reset_ms: None,
            score: 0,
            multiplier: 1,
            high_score: 0,
            episode_id: 0,
            next_piece_id: 1,
        }
    }

    /// Begin a round from `Idle` or `Ended`.
    ///
    /// Returns false (and changes nothing) while a round is in progress.
    pub fn start(&mut self) -> bool {
        if !self.round.can_start() {
            return false;
        }
        self.begin_round();
        true
    }

    /// Begin a fresh round from any state.
    ///
    /// Supersedes an in-flight collapse, the moving piece and any pending
    /// milestone reset. The high score is kept, but an abandoned round does not
    /// count toward it.
    pub fn restart(&mut self) {
        self.begin_round();
    }

    fn begin_round(&mut self) {
        self.tower.clear();
        self.score = 0;
        self.multiplier = 1;
        self.motion = MotionState::initial();
        self.topple = None;
        self.milestone_reset_ms = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.round = RoundState::Playing;
        info!(episode = self.episode_id, "round started");
    }

    /// The single user intent: start a round if none is running, otherwise drop.
    ///
    /// Returns `None` when the call is rejected (during a collapse, or while a
    /// milestone reset is pending).
    pub fn act(&mut self) -> Option<ActOutcome> {
        match self.round {
            RoundState::Idle | RoundState::Ended => {
                self.begin_round();
                Some(ActOutcome::Started)
            }
            RoundState::Toppling => None,
            RoundState::Playing => self.place(),
        }
    }

    /// Apply a front-end action.
    pub fn apply_action(&mut self, action: GameAction) -> Option<ActOutcome> {
        match action {
            GameAction::Act => self.act(),
            GameAction::Restart => {
                self.restart();
                Some(ActOutcome::Started)
            }
            GameAction::Quit => None,
        }
    }

    fn place(&mut self) -> Option<ActOutcome> {
        if self.milestone_reset_ms.is_some() {
            return None;
        }

        let id = self.next_piece_id;
        let placement = resolve_placement(self.motion.position, &self.tower, id);
        let outcome = match placement {
            Placement::FirstPiece(tower) => {
                self.accept(tower);
                ActOutcome::FirstPiece
            }
            Placement::Extended(tower) => {
                self.accept(tower);
                ActOutcome::Extended
            }
            Placement::Missed => {
                self.round = RoundState::Ended;
                self.record_high_score();
                info!(
                    episode = self.episode_id,
                    score = self.score,
                    position = self.motion.position,
                    "missed the tower, round over"
                );
                ActOutcome::Missed
            }
            Placement::Collapsing { tower, lean } => {
                self.tower = tower;
                self.next_piece_id = self.next_piece_id.wrapping_add(1);
                self.topple = Some(ToppleState::new(lean));
                self.round = RoundState::Toppling;
                info!(
                    episode = self.episode_id,
                    height = self.tower.len(),
                    lean = lean.as_i8(),
                    "tower is toppling"
                );
                ActOutcome::Collapsing
            }
        };
        Some(outcome)
    }

    fn accept(&mut self, tower: Tower) {
        self.tower = tower;
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        self.score = self.score.saturating_add(self.multiplier);
        debug!(
            height = self.tower.len(),
            score = self.score,
            multiplier = self.multiplier,
            "piece placed"
        );

        if self.tower.len() >= MILESTONE_HEIGHT {
            self.milestone_reset_ms = Some(MILESTONE_RESET_MS as f32);
            debug!(episode = self.episode_id, "milestone reached, reset scheduled");
        }
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
        }
    }

    /// Advance the game by `delta_units` reference ticks (one unit = [`TICK_MS`]).
    ///
    /// While playing this moves the piece and counts down a pending milestone
    /// reset; while toppling it produces exactly one collapse frame regardless
    /// of `delta_units`. Otherwise it does nothing.
    pub fn tick(&mut self, delta_units: f32) {
        let delta_units = if delta_units.is_finite() {
            delta_units.max(0.0)
        } else {
            0.0
        };

        match self.round {
            RoundState::Playing => {
                self.motion = advance(
                    self.motion,
                    delta_units,
                    self.speed(),
                    TRACK_MIN,
                    TRACK_MAX,
                );
                self.tick_milestone(delta_units * TICK_MS as f32);
            }
            RoundState::Toppling => self.tick_topple(),
            RoundState::Idle | RoundState::Ended => {}
        }
    }

    /// [`tick`](Self::tick) with elapsed wall time in milliseconds.
    pub fn tick_ms(&mut self, elapsed_ms: u32) {
        self.tick(elapsed_ms as f32 / TICK_MS as f32);
    }

    fn tick_milestone(&mut self, elapsed_ms: f32) {
        let Some(remaining_ms) = self.milestone_reset_ms.as_mut() else {
            return;
        };
        *remaining_ms -= elapsed_ms;
        if *remaining_ms > 0.0 {
            return;
        }

        self.milestone_reset_ms = None;
        self.tower.clear();
        self.multiplier = self.multiplier.saturating_add(1);
        info!(
            episode = self.episode_id,
            multiplier = self.multiplier,
            speed = self.speed(),
            "milestone reset, multiplier raised"
        );
    }

    fn tick_topple(&mut self) {
        let Some(topple) = self.topple.as_mut() else {
            self.round = RoundState::Ended;
            return;
        };
        if !topple.step(&mut self.tower) {
            return;
        }

        self.topple = None;
        self.round = RoundState::Ended;
        self.record_high_score();
        info!(
            episode = self.episode_id,
            score = self.score,
            "collapse finished, round over"
        );
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn is_playing(&self) -> bool {
        self.round == RoundState::Playing
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// The moving piece, only while playing.
    pub fn motion(&self) -> Option<MotionState> {
        (self.round == RoundState::Playing).then_some(self.motion)
    }

    pub fn topple(&self) -> Option<ToppleState> {
        self.topple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn milestone_pending(&self) -> bool {
        self.milestone_reset_ms.is_some()
    }

    /// Current motion speed in track units per reference tick.
    pub fn speed(&self) -> f32 {
        speed_for_multiplier(self.multiplier)
    }

    #[cfg(test)]
    pub(crate) fn motion_mut(&mut self) -> &mut MotionState {
        &mut self.motion
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.round = self.round;
        out.tower.clone_from(&self.tower);
        out.moving = self.motion();
        out.score = self.score;
        out.multiplier = self.multiplier;
        out.high_score = self.high_score;
        out.speed = self.speed();
        out.topple_frame = self.topple.map(|t| t.frame);
        out.lean = self.topple.map(|t| t.lean).unwrap_or_default();
        out.milestone_pending = self.milestone_pending();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut gs = GameState::new();
        assert_eq!(gs.act(), Some(ActOutcome::Started));
        gs
    }

    fn drop_at(gs: &mut GameState, position: f32) -> Option<ActOutcome> {
        gs.motion_mut().position = position;
        gs.act()
    }

    #[test]
    fn new_game_is_idle() {
        let gs = GameState::new();
        assert_eq!(gs.round(), RoundState::Idle);
        assert!(gs.tower().is_empty());
        assert_eq!(gs.motion(), None);
        assert_eq!(gs.multiplier(), 1);
        assert_eq!(gs.high_score(), 0);
    }

    #[test]
    fn start_resets_round_state() {
        let mut gs = playing();
        assert_eq!(gs.round(), RoundState::Playing);
        assert_eq!(gs.motion(), Some(MotionState::initial()));
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.episode_id(), 1);
        // Already playing: start is a no-op.
        gs.tick(3.0);
        let before = gs.motion();
        assert!(!gs.start());
        assert_eq!(gs.motion(), before);
        assert_eq!(gs.episode_id(), 1);
    }

    #[test]
    fn first_piece_scores_multiplier() {
        let mut gs = playing();
        assert_eq!(drop_at(&mut gs, 10.0), Some(ActOutcome::FirstPiece));
        assert_eq!(gs.score(), 1);
        assert_eq!(gs.tower().len(), 1);
    }

    #[test]
    fn miss_ends_round_and_records_high_score() {
        let mut gs = playing();
        drop_at(&mut gs, 150.0);
        drop_at(&mut gs, 150.0);
        assert_eq!(gs.score(), 2);

        assert_eq!(drop_at(&mut gs, 300.0), Some(ActOutcome::Missed));
        assert_eq!(gs.round(), RoundState::Ended);
        assert_eq!(gs.tower().len(), 2, "ended round keeps its tower");
        assert_eq!(gs.high_score(), 2);
        assert_eq!(gs.motion(), None);

        // Next act restarts.
        assert_eq!(gs.act(), Some(ActOutcome::Started));
        assert!(gs.tower().is_empty());
        assert_eq!(gs.score(), 0);
        assert_eq!(gs.high_score(), 2);
    }

    #[test]
    fn collapse_blocks_act_and_awards_no_score() {
        let mut gs = playing();
        drop_at(&mut gs, 150.0);
        drop_at(&mut gs, 150.0);
        assert_eq!(drop_at(&mut gs, 195.0), Some(ActOutcome::Collapsing));
        assert_eq!(gs.round(), RoundState::Toppling);
        assert_eq!(gs.score(), 2);
        assert_eq!(gs.tower().len(), 3);
        // High score waits for the animation.
        assert_eq!(gs.high_score(), 0);

        assert_eq!(gs.act(), None);
        assert!(!gs.start());

        for _ in 0..TOPPLE_FRAMES - 1 {
            gs.tick(1.0);
            assert_eq!(gs.round(), RoundState::Toppling);
        }
        gs.tick(1.0);
        assert_eq!(gs.round(), RoundState::Ended);
        assert_eq!(gs.high_score(), 2);
        assert!(gs.topple().is_none());
    }

    #[test]
    fn motion_is_frozen_while_toppling() {
        let mut gs = playing();
        drop_at(&mut gs, 150.0);
        drop_at(&mut gs, 195.0);
        assert_eq!(gs.round(), RoundState::Toppling);
        let frozen = gs.motion;
        gs.tick(5.0);
        assert_eq!(gs.motion, frozen);
    }

    #[test]
    fn milestone_resets_tower_after_delay() {
        let mut gs = playing();
        for _ in 0..MILESTONE_HEIGHT {
            assert!(drop_at(&mut gs, 150.0).is_some_and(|o| o.is_success()));
        }
        assert_eq!(gs.score(), MILESTONE_HEIGHT as u32);
        assert!(gs.milestone_pending());
        assert_eq!(gs.tower().len(), MILESTONE_HEIGHT);

        // Drops are rejected until the reset fires.
        assert_eq!(gs.act(), None);

        // 80ms: not yet.
        gs.tick_ms(80);
        assert!(gs.milestone_pending());
        assert_eq!(gs.tower().len(), MILESTONE_HEIGHT);

        gs.tick_ms(20);
        assert!(!gs.milestone_pending());
        assert!(gs.tower().is_empty());
        assert_eq!(gs.multiplier(), 2);
        assert_eq!(gs.score(), MILESTONE_HEIGHT as u32);
        assert_eq!(gs.speed(), BASE_SPEED + SPEED_STEP);

        assert_eq!(drop_at(&mut gs, 150.0), Some(ActOutcome::FirstPiece));
        assert_eq!(gs.score(), MILESTONE_HEIGHT as u32 + 2);
    }

    #[test]
    fn restart_cancels_pending_milestone() {
        let mut gs = playing();
        for _ in 0..MILESTONE_HEIGHT {
            drop_at(&mut gs, 150.0);
        }
        assert!(gs.milestone_pending());

        gs.restart();
        assert!(!gs.milestone_pending());
        drop_at(&mut gs, 150.0);
        gs.tick_ms(500);
        assert_eq!(gs.tower().len(), 1);
        assert_eq!(gs.multiplier(), 1);
    }

    #[test]
    fn start_after_ended_round_clears_pending_reset() {
        let mut gs = playing();
        for _ in 0..MILESTONE_HEIGHT {
            drop_at(&mut gs, 150.0);
        }
        assert!(gs.milestone_pending());
        // Force the round over with the reset still scheduled.
        gs.round = RoundState::Ended;

        assert!(gs.start());
        assert!(!gs.milestone_pending());
        drop_at(&mut gs, 150.0);
        gs.tick_ms(MILESTONE_RESET_MS * 2);
        assert_eq!(gs.tower().len(), 1);
        assert_eq!(gs.multiplier(), 1);
    }

    #[test]
    fn tick_is_noop_when_not_playing() {
        let mut gs = GameState::new();
        gs.tick(10.0);
        assert_eq!(gs.round(), RoundState::Idle);
        assert_eq!(gs.motion, MotionState::initial());
    }

    #[test]
    fn bad_delta_is_ignored() {
        let mut gs = playing();
        gs.tick(f32::NAN);
        gs.tick(-4.0);
        assert_eq!(gs.motion(), Some(MotionState::initial()));
    }

    #[test]
    fn restart_during_collapse_supersedes_it() {
        let mut gs = playing();
        drop_at(&mut gs, 150.0);
        drop_at(&mut gs, 90.0);
        assert_eq!(gs.round(), RoundState::Toppling);

        assert_eq!(gs.apply_action(GameAction::Restart), Some(ActOutcome::Started));
        assert_eq!(gs.round(), RoundState::Playing);
        assert!(gs.topple().is_none());
        assert!(gs.tower().is_empty());
        assert_eq!(gs.high_score(), 0);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut gs = playing();
        drop_at(&mut gs, 150.0);
        drop_at(&mut gs, 200.0);
        gs.tick(1.0);

        let snap = gs.snapshot();
        assert_eq!(snap.round, RoundState::Toppling);
        assert_eq!(snap.tower.len(), 2);
        assert_eq!(snap.moving, None);
        assert_eq!(snap.topple_frame, Some(1));
        assert_eq!(snap.lean, Lean::Right);
        assert_eq!(snap.score, 1);
        assert!(!snap.playable());
    }
}
