//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a one-line header (score, multiplier, high score),
//! the framed play area with the tower resting on its floor, and a one-line
//! key hint. The mascot sits to the right of the frame when there is room.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::mood::Mood;
use crate::types::{RoundState, MILESTONE_HEIGHT, PIECE_WIDTH, TRACK_MAX};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows above the floor: a full tower plus the moving piece and one spare.
const PLAY_ROWS: u16 = MILESTONE_HEIGHT as u16 + 2;

/// Finest supported scale; keeps the play area a few hundred columns at most.
const MIN_UNITS_PER_COL: f32 = 1.0;

const FIELD_BG: Rgb = Rgb::new(24, 48, 28);
const CHEESE: Rgb = Rgb::new(255, 217, 102);
const CHEESE_RIND: Rgb = Rgb::new(246, 178, 107);

/// A lightweight terminal renderer for the stacking game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Track units per terminal column.
    units_per_col: f32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl GameView {
    /// Non-finite or non-positive scales fall back to 10; tiny ones are
    /// raised to [`MIN_UNITS_PER_COL`].
    pub fn new(units_per_col: f32) -> Self {
        let units_per_col = if units_per_col.is_finite() && units_per_col > 0.0 {
            units_per_col.max(MIN_UNITS_PER_COL)
        } else {
            10.0
        };
        Self {
            units_per_col,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Inner size of the play area in cells.
    pub fn play_size(&self) -> (u16, u16) {
        let cols = ((TRACK_MAX + PIECE_WIDTH) / self.units_per_col).ceil() as u16;
        (cols, PLAY_ROWS)
    }

    /// Column (relative to the play area) of a track position.
    pub fn column_of(&self, position: f32) -> i32 {
        (position / self.units_per_col).round() as i32
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, mood: Mood, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (play_w, play_h) = self.play_size();
        let frame_w = play_w.saturating_add(2);
        let frame_h = play_h.saturating_add(2);
        // Header and hint lines.
        let total_h = frame_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = start_y.saturating_add(1);
        let inner_x = start_x.saturating_add(1);
        let inner_y = frame_y.saturating_add(1);

        self.draw_header(fb, snap, start_x, start_y);

        let field = CellStyle::new(Rgb::new(60, 90, 60), FIELD_BG);
        fb.fill_rect(inner_x, inner_y, play_w, play_h, ' ', field);
        draw_border(
            fb,
            start_x,
            frame_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(120, 200, 120), Rgb::new(0, 0, 0)),
        );

        let floor_y = inner_y.saturating_add(play_h - 1);
        for (i, piece) in snap.tower.iter().enumerate() {
            let Some(y) = floor_y.checked_sub(i as u16) else {
                break;
            };
            if y < inner_y {
                break;
            }
            self.draw_piece(fb, piece, inner_x, y, play_w, piece_glyph(piece.rotation), false);
        }

        if let Some(moving) = snap.moving {
            if let Some(y) = floor_y.checked_sub(snap.tower.len() as u16) {
                if y >= inner_y {
                    let ghost = Piece {
                        position: moving.position,
                        rotation: 0.0,
                        id: 0,
                    };
                    self.draw_piece(fb, &ghost, inner_x, y, play_w, '█', true);
                }
            }
        }

        match snap.round {
            RoundState::Idle => {
                self.draw_banner(fb, inner_x, inner_y, play_w, play_h, "PRESS SPACE TO START")
            }
            RoundState::Ended => {
                self.draw_banner(fb, inner_x, inner_y, play_w, play_h, "GAME OVER - SPACE TO PLAY AGAIN")
            }
            RoundState::Playing if snap.milestone_pending => {
                self.draw_banner(fb, inner_x, inner_y, play_w, play_h, "MULTIPLIER UP!")
            }
            RoundState::Playing | RoundState::Toppling => {}
        }

        self.draw_mascot(
            fb,
            snap,
            mood,
            viewport,
            start_x.saturating_add(frame_w).saturating_add(2),
            frame_y,
        );

        let hint = CellStyle::default().dim();
        fb.put_str_centered(
            start_x,
            frame_w,
            frame_y.saturating_add(frame_h),
            "SPACE drop  R restart  Q quit",
            hint,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, mood: Mood, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, mood, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(CHEESE, Rgb::new(0, 0, 0));

        let mut cx = fb.put_str(x, y, "SCORE ", label);
        cx = fb.put_u32(cx, y, snap.score, value);
        cx = fb.put_str(cx, y, "  MULT x", label);
        cx = fb.put_u32(cx, y, snap.multiplier, value);
        cx = fb.put_str(cx, y, "  HIGH ", label);
        fb.put_u32(cx, y, snap.high_score, value);
    }

    /// Draw one slice on row `y`, clipped to the play area.
    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        piece: &Piece,
        inner_x: u16,
        y: u16,
        play_w: u16,
        glyph: char,
        moving: bool,
    ) {
        let from = self.column_of(piece.position).max(0);
        let to = self.column_of(piece.position + PIECE_WIDTH).min(play_w as i32);
        let style = CellStyle {
            fg: if moving { CHEESE } else { CHEESE_RIND },
            bg: FIELD_BG,
            bold: moving,
            dim: false,
        };
        for col in from..to {
            fb.put_char(inner_x + col as u16, y, glyph, style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(x, w, y + h / 3, text, style);
    }

    fn draw_mascot(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        mood: Mood,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x >= viewport.width || viewport.width - x < 10 {
            return;
        }
        let face = match mood {
            Mood::Happy => CellStyle::new(Rgb::new(140, 240, 140), Rgb::new(0, 0, 0)).bold(),
            Mood::Sad => CellStyle::new(Rgb::new(140, 160, 240), Rgb::new(0, 0, 0)),
            Mood::Normal => CellStyle::default(),
        };
        fb.put_str(x, y, mood.face(), face);

        let dim = CellStyle::default().dim();
        fb.put_str(x, y + 2, snap.round.as_str(), dim);
        let cx = fb.put_str(x, y + 3, "height ", dim);
        fb.put_u32(cx, y + 3, snap.tower.len() as u32, dim);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

/// Slices shade as they start to tip, then slant the way they fall.
///
/// Positive rotation is clockwise: the right end drops first.
fn piece_glyph(rotation: f32) -> char {
    match rotation.abs() {
        r if r < 10.0 => '█',
        r if r < 45.0 => '▓',
        _ if rotation > 0.0 => '╲',
        _ => '╱',
    }
}
