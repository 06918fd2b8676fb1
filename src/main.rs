//! Terminal cheese stacking runner (default binary).
//!
//! Drives the core with an explicit tick every frame and renders through the
//! framebuffer-based terminal renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use cheese_stack::core::{GameSnapshot, GameState};
use cheese_stack::input::{should_quit, InputHandler};
use cheese_stack::term::{FrameBuffer, GameView, MoodTracker, RenderThrottle, TerminalRenderer, Viewport};
use cheese_stack::types::TICK_MS;
use cheese_stack::{logging, AppConfig};

/// Refresh interval for frames where nothing moves.
const STATIC_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::new(config.units_per_col);
    let mut input = InputHandler::new();
    let mut mood = MoodTracker::new();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let clock = Instant::now();
    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        let fingerprint = snap.fingerprint().wrapping_add(mood.mood() as u64);
        if throttle.should_render(now_ms, fingerprint, snap.is_static()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, mood.mood(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!(high_score = game.high_score(), "quitting");
                            return Ok(());
                        }
                        if let Some(outcome) = input
                            .handle_key_press(key.code)
                            .and_then(|action| game.apply_action(action))
                        {
                            mood.on_outcome(outcome);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys must not keep dropping pieces.
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            game.tick(elapsed.as_secs_f32() * 1000.0 / TICK_MS as f32);
            input.update(elapsed_ms);
            mood.update(elapsed_ms);
        }
    }
}
