use cheese_stack::core::GameState;
use cheese_stack::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn render_throttle_reset_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    t.reset();
    assert!(t.should_render(1, 1, true));
}

#[test]
fn idle_game_is_static_and_playing_game_is_not() {
    let mut game = GameState::new();
    let idle = game.snapshot();
    assert!(idle.is_static());

    game.act();
    let playing = game.snapshot();
    assert!(!playing.is_static());
    assert_ne!(idle.fingerprint(), playing.fingerprint());

    // Motion alone changes the fingerprint.
    game.tick(1.0);
    assert_ne!(playing.fingerprint(), game.snapshot().fingerprint());
}
