//! Redraw throttling for frames that are not animating.

/// Decides whether a frame is worth drawing.
///
/// Animated frames are always drawn. Static frames (no round running) are
/// drawn when their fingerprint changes, and otherwise refreshed at most once
/// per `static_refresh_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    static_refresh_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(static_refresh_ms: u64) -> Self {
        Self {
            static_refresh_ms,
            last: None,
        }
    }

    /// Forget the last frame so the next one is drawn unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.static_refresh_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }
}
