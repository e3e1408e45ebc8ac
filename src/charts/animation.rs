//! Frame Loop
//!
//! Timer-driven animation with explicit cancellation. Each run is a chain
//! of discrete timeout callbacks carrying a monotonic progress fraction;
//! revoking the token abandons the chain so a data change never leaves two
//! loops racing over the same canvas.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Tick spacing for the frame chain, close to a display refresh.
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Revocable handle for one animation run.
#[derive(Clone, Default)]
pub struct AnimationToken {
    revoked: Rc<Cell<bool>>,
}

impl AnimationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the run this token was issued for. The chain observes the flag
    /// on its next tick and schedules nothing further.
    pub fn revoke(&self) {
        self.revoked.set(true);
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.get()
    }
}

/// Progress of an animation at `elapsed_ms` into a run of `duration_ms`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Drive `frame` with a progress fraction in [0, 1] over `duration_ms` of
/// wall-clock time, then stop. The final frame always sees exactly 1.0.
pub fn animate(duration_ms: f64, token: AnimationToken, frame: impl FnMut(f64) + 'static) {
    schedule(js_sys::Date::now(), duration_ms, token, frame);
}

fn schedule(
    started_at: f64,
    duration_ms: f64,
    token: AnimationToken,
    mut frame: impl FnMut(f64) + 'static,
) {
    Timeout::new(FRAME_INTERVAL_MS, move || {
        if token.is_revoked() {
            return;
        }
        let p = progress(js_sys::Date::now() - started_at, duration_ms);
        frame(p);
        if p < 1.0 {
            schedule(started_at, duration_ms, token, frame);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live_and_revokes_once() {
        let token = AnimationToken::new();
        assert!(!token.is_revoked());

        let observer = token.clone();
        token.revoke();
        assert!(token.is_revoked());
        // Clones share the flag, so a stale loop holding a clone stops too.
        assert!(observer.is_revoked());
    }

    #[test]
    fn test_progress_is_clamped_and_monotonic() {
        assert_eq!(progress(-5.0, 1000.0), 0.0);
        assert_eq!(progress(0.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(1000.0, 1000.0), 1.0);
        assert_eq!(progress(2500.0, 1000.0), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        assert_eq!(progress(0.0, 0.0), 1.0);
    }
}
