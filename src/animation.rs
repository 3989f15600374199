//! Movement animation controller.
//!
//! Owns a single tween session that moves a point from `start` to `end` over a
//! fixed duration. The controller is advanced once per frame by the caller and
//! fires an optional completion callback exactly once per session.

use crate::constants::*;
use crate::easing::{lerp, EasingKind};
use glam::Vec2;

/// Callback invoked when a session runs to completion.
pub type OnComplete = Box<dyn FnOnce()>;

/// State of the live (or last) animation.
pub struct AnimationSession {
    pub active: bool,
    pub start: Vec2,
    pub end: Vec2,
    pub current: Vec2,
    pub elapsed_ms: f64,
    on_complete: Option<OnComplete>,
}

impl AnimationSession {
    fn idle() -> Self {
        Self {
            active: false,
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            current: Vec2::ZERO,
            elapsed_ms: 0.0,
            on_complete: None,
        }
    }
}

/// Drives one movement animation at a time.
pub struct AnimationController {
    session: AnimationSession,
    duration_ms: f32,
    easing: EasingKind,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            session: AnimationSession::idle(),
            duration_ms: MOVE_ANIMATION_DURATION_MS,
            easing: EasingKind::default(),
        }
    }

    pub fn with_settings(duration_ms: f32, easing: EasingKind) -> Self {
        let mut controller = Self::new();
        controller.set_duration(duration_ms);
        controller.set_easing(easing);
        controller
    }

    /// Begin animating from `from` to `to`.
    ///
    /// Any session already in flight is replaced; its callback is dropped
    /// without being called.
    pub fn start(&mut self, from: Vec2, to: Vec2, on_complete: Option<OnComplete>) {
        self.session = AnimationSession {
            active: true,
            start: from,
            end: to,
            current: from,
            elapsed_ms: 0.0,
            on_complete,
        };
    }

    /// Advance the session by `delta_ms`.
    ///
    /// Negative and non-finite deltas count as zero. When this call reaches the
    /// end of the session, `current` is snapped to `end` and the session is
    /// marked inactive before the callback runs.
    pub fn update(&mut self, delta_ms: f32) {
        puffin::profile_function!();

        if !self.session.active {
            return;
        }

        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        self.session.elapsed_ms += f64::from(delta_ms);

        let progress = self.linear_progress();
        let eased = self.easing.apply(progress);
        let AnimationSession { start, end, .. } = self.session;
        self.session.current = Vec2::new(lerp(start.x, end.x, eased), lerp(start.y, end.y, eased));

        if progress >= 1.0 {
            self.session.active = false;
            self.session.current = end;
            if let Some(callback) = self.session.on_complete.take() {
                callback();
            }
        }
    }

    /// Cancel the session, snapping to its end without firing the callback.
    pub fn stop(&mut self) {
        if self.session.active {
            self.session.active = false;
            self.session.current = self.session.end;
            self.session.on_complete = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.session.active
    }

    /// Linear (pre-easing) progress in `[0, 1]`, or 0 when idle.
    pub fn progress(&self) -> f32 {
        if !self.session.active {
            return 0.0;
        }
        self.linear_progress()
    }

    fn linear_progress(&self) -> f32 {
        (self.session.elapsed_ms / f64::from(self.duration_ms)).min(1.0) as f32
    }

    pub fn current_position(&self) -> Vec2 {
        self.session.current
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Set the session length, clamped to
    /// `[MIN_ANIMATION_DURATION_MS, MAX_ANIMATION_DURATION_MS]`.
    ///
    /// Non-finite values fall back to `MOVE_ANIMATION_DURATION_MS`.
    pub fn set_duration(&mut self, ms: f32) {
        self.duration_ms = if ms.is_finite() {
            ms.clamp(MIN_ANIMATION_DURATION_MS, MAX_ANIMATION_DURATION_MS)
        } else {
            MOVE_ANIMATION_DURATION_MS
        };
    }

    pub fn easing(&self) -> EasingKind {
        self.easing
    }

    pub fn set_easing(&mut self, kind: EasingKind) {
        self.easing = kind;
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, OnComplete) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move || handle.set(handle.get() + 1)))
    }

    fn controller_300ms() -> AnimationController {
        AnimationController::with_settings(300.0, EasingKind::EaseOutQuart)
    }

    #[test]
    fn test_ease_out_quart_halfway() {
        let mut anim = controller_300ms();
        let (fired, callback) = counter();
        anim.start(Vec2::ZERO, Vec2::new(10.0, 0.0), Some(callback));

        anim.update(150.0);
        assert_eq!(anim.current_position().x, 10.0 * (1.0 - 0.5_f32.powi(4)));
        assert_eq!(anim.current_position().x, 9.375);
        assert_eq!(anim.progress(), 0.5);
        assert!(anim.is_animating());
        assert_eq!(fired.get(), 0);

        anim.update(150.0);
        assert_eq!(anim.current_position(), Vec2::new(10.0, 0.0));
        assert!(!anim.is_animating());
        assert_eq!(fired.get(), 1);

        anim.update(150.0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_restart_drops_previous_callback() {
        let mut anim = controller_300ms();
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();

        anim.start(Vec2::ZERO, Vec2::new(1.0, 0.0), Some(first_cb));
        anim.update(100.0);
        anim.start(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), Some(second_cb));
        assert_eq!(anim.current_position(), Vec2::new(1.0, 0.0));

        anim.update(1000.0);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(anim.current_position(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_stop_snaps_without_callback() {
        let mut anim = controller_300ms();
        let (fired, callback) = counter();
        anim.start(Vec2::new(3.0, 3.0), Vec2::new(3.0, 4.0), Some(callback));
        anim.update(50.0);
        anim.stop();

        assert!(!anim.is_animating());
        assert_eq!(anim.current_position(), Vec2::new(3.0, 4.0));
        assert_eq!(anim.progress(), 0.0);
        anim.update(500.0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_update_when_idle_is_noop() {
        let mut anim = AnimationController::new();
        anim.update(1000.0);
        assert!(!anim.is_animating());
        assert_eq!(anim.current_position(), Vec2::ZERO);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut anim = controller_300ms();
        anim.set_easing(EasingKind::Linear);
        anim.start(Vec2::ZERO, Vec2::new(0.0, 3.0), None);
        anim.update(150.0);
        anim.update(-100.0);
        assert_eq!(anim.progress(), 0.5);
        anim.update(f32::NAN);
        assert_eq!(anim.progress(), 0.5);
        assert_eq!(anim.current_position(), Vec2::new(0.0, 1.5));
    }

    #[test]
    fn test_duration_is_clamped() {
        let mut anim = AnimationController::new();
        anim.set_duration(20.0);
        assert_eq!(anim.duration_ms(), MIN_ANIMATION_DURATION_MS);
        anim.set_duration(-5.0);
        assert_eq!(anim.duration_ms(), MIN_ANIMATION_DURATION_MS);
        anim.set_duration(450.0);
        assert_eq!(anim.duration_ms(), 450.0);
    }

    #[test]
    fn test_unusable_durations() {
        let mut anim = AnimationController::new();
        anim.set_duration(f32::INFINITY);
        assert_eq!(anim.duration_ms(), MOVE_ANIMATION_DURATION_MS);
        anim.set_duration(f32::NAN);
        assert_eq!(anim.duration_ms(), MOVE_ANIMATION_DURATION_MS);
        anim.set_duration(1e9);
        assert_eq!(anim.duration_ms(), MAX_ANIMATION_DURATION_MS);
    }

    #[test]
    fn test_longest_duration_still_completes() {
        let mut anim = AnimationController::with_settings(1e9, EasingKind::Linear);
        let (fired, callback) = counter();
        anim.start(Vec2::ZERO, Vec2::X, Some(callback));

        let frames = (MAX_ANIMATION_DURATION_MS / 16.0).ceil() as usize;
        for _ in 0..frames {
            anim.update(16.0);
        }
        assert!(!anim.is_animating());
        assert_eq!(fired.get(), 1);
        assert_eq!(anim.current_position(), Vec2::X);
    }

    #[test]
    fn test_elapsed_keeps_growing_past_f32_precision() {
        let mut anim = AnimationController::new();
        anim.start(Vec2::ZERO, Vec2::X, None);
        anim.session.elapsed_ms = 268_435_456.0;
        anim.update(16.0);
        assert_eq!(anim.session.elapsed_ms, 268_435_472.0);
    }

    #[test]
    fn test_overshooting_curve_lands_exactly() {
        let mut anim = controller_300ms();
        anim.set_easing(EasingKind::EaseOutBack);
        anim.start(Vec2::ZERO, Vec2::new(5.0, 0.0), None);

        let mut overshot = false;
        for _ in 0..30 {
            anim.update(16.0);
            overshot |= anim.current_position().x > 5.0;
        }
        assert!(overshot);
        assert!(!anim.is_animating());
        assert_eq!(anim.current_position(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_callback_fires_on_final_frame() {
        let mut anim = controller_300ms();
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);
        anim.start(Vec2::ZERO, Vec2::ONE, Some(Box::new(move || flag.set(true))));
        anim.update(299.0);
        assert!(!seen.get());
        anim.update(1.0);
        assert!(seen.get());
        assert!(!anim.is_animating());
    }
}
