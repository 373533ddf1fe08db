//! Animation scheduler
//!
//! Owns every active spring, tween and delayed callback, and advances them
//! from the host's frame loop. Animations are implicitly registered when
//! created through wrapper types:
//! - `AnimatedValue` - Spring-based physics animations
//! - `AnimatedTween` - Duration-based eased animations
//!
//! Time only moves when the host calls [`AnimationScheduler::advance`] (or
//! [`AnimationScheduler::tick`], which measures wall-clock time between
//! frames). Delayed callbacks fire on the thread that advances the
//! scheduler, after animations have been stepped for that frame.

use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::tween::{Repeat, Tween};

new_key_type! {
    /// Handle to a registered spring animation
    pub struct SpringId;
    /// Handle to a registered tween
    pub struct TweenId;
    /// Handle to a pending delayed callback
    pub struct TimerId;
}

/// Largest integration step for springs; longer frames are subdivided
const MAX_SPRING_STEP: f32 = 1.0 / 120.0;

type TimerCallback = Box<dyn FnOnce() + Send>;

struct Timer {
    due: Duration,
    seq: u64,
    callback: TimerCallback,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    tweens: SlotMap<TweenId, Tween>,
    timers: SlotMap<TimerId, Timer>,
    /// Virtual clock; only moves in `advance`
    now: Duration,
    /// Clock value the current (or last) `advance` runs to
    frame_end: Duration,
    /// Wall-clock time of the last `tick`; `None` until the host first ticks
    last_frame: Option<Instant>,
    next_seq: u64,
}

impl SchedulerInner {
    /// Clock value of "right now" for a new delay or tween
    ///
    /// With `tick`, the end of the last frame stands for the wall-clock time
    /// of that tick, so the time since then is added. With `advance` alone the
    /// virtual clock is the only clock.
    fn request_time(&self) -> Duration {
        match self.last_frame {
            Some(frame) => self.frame_end.max(self.now) + frame.elapsed(),
            None => self.now,
        }
    }

    /// Move the clock and every animation forward by `dt`
    fn step(&mut self, dt: Duration) {
        if dt.is_zero() {
            return;
        }
        self.now += dt;

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP);
            for (_, spring) in self.springs.iter_mut() {
                spring.step(step);
            }
            remaining -= step;
        }

        for (_, tween) in self.tweens.iter_mut() {
            tween.tick(dt);
        }
    }

    fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|(_, timer)| timer.due).min()
    }

    fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
            || self.tweens.iter().any(|(_, t)| t.is_playing())
            || !self.timers.is_empty()
    }

    /// Remove the earliest timer that is due, ties broken by scheduling order
    fn take_due_timer(&mut self) -> Option<TimerCallback> {
        let now = self.now;
        let id = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(id, _)| id)?;
        self.timers.remove(id).map(|timer| timer.callback)
    }
}

/// The animation scheduler that ticks all active animations
///
/// This is typically held by the host's frame loop and shared via `SchedulerHandle`.
/// Animations register themselves implicitly when created.
///
/// ```rust
/// use motionkit_animation::AnimationScheduler;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = AnimationScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
///
/// let flag = Arc::clone(&fired);
/// scheduler.handle().schedule_after(Duration::from_millis(100), move || {
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// scheduler.advance(Duration::from_millis(50));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_millis(50));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                tweens: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                now: Duration::ZERO,
                frame_end: Duration::ZERO,
                last_frame: None,
                next_seq: 0,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Current position of the scheduler's clock
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Advance by the wall-clock time since the previous tick
    ///
    /// The first call only starts the clock. Delays and tweens started between
    /// ticks are measured from the moment they were requested, not from the
    /// previous frame.
    ///
    /// Returns true if any animations are still active (need another tick).
    pub fn tick(&self) -> bool {
        let dt = {
            let mut inner = self.inner.lock();
            let now = Instant::now();
            let dt = inner
                .last_frame
                .map(|frame| now - frame)
                .unwrap_or_default();
            inner.last_frame = Some(now);
            dt
        };
        self.advance(dt)
    }

    /// Advance the clock by `dt`, firing due timers along the way
    ///
    /// The frame is split at each timer's due time: animations are stepped up
    /// to that instant, the timer fires, and the rest of the frame applies to
    /// whatever the callback started. Timers run in due order outside the
    /// scheduler lock, so callbacks may register animations or schedule
    /// further timers. A timer scheduled by a callback for a time already
    /// reached fires within the same call.
    ///
    /// Returns true if any animations are still active.
    pub fn advance(&self, dt: Duration) -> bool {
        let end = {
            let mut inner = self.inner.lock();
            inner.frame_end = inner.now + dt;
            inner.frame_end
        };

        let mut fired = 0usize;
        loop {
            let callback = {
                let mut inner = self.inner.lock();
                let stop = inner
                    .next_due()
                    .filter(|due| *due <= end)
                    .unwrap_or(end)
                    .max(inner.now);
                let step = stop - inner.now;
                inner.step(step);
                inner.take_due_timer()
            };
            match callback {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        if fired > 0 {
            tracing::trace!(fired, "scheduler fired delayed callbacks");
        }

        self.has_active_animations()
    }

    /// Check if any animations or timers are still active
    pub fn has_active_animations(&self) -> bool {
        self.inner.lock().has_active()
    }

    pub fn spring_count(&self) -> usize {
        self.inner.lock().springs.len()
    }

    pub fn tween_count(&self) -> usize {
        self.inner.lock().tweens.len()
    }

    /// Number of delayed callbacks waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.inner.lock().timers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register animations.
/// It won't prevent the scheduler from being dropped; once it is, every
/// operation becomes a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Scheduler clock, if the scheduler is alive
    pub fn now(&self) -> Option<Duration> {
        self.inner.upgrade().map(|inner| inner.lock().now)
    }

    // =========================================================================
    // Spring Operations
    // =========================================================================

    /// Register a spring and return its ID
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().springs.insert(spring))
    }

    /// Update a spring's target
    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    /// Jump a spring to `value` with no motion
    pub fn snap_spring(&self, id: SpringId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().springs.get_mut(id) {
                spring.snap(value);
            }
        }
    }

    /// Get current spring value
    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().springs.get(id).map(|s| s.value()))
    }

    /// Check if a spring has settled (a missing spring counts as settled)
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().springs.get(id).map(|s| s.is_settled()))
            .unwrap_or(true)
    }

    /// Remove a spring
    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().springs.remove(id);
        }
    }

    // =========================================================================
    // Tween Operations
    // =========================================================================

    /// Register a tween and return its ID
    pub fn register_tween(&self, tween: Tween) -> Option<TweenId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().tweens.insert(tween))
    }

    /// Apply a function to a tween if it exists
    pub fn with_tween<F, R>(&self, id: TweenId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Tween) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().tweens.get_mut(id).map(f))
    }

    /// Get current tween value
    pub fn get_tween_value(&self, id: TweenId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().tweens.get(id).map(|t| t.value()))
    }

    /// Check if a tween is playing
    pub fn is_tween_playing(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().tweens.get(id).map(|t| t.is_playing()))
            .unwrap_or(false)
    }

    /// Remove a tween
    pub fn remove_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().tweens.remove(id);
        }
    }

    // =========================================================================
    // Delayed Callbacks
    // =========================================================================

    /// Time the clock still has to cover before it reaches "right now"
    ///
    /// Zero when the host drives the clock with `advance` alone. With `tick`,
    /// it is the part of the next frame that predates a request made now;
    /// tweens started now skip it.
    pub fn frame_lag(&self) -> Duration {
        self.inner
            .upgrade()
            .map(|inner| {
                let inner = inner.lock();
                inner.request_time() - inner.now
            })
            .unwrap_or_default()
    }

    /// Run `callback` once, `delay` after now
    ///
    /// "Now" is the scheduler's clock plus any wall-clock time since the last
    /// `tick`, so the callback never fires before `delay` has really elapsed.
    /// Returns `None` (and drops the callback) if the scheduler is gone.
    pub fn schedule_after<F>(&self, delay: Duration, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock();
            let due = guard.request_time() + delay;
            let seq = guard.next_seq;
            guard.next_seq += 1;
            guard.timers.insert(Timer {
                due,
                seq,
                callback: Box::new(callback),
            })
        })
    }

    /// Cancel a pending callback
    ///
    /// Returns true if the callback had not fired yet.
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().timers.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Check if a callback is still waiting to fire
    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().timers.contains_key(id))
            .unwrap_or(false)
    }
}

// ============================================================================
// Animated Value (Spring-based)
// ============================================================================

/// A spring-animated value that automatically registers with the scheduler
///
/// The value is updated by the scheduler each frame. Read with `get()`.
/// Unregisters its spring when dropped.
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    /// Last known value, used once the scheduler is gone
    fallback: f32,
}

impl AnimatedValue {
    /// Create a new animated value with the given spring configuration
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        let spring_id = handle.register_spring(Spring::new(config, initial));
        Self {
            handle,
            spring_id,
            fallback: initial,
        }
    }

    /// Set the target value (animates toward it)
    pub fn set_target(&mut self, target: f32) {
        match self.spring_id {
            Some(id) if self.handle.is_alive() => self.handle.set_spring_target(id, target),
            _ => self.fallback = target,
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        self.spring_id
            .and_then(|id| self.handle.get_spring_value(id))
            .unwrap_or(self.fallback)
    }

    /// Jump to a value with no animation
    pub fn set_immediate(&mut self, value: f32) {
        self.fallback = value;
        if let Some(id) = self.spring_id {
            self.handle.snap_spring(id, value);
        }
    }

    /// Check if currently animating
    pub fn is_animating(&self) -> bool {
        self.spring_id
            .map(|id| !self.handle.is_spring_settled(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

// ============================================================================
// Animated Tween (Duration-based)
// ============================================================================

/// A duration-animated value that automatically registers with the scheduler
///
/// Each `animate_to` starts from wherever the value currently is, so
/// retargeting mid-flight never jumps. Unregisters its tween when dropped.
pub struct AnimatedTween {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    /// Last known value, used once the scheduler is gone
    fallback: f32,
}

impl AnimatedTween {
    /// Create a tween resting at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        let tween_id = handle.register_tween(Tween::at_rest(initial));
        Self {
            handle,
            tween_id,
            fallback: initial,
        }
    }

    /// Animate from the current value to `target`
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing) {
        self.play(target, duration, easing, Repeat::Once);
    }

    /// Oscillate between the current value and `target` until stopped or dropped
    pub fn repeat_forever(
        &mut self,
        target: f32,
        duration: Duration,
        easing: Easing,
        autoreverse: bool,
    ) {
        self.play(target, duration, easing, Repeat::Forever { autoreverse });
    }

    fn play(&mut self, target: f32, duration: Duration, easing: Easing, repeat: Repeat) {
        let from = self.get();
        self.replace(Tween::new(from, target, duration, easing).repeat(repeat), target);
    }

    /// Jump to a value with no animation
    pub fn set_immediate(&mut self, value: f32) {
        self.replace(Tween::at_rest(value), value);
    }

    fn replace(&mut self, mut tween: Tween, end: f32) {
        tween.start();
        tween.skip_lead_in(self.handle.frame_lag());
        let applied = match self.tween_id {
            Some(id) => self.handle.with_tween(id, move |t| *t = tween).is_some(),
            None => false,
        };
        if !applied {
            self.fallback = end;
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        self.tween_id
            .and_then(|id| self.handle.get_tween_value(id))
            .unwrap_or(self.fallback)
    }

    /// Check if currently animating
    pub fn is_animating(&self) -> bool {
        self.tween_id
            .map(|id| self.handle.is_tween_playing(id))
            .unwrap_or(false)
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.with_tween(id, |t| t.stop());
        }
    }
}

impl Drop for AnimatedTween {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}

/// Shared animated value for use inside delayed callbacks
pub type SharedAnimatedValue = Arc<Mutex<AnimatedValue>>;

/// Shared animated tween for use inside delayed callbacks and subscriptions
pub type SharedAnimatedTween = Arc<Mutex<AnimatedTween>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_scheduler_advance_moves_spring() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let id = handle
            .register_spring(Spring::new(SpringConfig::stiff(), 0.0))
            .unwrap();
        handle.set_spring_target(id, 1.0);

        assert!(scheduler.advance(Duration::from_millis(16)));
        assert!(handle.get_spring_value(id).unwrap() > 0.0);
    }

    #[test]
    fn test_animated_value() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 1.0, SpringConfig::stiff());

        assert_eq!(value.get(), 1.0);
        assert!(!value.is_animating());

        value.set_target(0.9);
        assert!(value.is_animating());

        scheduler.advance(Duration::from_millis(16));
        assert!(value.get() < 1.0);

        scheduler.advance(Duration::from_secs(2));
        assert!(!value.is_animating());
        assert!((value.get() - 0.9).abs() < 0.001);
    }

    #[test]
    fn test_animated_tween_retargets_from_current_value() {
        let scheduler = AnimationScheduler::new();
        let mut tween = AnimatedTween::new(scheduler.handle(), 1.0);

        tween.animate_to(0.0, Duration::from_millis(100), Easing::Linear);
        scheduler.advance(Duration::from_millis(50));
        assert!((tween.get() - 0.5).abs() < 1e-5);

        tween.animate_to(1.0, Duration::from_millis(100), Easing::Linear);
        assert!((tween.get() - 0.5).abs() < 1e-5);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(tween.get(), 1.0);
        assert!(!tween.is_animating());
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (label, delay) in [("late", 300), ("early", 100), ("mid", 200)] {
            let order = Arc::clone(&order);
            handle.schedule_after(Duration::from_millis(delay), move || {
                order.lock().push(label);
            });
        }

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(*order.lock(), vec!["early", "mid", "late"]);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_timer_not_early() {
        let scheduler = AnimationScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        scheduler
            .handle()
            .schedule_after(Duration::from_millis(100), move || {
                c.fetch_add(1, Ordering::SeqCst);
            });

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(scheduler.has_active_animations());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_cancel_timer() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let id = handle
            .schedule_after(Duration::from_millis(10), move || {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert!(handle.is_timer_pending(id));
        assert!(handle.cancel_timer(id));
        assert!(!handle.cancel_timer(id));

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_can_schedule_zero_delay_follow_up() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let count = Arc::new(AtomicUsize::new(0));

        let inner_handle = handle.clone();
        let c = Arc::clone(&count);
        handle.schedule_after(Duration::from_millis(10), move || {
            c.fetch_add(1, Ordering::SeqCst);
            let c = Arc::clone(&c);
            inner_handle.schedule_after(Duration::ZERO, move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        });

        scheduler.advance(Duration::from_millis(10));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle
            .register_spring(Spring::new(SpringConfig::stiff(), 0.0))
            .is_none());
        assert!(handle.schedule_after(Duration::ZERO, || {}).is_none());

        // Wrappers fall back to plain values
        let mut tween = AnimatedTween::new(handle.clone(), 0.0);
        tween.animate_to(1.0, Duration::from_millis(100), Easing::Linear);
        assert_eq!(tween.get(), 1.0);
    }

    #[test]
    fn test_wrappers_unregister_on_drop() {
        let scheduler = AnimationScheduler::new();
        {
            let _value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::stiff());
            let _tween = AnimatedTween::new(scheduler.handle(), 0.0);
            assert_eq!(scheduler.spring_count(), 1);
            assert_eq!(scheduler.tween_count(), 1);
        }
        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(scheduler.tween_count(), 0);
    }

    #[test]
    fn test_callback_retargets_for_rest_of_frame() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let tween = Arc::new(Mutex::new(AnimatedTween::new(handle.clone(), 0.0)));

        let t = Arc::clone(&tween);
        handle.schedule_after(Duration::from_millis(10), move || {
            t.lock().animate_to(1.0, Duration::from_millis(100), Easing::Linear);
        });

        // One long frame: 90ms of it come after the callback
        scheduler.advance(Duration::from_millis(100));
        assert!((tween.lock().get() - 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_spring_released_mid_frame_keeps_moving() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let value = Arc::new(Mutex::new(AnimatedValue::new(
            handle.clone(),
            0.9,
            SpringConfig::interpolating(300.0, 15.0),
        )));

        let v = Arc::clone(&value);
        handle.schedule_after(Duration::from_millis(4), move || v.lock().set_target(1.0));

        scheduler.advance(Duration::from_secs(2));
        assert!((value.lock().get() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_tick_delay_measured_from_request() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let fired_at = Arc::new(Mutex::new(None));

        scheduler.tick();
        std::thread::sleep(Duration::from_millis(40));

        let requested = Instant::now();
        let f = Arc::clone(&fired_at);
        handle.schedule_after(Duration::from_millis(50), move || {
            *f.lock() = Some(Instant::now());
        });

        let deadline = requested + Duration::from_secs(2);
        while fired_at.lock().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            scheduler.tick();
        }

        let fired = fired_at.lock().expect("timer never fired");
        assert!(fired - requested >= Duration::from_millis(50));
    }

    #[test]
    fn test_tick_tween_starts_when_requested() {
        let scheduler = AnimationScheduler::new();
        let mut tween = AnimatedTween::new(scheduler.handle(), 0.0);

        scheduler.tick();
        std::thread::sleep(Duration::from_millis(60));
        tween.animate_to(1.0, Duration::from_secs(10), Easing::Linear);
        scheduler.tick();

        // Only the time since the request counts, not the 60ms before it
        assert!(tween.get() < 0.005);
    }

    #[test]
    fn test_registration_keeps_running_animations_on_time() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let mut running = AnimatedTween::new(handle.clone(), 0.0);
        running.animate_to(1.0, Duration::from_secs(10), Easing::Linear);

        scheduler.tick();
        std::thread::sleep(Duration::from_millis(50));
        let _late = AnimatedValue::new(handle.clone(), 0.0, SpringConfig::stiff());
        let _late_tween = AnimatedTween::new(handle, 0.0);
        scheduler.tick();

        assert!(running.get() >= 0.005);
    }

    #[test]
    fn test_first_tick_starts_clock() {
        let scheduler = AnimationScheduler::new();
        std::thread::sleep(Duration::from_millis(20));
        scheduler.tick();
        assert_eq!(scheduler.now(), Duration::ZERO);
        assert!(scheduler.handle().frame_lag() < Duration::from_millis(20));
    }

    #[test]
    fn test_now_tracks_advance() {
        let scheduler = AnimationScheduler::new();
        scheduler.advance(Duration::from_millis(250));
        scheduler.advance(Duration::from_millis(250));
        assert_eq!(scheduler.now(), Duration::from_millis(500));
        assert_eq!(scheduler.handle().now(), Some(Duration::from_millis(500)));
    }
}
