//! Shake-on-tap effect
//!
//! A tap runs `progress` linearly from 0 to 1; the child is displaced
//! horizontally by `A * sin(progress * 2π * n)`. When the duration elapses
//! progress snaps back to 0 and the caller's action runs.

use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::Duration;

use motionkit_animation::{
    Animatable, AnimatedTween, Easing, SchedulerHandle, SharedAnimatedTween,
};
use motionkit_core::Affine2D;
use parking_lot::Mutex;

use super::{into_action, Action};
use crate::config::ShakeConfig;
use crate::policy::{ActivationGate, ActivationOutcome, ActivationPolicy, EffectPhase};
use crate::render::Rendered;

/// Horizontal displacement at `progress` for `shakes` cycles of `amplitude`
///
/// Any finite inputs are accepted. Fractional `shakes` give a partial last
/// cycle; zero amplitude gives no movement.
pub fn shake_offset(progress: f32, shakes: f32, amplitude: f32) -> f32 {
    amplitude * (progress * TAU * shakes).sin()
}

/// Geometry transform of a shake, parameterized by progress alone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeTransform {
    pub shakes: f32,
    pub amplitude: f32,
    pub progress: f32,
}

impl ShakeTransform {
    pub fn new(shakes: f32, amplitude: f32) -> Self {
        Self {
            shakes,
            amplitude,
            progress: 0.0,
        }
    }

    pub fn offset(&self) -> f32 {
        shake_offset(self.progress, self.shakes, self.amplitude)
    }

    pub fn affine(&self) -> Affine2D {
        Affine2D::translation(self.offset(), 0.0)
    }
}

impl Animatable for ShakeTransform {
    type Data = f32;

    fn animatable_data(&self) -> f32 {
        self.progress
    }

    fn set_animatable_data(&mut self, progress: f32) {
        self.progress = progress;
    }
}

/// Button that shakes before acting
pub struct ShakeEffect<C> {
    action: Action,
    label: C,
    config: ShakeConfig,
    /// Kept apart from the config's whole milliseconds
    duration: Duration,
    progress: SharedAnimatedTween,
    gate: ActivationGate,
    handle: SchedulerHandle,
}

impl<C> ShakeEffect<C> {
    pub fn new<F>(handle: SchedulerHandle, action: F, label: C) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let config = ShakeConfig::default();
        Self {
            action: into_action(action),
            label,
            progress: Arc::new(Mutex::new(AnimatedTween::new(handle.clone(), 0.0))),
            gate: ActivationGate::new(config.policy),
            duration: config.duration(),
            config,
            handle,
        }
    }

    pub fn shakes(mut self, shakes: f32) -> Self {
        self.config.shakes = shakes;
        self
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.config.amplitude = amplitude;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn policy(mut self, policy: ActivationPolicy) -> Self {
        self.config.policy = policy;
        self.gate.set_policy(policy);
        self
    }

    pub fn with_config(mut self, config: ShakeConfig) -> Self {
        self.gate.set_policy(config.policy);
        self.duration = config.duration();
        self.config = config;
        self
    }

    pub fn phase(&self) -> EffectPhase {
        self.gate.phase()
    }

    /// Current animation progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress.lock().get()
    }

    pub fn transform(&self) -> ShakeTransform {
        ShakeTransform::new(self.config.shakes, self.config.amplitude)
            .with_animatable_data(self.progress())
    }

    /// Handle a tap
    pub fn activate(&self) -> ActivationOutcome {
        let duration = self.duration;
        let progress = Arc::clone(&self.progress);
        let action = Arc::clone(&self.action);

        let outcome = self.gate.activate(
            &self.handle,
            duration,
            || {
                let mut progress = self.progress.lock();
                progress.set_immediate(0.0);
                progress.animate_to(1.0, duration, Easing::Linear);
            },
            move |idle| {
                if idle {
                    progress.lock().set_immediate(0.0);
                }
                action();
            },
        );
        tracing::trace!(?outcome, shakes = self.config.shakes, "shake activated");
        outcome
    }

    pub fn render(&self) -> Rendered<'_, C> {
        Rendered::new(&self.label).transform(self.transform().affine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionkit_animation::AnimationScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(scheduler: &AnimationScheduler) -> (Arc<AtomicUsize>, ShakeEffect<&'static str>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let shake = ShakeEffect::new(
            scheduler.handle(),
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
            "Retry",
        );
        (count, shake)
    }

    #[test]
    fn test_offset_waveform() {
        assert_eq!(shake_offset(0.0, 3.0, 10.0), 0.0);
        assert!(shake_offset(1.0, 3.0, 10.0).abs() < 1e-4);
        // Quarter of the first cycle is the first peak
        assert!((shake_offset(1.0 / 12.0, 3.0, 10.0) - 10.0).abs() < 1e-4);
        assert!((shake_offset(0.25, 1.0, -4.0) + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_amplitude_never_moves() {
        for i in 0..=20 {
            assert_eq!(shake_offset(i as f32 / 20.0, 3.0, 0.0), 0.0);
        }
    }

    #[test]
    fn test_fractional_shakes_end_off_center() {
        // A quarter cycle past the integer ends on the peak
        assert!(shake_offset(1.0, 2.25, 10.0) > 9.9);
    }

    #[test]
    fn test_transform_is_translation() {
        let transform = ShakeTransform::new(3.0, 10.0).with_animatable_data(1.0 / 12.0);
        let affine = transform.affine();
        assert!((affine.tx() - 10.0).abs() < 1e-4);
        assert_eq!(affine.ty(), 0.0);
        assert_eq!(transform.animatable_data(), 1.0 / 12.0);
    }

    #[test]
    fn test_progress_runs_then_resets() {
        let scheduler = AnimationScheduler::new();
        let (count, shake) = counted(&scheduler);

        assert_eq!(shake.activate(), ActivationOutcome::Started);
        assert_eq!(shake.phase(), EffectPhase::Animating);

        scheduler.advance(Duration::from_millis(250));
        assert!((shake.progress() - 0.5).abs() < 1e-3);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(250));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(shake.progress(), 0.0);
        assert_eq!(shake.phase(), EffectPhase::Idle);
        assert!(shake.render().transform.is_identity());
    }

    #[test]
    fn test_displacement_bounded_during_animation() {
        let scheduler = AnimationScheduler::new();
        let (_, shake) = counted(&scheduler);
        shake.activate();

        let mut widest = 0.0f32;
        for _ in 0..40 {
            scheduler.advance(Duration::from_millis(16));
            let dx = shake.render().transform.tx();
            assert!((-10.0..=10.0).contains(&dx));
            widest = widest.max(dx.abs());
        }
        assert!(widest > 5.0);
    }

    #[test]
    fn test_builders_and_config() {
        let scheduler = AnimationScheduler::new();
        let (count, shake) = counted(&scheduler);
        let shake = shake
            .shakes(1.0)
            .amplitude(4.0)
            .duration(Duration::from_millis(200))
            .policy(ActivationPolicy::Restart);

        shake.activate();
        scheduler.advance(Duration::from_millis(50));
        assert!((shake.render().transform.tx() - 4.0).abs() < 1e-3);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(shake.activate(), ActivationOutcome::Restarted);
        assert!(shake.progress() < 1e-6);
        scheduler.advance(Duration::from_millis(150));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let shake = shake.with_config(ShakeConfig::default());
        assert_eq!(shake.transform().amplitude, 10.0);
    }

    #[test]
    fn test_sub_millisecond_duration_is_kept() {
        let scheduler = AnimationScheduler::new();
        let (count, shake) = counted(&scheduler);
        let shake = shake.duration(Duration::from_micros(500));

        shake.activate();
        scheduler.advance(Duration::from_micros(250));
        assert!((shake.progress() - 0.5).abs() < 1e-3);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_micros(250));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_duration_acts_without_moving() {
        let scheduler = AnimationScheduler::new();
        let (count, shake) = counted(&scheduler);
        let shake = shake.duration(Duration::ZERO);

        shake.activate();
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(shake.progress(), 0.0);
    }
}
