//! Glow pulse effect
//!
//! Once mounted, the control breathes forever: scale and glow swell and relax
//! on an ease-in-out curve that reverses at each end.
//!
//! ```ignore
//! let mut save = PulseEffect::new(scheduler.handle(), || save_draft(), "Save")
//!     .glow_color(Color::from_hex(0xFF2D55));
//! save.mount();
//!
//! // every frame
//! scheduler.tick();
//! host.present(save.render());
//! ```

use motionkit_animation::{AnimatedTween, SchedulerHandle};
use motionkit_core::{Color, Shadow};

use super::{into_action, Action};
use crate::config::PulseConfig;
use crate::policy::ActivationOutcome;
use crate::render::Rendered;

/// Scale and glow for a pulse phase in [0, 1] (0 = rest, 1 = peak)
pub fn pulse_visual(phase: f32, config: &PulseConfig, glow: Color) -> (f32, Shadow) {
    let mix = |rest: f32, peak: f32| rest + (peak - rest) * phase;
    let scale = mix(config.rest_scale, config.peak_scale);
    let radius = mix(config.rest_glow_radius, config.peak_glow_radius);
    let opacity = mix(config.rest_glow_opacity, config.peak_glow_opacity);
    (scale, Shadow::glow(radius, glow.opacity(opacity)))
}

/// Button with an endlessly pulsing glow
pub struct PulseEffect<C> {
    action: Action,
    label: C,
    glow_color: Color,
    background_color: Color,
    foreground_color: Color,
    config: PulseConfig,
    /// 0 = rest, 1 = peak
    phase: AnimatedTween,
    is_pulsing: bool,
}

impl<C> PulseEffect<C> {
    pub fn new<F>(handle: SchedulerHandle, action: F, label: C) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            action: into_action(action),
            label,
            glow_color: Color::ACCENT,
            background_color: Color::ACCENT,
            foreground_color: Color::WHITE,
            config: PulseConfig::default(),
            phase: AnimatedTween::new(handle, 0.0),
            is_pulsing: false,
        }
    }

    pub fn glow_color(mut self, color: impl Into<Color>) -> Self {
        self.glow_color = color.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn foreground_color(mut self, color: impl Into<Color>) -> Self {
        self.foreground_color = color.into();
        self
    }

    /// Apply configuration; takes effect on the next mount
    pub fn with_config(mut self, config: PulseConfig) -> Self {
        self.config = config;
        self
    }

    /// Start pulsing; further calls are no-ops
    pub fn mount(&mut self) {
        if self.is_pulsing {
            return;
        }
        self.is_pulsing = true;
        self.phase.repeat_forever(
            1.0,
            self.config.period(),
            self.config.easing,
            true,
        );
        tracing::trace!(period_ms = self.config.period_ms, "pulse mounted");
    }

    /// Stop pulsing and return to rest
    pub fn unmount(&mut self) {
        if !self.is_pulsing {
            return;
        }
        self.is_pulsing = false;
        self.phase.set_immediate(0.0);
        tracing::trace!("pulse unmounted");
    }

    pub fn is_pulsing(&self) -> bool {
        self.is_pulsing
    }

    /// Current pulse phase (0 = rest, 1 = peak)
    pub fn phase(&self) -> f32 {
        self.phase.get()
    }

    /// The pulse never blocks taps
    pub fn activate(&self) -> ActivationOutcome {
        tracing::trace!("pulse activated");
        (self.action)();
        ActivationOutcome::Invoked
    }

    pub fn render(&self) -> Rendered<'_, C> {
        let phase = if self.is_pulsing { self.phase.get() } else { 0.0 };
        let (scale, shadow) = pulse_visual(phase, &self.config, self.glow_color);
        Rendered::new(&self.label)
            .scale(scale)
            .shadow(shadow)
            .background(self.background_color)
            .foreground(self.foreground_color)
            .padding(self.config.padding)
            .corner_radius(self.config.corner_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionkit_animation::AnimationScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_visual_at_rest_and_peak() {
        let config = PulseConfig::default();
        let (scale, shadow) = pulse_visual(0.0, &config, Color::ACCENT);
        assert!((scale - 1.0).abs() < 1e-6);
        assert!((shadow.blur - 5.0).abs() < 1e-6);
        assert!((shadow.color.a - 0.4).abs() < 1e-6);

        let (scale, shadow) = pulse_visual(1.0, &config, Color::ACCENT);
        assert!((scale - 1.05).abs() < 1e-6);
        assert!((shadow.blur - 20.0).abs() < 1e-6);
        assert!((shadow.color.a - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_pulsing_true_on_mount() {
        let scheduler = AnimationScheduler::new();
        let mut pulse = PulseEffect::new(scheduler.handle(), || {}, "Go");
        assert!(!pulse.is_pulsing());

        pulse.mount();
        assert!(pulse.is_pulsing());

        scheduler.advance(Duration::from_millis(16));
        assert!(pulse.phase() > 0.0);
    }

    #[test]
    fn test_oscillates_forever() {
        let scheduler = AnimationScheduler::new();
        let mut pulse = PulseEffect::new(scheduler.handle(), || {}, "Go");
        pulse.mount();

        // Peak at 1.2s, back to rest at 2.4s
        scheduler.advance(Duration::from_millis(1200));
        assert!((pulse.render().scale - 1.05).abs() < 1e-4);
        scheduler.advance(Duration::from_millis(1200));
        assert!((pulse.render().scale - 1.0).abs() < 1e-4);

        for _ in 0..600 {
            scheduler.advance(Duration::from_millis(16));
        }
        assert!(pulse.is_pulsing());
        assert!(scheduler.has_active_animations());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let scheduler = AnimationScheduler::new();
        let mut pulse = PulseEffect::new(scheduler.handle(), || {}, ());
        pulse.mount();
        scheduler.advance(Duration::from_millis(600));
        let phase = pulse.phase();
        pulse.mount();
        assert_eq!(pulse.phase(), phase);
    }

    #[test]
    fn test_unmount_returns_to_rest() {
        let scheduler = AnimationScheduler::new();
        let mut pulse = PulseEffect::new(scheduler.handle(), || {}, ());
        pulse.mount();
        scheduler.advance(Duration::from_millis(600));
        pulse.unmount();

        assert!(!pulse.is_pulsing());
        assert_eq!(pulse.render().scale, 1.0);
        assert!(!scheduler.has_active_animations());

        pulse.mount();
        scheduler.advance(Duration::from_millis(1200));
        assert!((pulse.render().scale - 1.05).abs() < 1e-4);
    }

    #[test]
    fn test_activate_invokes_action() {
        let scheduler = AnimationScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let pulse = PulseEffect::new(
            scheduler.handle(),
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
            "Go",
        );
        assert_eq!(pulse.activate(), ActivationOutcome::Invoked);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_render_carries_style() {
        let scheduler = AnimationScheduler::new();
        let glow = Color::from_hex(0xFF2D55);
        let pulse = PulseEffect::new(scheduler.handle(), || {}, "Go")
            .glow_color(glow)
            .background_color(Color::BLACK);
        let rendered = pulse.render();
        assert_eq!(rendered.background, Some(Color::BLACK));
        assert_eq!(rendered.foreground, Some(Color::WHITE));
        assert_eq!(rendered.corner_radius, 8.0);
        let shadow = rendered.shadow.unwrap();
        assert_eq!(shadow.color, glow.opacity(0.4));
        assert_eq!(*rendered.child, "Go");
    }
}
