//! Haptic bounce effect
//!
//! A tap fires a medium haptic impact and springs the child down to 90%.
//! After a short delay it springs back and the caller's action runs.

use std::sync::Arc;

use motionkit_animation::{AnimatedValue, SchedulerHandle, SharedAnimatedValue, SpringConfig};
use motionkit_core::{fire_and_forget, HapticFeedback, NoopHaptics};
use parking_lot::Mutex;

use super::{into_action, Action};
use crate::config::BounceConfig;
use crate::policy::{ActivationGate, ActivationOutcome, ActivationPolicy, EffectPhase};
use crate::render::Rendered;

/// Button that bounces and buzzes before acting
pub struct BounceEffect<C> {
    action: Action,
    label: C,
    config: BounceConfig,
    haptics: Arc<dyn HapticFeedback>,
    scale: SharedAnimatedValue,
    gate: ActivationGate,
    handle: SchedulerHandle,
}

impl<C> BounceEffect<C> {
    pub fn new<F>(handle: SchedulerHandle, action: F, label: C) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let config = BounceConfig::default();
        Self {
            action: into_action(action),
            label,
            scale: Self::press_spring(&handle, &config),
            gate: ActivationGate::new(config.policy),
            haptics: Arc::new(NoopHaptics),
            config,
            handle,
        }
    }

    fn press_spring(handle: &SchedulerHandle, config: &BounceConfig) -> SharedAnimatedValue {
        let spring = SpringConfig::interpolating(config.stiffness, config.damping);
        Arc::new(Mutex::new(AnimatedValue::new(handle.clone(), 1.0, spring)))
    }

    /// Haptic provider (defaults to none)
    pub fn haptics(mut self, provider: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = provider;
        self
    }

    pub fn policy(mut self, policy: ActivationPolicy) -> Self {
        self.config.policy = policy;
        self.gate.set_policy(policy);
        self
    }

    pub fn with_config(mut self, config: BounceConfig) -> Self {
        self.scale = Self::press_spring(&self.handle, &config);
        self.gate.set_policy(config.policy);
        self.config = config;
        self
    }

    pub fn activation_policy(&self) -> ActivationPolicy {
        self.gate.policy()
    }

    pub fn phase(&self) -> EffectPhase {
        self.gate.phase()
    }

    /// True between a tap and its delayed release
    pub fn is_pressed(&self) -> bool {
        self.phase() == EffectPhase::Animating
    }

    /// Current animated scale
    pub fn scale(&self) -> f32 {
        self.scale.lock().get()
    }

    /// Handle a tap
    pub fn activate(&self) -> ActivationOutcome {
        let pressed_scale = self.config.pressed_scale;
        let impact = self.config.impact;
        let scale = Arc::clone(&self.scale);
        let action = Arc::clone(&self.action);

        let outcome = self.gate.activate(
            &self.handle,
            self.config.settle_delay(),
            || {
                fire_and_forget(self.haptics.as_ref(), impact);
                self.scale.lock().set_target(pressed_scale);
            },
            move |idle| {
                if idle {
                    scale.lock().set_target(1.0);
                }
                action();
            },
        );
        tracing::trace!(?outcome, "bounce activated");
        outcome
    }

    pub fn render(&self) -> Rendered<'_, C> {
        Rendered::new(&self.label).scale(self.scale())
    }
}
