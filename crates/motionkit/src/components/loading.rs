//! Loading overlay
//!
//! Swaps the label for a spinner while a caller-owned flag is set, and
//! refuses taps in that state. The overlay only ever reads the flag.

use std::sync::Arc;

use motionkit_animation::{AnimatedTween, SchedulerHandle, SharedAnimatedTween};
use motionkit_core::{Binding, BindingReader, Subscription};
use parking_lot::Mutex;

use super::{into_action, Action};
use crate::config::LoadingConfig;
use crate::policy::ActivationOutcome;
use crate::render::{ActivityIndicator, Rendered, SpinnerState, SpinnerStyle};

fn label_opacity_for(loading: bool) -> f32 {
    if loading {
        0.0
    } else {
        1.0
    }
}

/// Button that shows a spinner while loading
pub struct LoadingOverlay<C> {
    is_loading: BindingReader<bool>,
    action: Action,
    label: C,
    config: LoadingConfig,
    label_opacity: SharedAnimatedTween,
    subscription: Subscription<bool>,
}

impl<C> LoadingOverlay<C> {
    pub fn new<F>(handle: SchedulerHandle, is_loading: &Binding<bool>, action: F, label: C) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let is_loading = is_loading.reader();
        let config = LoadingConfig::default();
        let label_opacity = Arc::new(Mutex::new(AnimatedTween::new(
            handle,
            label_opacity_for(is_loading.get()),
        )));
        let subscription = Self::watch(&is_loading, &label_opacity, &config);

        Self {
            is_loading,
            action: into_action(action),
            label,
            config,
            label_opacity,
            subscription,
        }
    }

    /// Cross-fade the label whenever the flag changes
    fn watch(
        is_loading: &BindingReader<bool>,
        label_opacity: &SharedAnimatedTween,
        config: &LoadingConfig,
    ) -> Subscription<bool> {
        let label_opacity = Arc::clone(label_opacity);
        let duration = config.crossfade();
        let easing = config.easing;
        is_loading.subscribe(move |loading| {
            tracing::trace!(loading = *loading, "loading overlay cross-fading");
            label_opacity
                .lock()
                .animate_to(label_opacity_for(*loading), duration, easing);
        })
    }

    pub fn spinner_style(mut self, style: SpinnerStyle) -> Self {
        self.config.spinner = style;
        self
    }

    pub fn with_config(mut self, config: LoadingConfig) -> Self {
        self.subscription = Self::watch(&self.is_loading, &self.label_opacity, &config);
        self.config = config;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    /// Disabled exactly while loading
    pub fn is_disabled(&self) -> bool {
        self.is_loading()
    }

    /// Current label opacity (animated)
    pub fn label_opacity(&self) -> f32 {
        self.label_opacity.lock().get()
    }

    /// Handle a tap; a no-op while loading
    pub fn activate(&self) -> ActivationOutcome {
        if self.is_loading() {
            tracing::trace!("loading overlay suppressed activation");
            return ActivationOutcome::Suppressed;
        }
        (self.action)();
        ActivationOutcome::Invoked
    }

    /// Start or stop a platform spinner to match the flag
    pub fn sync_indicator(&self, indicator: &mut dyn ActivityIndicator) {
        match (self.is_loading(), indicator.is_animating()) {
            (true, false) => indicator.start_animating(),
            (false, true) => indicator.stop_animating(),
            _ => {}
        }
    }

    pub fn render(&self) -> Rendered<'_, C> {
        let loading = self.is_loading();
        let spinner = loading.then_some(SpinnerState {
            style: self.config.spinner,
            animating: true,
        });
        Rendered::new(&self.label)
            .opacity(self.label_opacity())
            .spinner(spinner)
            .disabled(loading)
    }
}
