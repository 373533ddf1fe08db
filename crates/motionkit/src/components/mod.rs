//! Animated button effects
//!
//! Each effect wraps caller-supplied child content, owns its transient
//! presentation state and reports a [`Rendered`](crate::render::Rendered)
//! description per frame. None of them depends on another.

pub mod bounce;
pub mod loading;
pub mod pulse;
pub mod shake;

use std::sync::Arc;

pub use bounce::BounceEffect;
pub use loading::LoadingOverlay;
pub use pulse::{pulse_visual, PulseEffect};
pub use shake::{shake_offset, ShakeEffect, ShakeTransform};

/// Caller's activation callback
pub type Action = Arc<dyn Fn() + Send + Sync>;

pub(crate) fn into_action<F>(action: F) -> Action
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(action)
}
