//! # MotionKit
//!
//! Animated button effects driven by an explicit animation scheduler.
//!
//! ## Effects
//!
//! - **PulseEffect** - glow and scale breathe forever once mounted
//! - **BounceEffect** - haptic impact, spring press, then the action
//! - **LoadingOverlay** - spinner and disabled state while a caller flag is set
//! - **ShakeEffect** - horizontal sine shake, then the action
//!
//! Each effect owns its child content and describes a frame with
//! [`Rendered`]; the host decides how to draw it.
//!
//! ## Example
//!
//! ```ignore
//! use motionkit::prelude::*;
//!
//! let scheduler = AnimationScheduler::new();
//! let retry = ShakeEffect::new(scheduler.handle(), || submit(), "Retry")
//!     .shakes(4.0)
//!     .policy(ActivationPolicy::Restart);
//!
//! retry.activate();
//! loop {
//!     scheduler.tick();
//!     host.present(retry.render());
//! }
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod policy;
pub mod render;

pub use components::*;
pub use config::{BounceConfig, LoadingConfig, MotionConfig, PulseConfig, ShakeConfig};
pub use error::{MotionError, Result};
pub use policy::{ActivationOutcome, ActivationPolicy, EffectPhase};
pub use render::{ActivityIndicator, Rendered, SpinnerState, SpinnerStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::{
        shake_offset, BounceEffect, LoadingOverlay, PulseEffect, ShakeEffect, ShakeTransform,
    };
    pub use crate::config::MotionConfig;
    pub use crate::policy::{ActivationOutcome, ActivationPolicy, EffectPhase};
    pub use crate::render::{ActivityIndicator, Rendered, SpinnerStyle};
    // Re-export the primitives callers need to drive effects
    pub use motionkit_animation::{AnimationScheduler, Easing, SchedulerHandle};
    pub use motionkit_core::{
        Binding, Color, HapticError, HapticFeedback, ImpactStyle, NoopHaptics,
    };
}
