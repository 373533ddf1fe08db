//! MotionKit Animation System
//!
//! Easing curves, spring physics, duration tweens and the scheduler that
//! advances them.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: Scalar interpolation over a fixed duration with an easing curve
//! - **Repeat Modes**: Play once or forever, optionally auto-reversing
//! - **Delayed Callbacks**: One-shot timers fired on the same thread that advances frames
//! - **Animatable Effects**: Effects expose a single interpolated parameter to the scheduler

pub mod animatable;
pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod tween;
pub mod values;

pub use animatable::Animatable;
pub use easing::Easing;
pub use scheduler::{
    AnimatedTween, AnimatedValue, AnimationScheduler, SchedulerHandle, SharedAnimatedTween,
    SharedAnimatedValue, SpringId, TimerId, TweenId,
};
pub use spring::{Spring, SpringConfig};
pub use tween::{Repeat, Tween};
pub use values::Interpolate;
