//! MotionKit Core
//!
//! Foundational primitives shared by the MotionKit crates:
//!
//! - **Geometry**: `Color`, `Point`, `Size`, `Affine2D` and `Shadow` used by render descriptions
//! - **Bindings**: caller-owned observable values that components read but never write
//! - **Haptics**: a best-effort feedback seam that never surfaces failures to callers
//!
//! # Example
//!
//! ```rust
//! use motionkit_core::Binding;
//!
//! let loading = Binding::new(false);
//! let reader = loading.reader();
//!
//! loading.set(true);
//! assert!(reader.get());
//! ```

pub mod binding;
pub mod geometry;
pub mod haptics;

pub use binding::{Binding, BindingReader, Subscription};
pub use geometry::{Affine2D, Color, Insets, Point, Shadow, Size};
pub use haptics::{fire_and_forget, HapticError, HapticFeedback, ImpactStyle, NoopHaptics};
