//! Haptic feedback seam
//!
//! Platforms plug their feedback engine in through [`HapticFeedback`].
//! Delivery is best-effort: components go through [`fire_and_forget`], which
//! logs a failed impact and carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Impact intensity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStyle {
    Light,
    #[default]
    Medium,
    Heavy,
    Soft,
    Rigid,
}

/// Reasons a haptic pulse could not be delivered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The device has no haptic engine
    #[error("haptic feedback is not supported on this device")]
    Unsupported,

    /// The engine rejected or failed the request
    #[error("haptic device error: {0}")]
    Device(String),
}

/// Provider of impact feedback
pub trait HapticFeedback: Send + Sync {
    /// Fire a single impact; must not block
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError>;
}

/// Provider for targets without a haptic engine
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Fire an impact, swallowing any failure
pub fn fire_and_forget(provider: &dyn HapticFeedback, style: ImpactStyle) {
    if let Err(err) = provider.impact(style) {
        tracing::debug!(?style, %err, "haptic impact not delivered");
    }
}
