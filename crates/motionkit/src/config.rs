//! Motion configuration
//!
//! Every tunable constant of the four effects, loadable from TOML. Missing
//! sections and fields fall back to the defaults below.
//!
//! ```toml
//! [pulse]
//! period_ms = 1500
//!
//! [shake]
//! shakes = 4.0
//! amplitude = 6.0
//! policy = "restart"
//! ```

use std::path::Path;
use std::time::Duration;

use motionkit_animation::Easing;
use motionkit_core::{ImpactStyle, Insets};
use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::policy::ActivationPolicy;
use crate::render::SpinnerStyle;

/// Configuration for all effects
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub pulse: PulseConfig,
    pub bounce: BounceConfig,
    pub loading: LoadingConfig,
    pub shake: ShakeConfig,
}

impl MotionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: MotionConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded motion configuration");
        Ok(config)
    }

    /// Reject values no effect can render (NaN or infinite numbers)
    ///
    /// Finite values are accepted even when out of the usual range; effects
    /// degrade to no visible animation rather than failing.
    pub fn validate(&self) -> Result<()> {
        let p = &self.pulse;
        let b = &self.bounce;
        let s = &self.shake;
        let fields = [
            ("pulse.rest_scale", p.rest_scale),
            ("pulse.peak_scale", p.peak_scale),
            ("pulse.rest_glow_radius", p.rest_glow_radius),
            ("pulse.peak_glow_radius", p.peak_glow_radius),
            ("pulse.rest_glow_opacity", p.rest_glow_opacity),
            ("pulse.peak_glow_opacity", p.peak_glow_opacity),
            ("pulse.padding.horizontal", p.padding.horizontal),
            ("pulse.padding.vertical", p.padding.vertical),
            ("pulse.corner_radius", p.corner_radius),
            ("bounce.pressed_scale", b.pressed_scale),
            ("bounce.stiffness", b.stiffness),
            ("bounce.damping", b.damping),
            ("shake.shakes", s.shakes),
            ("shake.amplitude", s.amplitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(MotionError::InvalidConfig(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Glow pulse tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// One half-cycle (rest to peak)
    pub period_ms: u64,
    pub easing: Easing,
    pub rest_scale: f32,
    pub peak_scale: f32,
    pub rest_glow_radius: f32,
    pub peak_glow_radius: f32,
    pub rest_glow_opacity: f32,
    pub peak_glow_opacity: f32,
    pub padding: Insets,
    pub corner_radius: f32,
}

impl PulseConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            period_ms: 1200,
            easing: Easing::EaseInOut,
            rest_scale: 1.0,
            peak_scale: 1.05,
            rest_glow_radius: 5.0,
            peak_glow_radius: 20.0,
            rest_glow_opacity: 0.4,
            peak_glow_opacity: 0.8,
            padding: Insets::new(20.0, 12.0),
            corner_radius: 8.0,
        }
    }
}

/// Haptic bounce tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    pub pressed_scale: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Delay between press and release/action
    pub settle_delay_ms: u64,
    pub impact: ImpactStyle,
    pub policy: ActivationPolicy,
}

impl BounceConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            pressed_scale: 0.9,
            stiffness: 300.0,
            damping: 15.0,
            settle_delay_ms: 100,
            impact: ImpactStyle::Medium,
            policy: ActivationPolicy::default(),
        }
    }
}

/// Loading overlay tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub crossfade_ms: u64,
    pub easing: Easing,
    pub spinner: SpinnerStyle,
}

impl LoadingConfig {
    pub fn crossfade(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            crossfade_ms: 350,
            easing: Easing::EaseInOut,
            spinner: SpinnerStyle::Medium,
        }
    }
}

/// Shake tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Number of full cycles; fractional values give partial cycles
    pub shakes: f32,
    /// Peak horizontal displacement
    pub amplitude: f32,
    pub duration_ms: u64,
    pub policy: ActivationPolicy,
}

impl ShakeConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            shakes: 3.0,
            amplitude: 10.0,
            duration_ms: 500,
            policy: ActivationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = MotionConfig::from_toml_str("").unwrap();
        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.pulse.period(), Duration::from_millis(1200));
        assert_eq!(config.bounce.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.shake.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config = MotionConfig::from_toml_str(
            r#"
            [shake]
            shakes = 4.5
            policy = "queue"

            [loading]
            spinner = "large"
            easing = "linear"

            [bounce]
            impact = "heavy"
            "#,
        )
        .unwrap();

        assert_eq!(config.shake.shakes, 4.5);
        assert_eq!(config.shake.amplitude, 10.0);
        assert_eq!(config.shake.policy, ActivationPolicy::Queue);
        assert_eq!(config.loading.spinner, SpinnerStyle::Large);
        assert_eq!(config.loading.easing, Easing::Linear);
        assert_eq!(config.bounce.impact, ImpactStyle::Heavy);
        assert_eq!(config.bounce.stiffness, 300.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let config = MotionConfig::from_toml_str(
            r#"
            [shake]
            amplitude = -5.0
            shakes = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.shake.amplitude, -5.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = MotionConfig::from_toml_str("[shake]\namplitude = nan\n").unwrap_err();
        assert!(matches!(err, MotionError::InvalidConfig(ref msg) if msg.contains("shake.amplitude")));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = MotionConfig::from_toml_str("[pulse\nperiod_ms = 3").unwrap_err();
        assert!(matches!(err, MotionError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = MotionConfig::load("/nonexistent/motionkit.toml").unwrap_err();
        assert!(matches!(err, MotionError::Io(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = MotionConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(MotionConfig::from_toml_str(&text).unwrap(), config);
    }
}
