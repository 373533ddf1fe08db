//! Render descriptions
//!
//! Components never draw. `render()` returns a [`Rendered`] value describing
//! how the host should present the child for the current frame: scale,
//! opacity, transform, glow, an optional spinner and whether input is
//! accepted. The description is a pure function of component state.

use motionkit_core::{Affine2D, Color, Insets, Point, Shadow, Size};
use serde::{Deserialize, Serialize};

/// Platform spinner size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerStyle {
    #[default]
    Medium,
    Large,
}

impl SpinnerStyle {
    /// Diameter in points
    pub fn diameter(&self) -> f32 {
        match self {
            SpinnerStyle::Medium => 20.0,
            SpinnerStyle::Large => 37.0,
        }
    }
}

/// Spinner shown on top of the child
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinnerState {
    pub style: SpinnerStyle,
    pub animating: bool,
}

/// Platform indeterminate spinner
///
/// Only start/stop semantics are needed; the platform owns the drawing.
pub trait ActivityIndicator {
    fn start_animating(&mut self);
    fn stop_animating(&mut self);
    fn is_animating(&self) -> bool;
}

/// How to present a child for one frame
#[derive(Debug)]
pub struct Rendered<'a, C> {
    pub child: &'a C,
    /// Uniform scale about the child's center
    pub scale: f32,
    /// Child opacity
    pub opacity: f32,
    /// Geometry-level transform applied after scaling
    pub transform: Affine2D,
    pub shadow: Option<Shadow>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub padding: Insets,
    pub corner_radius: f32,
    pub spinner: Option<SpinnerState>,
    /// Input and assistive technology treat the control as disabled
    pub disabled: bool,
}

impl<'a, C> Clone for Rendered<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for Rendered<'a, C> {}

impl<'a, C> Rendered<'a, C> {
    /// Plain presentation of `child`
    pub fn new(child: &'a C) -> Self {
        Self {
            child,
            scale: 1.0,
            opacity: 1.0,
            transform: Affine2D::IDENTITY,
            shadow: None,
            background: None,
            foreground: None,
            padding: Insets::default(),
            corner_radius: 0.0,
            spinner: None,
            disabled: false,
        }
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn transform(mut self, transform: Affine2D) -> Self {
        self.transform = transform;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn spinner(mut self, spinner: Option<SpinnerState>) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether taps should reach the control
    pub fn accepts_input(&self) -> bool {
        !self.disabled
    }

    /// Full transform for a child laid out at `size`: scale about the center, then `transform`
    pub fn effective_transform(&self, size: Size) -> Affine2D {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        self.transform
            .then(&Affine2D::scale_about(self.scale, center))
    }
}
