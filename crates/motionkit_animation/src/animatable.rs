//! Effects with a single interpolated parameter
//!
//! An effect that implements [`Animatable`] names exactly one value the
//! scheduler tweens. Every other field is fixed configuration, so rendering a
//! frame is a pure function of that one value.

use crate::values::Interpolate;

pub trait Animatable {
    /// The interpolated parameter
    type Data: Interpolate;

    fn animatable_data(&self) -> Self::Data;

    fn set_animatable_data(&mut self, data: Self::Data);

    /// Copy of `self` with the parameter replaced
    fn with_animatable_data(mut self, data: Self::Data) -> Self
    where
        Self: Sized,
    {
        self.set_animatable_data(data);
        self
    }
}
