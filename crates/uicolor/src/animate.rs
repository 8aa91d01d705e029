use crate::Color;

/// A value an animation system can blend between two keyframes.
///
/// `delta` is passed through unclamped; callers that want to stay between the
/// keyframes clamp it themselves.
pub trait Animatable: Sized {
    fn interpolate(&self, next: &Self, delta: f32) -> Self;
}

impl Animatable for Color {
    fn interpolate(&self, next: &Self, delta: f32) -> Self {
        Color::interpolate(self, next, delta)
    }
}

impl Animatable for f32 {
    fn interpolate(&self, next: &Self, delta: f32) -> Self {
        self + delta * (next - self)
    }
}
