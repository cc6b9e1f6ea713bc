mod cubic;
pub use cubic::*;

/// A curve mapping linear animation progress in `[0, 1]` to eased progress.
pub trait Tween {
    type Output;

    fn interp(&self, t: f32) -> Self::Output;
}

/// The identity curve.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Linear;

impl Tween for Linear {
    type Output = f32;

    fn interp(&self, t: f32) -> Self::Output {
        t
    }
}
