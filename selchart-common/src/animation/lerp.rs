/// Linear interpolation toward `other`. `t` outside of `[0, 1]` extrapolates, which is
/// how springs overshoot.
pub trait Lerp {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

macro_rules! impl_lerp_for_float {
    ($t: ty) => {
        impl Lerp for $t {
            fn lerp(&self, other: &Self, t: f32) -> Self {
                self + (other - self) * t as Self
            }
        }
    };
}

impl_lerp_for_float!(f32);
impl_lerp_for_float!(f64);
