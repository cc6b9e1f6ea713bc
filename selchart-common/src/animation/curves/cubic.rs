use super::Tween;

/// A third-order Bézier easing curve through (0, 0) and (1, 1).
///
/// https://api.flutter.dev/flutter/animation/Cubic-class.html
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Cubic {
    /// The x coordinate of the first control point.
    pub a: f32,
    /// The y coordinate of the first control point.
    pub b: f32,
    /// The x coordinate of the second control point.
    pub c: f32,
    /// The y coordinate of the second control point.
    pub d: f32,
}

const CUBIC_ERROR_BOUND: f32 = 0.001;

impl Tween for Cubic {
    type Output = f32;

    fn interp(&self, t: f32) -> Self::Output {
        fn evaluate_cubic(a: f32, b: f32, m: f32) -> f32 {
            3.0 * a * (1.0 - m) * (1.0 - m) * m + 3.0 * b * (1.0 - m) * m * m + m * m * m
        }
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let mut start = 0.0;
        let mut end = 1.0;
        loop {
            let mid = (start + end) / 2.0;
            let estimate = evaluate_cubic(self.a, self.c, mid);
            if (t - estimate).abs() < CUBIC_ERROR_BOUND {
                return evaluate_cubic(self.b, self.d, mid);
            }
            if estimate < t {
                start = mid;
            } else {
                end = mid;
            }
        }
    }
}

/// The default easing of CSS transitions. Accelerates briefly, then decelerates for most
/// of the duration.
pub const EASE: Cubic = Cubic {
    a: 0.25,
    b: 0.1,
    c: 0.25,
    d: 1.0,
};
