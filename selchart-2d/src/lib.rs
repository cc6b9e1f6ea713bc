mod paint;
pub use paint::*;

mod recording;
pub use recording::*;

mod shape;
pub use shape::*;

mod vello_integrations;
pub use vello_integrations::*;

pub use peniko::kurbo::{Affine, BezPath, Point, Size, Vec2};
pub use peniko::{Brush, Color, Fill};

/// Maximum distance between a flattened arc and the true curve, in device-independent pixels.
pub const PATH_TOLERANCE: f64 = 0.1;
