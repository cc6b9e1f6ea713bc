mod alignment;
pub use alignment::*;

mod config;
pub use config::*;

pub use hit_test::*;

mod layout;
pub use layout::*;

mod segment;
pub use segment::*;

pub use peniko::Color;

/// Full turn in degrees.
pub const MAX_DEGREES: f32 = 360.0;
