mod animated_value;
pub use animated_value::*;

mod animation_frame;
pub use animation_frame::*;

mod animation_spec;
pub use animation_spec::*;

mod curves;
pub use curves::*;

mod lerp;
pub use lerp::*;

mod simulation;
pub use simulation::*;
