mod animation;
pub use animation::*;

mod pie_chart;
pub use pie_chart::*;
