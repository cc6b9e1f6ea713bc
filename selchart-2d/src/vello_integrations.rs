mod paint_ctx;

pub use paint_ctx::*;
