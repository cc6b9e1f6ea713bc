mod changes;
pub use changes::*;

mod state;
pub use state::*;

mod widget;
pub use widget::*;
