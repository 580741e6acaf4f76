mod calculation;
mod types;

pub use calculation::{fallback_task_size, fill_layout, layout_window};
pub use types::*;
