//! Display module for number formatting and terminal output

pub mod formatter;
pub mod progress;
pub mod terminal;

// Re-export commonly used items
pub use formatter::{
    PERCENT_PLACEHOLDER, format_bytes, format_hits, format_percent, format_percent_u64,
};
pub use progress::ProgressBar;
pub use terminal::Terminal;
