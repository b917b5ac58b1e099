//! ZFS statistics loading, parsing and derived metrics

pub mod collector;
pub mod error;
pub mod kstat;
pub mod sections;
pub mod tunables;
pub mod types;

// Re-export commonly used items
pub use collector::KstatCollector;
pub use error::{ZfsError, ZfsResult};
pub use kstat::SectionStats;
pub use sections::{Section, is_known_section};
pub use tunables::Tunables;
pub use types::{ArcSize, L2Health, VdevCacheRatios};
