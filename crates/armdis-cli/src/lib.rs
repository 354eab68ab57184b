pub mod model;
pub mod report;

// Re-export commonly used types/functions for consumers
pub use model::{load_raw_bin, parse_u32};
pub use report::{family_stats, listing, FamilyCount, InsnOut};
