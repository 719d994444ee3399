//! Clothing recommendation engine
//!
//! A deterministic, rule-based classifier that maps a weather signal onto the
//! wardrobe catalog:
//! - Thickness selector: temperature readings to acceptable warmth levels
//! - Condition tagger: weather flags to matchable condition tags
//! - Recommendation filter: both combined against the catalog, per category

pub mod conditions;
pub mod filter;
pub mod thickness;

// Re-export commonly used functions from submodules
pub use conditions::condition_tags;
pub use filter::recommend;
pub use thickness::recommended_thickness;
