//! Wardrobe item model and recommendation output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment warmth classification, 0 (thinnest) to 5 (thickest)
pub type ThicknessLevel = u8;

/// Highest valid thickness level
pub const MAX_THICKNESS: ThicknessLevel = 5;

/// Wardrobe category of a clothing item (outerwear is folded into tops)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Accessory,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Top => write!(f, "top"),
            Category::Bottom => write!(f, "bottom"),
            Category::Accessory => write!(f, "accessory"),
        }
    }
}

/// One wardrobe piece from the catalog
///
/// Loaded once at startup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Display name, unique within its category
    pub name: String,
    /// Wardrobe category
    pub category: Category,
    /// Warmth level, always within 0..=5
    pub thickness: ThicknessLevel,
    /// Condition tags this item is appropriate for (non-empty)
    pub suitable_conditions: Vec<String>,
    /// Relative draw order for multi-item top recommendations (lower = innermost)
    pub layering_order: Option<u8>,
    /// Short display description
    pub description: String,
}

impl ClothingItem {
    /// Layering position used when sorting tops; items without an explicit
    /// order sort first.
    #[must_use]
    pub fn layering_position(&self) -> u8 {
        self.layering_order.unwrap_or(0)
    }
}

/// Categorized clothing recommendation produced by the filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingRecommendation {
    /// Top item names, ordered by layering order ascending
    pub tops: Vec<String>,
    /// Bottom item names, in catalog filter order
    pub bottoms: Vec<String>,
    /// Accessory item names, in catalog filter order
    pub accessories: Vec<String>,
    /// Human-readable summary of the driving weather conditions
    pub description: String,
    /// Layering suggestion, present when layering or packing advice applies
    pub layering_advice: Option<String>,
}

impl ClothingRecommendation {
    /// True when no category produced a recommendation
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty() && self.accessories.is_empty()
    }
}
