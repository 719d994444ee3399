//! Wardrobe catalog: static clothing data with a precomputed name index
//!
//! The catalog is loaded once at startup from the embedded JSON dataset (or
//! any caller-supplied JSON document with the same shape), validated, and is
//! immutable thereafter. Lookups by display name go through a name index
//! built at load time and return a typed not-found error instead of a silent
//! empty fallback.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::error::WearcastError;
use crate::models::{Category, ClothingItem, MAX_THICKNESS, ThicknessLevel};

/// Embedded default wardrobe dataset
const BUILTIN_WARDROBE: &str = include_str!("../data/wardrobe.json");

/// Raw catalog item as it appears in the JSON document. The category is
/// implied by the collection the item lives in, not stored per item.
#[derive(Debug, Deserialize)]
struct ItemSpec {
    name: String,
    thickness: ThicknessLevel,
    suitable_conditions: Vec<String>,
    #[serde(default)]
    layering_order: Option<u8>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct WardrobeDocument {
    clothing: ClothingSection,
}

/// Keyed collections are deserialized into ordered maps so the catalog order
/// is deterministic across loads.
#[derive(Debug, Deserialize)]
struct ClothingSection {
    tops: BTreeMap<String, ItemSpec>,
    bottoms: BTreeMap<String, ItemSpec>,
    accessories: BTreeMap<String, ItemSpec>,
}

/// One category's items in catalog order, plus its name index
#[derive(Debug)]
struct CategoryShelf {
    items: Vec<ClothingItem>,
    by_name: HashMap<String, usize>,
}

impl CategoryShelf {
    fn build(
        category: Category,
        specs: BTreeMap<String, ItemSpec>,
    ) -> Result<Self, WearcastError> {
        let mut items = Vec::with_capacity(specs.len());
        let mut by_name = HashMap::with_capacity(specs.len());

        for (key, spec) in specs {
            if spec.thickness > MAX_THICKNESS {
                return Err(WearcastError::config(format!(
                    "wardrobe item '{key}' has thickness {} outside 0..={MAX_THICKNESS}",
                    spec.thickness
                )));
            }
            if spec.suitable_conditions.is_empty() {
                return Err(WearcastError::config(format!(
                    "wardrobe item '{key}' has no suitable conditions"
                )));
            }

            let item = ClothingItem {
                name: spec.name,
                category,
                thickness: spec.thickness,
                suitable_conditions: spec.suitable_conditions,
                layering_order: spec.layering_order,
                description: spec.description,
            };

            if by_name.insert(item.name.clone(), items.len()).is_some() {
                return Err(WearcastError::config(format!(
                    "duplicate {category} name '{}' in wardrobe catalog",
                    item.name
                )));
            }
            items.push(item);
        }

        Ok(Self { items, by_name })
    }
}

/// Immutable wardrobe catalog
#[derive(Debug)]
pub struct Wardrobe {
    tops: CategoryShelf,
    bottoms: CategoryShelf,
    accessories: CategoryShelf,
}

impl Wardrobe {
    /// Load the embedded default wardrobe dataset
    pub fn builtin() -> Result<Self, WearcastError> {
        Self::from_json(BUILTIN_WARDROBE)
    }

    /// Load and validate a wardrobe catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self, WearcastError> {
        let document: WardrobeDocument = serde_json::from_str(json)
            .map_err(|e| WearcastError::config(format!("invalid wardrobe catalog: {e}")))?;

        let wardrobe = Self {
            tops: CategoryShelf::build(Category::Top, document.clothing.tops)?,
            bottoms: CategoryShelf::build(Category::Bottom, document.clothing.bottoms)?,
            accessories: CategoryShelf::build(Category::Accessory, document.clothing.accessories)?,
        };

        debug!(
            tops = wardrobe.tops.items.len(),
            bottoms = wardrobe.bottoms.items.len(),
            accessories = wardrobe.accessories.items.len(),
            "Loaded wardrobe catalog"
        );
        Ok(wardrobe)
    }

    fn shelf(&self, category: Category) -> &CategoryShelf {
        match category {
            Category::Top => &self.tops,
            Category::Bottom => &self.bottoms,
            Category::Accessory => &self.accessories,
        }
    }

    /// All items of one category, in catalog order
    #[must_use]
    pub fn items(&self, category: Category) -> &[ClothingItem] {
        &self.shelf(category).items
    }

    /// Look up an item by display name within a category
    ///
    /// # Errors
    /// Returns [`WearcastError::Catalog`] when no item with that name exists.
    pub fn lookup(&self, category: Category, name: &str) -> Result<&ClothingItem, WearcastError> {
        let shelf = self.shelf(category);
        shelf
            .by_name
            .get(name)
            .map(|&idx| &shelf.items[idx])
            .ok_or_else(|| WearcastError::catalog(category.to_string(), name.to_string()))
    }
}
