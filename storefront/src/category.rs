//! Product categories and the validated catalog shown by the showcase grid.
//!
//! DESIGN
//! ======
//! The catalog is loaded once at startup (built-in entries or a YAML/JSON
//! file) and is immutable afterwards. Validation happens at construction so
//! views can assume unique ids and at most one featured entry.

use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share the same id.
    #[error("duplicate category id: {0}")]
    DuplicateId(String),

    /// An id is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid category id: {0:?}")]
    InvalidId(String),

    /// More than one entry carries the `featured` flag.
    #[error("multiple featured categories: {first} and {second}")]
    MultipleFeatured { first: String, second: String },

    /// The catalog file could not be read.
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid YAML for a category list.
    #[error("catalog yaml parse failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The catalog file is not valid JSON for a category list.
    #[error("catalog json parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// CATEGORY
// =============================================================================

/// A browsable product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Background image reference. Rendered without an image layer when absent.
    #[serde(default)]
    pub image: Option<String>,
    /// Icon token, e.g. `"laptop"`. Unknown or missing tokens get a placeholder glyph.
    #[serde(default)]
    pub icon: Option<String>,
    /// Display label such as `"2,500+ Products"`.
    #[serde(default)]
    pub product_count: String,
    /// Gradient color token pair, e.g. `"from-blue-600 to-purple-600"`.
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub featured: bool,
}

/// Grid footprint of a category card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSize {
    #[default]
    Standard,
    /// Enlarged footprint with larger typography.
    Featured,
}

impl Category {
    #[must_use]
    pub fn card_size(&self) -> CardSize {
        if self.featured { CardSize::Featured } else { CardSize::Standard }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Ordered, validated list of categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validate and wrap a category list. Order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidId`], [`CatalogError::DuplicateId`], or
    /// [`CatalogError::MultipleFeatured`] when the list breaks an invariant.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut featured: Option<&str> = None;
        for (index, category) in categories.iter().enumerate() {
            if !is_valid_id(&category.id) {
                return Err(CatalogError::InvalidId(category.id.clone()));
            }
            if categories[..index].iter().any(|c| c.id == category.id) {
                return Err(CatalogError::DuplicateId(category.id.clone()));
            }
            if category.featured {
                if let Some(first) = featured {
                    return Err(CatalogError::MultipleFeatured {
                        first: first.to_owned(),
                        second: category.id.clone(),
                    });
                }
                featured = Some(category.id.as_str());
            }
        }
        Ok(Self { categories })
    }

    /// The six default storefront categories, with `electronics` featured.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|entry| Category {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                description: entry.description.to_owned(),
                image: Some(format!("/images/categories/{}.jpg", entry.id)),
                icon: Some(entry.icon.to_owned()),
                product_count: entry.product_count.to_owned(),
                gradient: entry.gradient.to_owned(),
                featured: entry.featured,
            })
            .collect();
        Self { categories }
    }

    /// Parse a YAML sequence of categories.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] for malformed input, or a validation error.
    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_yaml::from_str(raw)?;
        Self::new(categories)
    }

    /// Parse a JSON array of categories.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input, or a validation error.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    /// Load a catalog file. `.yaml`/`.yml` files parse as YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or any parse
    /// or validation error.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml { Self::from_yaml_str(&raw) } else { Self::from_json_str(&raw) }
    }

    /// Serialize for embedding inside an HTML `<script>` element.
    ///
    /// `<` is written as the JSON escape `\u003c` so no payload can close the script tag early.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_script_json(&self) -> Result<String, CatalogError> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace('<', "\\u003c"))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn featured(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.featured)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

// =============================================================================
// BUILT-IN DATA
// =============================================================================

struct BuiltinEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    product_count: &'static str,
    gradient: &'static str,
    featured: bool,
}

const BUILTIN: [BuiltinEntry; 6] = [
    BuiltinEntry {
        id: "electronics",
        name: "Electronics",
        description: "Latest gadgets, smart devices, and cutting-edge technology",
        icon: "laptop",
        product_count: "2,500+ Products",
        gradient: "from-blue-600 to-purple-600",
        featured: true,
    },
    BuiltinEntry {
        id: "fashion",
        name: "Fashion",
        description: "Trendy clothing, shoes, and accessories for every style",
        icon: "shirt",
        product_count: "5,000+ Products",
        gradient: "from-pink-500 to-rose-500",
        featured: false,
    },
    BuiltinEntry {
        id: "home-garden",
        name: "Home & Garden",
        description: "Furniture, decor, and everything to make your house a home",
        icon: "home",
        product_count: "3,200+ Products",
        gradient: "from-green-500 to-emerald-600",
        featured: false,
    },
    BuiltinEntry {
        id: "sports",
        name: "Sports & Outdoors",
        description: "Gear and equipment for an active lifestyle",
        icon: "dumbbell",
        product_count: "1,800+ Products",
        gradient: "from-orange-500 to-red-500",
        featured: false,
    },
    BuiltinEntry {
        id: "beauty",
        name: "Beauty & Health",
        description: "Skincare, cosmetics, and wellness essentials",
        icon: "sparkles",
        product_count: "2,100+ Products",
        gradient: "from-purple-500 to-pink-500",
        featured: false,
    },
    BuiltinEntry {
        id: "books",
        name: "Books & Media",
        description: "Bestsellers, classics, music, and entertainment",
        icon: "book",
        product_count: "4,000+ Products",
        gradient: "from-yellow-500 to-orange-500",
        featured: false,
    },
];

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
