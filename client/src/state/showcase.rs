//! View models for the category showcase grid and the product listing heading.
//!
//! DESIGN
//! ======
//! Cards are derived from the catalog in one pure pass so the grid component
//! only maps models to markup. Card count always equals catalog length.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use storefront::routes;
use storefront::{CardSize, Catalog, Category};

use crate::state::presentation::{MotionHints, class_list};
use crate::util::icons;

/// Render-ready data for one category card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub icon: &'static str,
    pub product_count: String,
    pub gradient: String,
    pub size: CardSize,
    pub href: String,
}

impl CategoryCardModel {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            image: category.image.clone().filter(|src| !src.trim().is_empty()),
            icon: icons::glyph(category.icon.as_deref()),
            product_count: category.product_count.clone(),
            gradient: category.gradient.clone(),
            size: category.card_size(),
            href: routes::category_listing_href(&category.id),
        }
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.size == CardSize::Featured
    }

    /// Classes for the card root element.
    #[must_use]
    pub fn card_class(&self, motion: MotionHints) -> String {
        let size = match self.size {
            CardSize::Featured => "category-card--featured",
            CardSize::Standard => "category-card--standard",
        };
        class_list(&["category-card", size, motion.entrance_class(), motion.hover_class()])
    }

    #[must_use]
    pub fn name_class(&self) -> &'static str {
        match self.size {
            CardSize::Featured => "category-card__name category-card__name--lg",
            CardSize::Standard => "category-card__name",
        }
    }

    #[must_use]
    pub fn overlay_class(&self) -> String {
        class_list(&["category-card__overlay", self.gradient.as_str()])
    }
}

/// One card per catalog entry, in catalog order.
#[must_use]
pub fn showcase_cards(catalog: &Catalog) -> Vec<CategoryCardModel> {
    catalog.iter().map(CategoryCardModel::from_category).collect()
}

/// Heading shown on the product listing route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingHeading {
    pub title: String,
    pub category_id: Option<String>,
    /// Set when the requested category does not exist.
    pub notice: Option<String>,
}

pub const ALL_PRODUCTS_TITLE: &str = "All Products";

impl ListingHeading {
    #[must_use]
    pub fn resolve(catalog: &Catalog, requested: Option<&str>) -> Self {
        let requested = requested.map(str::trim).filter(|id| !id.is_empty());
        match requested {
            None => Self { title: ALL_PRODUCTS_TITLE.to_owned(), category_id: None, notice: None },
            Some(id) => match catalog.get(id) {
                Some(category) => {
                    Self { title: category.name.clone(), category_id: Some(category.id.clone()), notice: None }
                }
                None => Self {
                    title: ALL_PRODUCTS_TITLE.to_owned(),
                    category_id: None,
                    notice: Some(format!("Category \"{id}\" was not found. Showing all products.")),
                },
            },
        }
    }
}
