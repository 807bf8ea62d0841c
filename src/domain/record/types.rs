// SPDX-License-Identifier: MPL-2.0
//! Catalog record types.
//!
//! All display fields are derived from raw catalog strings inside the
//! constructors and cannot be changed afterwards.

use super::naming::{capitalize_first, normalize_name};
use super::newtypes::RecordId;

// =============================================================================
// Ability
// =============================================================================

/// An ability with its normalized display name and source reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    name: String,
    url: String,
}

impl Ability {
    /// Builds an ability from its raw catalog name (e.g. `"lightning-rod"`).
    #[must_use]
    pub fn from_source(raw_name: &str, url: impl Into<String>) -> Self {
        Self {
            name: normalize_name(raw_name),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

// =============================================================================
// Category
// =============================================================================

/// A category tag (elemental type) with its capitalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    url: String,
}

impl Category {
    /// Builds a category from its raw catalog name (e.g. `"electric"`).
    ///
    /// Only the first letter is capitalized; hyphens are kept.
    #[must_use]
    pub fn from_source(raw_name: &str, url: impl Into<String>) -> Self {
        Self {
            name: capitalize_first(raw_name),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

// =============================================================================
// Vitals
// =============================================================================

/// One base statistic (e.g. "Special Attack" = 50).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStat {
    name: String,
    value: u32,
}

impl BaseStat {
    #[must_use]
    pub fn from_source(raw_name: &str, value: u32) -> Self {
        Self {
            name: normalize_name(raw_name),
            value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Physical measurements and base stats shown in the detail view.
///
/// Height is in decimetres and weight in hectograms, as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vitals {
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<BaseStat>,
}

// =============================================================================
// Record
// =============================================================================

/// Normalized representation of one catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    normalized_name: String,
    image_url: Option<String>,
    abilities: Vec<Ability>,
    categories: Vec<Category>,
    vitals: Vitals,
}

impl Record {
    /// Creates a record, deriving the normalized display name from `name`.
    ///
    /// Empty image references are treated as absent.
    #[must_use]
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        image_url: Option<String>,
        abilities: Vec<Ability>,
        categories: Vec<Category>,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            normalized_name: normalize_name(&name),
            name,
            image_url: image_url.filter(|url| !url.is_empty()),
            abilities,
            categories,
            vitals: Vitals::default(),
        }
    }

    /// Attaches measurements and base stats.
    #[must_use]
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = vitals;
        self
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Raw catalog name (e.g. `"great-tusk"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable name (e.g. `"Great Tusk"`).
    #[must_use]
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// Primary image reference, if the catalog provided one.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Category names joined with `/`, e.g. `"Grass/Poison"`.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.categories
            .iter()
            .map(Category::name)
            .collect::<Vec<_>>()
            .join("/")
    }
}
