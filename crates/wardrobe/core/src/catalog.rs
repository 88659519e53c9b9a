//! Static catalog: which rods, items and zones exist.
//!
//! The catalog is authored content. The engine consumes it once in
//! [`Wardrobe::from_catalog`](crate::engine::Wardrobe::from_catalog) and
//! never reads it again.
use crate::geometry::Vec2;
use crate::rules::{ConflictRules, DormantVisibility};
use crate::state::{Category, CategorySet};

#[cfg(feature = "serde")]
fn unit_scale() -> f32 {
    1.0
}

#[cfg(feature = "serde")]
fn unit_size() -> Vec2 {
    ItemSpec::DEFAULT_SIZE
}

/// Complete wardrobe description.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub rods: Vec<RodSpec>,
    pub zones: Vec<ZoneSpec>,
    /// Mutual exclusions. Empty means the standard FullBody rules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conflicts: Vec<ConflictSpec>,
    /// Categories that stay visible (but not interactive) while dormant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visible_when_dormant: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rod(mut self, rod: RodSpec) -> Self {
        self.rods.push(rod);
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: ZoneSpec) -> Self {
        self.zones.push(zone);
        self
    }

    #[must_use]
    pub fn with_conflict(mut self, conflict: ConflictSpec) -> Self {
        self.conflicts.push(conflict);
        self
    }

    #[must_use]
    pub fn with_dormant_visible(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.visible_when_dormant.extend(categories);
        self
    }

    pub fn item_count(&self) -> usize {
        self.rods.iter().map(|rod| rod.items.len()).sum()
    }

    /// Builds the exclusion table.
    pub fn conflict_rules(&self) -> ConflictRules {
        if self.conflicts.is_empty() {
            return ConflictRules::standard();
        }
        self.conflicts
            .iter()
            .fold(ConflictRules::none(), |rules, spec| {
                rules.with_exclusion(spec.category, spec.excludes.iter().copied())
            })
    }

    pub fn dormant_visibility(&self) -> DormantVisibility {
        DormantVisibility::showing(self.visible_when_dormant.iter().copied())
    }
}

/// One body slot and its items in cycling order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSpec>,
}

impl RodSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: ItemSpec) -> Self {
        self.items.push(item);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub category: Category,
    /// Rest position on the rod.
    pub position: Vec2,
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    pub scale: f32,
    #[cfg_attr(feature = "serde", serde(default = "unit_size"))]
    pub size: Vec2,
}

impl ItemSpec {
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(1.0, 1.0);

    pub fn new(name: impl Into<String>, category: Category, position: Vec2) -> Self {
        Self {
            name: name.into(),
            category,
            position,
            scale: 1.0,
            size: Self::DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub name: String,
    pub accepts: Vec<Category>,
    pub anchor: Vec2,
    pub size: Vec2,
    /// Scale an item takes on while placed here.
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    pub scale: f32,
}

impl ZoneSpec {
    pub fn new(
        name: impl Into<String>,
        accepts: impl IntoIterator<Item = Category>,
        anchor: Vec2,
        size: Vec2,
    ) -> Self {
        Self {
            name: name.into(),
            accepts: accepts.into_iter().collect(),
            anchor,
            size,
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn accepted(&self) -> CategorySet {
        self.accepts.iter().copied().collect()
    }
}

/// `category` may never be worn together with any of `excludes`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictSpec {
    pub category: Category,
    pub excludes: Vec<Category>,
}

impl ConflictSpec {
    pub fn new(category: Category, excludes: impl IntoIterator<Item = Category>) -> Self {
        Self {
            category,
            excludes: excludes.into_iter().collect(),
        }
    }
}
