//! Category rules shared by every zone and rod.
//!
//! - [`ConflictRules`]: which categories may not be worn at the same time
//! - [`DormantVisibility`]: which categories stay on screen while dormant
use strum::EnumCount;

use crate::state::{Category, CategorySet};

/// Symmetric mutual-exclusion table between garment categories.
///
/// Placing an item whose category conflicts with an occupant of another zone
/// evicts that occupant first. The default table makes a full-body garment
/// exclusive with separate shirts and pants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictRules {
    excludes: [CategorySet; Category::COUNT],
}

impl ConflictRules {
    /// Table without any exclusions.
    pub const fn none() -> Self {
        Self {
            excludes: [CategorySet::empty(); Category::COUNT],
        }
    }

    /// `FullBody` excludes `Shirt` and `Pants`.
    pub fn standard() -> Self {
        Self::none().with_exclusion(Category::FullBody, [Category::Shirt, Category::Pants])
    }

    /// Adds `category ⟂ other` for each of `others` (both directions).
    #[must_use]
    pub fn with_exclusion(
        mut self,
        category: Category,
        others: impl IntoIterator<Item = Category>,
    ) -> Self {
        for other in others {
            self.exclude(category, other);
        }
        self
    }

    /// Marks two categories as mutually exclusive.
    ///
    /// A category never conflicts with itself; same-category replacement is
    /// the zone's ordinary swap.
    pub fn exclude(&mut self, a: Category, b: Category) {
        if a == b {
            tracing::warn!("ignoring self-exclusion rule for category {}", a);
            return;
        }
        self.excludes[a as usize].insert_category(b);
        self.excludes[b as usize].insert_category(a);
    }

    pub fn conflicts(&self, a: Category, b: Category) -> bool {
        self.excludes[a as usize].has(b)
    }

    /// Every category that cannot be worn together with `category`.
    pub fn excluded_by(&self, category: Category) -> CategorySet {
        self.excludes[category as usize]
    }
}

impl Default for ConflictRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-category choice between "visible but dormant" and "hidden" for items
/// that are neither offered nor placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DormantVisibility {
    shown: CategorySet,
}

impl DormantVisibility {
    /// Every dormant item is hidden.
    pub const fn hidden() -> Self {
        Self {
            shown: CategorySet::empty(),
        }
    }

    /// Dormant items of the given categories stay visible.
    pub fn showing(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            shown: categories.into_iter().collect(),
        }
    }

    pub fn shows(&self, category: Category) -> bool {
        self.shown.has(category)
    }
}
