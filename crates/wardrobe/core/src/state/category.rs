//! Garment categories and category sets.
use bitflags::bitflags;

/// Kind of garment. Immutable for the lifetime of an item.
///
/// Drop zones accept a fixed set of categories and the conflict table is
/// keyed by category, so this is the only classification the engine uses.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Hat,
    Glasses,
    Scarf,
    HeadBand,
    Shirt,
    Pants,
    Shoes,
    /// One-piece garment covering both shirt and pants regions.
    FullBody,
    Luggage,
}

impl Category {
    /// Single-bit set containing only this category.
    pub const fn as_set(self) -> CategorySet {
        match self {
            Category::Hat => CategorySet::HAT,
            Category::Glasses => CategorySet::GLASSES,
            Category::Scarf => CategorySet::SCARF,
            Category::HeadBand => CategorySet::HEAD_BAND,
            Category::Shirt => CategorySet::SHIRT,
            Category::Pants => CategorySet::PANTS,
            Category::Shoes => CategorySet::SHOES,
            Category::FullBody => CategorySet::FULL_BODY,
            Category::Luggage => CategorySet::LUGGAGE,
        }
    }
}

bitflags! {
    /// Set of garment categories, used for zone acceptance and dormant visibility.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CategorySet: u16 {
        const HAT       = 1 << 0;
        const GLASSES   = 1 << 1;
        const SCARF     = 1 << 2;
        const HEAD_BAND = 1 << 3;
        const SHIRT     = 1 << 4;
        const PANTS     = 1 << 5;
        const SHOES     = 1 << 6;
        const FULL_BODY = 1 << 7;
        const LUGGAGE   = 1 << 8;
    }
}

impl CategorySet {
    #[inline]
    pub fn has(self, category: Category) -> bool {
        self.contains(category.as_set())
    }

    pub fn insert_category(&mut self, category: Category) {
        self.insert(category.as_set());
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        category.as_set()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CategorySet::empty(), |set, category| set | category.as_set())
    }
}
