//! Error types for catalog building, placement and invariant checks.

use crate::config::ConfigError;
use crate::error::{ErrorSeverity, WardrobeError};
use crate::state::{Category, ItemId, RodId, ZoneId};

/// Fatal problems that prevent building a wardrobe from a catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Two entries of the same kind share a name.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateName {
        /// "rod", "item" or "zone".
        kind: &'static str,
        name: String,
    },

    #[error("too many rods (max: {max}, got: {count})")]
    TooManyRods { max: usize, count: usize },

    #[error("too many zones (max: {max}, got: {count})")]
    TooManyZones { max: usize, count: usize },

    #[error("too many items (max: {max}, got: {count})")]
    TooManyItems { max: usize, count: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl WardrobeError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateName { .. } | Self::InvalidConfig(_) => ErrorSeverity::Validation,
            Self::TooManyRods { .. } | Self::TooManyZones { .. } | Self::TooManyItems { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
            Self::TooManyRods { .. } => "CATALOG_TOO_MANY_RODS",
            Self::TooManyZones { .. } => "CATALOG_TOO_MANY_ZONES",
            Self::TooManyItems { .. } => "CATALOG_TOO_MANY_ITEMS",
            Self::InvalidConfig(_) => "CATALOG_INVALID_CONFIG",
        }
    }
}

/// Degradable configuration problems found while building a wardrobe.
///
/// The wardrobe is still built; the affected rod, zone or item degrades to a
/// no-op (or a safe default) and the issue is kept as a diagnostic.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogIssue {
    /// Rod without items; it will never offer anything.
    #[error("rod '{rod}' has no items")]
    EmptyRod { rod: String },

    /// Zone without accepted categories; every drop onto it is returned.
    #[error("zone '{zone}' accepts no categories")]
    ZoneAcceptsNothing { zone: String },

    /// Zone with a zero or negative extent; nothing can overlap it.
    #[error("zone '{zone}' has a degenerate size")]
    DegenerateZone { zone: String },

    /// Scale that is not a positive finite number; 1.0 is used instead.
    #[error("'{name}' has an invalid scale {scale}; using 1.0")]
    InvalidScale { name: String, scale: f32 },

    /// Exclusion rule naming the same category twice; ignored.
    #[error("category {category} cannot exclude itself")]
    SelfExclusion { category: Category },
}

impl WardrobeError for CatalogIssue {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRod { .. } => "CATALOG_EMPTY_ROD",
            Self::ZoneAcceptsNothing { .. } => "CATALOG_ZONE_ACCEPTS_NOTHING",
            Self::DegenerateZone { .. } => "CATALOG_DEGENERATE_ZONE",
            Self::InvalidScale { .. } => "CATALOG_INVALID_SCALE",
            Self::SelfExclusion { .. } => "CATALOG_SELF_EXCLUSION",
        }
    }
}

/// Errors returned by direct placement and cycling calls.
///
/// Pointer handling never surfaces these; a failed drop degrades to
/// returning the item to its rod.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    #[error("unknown rod {0}")]
    UnknownRod(RodId),

    #[error("unknown zone {0}")]
    UnknownZone(ZoneId),

    /// The zone has no accepted categories (configuration error).
    #[error("{zone} accepts no categories")]
    ZoneAcceptsNothing { zone: ZoneId },

    /// The zone does not accept the item's category.
    #[error("{zone} does not accept {category}")]
    Incompatible { zone: ZoneId, category: Category },

    /// The item must leave its zone before it can rejoin its rod.
    #[error("{item} is still placed in {zone}")]
    StillPlaced { item: ItemId, zone: ZoneId },
}

impl WardrobeError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Incompatible { .. } | Self::StillPlaced { .. } => ErrorSeverity::Recoverable,
            Self::ZoneAcceptsNothing { .. } => ErrorSeverity::Validation,
            Self::UnknownItem(_) | Self::UnknownRod(_) | Self::UnknownZone(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "PLACEMENT_UNKNOWN_ITEM",
            Self::UnknownRod(_) => "PLACEMENT_UNKNOWN_ROD",
            Self::UnknownZone(_) => "PLACEMENT_UNKNOWN_ZONE",
            Self::ZoneAcceptsNothing { .. } => "PLACEMENT_ZONE_ACCEPTS_NOTHING",
            Self::Incompatible { .. } => "PLACEMENT_INCOMPATIBLE",
            Self::StillPlaced { .. } => "PLACEMENT_STILL_PLACED",
        }
    }
}

/// A broken consistency rule between items, rods and zones.
///
/// These are prevented by construction; [`Wardrobe::repair`] corrects the
/// rod-local ones.
///
/// [`Wardrobe::repair`]: crate::engine::Wardrobe::repair
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{rod} offers more than one item ({count})")]
    MultipleOffered { rod: RodId, count: usize },

    #[error("{rod} cursor points at placed {item}")]
    CursorOnPlaced { rod: RodId, item: ItemId },

    #[error("{rod} cursor points at hidden {item}")]
    CursorOnHidden { rod: RodId, item: ItemId },

    #[error("{item} is offered but not under the cursor of {rod}")]
    OfferedOffCursor { rod: RodId, item: ItemId },

    #[error("{item} is not a member of its home {rod}")]
    MissingFromRod { rod: RodId, item: ItemId },

    #[error("{zone} holds {item} which is not placed there")]
    OccupantNotPlaced { zone: ZoneId, item: ItemId },

    #[error("{item} claims {zone} but is not its occupant")]
    PlacedWithoutZone { item: ItemId, zone: ZoneId },

    #[error("{zone} holds {item} of a category it does not accept")]
    IncompatibleOccupant { zone: ZoneId, item: ItemId },

    #[error("{first} and {second} are worn together but conflict")]
    ConflictingWorn { first: ItemId, second: ItemId },
}

impl WardrobeError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CursorOnPlaced { .. }
            | Self::CursorOnHidden { .. }
            | Self::MultipleOffered { .. } => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MultipleOffered { .. } => "INVARIANT_MULTIPLE_OFFERED",
            Self::CursorOnPlaced { .. } => "INVARIANT_CURSOR_ON_PLACED",
            Self::CursorOnHidden { .. } => "INVARIANT_CURSOR_ON_HIDDEN",
            Self::OfferedOffCursor { .. } => "INVARIANT_OFFERED_OFF_CURSOR",
            Self::MissingFromRod { .. } => "INVARIANT_MISSING_FROM_ROD",
            Self::OccupantNotPlaced { .. } => "INVARIANT_OCCUPANT_NOT_PLACED",
            Self::PlacedWithoutZone { .. } => "INVARIANT_PLACED_WITHOUT_ZONE",
            Self::IncompatibleOccupant { .. } => "INVARIANT_INCOMPATIBLE_OCCUPANT",
            Self::ConflictingWorn { .. } => "INVARIANT_CONFLICTING_WORN",
        }
    }
}
