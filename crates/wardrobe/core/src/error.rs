//! Common error infrastructure for wardrobe-core.
//!
//! Domain-specific errors (`PlacementError`, `CatalogError`, ...) are defined
//! next to the operations that produce them. This module holds the shared
//! classification used by logging and recovery code.
//!
//! Interaction handlers never surface these errors to the input source: every
//! failure is local and non-fatal, and the affected operation degrades to
//! returning the item to its rod. Direct API calls still return them so the
//! caller can observe what happened.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: user-input edge cases (drop outside a zone, wrong zone)
/// - **Validation**: invalid references or configuration
/// - **Internal**: invariant drift that was detected and corrected locally
/// - **Fatal**: the catalog cannot produce a usable wardrobe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the item goes home and stays interactive.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated, but the engine
    /// repairs them in place instead of failing.
    Internal,

    /// Fatal error - the wardrobe cannot be built.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all wardrobe-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for log filtering
pub trait WardrobeError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
