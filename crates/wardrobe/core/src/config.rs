//! Engine configuration and tunable parameters.
use crate::error::{ErrorSeverity, WardrobeError};

/// What a slow click (released after the tap window without ever becoming a
/// drag) does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlowClickPolicy {
    /// Dead zone: nothing happens.
    #[default]
    Ignore,
    /// Treated like a tap and cycles the rod.
    Cycle,
    /// The item is snapped back to its home transform.
    SnapBack,
}

/// Time and distance thresholds used by the gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureThresholds {
    /// Releases strictly shorter than this are taps.
    pub short_tap_ms: u64,
    /// Holding this long turns a press into a drag.
    pub long_press_ms: u64,
    /// Moving this far (world units) turns a press into a drag.
    pub drag_distance: f32,
}

impl GestureThresholds {
    pub const DEFAULT_SHORT_TAP_MS: u64 = 250;
    pub const DEFAULT_LONG_PRESS_MS: u64 = 400;
    pub const DEFAULT_DRAG_DISTANCE: f32 = 0.05;
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            short_tap_ms: Self::DEFAULT_SHORT_TAP_MS,
            long_press_ms: Self::DEFAULT_LONG_PRESS_MS,
            drag_distance: Self::DEFAULT_DRAG_DISTANCE,
        }
    }
}

/// Wardrobe configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WardrobeConfig {
    pub gesture: GestureThresholds,
    pub slow_click: SlowClickPolicy,
    /// Frames between snapping into a zone and disabling hit-testing on the
    /// placed item.
    pub settle_delay_ticks: u64,
}

impl WardrobeConfig {
    // ===== compile-time limits =====
    /// Maximum number of drop zones. Bounds the evictions a single placement
    /// can cause.
    pub const MAX_ZONES: usize = 16;
    pub const MAX_RODS: usize = 32;
    pub const MAX_ITEMS: usize = 1024;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SETTLE_DELAY_TICKS: u64 = 1;

    pub fn new() -> Self {
        Self {
            gesture: GestureThresholds::default(),
            slow_click: SlowClickPolicy::default(),
            settle_delay_ticks: Self::DEFAULT_SETTLE_DELAY_TICKS,
        }
    }

    #[must_use]
    pub fn with_slow_click(mut self, policy: SlowClickPolicy) -> Self {
        self.slow_click = policy;
        self
    }

    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureThresholds) -> Self {
        self.gesture = gesture;
        self
    }

    /// Checks that thresholds describe a usable recognizer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distance = self.gesture.drag_distance;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ConfigError::InvalidDragDistance(distance));
        }
        if self.gesture.short_tap_ms == 0 {
            return Err(ConfigError::ZeroTapWindow);
        }
        if self.settle_delay_ticks == 0 {
            return Err(ConfigError::ZeroSettleDelay);
        }
        if self.gesture.long_press_ms <= self.gesture.short_tap_ms {
            tracing::debug!(
                "long press ({}ms) fires before the tap window closes ({}ms); slow clicks are unreachable",
                self.gesture.long_press_ms,
                self.gesture.short_tap_ms
            );
        }
        Ok(())
    }
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("drag distance must be a positive finite number (got {0})")]
    InvalidDragDistance(f32),

    #[error("short tap window must be longer than 0ms")]
    ZeroTapWindow,

    #[error("settle delay must be at least one tick")]
    ZeroSettleDelay,
}

impl WardrobeError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDragDistance(_) => "CONFIG_INVALID_DRAG_DISTANCE",
            Self::ZeroTapWindow => "CONFIG_ZERO_TAP_WINDOW",
            Self::ZeroSettleDelay => "CONFIG_ZERO_SETTLE_DELAY",
        }
    }
}
