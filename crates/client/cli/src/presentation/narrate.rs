//! Human-readable lines for the message log.
use wardrobe_core::{
    DragOrigin, EvictionCause, Interaction, ItemId, RejectReason, RodId, SlowClickPolicy,
    Wardrobe, WardrobeError, ZoneId,
};

/// Describes an interaction using catalog names.
pub fn interaction(wardrobe: &Wardrobe, interaction: &Interaction) -> String {
    let item = |id: ItemId| item_name(wardrobe, id);
    let zone = |id: ZoneId| zone_name(wardrobe, id);

    match interaction {
        Interaction::Cycled { rod, offered } => match offered {
            Some(next) => format!("{}: now showing {}", rod_name(wardrobe, *rod), item(*next)),
            None => format!("{}: nothing left to show", rod_name(wardrobe, *rod)),
        },
        Interaction::DragStarted { item: id, origin } => match origin {
            DragOrigin::Rod => format!("picked up {}", item(*id)),
            DragOrigin::Zone(from) => format!("took {} off the {}", item(*id), zone(*from)),
        },
        Interaction::Placed(placement) => {
            let mut line = format!("{} worn on the {}", item(placement.item), zone(placement.zone));
            for eviction in &placement.evicted {
                let why = match eviction.cause {
                    EvictionCause::Swap => "swapped out",
                    EvictionCause::Conflict => "removed (conflict)",
                    EvictionCause::Cleared => "removed",
                };
                line.push_str(&format!("; {} {}", item(eviction.item), why));
            }
            line
        }
        Interaction::Returned { item: id } => format!("{} went back to its rod", item(*id)),
        Interaction::Rejected {
            item: id,
            zone: target,
            reason,
        } => {
            let why = match reason {
                RejectReason::Incompatible => "does not fit there",
                RejectReason::ZoneAcceptsNothing => "that spot takes nothing",
                RejectReason::UnknownZone => "no such spot",
            };
            format!("{} rejected by the {}: {}", item(*id), zone(*target), why)
        }
        Interaction::SlowClick { item: id, policy } => match policy {
            SlowClickPolicy::Ignore => format!("{} held too long to cycle", item(*id)),
            SlowClickPolicy::Cycle => format!("{} slow click cycled", item(*id)),
            SlowClickPolicy::SnapBack => format!("{} snapped back", item(*id)),
        },
    }
}

/// Tags an engine error with its stable code and severity, e.g.
/// `clear failed [PLACEMENT_UNKNOWN_ZONE, internal]: unknown zone zone#9`.
pub fn engine_error(action: &str, error: &impl WardrobeError) -> String {
    format!(
        "{} failed [{}, {}]: {}",
        action,
        error.error_code(),
        error.severity().as_str(),
        error
    )
}

/// Logs an engine error at a level matching its severity.
pub fn log_engine_error(action: &str, error: &impl WardrobeError) {
    let line = engine_error(action, error);
    if error.severity().is_internal() {
        tracing::error!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }
}

pub fn item_name(wardrobe: &Wardrobe, id: ItemId) -> String {
    wardrobe
        .item(id)
        .map_or_else(|| id.to_string(), |item| item.name().to_owned())
}

pub fn zone_name(wardrobe: &Wardrobe, id: ZoneId) -> String {
    wardrobe
        .zone(id)
        .map_or_else(|| id.to_string(), |zone| zone.name().to_owned())
}

pub fn rod_name(wardrobe: &Wardrobe, id: RodId) -> String {
    wardrobe
        .rod(id)
        .map_or_else(|| id.to_string(), |rod| rod.name().to_owned())
}
