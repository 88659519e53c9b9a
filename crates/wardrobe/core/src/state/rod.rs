//! Rods: the ordered candidate list for one body slot.
use crate::state::{Category, ItemId, Presence, RodId, item::ItemStore};

/// Cycle manager for one body slot.
///
/// Members keep their insertion order, which is the cycling order. Placed
/// members stay in the list and are skipped, so an item returning from a
/// zone resumes its original position in the cycle.
///
/// Invariant: `members[cursor]`, when the cursor is set, is never placed.
#[derive(Clone, Debug)]
pub struct Rod {
    id: RodId,
    name: String,
    members: Vec<ItemId>,
    cursor: Option<usize>,
}

impl Rod {
    pub(crate) fn new(id: RodId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
            cursor: None,
        }
    }

    pub fn id(&self) -> RodId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[ItemId] {
        &self.members
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member under the cursor.
    pub fn offered(&self) -> Option<ItemId> {
        self.cursor.and_then(|index| self.members.get(index).copied())
    }

    /// Adds `item` at the end of the cycle unless it is already a member.
    pub(crate) fn admit(&mut self, item: ItemId) -> bool {
        if self.members.contains(&item) {
            return false;
        }
        self.members.push(item);
        true
    }

    /// Moves the offering to the next member that can be offered.
    ///
    /// The current offered item goes dormant unless it has meanwhile been
    /// placed or picked up. The scan walks forward circularly for at most
    /// `members.len()` steps; placed and dragged members are skipped. When no
    /// member qualifies the rod offers nothing, which is not an error.
    pub(crate) fn advance(&mut self, items: &mut ItemStore) -> Option<ItemId> {
        if self.members.is_empty() {
            return None;
        }

        if let Some(current) = self.offered() {
            if items.get(current).map(|item| item.presence()) == Some(Presence::Offered) {
                items.set_presence(current, Presence::Dormant);
            }
        }

        let len = self.members.len();
        let start = self.cursor.map_or(0, |index| (index + 1) % len);
        let next = (0..len)
            .map(|step| (start + step) % len)
            .find(|&index| Self::can_offer(items, self.members[index]));

        match next {
            Some(index) => {
                let item = self.members[index];
                self.promote(index, items);
                tracing::debug!("rod '{}' now offers {}", self.name, item);
                Some(item)
            }
            None => {
                if self.cursor.take().is_some() {
                    tracing::debug!("rod '{}' has nothing left to offer", self.name);
                }
                None
            }
        }
    }

    /// Re-registers an item coming back from a zone and offers it at once.
    ///
    /// The cursor is reset before the promotion, so the next
    /// [`advance`](Self::advance) scans forward from the returned item.
    pub(crate) fn register_return(&mut self, item: ItemId, items: &mut ItemStore) -> Option<ItemId> {
        if self.admit(item) {
            tracing::debug!("{} re-added to rod '{}'", item, self.name);
        }
        self.cursor = None;

        let previous: Vec<ItemId> = self
            .members
            .iter()
            .copied()
            .filter(|&member| {
                member != item
                    && items.get(member).map(|m| m.presence()) == Some(Presence::Offered)
            })
            .collect();
        for member in previous {
            items.set_presence(member, Presence::Dormant);
        }

        let index = self.members.iter().position(|&member| member == item)?;
        if !Self::can_offer(items, item) {
            tracing::warn!(
                "{} returned to rod '{}' while still placed or dragged; rescanning",
                item,
                self.name
            );
            return self.advance(items);
        }
        self.promote(index, items);

        if let Some(category) = items.get(item).map(|it| it.category()) {
            self.resolve_conflicts(category, items);
        }
        tracing::debug!("rod '{}' offers returned {}", self.name, item);
        Some(item)
    }

    /// Forces every unplaced member of a different category out of the
    /// offered state, leaving a single visible category on a shared rod.
    ///
    /// When the member under the cursor is hidden, the cursor moves on to the
    /// next member of `category` that can be offered. Without one the rod
    /// falls back to a plain [`advance`](Self::advance) so it never ends up
    /// offering nothing while unplaced members remain.
    pub(crate) fn resolve_conflicts(&mut self, category: Category, items: &mut ItemStore) -> usize {
        let conflicting: Vec<ItemId> = self
            .members
            .iter()
            .copied()
            .filter(|&member| {
                items.get(member).is_some_and(|m| {
                    m.category() != category && m.presence() == Presence::Offered
                })
            })
            .collect();
        for &member in &conflicting {
            items.set_presence(member, Presence::Dormant);
        }

        if let Some(current) = self.offered() {
            if conflicting.contains(&current) {
                self.offer_next_of(category, items);
            }
        }
        conflicting.len()
    }

    /// Scans forward from the cursor for a member of `category`.
    fn offer_next_of(&mut self, category: Category, items: &mut ItemStore) -> Option<ItemId> {
        let len = self.members.len();
        let start = self.cursor.map_or(0, |index| (index + 1) % len);
        let next = (0..len).map(|step| (start + step) % len).find(|&index| {
            let member = self.members[index];
            Self::can_offer(items, member)
                && items.get(member).is_some_and(|m| m.category() == category)
        });
        match next {
            Some(index) => {
                self.promote(index, items);
                tracing::debug!("rod '{}' switched to {} after a conflict", self.name, self.members[index]);
                Some(self.members[index])
            }
            None => {
                tracing::debug!("rod '{}' has no {} to offer; cycling on", self.name, category);
                self.advance(items)
            }
        }
    }

    /// Local correction for a cursor that drifted onto a placed or hidden
    /// member.
    ///
    /// Returns true when a repair happened.
    pub(crate) fn repair(&mut self, items: &mut ItemStore) -> bool {
        let drifted = match self.cursor {
            Some(index) => self
                .members
                .get(index)
                .is_none_or(|&member| items.is_placed(member) || Self::is_hidden(items, member)),
            None => false,
        };
        if drifted {
            tracing::warn!("rod '{}' cursor pointed at a placed or hidden item; rescanning", self.name);
            self.cursor = None;
            self.advance(items);
        }
        drifted
    }

    /// True when `item` sits under a cursor but can no longer be seen or used.
    fn is_hidden(items: &ItemStore, item: ItemId) -> bool {
        items
            .get(item)
            .is_some_and(|it| it.presence() == Presence::Dormant)
    }

    /// True when the rod lost its offering (placed away or nothing offered).
    pub(crate) fn needs_refresh(&self, items: &ItemStore) -> bool {
        match self.offered() {
            Some(item) => items.is_placed(item) || Self::is_hidden(items, item),
            None => true,
        }
    }

    fn can_offer(items: &ItemStore, item: ItemId) -> bool {
        items
            .get(item)
            .is_some_and(|it| !it.is_placed() && !it.is_dragging())
    }

    fn promote(&mut self, index: usize, items: &mut ItemStore) {
        let item = self.members[index];
        self.cursor = Some(index);
        items.set_presence(item, Presence::Offered);
        items.refresh_home(item);
        items.set_hit_testable(item, true);
    }

    #[cfg(test)]
    pub(crate) fn force_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
    }
}
