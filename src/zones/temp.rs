//! Temporary holding cells.
//!
//! A `TempBucket` is a fixed row of `TempSlot`s, each holding at most one
//! card. Slots are unordered with respect to each other.

use std::rc::Rc;

use crate::core::{Card, Observable, SubscriptionId};
use crate::rules::GameRules;

/// A single-card cell.
#[derive(Debug, Default)]
pub struct TempSlot {
    card: Observable<Option<Card>>,
}

impl TempSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.card.get().as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.get().is_none()
    }

    /// Place a card. Fails if the slot is occupied.
    pub fn add_card(&mut self, card: Card) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.card.set(Some(card));
        true
    }

    pub fn remove_card(&mut self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        self.card.update(Option::take)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Option<Card>) + 'static) -> SubscriptionId {
        self.card.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.card.unsubscribe(id)
    }
}

/// The row of temp slots.
pub struct TempBucket {
    slots: Vec<TempSlot>,
    rules: Rc<dyn GameRules>,
}

impl std::fmt::Debug for TempBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempBucket").field("slots", &self.slots).finish()
    }
}

impl TempBucket {
    #[must_use]
    pub fn new(slot_count: usize, rules: Rc<dyn GameRules>) -> Self {
        Self {
            slots: (0..slot_count).map(|_| TempSlot::new()).collect(),
            rules,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[TempSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&TempSlot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut TempSlot> {
        self.slots.get_mut(index)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of empty slots.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(TempSlot::is_empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available_slots() == 0
    }

    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(TempSlot::is_empty)
    }

    /// Index of the slot holding `card`.
    #[must_use]
    pub fn slot_of(&self, card: &Card) -> Option<usize> {
        self.slots.iter().position(|slot| slot.card() == Some(card))
    }

    /// Occupied cards, in slot order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().filter_map(|slot| slot.card().copied()).collect()
    }

    #[must_use]
    pub fn can_accept_card(&self, card: &Card) -> bool {
        self.rules.temp_bucket_accepts(self, card)
    }

    /// Whether the rule set lets `card` into slot `index`.
    #[must_use]
    pub fn can_accept_card_in_slot(&self, index: usize, card: &Card) -> bool {
        self.slot(index)
            .is_some_and(|slot| self.rules.temp_slot_accepts(slot, card))
    }

    /// Place `card` in the first empty slot. Returns the slot used.
    pub fn add_card(&mut self, card: Card) -> Option<usize> {
        let index = self.first_empty_slot()?;
        self.slots[index].add_card(card);
        Some(index)
    }

    pub fn add_card_to_slot(&mut self, card: Card, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .is_some_and(|slot| slot.add_card(card))
    }

    pub fn remove_card_from_slot(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index)?.remove_card()
    }

    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.slot_of(card)?;
        self.remove_card_from_slot(index)
    }
}
