//! Addressing containers.
//!
//! - `SlotId`: owned, serializable address of a container in a game
//! - `SlotRef`: borrowed view of the container an address resolves to
//! - `Slots`: every container of a game at once, for rule queries

use serde::{Deserialize, Serialize};

use crate::core::{Card, Suit};
use crate::zones::{Column, Deck, DrawnCardsArea, Foundation, FoundationSlot, TempBucket, TempSlot};

/// Address of a card container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    /// Tableau column by index.
    Column(usize),
    /// Foundation slot for a suit.
    Foundation(Suit),
    /// One temp cell by index.
    TempSlot(usize),
    /// The temp row as a whole; a card goes to the first empty cell.
    TempBucket,
    Deck,
    DrawnCards,
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotId::Column(i) => write!(f, "column {i}"),
            SlotId::Foundation(suit) => write!(f, "foundation {}", suit.glyph()),
            SlotId::TempSlot(i) => write!(f, "temp slot {i}"),
            SlotId::TempBucket => f.write_str("temp bucket"),
            SlotId::Deck => f.write_str("deck"),
            SlotId::DrawnCards => f.write_str("drawn cards"),
        }
    }
}

/// A resolved container.
#[derive(Clone, Copy, Debug)]
pub enum SlotRef<'a> {
    Column(&'a Column),
    Foundation(&'a FoundationSlot),
    TempSlot(&'a TempSlot),
    TempBucket(&'a TempBucket),
    Deck(&'a Deck),
    DrawnCards(&'a DrawnCardsArea),
}

impl SlotRef<'_> {
    /// Container-level acceptance, before any variant-wide rule such as
    /// returning to the deck.
    #[must_use]
    pub fn can_accept_card(&self, card: &Card) -> bool {
        match self {
            SlotRef::Column(column) => column.can_accept_card(card),
            SlotRef::Foundation(slot) => slot.can_accept_card(card),
            SlotRef::TempSlot(slot) => slot.is_empty(),
            SlotRef::TempBucket(bucket) => bucket.can_accept_card(card),
            SlotRef::Deck(deck) => deck.can_accept_card(card),
            SlotRef::DrawnCards(area) => area.can_accept_card(card),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            SlotRef::Column(column) => column.is_empty(),
            SlotRef::Foundation(slot) => slot.is_empty(),
            SlotRef::TempSlot(slot) => slot.is_empty(),
            SlotRef::TempBucket(bucket) => bucket.is_empty(),
            SlotRef::Deck(deck) => deck.is_empty(),
            SlotRef::DrawnCards(area) => area.is_empty(),
        }
    }
}

/// Borrowed view of every container in a game.
#[derive(Clone, Copy, Debug)]
pub struct Slots<'a> {
    pub columns: &'a [Column],
    pub temp: &'a TempBucket,
    pub foundation: &'a Foundation,
    pub deck: &'a Deck,
    pub drawn: Option<&'a DrawnCardsArea>,
}

impl<'a> Slots<'a> {
    /// Resolve an address. `None` if the game has no such container.
    #[must_use]
    pub fn resolve(&self, id: SlotId) -> Option<SlotRef<'a>> {
        match id {
            SlotId::Column(i) => self.columns.get(i).map(SlotRef::Column),
            SlotId::Foundation(suit) => Some(SlotRef::Foundation(self.foundation.slot(suit))),
            SlotId::TempSlot(i) => self.temp.slot(i).map(SlotRef::TempSlot),
            SlotId::TempBucket => Some(SlotRef::TempBucket(self.temp)),
            SlotId::Deck => Some(SlotRef::Deck(self.deck)),
            SlotId::DrawnCards => self.drawn.map(SlotRef::DrawnCards),
        }
    }

    /// Find the container holding `card`.
    ///
    /// Columns first, then temp slots, foundation, the drawn pile and
    /// finally the deck.
    #[must_use]
    pub fn locate(&self, card: &Card) -> Option<SlotId> {
        if let Some(column) = self.columns.iter().find(|c| c.contains(card)) {
            return Some(SlotId::Column(column.index()));
        }
        if let Some(i) = self.temp.slot_of(card) {
            return Some(SlotId::TempSlot(i));
        }
        if self.foundation.contains(card) {
            return Some(SlotId::Foundation(card.suit()));
        }
        if self.drawn.is_some_and(|area| area.contains(card)) {
            return Some(SlotId::DrawnCards);
        }
        if self.deck.contains(card) {
            return Some(SlotId::Deck);
        }
        None
    }

    /// The stored copy of `card`, carrying its current visibility.
    #[must_use]
    pub fn find_card(&self, card: &Card) -> Option<Card> {
        let found = match self.locate(card)? {
            SlotId::Column(i) => self.columns[i].cards().iter().find(|c| *c == card),
            SlotId::Foundation(suit) => self.foundation.slot(suit).cards().iter().find(|c| *c == card),
            SlotId::TempSlot(i) => self.temp.slot(i).and_then(TempSlot::card),
            SlotId::DrawnCards => self.drawn.and_then(|area| area.cards().iter().find(|c| *c == card)),
            SlotId::Deck => self.deck.cards().iter().find(|c| *c == card),
            SlotId::TempBucket => None,
        };
        found.copied()
    }

    /// Every addressable target, in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<SlotId> {
        let mut ids: Vec<SlotId> = (0..self.columns.len()).map(SlotId::Column).collect();
        ids.extend(Suit::ALL.into_iter().map(SlotId::Foundation));
        ids.extend((0..self.temp.slot_count()).map(SlotId::TempSlot));
        ids.push(SlotId::TempBucket);
        ids.push(SlotId::Deck);
        if self.drawn.is_some() {
            ids.push(SlotId::DrawnCards);
        }
        ids
    }

    /// Total cards across all containers.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::card_count).sum::<usize>()
            + self.temp.cards().len()
            + self.foundation.card_count()
            + self.deck.card_count()
            + self.drawn.map_or(0, DrawnCardsArea::card_count)
    }
}
