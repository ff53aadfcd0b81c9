//! Rule set and deal strategy traits.
//!
//! A rule set is a stateless bundle of predicates shared by every container
//! of a game (through an `Rc<dyn GameRules>`) and by the controller. The
//! variant-specific parts are the column, temp and deck predicates, the
//! interaction gates and the deal; everything else has a default.
//!
//! ## Implementation Notes
//!
//! - Predicates never mutate; the controller commits only after they pass
//! - `can_move_card` dispatches on the kind of the resolved target
//! - Foundation and temp targets take single cards only

use log::trace;

use crate::core::{Card, Rank, Variant};
use crate::zones::{
    is_movable_sequence, Column, Deck, Foundation, FoundationSlot, SlotId, SlotRef, Slots,
    TempBucket, TempSlot,
};

/// Initial distribution of the shuffled deck into the columns.
pub trait DealStrategy {
    /// Move cards from `deck` into `columns`, setting their visibility.
    fn deal(&self, deck: &mut Deck, columns: &mut [Column]);
}

/// Variant rule set.
pub trait GameRules {
    /// Which variant these rules implement.
    fn variant(&self) -> Variant;

    /// Default number of tableau columns.
    fn column_count(&self) -> usize {
        self.variant().default_column_count()
    }

    /// Whether the variant has a waste pile for drawn cards.
    fn has_drawn_cards_area(&self) -> bool;

    /// The deal used at game start.
    fn deal_strategy(&self) -> &dyn DealStrategy;

    /// Can `card` go on top of `column`.
    fn column_accepts(&self, column: &Column, card: &Card) -> bool;

    /// Can the temp row take `card`.
    fn temp_bucket_accepts(&self, bucket: &TempBucket, card: &Card) -> bool;

    /// Can a specific temp cell take `card`.
    fn temp_slot_accepts(&self, slot: &TempSlot, _card: &Card) -> bool {
        slot.is_empty()
    }

    /// Ace of the slot's suit on an empty slot, otherwise the next rank
    /// of the same suit.
    fn foundation_accepts(&self, slot: &FoundationSlot, card: &Card) -> bool {
        match slot.top_card() {
            None => card.rank() == Rank::Ace && card.suit() == slot.suit(),
            Some(top) => card.follows_on_foundation(top),
        }
    }

    /// Whether a card may be put back into the deck.
    fn can_return_card_to_deck(&self) -> bool;

    fn can_draw_from_deck(&self, deck: &Deck) -> bool {
        !deck.is_empty()
    }

    /// Won when every foundation slot holds a full suit.
    fn is_game_completed(&self, foundation: &Foundation) -> bool {
        foundation.is_full()
    }

    /// Can `card`, sitting in `column`, be selected on its own.
    fn can_interact_with_card(&self, column: &Column, card: &Card) -> bool;

    /// Can `card`, sitting in `column`, be picked up together with the
    /// cards above it.
    fn can_interact_with_stack(&self, column: &Column, card: &Card) -> bool {
        card.is_visible()
            && column
                .index_of(card)
                .is_some_and(|index| column.can_move_stack(index))
    }

    /// Legality of moving a single card onto a resolved target.
    fn can_move_card(&self, target: SlotRef<'_>, card: &Card) -> bool {
        let allowed = match target {
            SlotRef::Column(column) => self.column_accepts(column, card),
            SlotRef::Foundation(slot) => self.foundation_accepts(slot, card),
            SlotRef::TempBucket(bucket) => self.temp_bucket_accepts(bucket, card),
            SlotRef::TempSlot(slot) => self.temp_slot_accepts(slot, card),
            SlotRef::Deck(deck) => self.can_return_card_to_deck() && deck.can_accept_card(card),
            SlotRef::DrawnCards(_) => false,
        };
        trace!("can_move_card {card} -> {target:?}: {allowed}");
        allowed
    }

    /// Legality of moving a run of cards onto a resolved target.
    ///
    /// The run must be movable. Columns check the first card; foundation
    /// and temp targets only take a run of one.
    fn can_move_card_group(&self, cards: &[Card], target: SlotRef<'_>) -> bool {
        let Some(first) = cards.first() else {
            return false;
        };
        if !is_movable_sequence(cards) {
            return false;
        }
        match target {
            SlotRef::Column(column) => self.column_accepts(column, first),
            SlotRef::Foundation(slot) => cards.len() == 1 && self.foundation_accepts(slot, first),
            SlotRef::TempBucket(bucket) => {
                cards.len() == 1 && self.temp_bucket_accepts(bucket, first)
            }
            SlotRef::TempSlot(slot) => cards.len() == 1 && self.temp_slot_accepts(slot, first),
            SlotRef::Deck(_) | SlotRef::DrawnCards(_) => false,
        }
    }

    /// Whether `card` at `source` may be selected or dragged.
    fn can_interact(&self, slots: &Slots<'_>, source: SlotId, card: &Card) -> bool {
        match source {
            SlotId::Column(i) => slots.columns.get(i).is_some_and(|column| {
                self.can_interact_with_card(column, card)
                    || self.can_interact_with_stack(column, card)
            }),
            SlotId::TempSlot(_) => true,
            SlotId::Foundation(suit) => slots.foundation.top_card(suit) == Some(card),
            SlotId::DrawnCards => slots.drawn.and_then(|area| area.top_card()) == Some(card),
            SlotId::Deck | SlotId::TempBucket => false,
        }
    }

    /// Every target `card` could legally move to right now.
    ///
    /// Columns, then foundation slots, then the temp row, then the deck
    /// when the variant allows returning to it.
    fn available_moves(&self, card: &Card, slots: &Slots<'_>) -> Vec<SlotId> {
        let mut moves: Vec<SlotId> = slots
            .columns
            .iter()
            .filter(|column| self.column_accepts(column, card))
            .map(|column| SlotId::Column(column.index()))
            .collect();

        moves.extend(
            slots
                .foundation
                .slots()
                .iter()
                .filter(|slot| self.foundation_accepts(slot, card))
                .map(|slot| SlotId::Foundation(slot.suit())),
        );

        if self.temp_bucket_accepts(slots.temp, card) {
            moves.push(SlotId::TempBucket);
        }

        if self.can_return_card_to_deck() {
            moves.push(SlotId::Deck);
        }

        moves
    }
}

impl std::fmt::Debug for dyn GameRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRules")
            .field("variant", &self.variant())
            .finish()
    }
}
