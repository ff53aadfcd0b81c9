//! Klondike rules.
//!
//! Seven columns dealt as a 1..7 triangle with only the last card of each
//! face up. Empty columns take Kings only. The remaining 24 cards form the
//! stock, drawn one at a time onto a waste pile and recycled when empty.

use log::debug;

use crate::core::{Card, Rank, Variant};
use crate::rules::{DealStrategy, GameRules};
use crate::zones::{Column, Deck, TempBucket, TempSlot};

/// Column `i` receives `i + 1` cards; the last one is face up.
#[derive(Clone, Copy, Debug, Default)]
pub struct KlondikeDealStrategy;

impl DealStrategy for KlondikeDealStrategy {
    fn deal(&self, deck: &mut Deck, columns: &mut [Column]) {
        let mut dealt = 0;
        for (i, column) in columns.iter_mut().enumerate() {
            for j in 0..=i {
                let Some(mut card) = deck.draw_card() else {
                    debug!("klondike deal ran out of cards at column {i}");
                    return;
                };
                card.set_visible(j == i);
                column.add_card(card);
                dealt += 1;
            }
        }
        debug!("klondike deal: {dealt} cards, {} left in stock", deck.card_count());
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct KlondikeRules {
    deal: KlondikeDealStrategy,
}

impl KlondikeRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRules for KlondikeRules {
    fn variant(&self) -> Variant {
        Variant::Klondike
    }

    fn has_drawn_cards_area(&self) -> bool {
        true
    }

    fn deal_strategy(&self) -> &dyn DealStrategy {
        &self.deal
    }

    fn column_accepts(&self, column: &Column, card: &Card) -> bool {
        match column.top_card() {
            None => card.rank() == Rank::King,
            Some(top) => card.stacks_on(top),
        }
    }

    /// A King, and only while the whole row is empty.
    fn temp_bucket_accepts(&self, bucket: &TempBucket, card: &Card) -> bool {
        bucket.is_empty() && card.rank() == Rank::King
    }

    fn temp_slot_accepts(&self, slot: &TempSlot, card: &Card) -> bool {
        slot.is_empty() && card.rank() == Rank::King
    }

    fn can_return_card_to_deck(&self) -> bool {
        false
    }

    /// Only the face-up top card of a column can be taken alone.
    fn can_interact_with_card(&self, column: &Column, card: &Card) -> bool {
        column
            .top_card()
            .is_some_and(|top| top == card && top.is_visible())
    }
}
