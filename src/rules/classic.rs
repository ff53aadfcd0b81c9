//! Classic rules.
//!
//! Eight columns dealt entirely face up, any card onto an empty column,
//! a free temp row and a deck that cards may be returned to.

use log::debug;

use crate::core::{Card, Variant};
use crate::rules::{DealStrategy, GameRules};
use crate::zones::{Column, Deck, TempBucket};

/// Round-robin deal of the whole deck, every card face up.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicDealStrategy;

impl DealStrategy for ClassicDealStrategy {
    fn deal(&self, deck: &mut Deck, columns: &mut [Column]) {
        if columns.is_empty() {
            return;
        }
        let mut dealt = 0;
        while let Some(mut card) = deck.draw_card() {
            card.set_visible(true);
            columns[dealt % columns.len()].add_card(card);
            dealt += 1;
        }
        debug!("classic deal: {dealt} cards over {} columns", columns.len());
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicRules {
    deal: ClassicDealStrategy,
}

impl ClassicRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRules for ClassicRules {
    fn variant(&self) -> Variant {
        Variant::Classic
    }

    fn has_drawn_cards_area(&self) -> bool {
        false
    }

    fn deal_strategy(&self) -> &dyn DealStrategy {
        &self.deal
    }

    fn column_accepts(&self, column: &Column, card: &Card) -> bool {
        match column.top_card() {
            None => true,
            Some(top) => card.stacks_on(top),
        }
    }

    fn temp_bucket_accepts(&self, bucket: &TempBucket, _card: &Card) -> bool {
        bucket.available_slots() > 0
    }

    fn can_return_card_to_deck(&self) -> bool {
        true
    }

    /// Any face-up card heading a movable run.
    fn can_interact_with_card(&self, column: &Column, card: &Card) -> bool {
        self.can_interact_with_stack(column, card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit, DECK_SIZE};
    use crate::rules::create_rules;

    #[test]
    fn test_deal_round_robin() {
        let rules = create_rules(Variant::Classic);
        let mut deck = Deck::new();
        let mut columns: Vec<_> = (0..8).map(|i| Column::new(i, rules.clone())).collect();

        rules.deal_strategy().deal(&mut deck, &mut columns);

        assert!(deck.is_empty());
        let total: usize = columns.iter().map(Column::card_count).sum();
        assert_eq!(total, DECK_SIZE);
        for column in &columns[..4] {
            assert_eq!(column.card_count(), 7);
        }
        for column in &columns[4..] {
            assert_eq!(column.card_count(), 6);
        }
        assert!(columns
            .iter()
            .flat_map(|c| c.cards())
            .all(Card::is_visible));
    }

    #[test]
    fn test_deal_order() {
        let rules = create_rules(Variant::Classic);
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        let mut columns: Vec<_> = (0..2).map(|i| Column::new(i, rules.clone())).collect();

        rules.deal_strategy().deal(&mut deck, &mut columns);

        // Drawn from the top: 3 to column 0, 2 to column 1, Ace to column 0
        assert_eq!(
            columns[0].cards(),
            &[Card::new(Rank::Three, Suit::Hearts), Card::new(Rank::Ace, Suit::Hearts)]
        );
        assert_eq!(columns[1].cards(), &[Card::new(Rank::Two, Suit::Hearts)]);
    }

    #[test]
    fn test_empty_column_takes_anything() {
        let rules = ClassicRules::new();
        let column = Column::new(0, create_rules(Variant::Classic));

        assert!(rules.column_accepts(&column, &Card::new(Rank::Three, Suit::Clubs)));
        assert!(rules.column_accepts(&column, &Card::new(Rank::King, Suit::Hearts)));
    }

    #[test]
    fn test_interaction_requires_movable_run() {
        let rules = ClassicRules::new();
        let mut column = Column::new(0, create_rules(Variant::Classic));
        let buried = Card::new(Rank::Two, Suit::Clubs);
        let head = Card::new(Rank::Nine, Suit::Hearts);
        let top = Card::new(Rank::Eight, Suit::Spades);
        column.add_stack(&[buried, head, top]);

        assert!(!rules.can_interact_with_card(&column, &buried));
        assert!(rules.can_interact_with_card(&column, &head));
        assert!(rules.can_interact_with_card(&column, &top));
        assert!(rules.can_interact_with_stack(&column, &head));
    }

    #[test]
    fn test_rules_metadata() {
        let rules = ClassicRules::new();
        assert_eq!(rules.variant(), Variant::Classic);
        assert_eq!(rules.column_count(), 8);
        assert!(!rules.has_drawn_cards_area());
        assert!(rules.can_return_card_to_deck());
    }
}
