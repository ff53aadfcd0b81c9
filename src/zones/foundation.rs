//! Foundation (result) slots: one ascending run per suit.

use std::rc::Rc;

use crate::core::{Card, Observable, Suit, SubscriptionId, RANK_COUNT, SUIT_COUNT};
use crate::rules::GameRules;

/// A single suit's pile, Ace at the bottom.
pub struct FoundationSlot {
    suit: Suit,
    cards: Observable<Vec<Card>>,
    rules: Rc<dyn GameRules>,
}

impl std::fmt::Debug for FoundationSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoundationSlot")
            .field("suit", &self.suit)
            .field("cards", self.cards.get())
            .finish()
    }
}

impl FoundationSlot {
    #[must_use]
    pub fn new(suit: Suit, rules: Rc<dyn GameRules>) -> Self {
        Self {
            suit,
            cards: Observable::new(Vec::new()),
            rules,
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.get()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.get().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.get().is_empty()
    }

    /// All thirteen ranks are in place.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.get().len() == RANK_COUNT
    }

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.get().last()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.get().contains(card)
    }

    #[must_use]
    pub fn can_accept_card(&self, card: &Card) -> bool {
        self.rules.foundation_accepts(self, card)
    }

    pub fn add_card(&mut self, mut card: Card) {
        card.set_visible(true);
        self.cards.update(|cards| cards.push(card));
    }

    /// Remove `card` if present. Rules only ever authorize the top card.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.get().iter().position(|c| c == card)?;
        Some(self.cards.update(|cards| cards.remove(pos)))
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Card>) + 'static) -> SubscriptionId {
        self.cards.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cards.unsubscribe(id)
    }
}

/// The four foundation slots, in [`Suit::ALL`] order.
#[derive(Debug)]
pub struct Foundation {
    slots: Vec<FoundationSlot>,
}

impl Foundation {
    #[must_use]
    pub fn new(rules: Rc<dyn GameRules>) -> Self {
        let slots = Suit::ALL
            .into_iter()
            .map(|suit| FoundationSlot::new(suit, Rc::clone(&rules)))
            .collect();
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[FoundationSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, suit: Suit) -> &FoundationSlot {
        &self.slots[suit.index()]
    }

    pub fn slot_mut(&mut self, suit: Suit) -> &mut FoundationSlot {
        &mut self.slots[suit.index()]
    }

    /// The slot a card would be routed to.
    #[must_use]
    pub fn slot_by_card(&self, card: &Card) -> &FoundationSlot {
        self.slot(card.suit())
    }

    /// Index of the slot holding `card`, if it is on the foundation.
    #[must_use]
    pub fn slot_index(&self, card: &Card) -> Option<usize> {
        self.slots.iter().position(|slot| slot.contains(card))
    }

    #[must_use]
    pub fn top_card(&self, suit: Suit) -> Option<&Card> {
        self.slot(suit).top_card()
    }

    #[must_use]
    pub fn top_card_by_card(&self, card: &Card) -> Option<&Card> {
        self.slot_by_card(card).top_card()
    }

    #[must_use]
    pub fn is_slot_empty(&self, suit: Suit) -> bool {
        self.slot(suit).is_empty()
    }

    /// Number of slots with no cards yet.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().map(FoundationSlot::card_count).sum()
    }

    /// Every suit is complete.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == SUIT_COUNT && self.slots.iter().all(FoundationSlot::is_full)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.slot_by_card(card).contains(card)
    }

    /// Whether the card's suit slot accepts it.
    #[must_use]
    pub fn can_accept_card(&self, card: &Card) -> bool {
        self.slot_by_card(card).can_accept_card(card)
    }

    /// Route `card` to its suit slot without a legality check.
    pub fn add_card(&mut self, card: Card) {
        self.slot_mut(card.suit()).add_card(card);
    }

    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        self.slot_mut(card.suit()).remove_card(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Variant};
    use crate::rules::create_rules;

    fn foundation() -> Foundation {
        Foundation::new(create_rules(Variant::Klondike))
    }

    #[test]
    fn test_empty_slot_takes_own_ace_only() {
        let foundation = foundation();

        assert!(foundation.can_accept_card(&Card::new(Rank::Ace, Suit::Hearts)));
        assert!(!foundation.can_accept_card(&Card::new(Rank::Two, Suit::Hearts)));
        assert!(!foundation
            .slot(Suit::Hearts)
            .can_accept_card(&Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(foundation.available_slots(), 4);
    }

    #[test]
    fn test_ascending_same_suit() {
        let mut foundation = foundation();
        foundation.add_card(Card::new(Rank::Ace, Suit::Clubs));

        assert!(foundation.can_accept_card(&Card::new(Rank::Two, Suit::Clubs)));
        assert!(!foundation.can_accept_card(&Card::new(Rank::Three, Suit::Clubs)));
        assert_eq!(
            foundation.top_card_by_card(&Card::new(Rank::King, Suit::Clubs)),
            Some(&Card::new(Rank::Ace, Suit::Clubs))
        );
        assert_eq!(foundation.available_slots(), 3);
        assert_eq!(foundation.slot_index(&Card::new(Rank::Ace, Suit::Clubs)), Some(3));
    }

    #[test]
    fn test_full_after_all_suits() {
        let mut foundation = foundation();
        for card in Card::full_deck() {
            assert!(foundation.can_accept_card(&card));
            foundation.add_card(card);
        }

        assert!(foundation.is_full());
        assert!(foundation.slots().iter().all(FoundationSlot::is_full));
        assert_eq!(foundation.card_count(), 52);
        assert!(!foundation.can_accept_card(&Card::new(Rank::King, Suit::Spades)));
    }

    #[test]
    fn test_remove_top() {
        let mut foundation = foundation();
        foundation.add_card(Card::new(Rank::Ace, Suit::Diamonds));
        foundation.add_card(Card::new(Rank::Two, Suit::Diamonds));

        let two = Card::new(Rank::Two, Suit::Diamonds);
        assert_eq!(foundation.remove_card(&two), Some(two));
        assert!(!foundation.contains(&two));
        assert_eq!(foundation.slot(Suit::Diamonds).card_count(), 1);
    }
}
