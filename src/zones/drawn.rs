//! Waste pile for cards drawn from the deck.

use crate::core::{Card, Observable, SubscriptionId};
use crate::zones::Deck;

/// Face-up cards drawn one at a time; only the top is playable.
#[derive(Debug, Default)]
pub struct DrawnCardsArea {
    cards: Observable<Vec<Card>>,
}

impl DrawnCardsArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in draw order; the last one is on top.
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

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.get().last()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.get().contains(card)
    }

    /// Nothing is ever moved onto the waste pile.
    #[must_use]
    pub fn can_accept_card(&self, _card: &Card) -> bool {
        false
    }

    /// Lay a drawn card face up on top.
    pub fn add_card(&mut self, mut card: Card) {
        card.set_visible(true);
        self.cards.update(|cards| cards.push(card));
    }

    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.get().iter().position(|c| c == card)?;
        Some(self.cards.update(|cards| cards.remove(pos)))
    }

    pub fn clear(&mut self) {
        self.cards.set(Vec::new());
    }

    /// Move every card back to `deck`, newest first, so drawing again
    /// replays the same sequence. Returns how many cards moved.
    pub fn return_all_cards_to_deck(&mut self, deck: &mut Deck) -> usize {
        let cards = self.cards.update(std::mem::take);
        let count = cards.len();
        for card in cards.into_iter().rev() {
            deck.add_card(card);
        }
        count
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Card>) + 'static) -> SubscriptionId {
        self.cards.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cards.unsubscribe(id)
    }
}
