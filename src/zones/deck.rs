//! The deck (stock): cards not yet dealt or drawn.
//!
//! Cards rest face down; the top of the deck is the end of the vec.
//! Drawing and adding are the only ways cards enter or leave, so the deck
//! never fabricates or destroys a card.

use crate::core::{Card, GameRng, Observable, SubscriptionId};

/// Remaining undealt or returned cards.
#[derive(Debug)]
pub struct Deck {
    cards: Observable<Vec<Card>>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full 52-card deck, face down, in suit-major order (unshuffled).
    #[must_use]
    pub fn new() -> Self {
        Self::from_cards(Card::full_deck().collect())
    }

    /// A deck holding exactly `cards` (bottom first), all turned face down.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        for card in &mut cards {
            card.set_visible(false);
        }
        Self {
            cards: Observable::new(cards),
        }
    }

    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_cards(Vec::new())
    }

    /// Cards bottom to top.
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

    /// The card the next draw would return.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.get().last()
    }

    /// True if `card` is somewhere in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.get().contains(card)
    }

    /// The deck itself takes any card; rule sets decide whether a
    /// return is legal.
    #[must_use]
    pub fn can_accept_card(&self, _card: &Card) -> bool {
        true
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards.update(|cards| rng.shuffle(cards));
    }

    /// Remove and return the top card. `None` when empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        self.cards.update(Vec::pop)
    }

    /// Put a card on top, face down.
    pub fn add_card(&mut self, mut card: Card) {
        card.set_visible(false);
        self.cards.update(|cards| cards.push(card));
    }

    /// Remove a specific card wherever it is.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.get().iter().position(|c| c == card) {
            Some(pos) => {
                self.cards.update(|cards| cards.remove(pos));
                true
            }
            None => false,
        }
    }

    /// Observe changes to the deck contents.
    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Card>) + 'static) -> SubscriptionId {
        self.cards.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cards.unsubscribe(id)
    }
}
