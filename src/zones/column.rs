//! Tableau columns.
//!
//! A column is an ordered pile, bottom first. Any contiguous suffix that
//! alternates color and descends by exactly one rank is a movable stack;
//! the single top card is always one.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::core::{Card, Observable, SubscriptionId, RANK_COUNT};
use crate::rules::GameRules;

/// A run of cards lifted from a column. Never longer than a suit.
pub type CardStack = SmallVec<[Card; RANK_COUNT]>;

/// True if every adjacent pair alternates color and descends by one.
///
/// Empty and single-card sequences are valid.
#[must_use]
pub fn is_movable_sequence(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[1].stacks_on(&pair[0]))
}

fn turn_up_last(cards: &mut Vec<Card>) {
    if let Some(top) = cards.last_mut() {
        top.set_visible(true);
    }
}

/// One tableau pile.
pub struct Column {
    index: usize,
    cards: Observable<Vec<Card>>,
    rules: Rc<dyn GameRules>,
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("index", &self.index)
            .field("cards", self.cards.get())
            .field("variant", &self.rules.variant())
            .finish()
    }
}

impl Column {
    /// Create an empty column at position `index` governed by `rules`.
    #[must_use]
    pub fn new(index: usize, rules: Rc<dyn GameRules>) -> Self {
        Self {
            index,
            cards: Observable::new(Vec::new()),
            rules,
        }
    }

    /// Position of this column in the tableau.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
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

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.get().last()
    }

    #[must_use]
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        self.cards.get().iter().position(|c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.index_of(card).is_some()
    }

    /// Whether the rule set lets `card` go on top of this column.
    #[must_use]
    pub fn can_accept_card(&self, card: &Card) -> bool {
        self.rules.column_accepts(self, card)
    }

    /// Whether `cards` form a movable sequence this column can take.
    #[must_use]
    pub fn can_accept_stack(&self, cards: &[Card]) -> bool {
        match cards.first() {
            Some(head) => is_movable_sequence(cards) && self.can_accept_card(head),
            None => false,
        }
    }

    /// True if the suffix starting at `from` is a movable stack.
    ///
    /// An out-of-range index is never movable.
    #[must_use]
    pub fn can_move_stack(&self, from: usize) -> bool {
        self.cards
            .get()
            .get(from..)
            .is_some_and(|suffix| !suffix.is_empty() && is_movable_sequence(suffix))
    }

    /// Copy of the suffix starting at `from`, or empty if it is not movable.
    #[must_use]
    pub fn movable_stack(&self, from: usize) -> CardStack {
        if !self.can_move_stack(from) {
            return CardStack::new();
        }
        self.cards.get()[from..].iter().copied().collect()
    }

    /// Put a card on top. Legality is the caller's concern.
    pub fn add_card(&mut self, card: Card) {
        self.cards.update(|cards| cards.push(card));
    }

    /// Put a run of cards on top, in order.
    pub fn add_stack(&mut self, stack: &[Card]) {
        self.cards.update(|cards| cards.extend_from_slice(stack));
    }

    /// Remove `card` wherever it sits. Returns the stored card (with its
    /// current visibility), or `None` if absent.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let pos = self.index_of(card)?;
        Some(self.cards.update(|cards| cards.remove(pos)))
    }

    /// Lift the suffix starting at `from`.
    ///
    /// Returns an empty stack and leaves the column untouched if the suffix
    /// is not movable.
    pub fn remove_stack(&mut self, from: usize) -> CardStack {
        if !self.can_move_stack(from) {
            return CardStack::new();
        }
        self.cards.update(|cards| cards.drain(from..).collect())
    }

    /// Turn the top card face up. Returns true if it was face down.
    pub fn reveal_top(&mut self) -> bool {
        match self.top_card() {
            Some(top) if !top.is_visible() => {
                self.cards.update(turn_up_last);
                true
            }
            _ => false,
        }
    }

    /// Remove `card` and turn up whatever it uncovered, publishing once.
    pub fn take_card(&mut self, card: &Card) -> Option<Card> {
        let pos = self.index_of(card)?;
        let taken = self.cards.update_silent(|cards| {
            let taken = cards.remove(pos);
            turn_up_last(cards);
            taken
        });
        self.cards.notify();
        Some(taken)
    }

    /// Lift the movable suffix starting at `from` and turn up the card
    /// beneath, publishing once. Empty and untouched if not movable.
    pub fn take_stack(&mut self, from: usize) -> CardStack {
        if !self.can_move_stack(from) {
            return CardStack::new();
        }
        let stack = self.cards.update_silent(|cards| {
            let stack: CardStack = cards.drain(from..).collect();
            turn_up_last(cards);
            stack
        });
        self.cards.notify();
        stack
    }

    /// Observe changes to the column contents.
    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Card>) + 'static) -> SubscriptionId {
        self.cards.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cards.unsubscribe(id)
    }
}
