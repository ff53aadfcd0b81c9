//! A game: every container plus the rule set that governs them.
//!
//! `Game` owns the deck, the columns, the foundation, the temp row and
//! (for variants that have one) the drawn-cards area. It answers queries
//! and exposes a few crate-internal mutators; all legality checks live in
//! the [`Controller`](crate::game::Controller).

use std::rc::Rc;

use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::core::{Card, ConfigError, GameConfig, GameRng, Rank, Suit, Variant, DECK_SIZE};
use crate::game::{Layout, LayoutError};
use crate::rules::{create_rules, GameRules};
use crate::zones::{
    CardStack, Column, Deck, DrawnCardsArea, Foundation, SlotId, Slots, TempBucket, TempSlot,
};

/// Complete game state.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rules: Rc<dyn GameRules>,
    rng: GameRng,
    deck: Deck,
    columns: Vec<Column>,
    foundation: Foundation,
    temp: TempBucket,
    drawn: Option<DrawnCardsArea>,
}

impl Game {
    /// Shuffle and deal a new game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self::assemble(config);
        game.deal();
        Ok(game)
    }

    /// A dealt Classic game with default settings.
    #[must_use]
    pub fn classic(seed: u64) -> Self {
        let mut game = Self::assemble(GameConfig::new(Variant::Classic).with_seed(seed));
        game.deal();
        game
    }

    /// A dealt Klondike game with default settings.
    #[must_use]
    pub fn klondike(seed: u64) -> Self {
        let mut game = Self::assemble(GameConfig::new(Variant::Klondike).with_seed(seed));
        game.deal();
        game
    }

    /// Set up a hand-built position instead of dealing.
    pub fn from_layout(config: GameConfig, layout: Layout) -> Result<Self, LayoutError> {
        config.validate()?;
        let mut game = Self::assemble(config);

        let available = game.columns.len();
        if layout.columns.len() > available {
            return Err(LayoutError::TooManyColumns {
                given: layout.columns.len(),
                available,
            });
        }

        let mut placed = FxHashSet::default();
        let mut claim = |deck: &mut Deck, card: Card| -> Result<Card, LayoutError> {
            if !placed.insert(card) {
                return Err(LayoutError::DuplicateCard(card));
            }
            deck.remove_card(&card);
            Ok(card)
        };

        for (column, cards) in game.columns.iter_mut().zip(&layout.columns) {
            if cards.windows(2).any(|w| w[0].is_visible() && !w[1].is_visible()) {
                return Err(LayoutError::HiddenAboveVisible(column.index()));
            }
            for &card in cards {
                column.add_card(claim(&mut game.deck, card)?);
            }
        }

        for &(index, card) in &layout.temp {
            if index >= game.temp.slot_count() {
                return Err(LayoutError::TempSlotOutOfRange(index));
            }
            let mut card = claim(&mut game.deck, card)?;
            card.set_visible(true);
            if !game.temp.add_card_to_slot(card, index) {
                return Err(LayoutError::TempSlotOccupied(index));
            }
        }

        for &(suit, top) in &layout.foundation {
            for rank in Rank::ALL.into_iter().take_while(|rank| *rank <= top) {
                let card = claim(&mut game.deck, Card::new(rank, suit))?;
                game.foundation.add_card(card);
            }
        }

        if !layout.drawn.is_empty() {
            let Some(drawn) = game.drawn.as_mut() else {
                return Err(LayoutError::NoDrawnCardsArea);
            };
            for &card in &layout.drawn {
                drawn.add_card(claim(&mut game.deck, card)?);
            }
        }

        if layout.shuffle_deck {
            game.deck.shuffle(&mut game.rng);
        }
        debug!(
            "{} layout: {} cards placed, {} left in deck",
            game.variant(),
            DECK_SIZE - game.deck.card_count(),
            game.deck.card_count()
        );
        Ok(game)
    }

    /// Empty containers and a full, unshuffled deck.
    fn assemble(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let rules = create_rules(config.variant);
        let columns = (0..config.column_count())
            .map(|i| Column::new(i, Rc::clone(&rules)))
            .collect();
        let temp = TempBucket::new(config.temp_slot_count, Rc::clone(&rules));
        let foundation = Foundation::new(Rc::clone(&rules));
        let drawn = rules.has_drawn_cards_area().then(DrawnCardsArea::new);

        Self {
            config,
            rules,
            rng,
            deck: Deck::new(),
            columns,
            foundation,
            temp,
            drawn,
        }
    }

    fn deal(&mut self) {
        self.deck.shuffle(&mut self.rng);
        self.rules
            .deal_strategy()
            .deal(&mut self.deck, &mut self.columns);
        debug!(
            "dealt {} game (seed {}), {} cards left in deck",
            self.variant(),
            self.rng.seed(),
            self.deck.card_count()
        );
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Seed of the deal, for replaying it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn rules(&self) -> &dyn GameRules {
        self.rules.as_ref()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    #[must_use]
    pub fn temp(&self) -> &TempBucket {
        &self.temp
    }

    #[must_use]
    pub fn drawn(&self) -> Option<&DrawnCardsArea> {
        self.drawn.as_ref()
    }

    /// Every container at once.
    #[must_use]
    pub fn slots(&self) -> Slots<'_> {
        Slots {
            columns: &self.columns,
            temp: &self.temp,
            foundation: &self.foundation,
            deck: &self.deck,
            drawn: self.drawn.as_ref(),
        }
    }

    /// Container currently holding `card`.
    #[must_use]
    pub fn locate(&self, card: &Card) -> Option<SlotId> {
        self.slots().locate(card)
    }

    #[must_use]
    pub fn is_game_completed(&self) -> bool {
        self.rules.is_game_completed(&self.foundation)
    }

    // === Mutable access, for subscribing renderers ===

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    pub fn foundation_mut(&mut self) -> &mut Foundation {
        &mut self.foundation
    }

    pub fn temp_mut(&mut self) -> &mut TempBucket {
        &mut self.temp
    }

    pub fn drawn_mut(&mut self) -> Option<&mut DrawnCardsArea> {
        self.drawn.as_mut()
    }

    // === Primitive moves used by the controller ===

    /// Remove `card` from `source`, turning up the new top of a column.
    pub(crate) fn take_card(&mut self, source: SlotId, card: &Card) -> Option<Card> {
        match source {
            SlotId::Column(i) => self.columns.get_mut(i)?.take_card(card),
            SlotId::Foundation(_) => self.foundation.remove_card(card),
            SlotId::TempSlot(i) => match self.temp.slot(i)?.card() {
                Some(held) if held == card => self.temp.remove_card_from_slot(i),
                _ => None,
            },
            SlotId::TempBucket => self.temp.remove_card(card),
            SlotId::DrawnCards => self.drawn.as_mut()?.remove_card(card),
            SlotId::Deck => self.deck.remove_card(card).then_some(*card),
        }
    }

    /// Lift a run off a column, turning up the new top.
    pub(crate) fn take_stack(&mut self, column: usize, from: usize) -> CardStack {
        match self.columns.get_mut(column) {
            Some(column) => column.take_stack(from),
            None => CardStack::new(),
        }
    }

    /// Whether [`Game::place_card`] would succeed for `target`.
    pub(crate) fn can_place(&self, target: SlotId) -> bool {
        match target {
            SlotId::Column(i) => i < self.columns.len(),
            SlotId::Foundation(_) | SlotId::Deck => true,
            SlotId::TempSlot(i) => self.temp.slot(i).is_some_and(TempSlot::is_empty),
            SlotId::TempBucket => !self.temp.is_full(),
            SlotId::DrawnCards => self.drawn.is_some(),
        }
    }

    /// Put `card` into `target` without a legality check.
    ///
    /// Returns false if the target does not exist or is an occupied
    /// temp slot.
    pub(crate) fn place_card(&mut self, target: SlotId, mut card: Card) -> bool {
        if target != SlotId::Deck {
            card.set_visible(true);
        }
        match target {
            SlotId::Column(i) => match self.columns.get_mut(i) {
                Some(column) => {
                    column.add_card(card);
                    true
                }
                None => false,
            },
            SlotId::Foundation(_) => {
                self.foundation.add_card(card);
                true
            }
            SlotId::TempSlot(i) => self.temp.add_card_to_slot(card, i),
            SlotId::TempBucket => self.temp.add_card(card).is_some(),
            SlotId::Deck => {
                self.deck.add_card(card);
                true
            }
            SlotId::DrawnCards => match self.drawn.as_mut() {
                Some(drawn) => {
                    drawn.add_card(card);
                    true
                }
                None => false,
            },
        }
    }

    pub(crate) fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Empty the drawn-cards area back into the deck, reshuffling if
    /// configured. Returns how many cards moved.
    pub(crate) fn recycle_drawn_cards(&mut self) -> usize {
        let Some(drawn) = self.drawn.as_mut() else {
            return 0;
        };
        let returned = drawn.return_all_cards_to_deck(&mut self.deck);
        if self.config.reshuffle_on_restart {
            self.deck.shuffle(&mut self.rng);
        }
        returned
    }

    // === Invariants ===

    /// Check the structural invariants of the game.
    ///
    /// - every one of the 52 cards is in exactly one container
    /// - each foundation slot is Ace upward in its own suit, no gaps
    /// - deck cards are face down
    /// - no face-down card sits above a face-up card in a column
    pub fn audit(&self) -> Result<(), AuditError> {
        let mut seen = FxHashSet::default();
        let mut total = 0;

        let mut record = |card: &Card| -> Result<(), AuditError> {
            total += 1;
            if seen.insert(*card) {
                Ok(())
            } else {
                Err(AuditError::Duplicate(*card))
            }
        };

        for column in &self.columns {
            column.cards().iter().try_for_each(&mut record)?;
        }
        for slot in self.foundation.slots() {
            slot.cards().iter().try_for_each(&mut record)?;
        }
        self.temp.cards().iter().try_for_each(&mut record)?;
        self.deck.cards().iter().try_for_each(&mut record)?;
        if let Some(drawn) = &self.drawn {
            drawn.cards().iter().try_for_each(&mut record)?;
        }

        if total != DECK_SIZE {
            warn!("audit failed: {total} cards in play");
            return Err(AuditError::CardCount(total));
        }

        for slot in self.foundation.slots() {
            let expected = Rank::ALL.iter().map(|&rank| Card::new(rank, slot.suit()));
            if !slot.cards().iter().zip(expected).all(|(card, want)| *card == want) {
                return Err(AuditError::FoundationOutOfOrder(slot.suit()));
            }
        }

        if let Some(card) = self.deck.cards().iter().find(|c| c.is_visible()) {
            return Err(AuditError::FaceUpInDeck(*card));
        }

        for column in &self.columns {
            let cards = column.cards();
            if cards.windows(2).any(|w| w[0].is_visible() && !w[1].is_visible()) {
                return Err(AuditError::HiddenAboveVisible(column.index()));
            }
        }

        Ok(())
    }
}

/// A broken structural invariant found by [`Game::audit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditError {
    /// A card sits in two places at once.
    Duplicate(Card),
    /// Cards across all containers do not add up to a full deck.
    CardCount(usize),
    FoundationOutOfOrder(Suit),
    FaceUpInDeck(Card),
    /// Column with a face-down card above a face-up one.
    HiddenAboveVisible(usize),
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::Duplicate(card) => write!(f, "{card} appears twice"),
            AuditError::CardCount(total) => {
                write!(f, "{total} cards in play, expected {DECK_SIZE}")
            }
            AuditError::FoundationOutOfOrder(suit) => {
                write!(f, "foundation {} is out of order", suit.glyph())
            }
            AuditError::FaceUpInDeck(card) => write!(f, "{card} is face up in the deck"),
            AuditError::HiddenAboveVisible(i) => {
                write!(f, "column {i} has a face-down card above a face-up one")
            }
        }
    }
}

impl std::error::Error for AuditError {}
