//! Hand-built starting positions.
//!
//! A `Layout` names the cards that should sit in columns, temp slots, the
//! foundation and the waste pile. [`Game::from_layout`](crate::game::Game::from_layout)
//! pulls those cards out of a fresh deck, so the 52-card partition holds
//! for any layout it accepts. Useful for puzzles, tutorials and tests.

use crate::core::{Card, ConfigError, Rank, Suit};

/// Cards to place before play starts.
///
/// ```
/// use rust_solitaire::core::{Card, GameConfig, Rank, Suit, Variant};
/// use rust_solitaire::game::{Game, Layout};
///
/// let layout = Layout::new()
///     .with_column([Card::new(Rank::Six, Suit::Spades)])
///     .with_foundation_run(Suit::Hearts, Rank::Three);
///
/// let game = Game::from_layout(GameConfig::new(Variant::Classic), layout).unwrap();
/// assert_eq!(game.columns()[0].card_count(), 1);
/// assert_eq!(game.foundation().slot(Suit::Hearts).card_count(), 3);
/// assert_eq!(game.deck().card_count(), 52 - 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub(crate) columns: Vec<Vec<Card>>,
    pub(crate) temp: Vec<(usize, Card)>,
    pub(crate) foundation: Vec<(Suit, Rank)>,
    pub(crate) drawn: Vec<Card>,
    pub(crate) shuffle_deck: bool,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the next column, bottom first. Visibility is kept as given,
    /// but face-down cards must all sit below the face-up ones.
    #[must_use]
    pub fn with_column(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.columns.push(cards.into_iter().collect());
        self
    }

    /// Put `card` in temp slot `index`.
    #[must_use]
    pub fn with_temp_card(mut self, index: usize, card: Card) -> Self {
        self.temp.push((index, card));
        self
    }

    /// Build the `suit` foundation from Ace up to `top`.
    #[must_use]
    pub fn with_foundation_run(mut self, suit: Suit, top: Rank) -> Self {
        self.foundation.push((suit, top));
        self
    }

    /// Lay cards on the waste pile in draw order.
    #[must_use]
    pub fn with_drawn(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.drawn.extend(cards);
        self
    }

    /// Shuffle whatever is left in the deck. Otherwise the deck keeps
    /// suit-major order, so draws are predictable.
    #[must_use]
    pub fn with_shuffled_deck(mut self) -> Self {
        self.shuffle_deck = true;
        self
    }
}

/// A layout that cannot be set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    Config(ConfigError),
    /// A card was named twice.
    DuplicateCard(Card),
    /// More columns than the configuration provides.
    TooManyColumns { given: usize, available: usize },
    TempSlotOutOfRange(usize),
    TempSlotOccupied(usize),
    /// Waste-pile cards for a variant without a waste pile.
    NoDrawnCardsArea,
    /// Column with a face-down card above a face-up one.
    HiddenAboveVisible(usize),
}

impl From<ConfigError> for LayoutError {
    fn from(err: ConfigError) -> Self {
        LayoutError::Config(err)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Config(err) => write!(f, "invalid configuration: {err}"),
            LayoutError::DuplicateCard(card) => write!(f, "{card} placed more than once"),
            LayoutError::TooManyColumns { given, available } => {
                write!(f, "layout fills {given} columns but the game has {available}")
            }
            LayoutError::TempSlotOutOfRange(i) => write!(f, "temp slot {i} does not exist"),
            LayoutError::TempSlotOccupied(i) => write!(f, "temp slot {i} is already filled"),
            LayoutError::NoDrawnCardsArea => write!(f, "variant has no drawn cards area"),
            LayoutError::HiddenAboveVisible(i) => {
                write!(f, "column {i} has a face-down card above a face-up one")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Config(err) => Some(err),
            _ => None,
        }
    }
}
