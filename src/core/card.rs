//! Playing cards: suits, ranks, colors and card values.
//!
//! A standard deck holds exactly one card per (rank, suit) pair, so a card's
//! identity is its rank and suit. The face-up flag is mutable state carried
//! along with the card and is deliberately left out of equality and hashing.
//!
//! ```
//! use rust_solitaire::core::{Card, Color, Rank, Suit};
//!
//! let card = Card::new(Rank::Ten, Suit::Hearts);
//! assert_eq!(card.display_name(), "10♥");
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.rank().value(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// Number of ranks in a suit.
pub const RANK_COUNT: usize = 13;

/// Number of suits in a deck.
pub const SUIT_COUNT: usize = 4;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = RANK_COUNT * SUIT_COUNT;

/// Card color. Cards stacked in a column must alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    /// The suit's color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
        }
    }

    /// Position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank, totally ordered from Ace (1) to King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, or `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Short label used in display names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// True if `self` is exactly one rank above `other`.
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

/// A single playing card.
///
/// Equality and hashing use rank and suit only; two values describing the
/// same physical card compare equal whether face up or not.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    visible: bool,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.rank.hash(hasher);
        self.suit.hash(hasher);
    }
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: true,
        }
    }

    /// Create a face-down card.
    #[must_use]
    pub const fn face_down(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: false,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Stable index in 0..52, suit-major.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.suit.index() * RANK_COUNT + self.rank.value() as usize - 1
    }

    /// Rank label followed by suit glyph, e.g. `"Q♠"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.glyph())
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// True if this card can sit directly on `below` in a column:
    /// opposite color and exactly one rank lower.
    #[must_use]
    pub fn stacks_on(&self, below: &Card) -> bool {
        self.color() != below.color() && below.rank.is_one_above(self.rank)
    }

    /// True if this card continues `below` on a foundation:
    /// same suit and exactly one rank higher.
    #[must_use]
    pub fn follows_on_foundation(&self, below: &Card) -> bool {
        self.suit == below.suit && self.rank.is_one_above(below.rank)
    }

    /// Every card of a standard deck, face up, suit-major, Ace to King.
    pub fn full_deck() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}
