//! Core value types: cards, RNG, configuration and observable cells.
//!
//! Nothing here knows about containers or rules. Zones, rule sets and the
//! controller are all built on top of these.

pub mod card;
pub mod config;
pub mod observable;
pub mod rng;

pub use card::{Card, Color, Rank, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use config::{
    ConfigError, GameConfig, Variant, CLASSIC_COLUMNS, DEFAULT_TEMP_SLOTS, KLONDIKE_COLUMNS,
};
pub use observable::{Observable, SubscriptionId};
pub use rng::GameRng;
