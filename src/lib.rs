//! # rust-solitaire
//!
//! A solitaire rules engine with Classic and Klondike variants.
//!
//! The crate owns game state and move legality; rendering, pointer input
//! and animation belong to the front end, which talks to the engine
//! through a small surface: attempt a move, query legal targets, query
//! completion, and observe containers for re-rendering.
//!
//! ## Design Principles
//!
//! 1. **Rules are data-free predicates.** A variant is a `GameRules`
//!    implementation shared by every container of a game. Containers never
//!    check legality when mutated.
//!
//! 2. **Check, then commit.** The `Controller` validates every intent
//!    before touching state, so a refused move leaves the game unchanged.
//!
//! 3. **Every card accounted for.** The 52 cards are partitioned across
//!    the containers at all times; `Game::audit` verifies it.
//!
//! ## Modules
//!
//! - `core`: cards, RNG, configuration, observable cells
//! - `zones`: deck, columns, foundation, temp slots, drawn cards
//! - `rules`: `GameRules`, deal strategies, Classic and Klondike
//! - `game`: `Game`, `Controller`, events and errors
//!
//! ## Example
//!
//! ```
//! use rust_solitaire::{Controller, Game};
//!
//! let mut controller = Controller::new(Game::klondike(42));
//!
//! // Turn over the stock until a drawn card can be played somewhere.
//! for _ in 0..24 {
//!     controller.draw_card_from_deck().unwrap();
//!     let top = *controller.game().drawn().unwrap().top_card().unwrap();
//!     if let Some(&target) = controller.available_moves(&top).first() {
//!         controller.move_card(top, target).unwrap();
//!         break;
//!     }
//! }
//! controller.game().audit().unwrap();
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Card, Color, GameConfig, GameRng, Observable, Rank, Suit, Variant};
pub use crate::game::{Controller, Game, GameEvent, Layout, MoveError, MoveOutcome, Selection};
pub use crate::rules::{create_rules, DealStrategy, GameRules};
pub use crate::zones::{Column, Deck, DrawnCardsArea, Foundation, SlotId, TempBucket};
