//! Variant rule sets.
//!
//! `GameRules` holds the move-legality predicates and `DealStrategy` the
//! opening deal. `create_rules` picks the implementation for a `Variant`;
//! the returned `Rc` is shared by every container of one game.

pub mod classic;
pub mod engine;
pub mod klondike;

use std::rc::Rc;

use crate::core::Variant;

pub use classic::{ClassicDealStrategy, ClassicRules};
pub use engine::{DealStrategy, GameRules};
pub use klondike::{KlondikeDealStrategy, KlondikeRules};

/// Build the rule set for `variant`.
#[must_use]
pub fn create_rules(variant: Variant) -> Rc<dyn GameRules> {
    match variant {
        Variant::Classic => Rc::new(ClassicRules::new()),
        Variant::Klondike => Rc::new(KlondikeRules::new()),
    }
}
