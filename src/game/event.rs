//! Game events.
//!
//! Every successful mutation produces one `GameEvent`. It is returned to
//! the caller and broadcast to the controller's event subscribers so a
//! front end can animate or re-render without diffing state.

use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::zones::{CardStack, SlotId};

/// A committed change to the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A single card changed container.
    Moved { card: Card, from: SlotId, to: SlotId },
    /// A run of cards moved between columns, head first.
    StackMoved { cards: CardStack, from: SlotId, to: SlotId },
    /// The top of the deck went onto the drawn-cards area.
    Drawn(Card),
    /// A card went back into the deck.
    ReturnedToDeck { card: Card, from: SlotId },
    /// The top of the deck went straight onto a container.
    MovedFromDeck { card: Card, to: SlotId },
    DeckShuffled,
    /// The drawn-cards area was emptied back into the deck.
    DeckRestarted { returned: usize },
}

impl GameEvent {
    /// Container the event moved cards into, if any.
    #[must_use]
    pub fn destination(&self) -> Option<SlotId> {
        match self {
            GameEvent::Moved { to, .. }
            | GameEvent::StackMoved { to, .. }
            | GameEvent::MovedFromDeck { to, .. } => Some(*to),
            GameEvent::Drawn(_) => Some(SlotId::DrawnCards),
            GameEvent::ReturnedToDeck { .. } | GameEvent::DeckRestarted { .. } => {
                Some(SlotId::Deck)
            }
            GameEvent::DeckShuffled => None,
        }
    }

    /// Number of cards that changed container.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            GameEvent::Moved { .. }
            | GameEvent::Drawn(_)
            | GameEvent::ReturnedToDeck { .. }
            | GameEvent::MovedFromDeck { .. } => 1,
            GameEvent::StackMoved { cards, .. } => cards.len(),
            GameEvent::DeckRestarted { returned } => *returned,
            GameEvent::DeckShuffled => 0,
        }
    }
}
