//! Why an intent was refused.

use crate::core::Card;
use crate::zones::SlotId;

/// Reason a controller intent did not change the game.
///
/// Every variant except [`MoveError::SourceNotFound`] is an ordinary
/// rejection: the game is untouched and play continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The rule set refused the card (or run) on the target.
    Rejected { card: Card, target: SlotId },
    /// The card is not in any container. Indicates corrupted state.
    SourceNotFound(Card),
    /// The card is not in the container the caller named.
    NotInSource { card: Card, source: SlotId },
    /// The target address names no container in this game.
    UnknownSlot(SlotId),
    /// The temp row has no empty cell.
    NoEmptyTempSlot,
    /// The card is buried under cards that do not form a movable run.
    StackNotMovable(Card),
    /// A run of more than one card can only go to a column.
    StackToNonColumn(SlotId),
    /// Nothing left to draw.
    DeckEmpty,
    /// The variant has no waste pile to draw onto.
    NoDrawnCardsArea,
    /// A selection-based intent with nothing selected.
    NothingSelected,
    /// The card is face down, in the deck, or otherwise not playable.
    NotInteractable(Card),
    /// The variant does not allow cards back into the deck.
    ReturnToDeckForbidden,
    /// A deck restart with an empty waste pile.
    NothingToRestart,
    /// A deck restart while the deck still has cards.
    DeckNotEmpty,
}

impl MoveError {
    /// True when the error means the game state is inconsistent rather
    /// than that a move was illegal.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, MoveError::SourceNotFound(_))
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::Rejected { card, target } => write!(f, "{card} cannot move to {target}"),
            MoveError::SourceNotFound(card) => write!(f, "{card} is not in any container"),
            MoveError::NotInSource { card, source } => write!(f, "{card} is not in {source}"),
            MoveError::UnknownSlot(slot) => write!(f, "no {slot} in this game"),
            MoveError::NoEmptyTempSlot => write!(f, "no empty temp slot"),
            MoveError::StackNotMovable(card) => write!(f, "cards above {card} do not form a movable run"),
            MoveError::StackToNonColumn(target) => {
                write!(f, "a run of cards can only move to a column, not {target}")
            }
            MoveError::DeckEmpty => write!(f, "deck is empty"),
            MoveError::NoDrawnCardsArea => write!(f, "this variant has no drawn cards area"),
            MoveError::NothingSelected => write!(f, "nothing is selected"),
            MoveError::NotInteractable(card) => write!(f, "{card} cannot be played"),
            MoveError::ReturnToDeckForbidden => write!(f, "cards cannot be returned to the deck"),
            MoveError::NothingToRestart => write!(f, "no drawn cards to return to the deck"),
            MoveError::DeckNotEmpty => write!(f, "deck still has cards"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_display() {
        let err = MoveError::Rejected {
            card: Card::new(Rank::Five, Suit::Hearts),
            target: SlotId::Column(2),
        };
        assert_eq!(err.to_string(), "5♥ cannot move to column 2");
        assert_eq!(MoveError::DeckEmpty.to_string(), "deck is empty");
    }

    #[test]
    fn test_invariant_violation() {
        let card = Card::new(Rank::Ace, Suit::Clubs);
        assert!(MoveError::SourceNotFound(card).is_invariant_violation());
        assert!(!MoveError::NotInteractable(card).is_invariant_violation());
        assert!(!MoveError::DeckEmpty.is_invariant_violation());
    }
}
