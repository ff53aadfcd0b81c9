//! Card containers.
//!
//! Every card of the 52 lives in exactly one of these at any time:
//!
//! - `Deck`: face-down stock
//! - `Column`: tableau piles
//! - `Foundation`: four `FoundationSlot`s, one per suit
//! - `TempBucket`: row of single-card `TempSlot`s
//! - `DrawnCardsArea`: waste pile (Klondike only)
//!
//! Containers do no legality checks when mutated. Their `can_accept_*`
//! queries delegate to the shared rule set; the controller checks before
//! it commits.

pub mod column;
pub mod deck;
pub mod drawn;
pub mod foundation;
pub mod slot;
pub mod temp;

pub use column::{is_movable_sequence, CardStack, Column};
pub use deck::Deck;
pub use drawn::DrawnCardsArea;
pub use foundation::{Foundation, FoundationSlot};
pub use slot::{SlotId, SlotRef, Slots};
pub use temp::{TempBucket, TempSlot};
