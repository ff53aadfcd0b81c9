//! Playing a game.
//!
//! - `Game`: the containers of one deal plus its rule set
//! - `Layout`: hand-built starting positions
//! - `Controller`: turns player intents into checked moves
//! - `GameEvent`: what a committed intent changed
//! - `MoveError`: why an intent was refused
//! - `AuditError`: a broken structural invariant

pub mod board;
pub mod controller;
pub mod error;
pub mod event;
pub mod layout;

pub use board::{AuditError, Game};
pub use controller::{Controller, MoveOutcome, Selection};
pub use error::MoveError;
pub use event::GameEvent;
pub use layout::{Layout, LayoutError};
