//! Card zones that are not the deck: the bounded hand and the slotted board.
//!
//! Zones own their `CardInstance`s outright. Moving a card means taking it
//! out of one zone and handing it to another, so a copy is never in two
//! places at once.

pub mod hand;
pub mod board;

pub use hand::Hand;
pub use board::Board;
