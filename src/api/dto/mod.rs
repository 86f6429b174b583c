pub mod board;

pub use board::{AddCardView, BoardResponse, ColumnView, DiscardView, DropOutcome};
