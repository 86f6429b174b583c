pub mod board;
pub mod card;
pub mod column;
pub mod error;
pub mod transfer;

pub use board::Board;
pub use card::Card;
pub use column::ColumnId;
pub use error::KanbanError;
pub use transfer::{TransferPayload, CARD_ID_KEY, COLUMN_KEY};
