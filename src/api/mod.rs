pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{dispatch, BoardEvent, EventOutcome};
pub use state::{AddCardForm, BoardState, ColumnState};
