use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Board, ColumnId};
use crate::services::IdGenerator;

/// The "add card" affordance of one column: idle button or open input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCardForm {
    adding: bool,
    text: String,
}

impl AddCardForm {
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn open(&mut self) {
        self.adding = true;
    }

    /// Back to idle. Typed text survives so reopening shows it again.
    pub fn close(&mut self) {
        self.adding = false;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn reset(&mut self) {
        self.adding = false;
        self.text.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnState {
    pub column: ColumnId,
    /// Set while a drag hovers the column.
    pub active: bool,
    /// Slot index resolved by the latest drag-over.
    pub highlighted: Option<usize>,
    pub add_card: AddCardForm,
}

impl ColumnState {
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            active: false,
            highlighted: None,
            add_card: AddCardForm::default(),
        }
    }

    pub(crate) fn clear_drop_target(&mut self) {
        self.active = false;
        self.highlighted = None;
    }
}

#[derive(Debug)]
pub struct BoardState {
    pub board: Board,
    pub columns: Vec<ColumnState>,
    pub discard_active: bool,
    pub ids: Box<dyn IdGenerator>,
    pub config: Arc<Config>,
}

impl BoardState {
    pub fn new(config: Arc<Config>) -> Self {
        let board = if config.seed_defaults {
            Board::with_defaults()
        } else {
            Board::new()
        };
        let ids = config.id_strategy.generator();
        Self::with_board(board, ids, config)
    }

    pub fn with_board(board: Board, ids: Box<dyn IdGenerator>, config: Arc<Config>) -> Self {
        Self {
            board,
            columns: ColumnId::all().iter().map(|c| ColumnState::new(*c)).collect(),
            discard_active: false,
            ids,
            config,
        }
    }

    pub fn column(&self, column: ColumnId) -> &ColumnState {
        &self.columns[column.index()]
    }

    pub fn column_mut(&mut self, column: ColumnId) -> &mut ColumnState {
        &mut self.columns[column.index()]
    }
}
