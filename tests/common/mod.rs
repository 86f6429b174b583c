#![allow(dead_code)]

use std::sync::Arc;

use kanban_board::api::BoardState;
use kanban_board::config::{Config, IdStrategy};
use kanban_board::domain::{Board, Card, ColumnId};
use kanban_board::services::{SequentialIdGenerator, SlotDescriptor};

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        id_strategy: IdStrategy::Sequential,
        ..Config::default()
    })
}

/// Board seeded with the default cards and deterministic ids.
pub fn setup_test_state() -> BoardState {
    BoardState::new(test_config())
}

pub fn state_with_cards(cards: Vec<Card>) -> BoardState {
    let board = Board::try_from_cards(cards).expect("test cards should have unique ids");
    BoardState::with_board(
        board,
        Box::new(SequentialIdGenerator::new("new-", 1)),
        test_config(),
    )
}

/// Slots for a column rendered with 100px cards starting at the top.
pub fn column_slots(state: &BoardState, column: ColumnId) -> Vec<SlotDescriptor> {
    let mut slots: Vec<SlotDescriptor> = state
        .board
        .cards_in(column)
        .iter()
        .enumerate()
        .map(|(i, card)| SlotDescriptor::before(i as f64 * 100.0, card.id.clone()))
        .collect();
    slots.push(SlotDescriptor::trailing(slots.len() as f64 * 100.0));
    slots
}

pub fn ids(state: &BoardState) -> Vec<String> {
    state.board.ids().map(str::to_owned).collect()
}

pub fn sorted_ids(state: &BoardState) -> Vec<String> {
    let mut ids = ids(state);
    ids.sort();
    ids
}
