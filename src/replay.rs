//! Headless render surface: feeds a scripted list of [`BoardEvent`]s to a
//! [`BoardState`] and records what each one produced.
//!
//! The replay stands in for the platform's drag transfer mechanism. The
//! payload returned by the latest `drag_start` is attached to the next drop
//! that arrives without one, and is discarded once that drop happens.

use std::io::Read;

use serde::Serialize;

use crate::api::dto::BoardResponse;
use crate::api::handlers::boards;
use crate::api::{dispatch, BoardEvent, BoardState, EventOutcome};
use crate::domain::{KanbanError, TransferPayload};

#[derive(Debug, Clone, Serialize)]
pub struct ReplayRecord {
    pub event: BoardEvent,
    pub outcome: EventOutcome,
}

pub fn load_events<R: Read>(reader: R) -> Result<Vec<BoardEvent>, KanbanError> {
    Ok(serde_json::from_reader(reader)?)
}

#[derive(Debug)]
pub struct Replay {
    state: BoardState,
    in_flight: Option<TransferPayload>,
}

impl Replay {
    pub fn new(state: BoardState) -> Self {
        Self {
            state,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn board(&self) -> BoardResponse {
        boards::get_board(&self.state)
    }

    pub fn apply(&mut self, event: BoardEvent) -> ReplayRecord {
        let event = self.attach_payload(event);
        let outcome = dispatch(&mut self.state, event.clone());

        match &outcome {
            EventOutcome::DragStarted { payload } => self.in_flight = payload.clone(),
            EventOutcome::Dropped { .. } | EventOutcome::Discarded { .. } => self.in_flight = None,
            _ => {}
        }

        ReplayRecord { event, outcome }
    }

    pub fn run(&mut self, events: Vec<BoardEvent>) -> Vec<ReplayRecord> {
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    fn attach_payload(&self, event: BoardEvent) -> BoardEvent {
        match event {
            BoardEvent::Drop {
                column,
                y,
                slots,
                payload: None,
            } => BoardEvent::Drop {
                column,
                y,
                slots,
                payload: self.in_flight.clone(),
            },
            BoardEvent::DiscardDrop { payload: None } => BoardEvent::DiscardDrop {
                payload: self.in_flight.clone(),
            },
            other => other,
        }
    }
}
