pub mod card_service;
pub mod ids;
pub mod slots;

pub use card_service::{CardService, MoveOutcome};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use slots::{nearest_slot, slot_states, stacked_slots, SlotDescriptor, SlotState};
