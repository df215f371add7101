//! Controller layer: UI events, page state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod page;
