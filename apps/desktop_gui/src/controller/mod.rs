//! Controller layer: UI events, state reduction, and drop orchestration.

pub mod events;
pub mod orchestration;
