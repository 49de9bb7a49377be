//! Reusable UI components.

pub mod station_card;
pub mod station_form;
