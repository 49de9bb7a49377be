//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One session (`auth`) and one station list (`stations`) exist per
//! process, each held in an `RwSignal` provided via context at app start.
//! State is only mutated by the completion of the initiating call — there
//! are no background timers — so overlapping fetches simply resolve
//! last-write-wins.

pub mod auth;
pub mod stations;
