//! Small browser helpers.

pub mod browser;
