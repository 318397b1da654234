//! # Lifegrid
//!
//! Drivers for the Lifegrid engine: a shared, lock-guarded board, command
//! dispatch with cooperative pause and quit, and a console renderer.

pub mod app;
pub mod model;
pub mod ui;
