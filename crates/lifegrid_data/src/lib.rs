//! # Lifegrid Data
//!
//! Plain data types shared by the Lifegrid engine and its drivers.

pub mod cell;

pub use cell::{Cell, Coord};
