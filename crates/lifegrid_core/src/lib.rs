//! # Lifegrid Core
//!
//! The simulation engine for Conway's Game of Life on a fixed, non-wrapping
//! grid.
//!
//! This crate contains:
//! - The [`Board`]: grid storage, neighbor counting, the generational update
//!   and stability detection
//! - Board errors ([`BoardError`])
//! - Built-in seed patterns
//! - Configuration loading and validation
//! - Generation metrics and logging setup
//!
//! The engine knows nothing about rendering or scheduling. Drivers call
//! [`Board::advance_generation`] and read cell state back.
//!
//! ## Example
//!
//! ```
//! use lifegrid_core::Board;
//!
//! let mut board = Board::new(4, 4);
//! board.seed_cells(&[(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
//! board.advance_generation();
//! assert!(board.is_stable());
//! ```

/// Grid storage and the update rule
pub mod board;
/// Configuration management for board and run parameters
pub mod config;
/// Error types for coordinate and sizing failures
pub mod error;
/// Generation metrics and structured logging
pub mod metrics;
/// Named seed patterns
pub mod patterns;

pub use board::{next_state, Board, GenerationStats};
pub use error::{BoardError, Result};
pub use lifegrid_data::{Cell, Coord};
pub use metrics::{init_logging, Metrics};
pub use patterns::{find_pattern, Pattern, PATTERNS};
