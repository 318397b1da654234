pub use lifegrid_core::{next_state, Board, BoardError, GenerationStats};
pub use lifegrid_data::{Cell, Coord};
pub mod config {
    pub use lifegrid_core::config::*;
}
pub mod patterns {
    pub use lifegrid_core::patterns::*;
}
pub mod metrics {
    pub use lifegrid_core::metrics::*;
}
