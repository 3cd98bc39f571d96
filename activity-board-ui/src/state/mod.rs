//! State Management
//!
//! Board state shared by every component.

pub mod global;

pub use global::{last_loaded_label, provide_board_state, BoardState};
