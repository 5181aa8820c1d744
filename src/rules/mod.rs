//! Game rules for Nine Men's Morris
//!
//! This module implements the rule set:
//! - Legal move generation for placement, sliding and flying
//! - Mill detection and capture candidates
//! - Terminal positions (too few pieces, no legal move)
//! - Validation of externally supplied moves

pub mod mill;
pub mod movegen;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use mill::{
    capture_candidates, forms_mill, has_any_mill, is_part_of_mill, mill_count, mill_threats,
    move_forms_mill,
};
pub use movegen::{is_flying, legal_moves};
pub use validate::{validate_move, RuleError};
pub use win::{game_end, is_terminal, EndReason, GameEnd};
