//! Evaluation module for Nine Men's Morris positions
//!
//! This module provides the heuristic primitives used by every strategy and
//! the position evaluator used by the lookahead search:
//! - Material, mobility and connectivity
//! - Open two-in-a-row lines
//! - Ring and centrality bonuses

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, EvalWeight};
pub use patterns::{
    centrality, count_in_ring, largest_cluster, mill_potential, mobility, piece_count, two_in_row,
};
