//! Intermediate management balances (Soldes Intermediaires de Gestion).
//!
//! This module provides:
//! - The SIG cascade, from trading margin down to net result
//! - Current / prior comparison computed in parallel
//! - The labelled note 37 table

pub mod engine;
pub mod table;
pub mod types;


pub use engine::SigEngine;
pub use table::SigTable;
pub use types::{SigComparison, SigRow, SigRowKind, SigStatement};
