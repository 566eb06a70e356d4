//! Tax regime applicability.
//!
//! This module provides:
//! - The five filing regimes and free-text regime detection
//! - A static table of mandatory documents per regime
//! - The note annex recap (fiche R4)

pub mod recap;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use recap::{NotesRecap, RecapLine, note_page_id};
pub use table::RegimeTable;
pub use types::{Applicability, RegimeCode, RegimeDef, RegimeError};
