//! Fiscal statement engine for Liasse.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! It turns an OHADA trial balance into derived statements and diagnostics.
//!
//! # Modules
//!
//! - `balance` - Trial balance entries and prefix aggregation
//! - `sig` - Intermediate management balances (SIG cascade)
//! - `ratios` - Financial aggregates, ratio classification and tax estimate
//! - `analysis` - Page-contextual diagnostic cards and health score
//! - `regime` - Tax regime applicability of statutory documents
//! - `pages` - Catalogue of the statutory pages

pub mod analysis;
pub mod balance;
pub mod pages;
pub mod ratios;
pub mod regime;
pub mod sig;
