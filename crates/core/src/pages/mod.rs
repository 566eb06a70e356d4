//! Catalogue of the statutory pages of the fiscal bundle.

pub mod catalogue;

pub use catalogue::{PageCatalogue, PageDef, PageSection};
