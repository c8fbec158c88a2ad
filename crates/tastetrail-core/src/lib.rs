//! tastetrail-core
//!
//! Pure domain types and the recipe query/presentation logic: ingredient
//! parsing, serving scaling, recipe normalization, filtering and
//! shopping-list categorization. No storage or HTTP dependency; this is the
//! shared vocabulary of the TasteTrail system.

pub mod categorize;
pub mod doc_keys;
pub mod error;
pub mod filter;
pub mod images;
pub mod ingredient;
pub mod models;
pub mod normalize;
pub mod scale;
pub mod seed;
