//! Purchase frequency engine for Corner Grocer.
//!
//! Reads a day's purchase log (one item name per line), counts each item
//! case-insensitively, persists a sorted backup of the counts, and ranks
//! "did you mean" candidates when a lookup misses.
//!
//! # Architecture
//!
//! - [`normalize`] -- Whitespace trimming, ASCII case folding, name ordering
//! - [`table`] -- The frequency table: ingestion, lookups, sorted views
//! - [`backup`] -- Atomic backup writer and backup reader
//! - [`suggestion`] -- Prefix + edit-distance candidate ranking
//! - [`error`] -- [`GrocerError`], shared by loading and backups

pub mod backup;
pub mod error;
pub mod normalize;
pub mod suggestion;
pub mod table;

pub use error::GrocerError;
pub use suggestion::{Suggester, suggest};
pub use table::{FrequencyTable, ItemCount, SortOrder};
