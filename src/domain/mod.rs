//! Domain layer for the tier list plugin.
//!
//! This module holds the catalog model and the board builder, independent of
//! Zellij APIs, rendering and I/O.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Catalog entries and the tier vocabulary
//! - [`filter`]: Category filter labels and their machine codes
//! - [`board`]: The filtered, grouped and ordered tier board
//!
//! # Examples
//!
//! ```
//! use tierlist::domain::{CatalogEntry, FilterLabel, TierBoard};
//!
//! let entries = vec![CatalogEntry::new("Pi 5", "sbc", "S", 1.0)];
//! let board = TierBoard::build(&entries, FilterLabel::Sbcs);
//! assert_eq!(board.len(), 1);
//! ```

pub mod board;
pub mod entry;
pub mod error;
pub mod filter;

pub use board::{TierBoard, TierBucket};
pub use entry::{CatalogEntry, Tier, TierSlot};
pub use error::{Result, TierListError};
pub use filter::FilterLabel;
