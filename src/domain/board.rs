//! Tier board construction.
//!
//! [`TierBoard::build`] turns the flat catalog into the five ranked buckets the
//! renderer draws. It is a pure function of the entry list and the active
//! filter: same input, same board.
//!
//! # Pipeline
//!
//! 1. **Category pass**: drop entries whose `type` does not match the filter.
//! 2. **Tier pass**: place survivors into the bucket named by their tier.
//!    Unranked entries fall out here.
//! 3. **Ordering pass**: stable ascending sort by `tierPosition`, so equal
//!    positions keep catalog order.

use crate::domain::entry::{CatalogEntry, Tier};
use crate::domain::filter::FilterLabel;
use std::cmp::Ordering;

/// Entries of one tier that pass the active filter, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct TierBucket {
    pub tier: Tier,
    pub entries: Vec<CatalogEntry>,
}

impl TierBucket {
    const fn empty(tier: Tier) -> Self {
        Self {
            tier,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The filtered, grouped and ordered board.
///
/// Always holds exactly five buckets in `S, A, B, C, D` order. The board owns
/// copies of its entries, so later changes to the source list cannot leak in.
#[derive(Debug, Clone, PartialEq)]
pub struct TierBoard {
    filter: FilterLabel,
    buckets: [TierBucket; 5],
}

impl TierBoard {
    /// Builds the board for `entries` under `filter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist::domain::{CatalogEntry, FilterLabel, Tier, TierBoard};
    ///
    /// let entries = vec![
    ///     CatalogEntry::new("X", "sbc", "S", 1.0),
    ///     CatalogEntry::new("Y", "esb", "S", 0.0),
    /// ];
    ///
    /// let board = TierBoard::build(&entries, FilterLabel::All);
    /// let names: Vec<_> = board.bucket(Tier::S).entries.iter().map(|e| e.name.as_str()).collect();
    /// assert_eq!(names, ["Y", "X"]);
    ///
    /// let board = TierBoard::build(&entries, FilterLabel::Sbcs);
    /// assert_eq!(board.bucket(Tier::S).len(), 1);
    /// ```
    #[must_use]
    pub fn build(entries: &[CatalogEntry], filter: FilterLabel) -> Self {
        let _span = tracing::debug_span!("build_board",
            total_entries = entries.len(),
            filter = %filter
        )
        .entered();

        let mut buckets = Tier::ALL.map(TierBucket::empty);
        let mut unranked = 0_usize;

        for entry in entries.iter().filter(|entry| filter.matches(&entry.category)) {
            match entry.tier() {
                Some(tier) => buckets[tier.index()].entries.push(entry.clone()),
                None => unranked += 1,
            }
        }

        for bucket in &mut buckets {
            bucket.entries.sort_by(compare_position);
        }

        if unranked > 0 {
            tracing::debug!(unranked, "entries with unrecognized tier left off the board");
        }

        let board = Self { filter, buckets };
        tracing::debug!(placed = board.len(), "board built");
        board
    }

    /// Board with five empty buckets.
    #[must_use]
    pub fn empty(filter: FilterLabel) -> Self {
        Self {
            filter,
            buckets: Tier::ALL.map(TierBucket::empty),
        }
    }

    /// The filter this board was built with.
    #[must_use]
    pub const fn filter(&self) -> FilterLabel {
        self.filter
    }

    /// All buckets in tier order.
    #[must_use]
    pub const fn buckets(&self) -> &[TierBucket; 5] {
        &self.buckets
    }

    /// The bucket for one tier.
    #[must_use]
    pub const fn bucket(&self, tier: Tier) -> &TierBucket {
        &self.buckets[tier.index()]
    }

    /// Entry at `column` of the given tier row.
    #[must_use]
    pub fn entry_at(&self, tier: Tier, column: usize) -> Option<&CatalogEntry> {
        self.bucket(tier).entries.get(column)
    }

    /// Finds an entry on the board by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(Tier, usize)> {
        self.buckets.iter().find_map(|bucket| {
            bucket
                .entries
                .iter()
                .position(|entry| entry.name == name)
                .map(|column| (bucket.tier, column))
        })
    }

    /// Total number of placed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(TierBucket::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(TierBucket::is_empty)
    }
}

/// Orders two entries by `tierPosition`.
///
/// `-0.0` and `0.0` compare equal, matching numeric comparison. The catalog is
/// JSON, which cannot carry NaN, so `total_cmp` gives a consistent total order.
fn compare_position(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    normalize_zero(a.tier_position).total_cmp(&normalize_zero(b.tier_position))
}

fn normalize_zero(position: f64) -> f64 {
    if position == 0.0 {
        0.0
    } else {
        position
    }
}
