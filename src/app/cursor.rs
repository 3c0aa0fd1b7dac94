//! Keyboard cursor over the tier board.
//!
//! The cursor addresses a card by tier row and column. Rows can be empty, in
//! which case the cursor sits on the row with nothing under it. Movement wraps
//! at both ends, vertically and horizontally.

use crate::domain::{Tier, TierBoard};

/// Position of the keyboard cursor on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub tier: Tier,
    pub column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            tier: Tier::S,
            column: 0,
        }
    }
}

impl Cursor {
    /// Moves one row down, wrapping from `D` to `S`.
    #[must_use]
    pub fn down(self, board: &TierBoard) -> Self {
        Self {
            tier: self.tier.next(),
            column: self.column,
        }
        .clamp(board)
    }

    /// Moves one row up, wrapping from `S` to `D`.
    #[must_use]
    pub fn up(self, board: &TierBoard) -> Self {
        Self {
            tier: self.tier.previous(),
            column: self.column,
        }
        .clamp(board)
    }

    /// Moves one card right, wrapping to the start of the row.
    #[must_use]
    pub fn right(self, board: &TierBoard) -> Self {
        let len = board.bucket(self.tier).len();
        if len == 0 {
            return self;
        }
        Self {
            tier: self.tier,
            column: (self.column + 1) % len,
        }
    }

    /// Moves one card left, wrapping to the end of the row.
    #[must_use]
    pub fn left(self, board: &TierBoard) -> Self {
        let len = board.bucket(self.tier).len();
        if len == 0 {
            return self;
        }
        let column = if self.column == 0 { len - 1 } else { self.column - 1 };
        Self {
            tier: self.tier,
            column,
        }
    }

    /// Keeps the column inside the current row.
    #[must_use]
    pub fn clamp(self, board: &TierBoard) -> Self {
        let len = board.bucket(self.tier).len();
        Self {
            tier: self.tier,
            column: self.column.min(len.saturating_sub(1)),
        }
    }

    /// Places the cursor on the named entry, or clamps if it is not on the board.
    #[must_use]
    pub fn follow(self, board: &TierBoard, name: &str) -> Self {
        board
            .find(name)
            .map_or_else(|| self.clamp(board), |(tier, column)| Self { tier, column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogEntry, FilterLabel};

    fn board() -> TierBoard {
        TierBoard::build(
            &[
                CatalogEntry::new("s1", "sbc", "S", 1.0),
                CatalogEntry::new("s2", "sbc", "S", 2.0),
                CatalogEntry::new("s3", "sbc", "S", 3.0),
                CatalogEntry::new("b1", "sbc", "B", 1.0),
            ],
            FilterLabel::All,
        )
    }

    #[test]
    fn horizontal_movement_wraps_within_row() {
        let board = board();
        let cursor = Cursor::default().left(&board);
        assert_eq!(cursor.column, 2);
        assert_eq!(cursor.right(&board).column, 0);
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let board = board();
        let cursor = Cursor { tier: Tier::S, column: 2 };
        let moved = cursor.down(&board);
        assert_eq!(moved, Cursor { tier: Tier::A, column: 0 });
        assert_eq!(moved.down(&board), Cursor { tier: Tier::B, column: 0 });
    }

    #[test]
    fn vertical_movement_wraps() {
        let board = board();
        assert_eq!(Cursor::default().up(&board).tier, Tier::D);
    }

    #[test]
    fn empty_row_ignores_horizontal_moves() {
        let board = board();
        let cursor = Cursor { tier: Tier::C, column: 0 };
        assert_eq!(cursor.right(&board), cursor);
        assert_eq!(cursor.left(&board), cursor);
    }

    #[test]
    fn follow_finds_entry() {
        let board = board();
        assert_eq!(
            Cursor::default().follow(&board, "b1"),
            Cursor { tier: Tier::B, column: 0 }
        );
        assert_eq!(
            Cursor { tier: Tier::S, column: 2 }.follow(&board, "gone"),
            Cursor { tier: Tier::S, column: 2 }
        );
    }
}
