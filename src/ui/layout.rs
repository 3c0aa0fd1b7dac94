//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! All coordinates are zero-based cells relative to the plugin pane. The
//! renderer converts them to the one-based positions ANSI cursor movement
//! expects.
//!
//! ```text
//! row 0            (blank)
//! row 1            SBC Tier List
//! row 2            taxonomy reference
//! row 3            [All] [SBCs] [eSBCs] [ESBs] [DevBoards]
//! row 4            ───────────────────────────────────────
//! rows 5..         S | card card card +3
//!                  A | card
//!                  ...
//! rows - 3         status line
//! rows - 2         ───────────────────────────────────────
//! rows - 1         key hints
//! ```

use crate::app::{Cursor, Event};
use crate::domain::{CatalogEntry, FilterLabel, Tier, TierBoard};
use crate::ui::helpers::{text_width, truncate};

/// First row of the filter bar.
pub const FILTER_ROW: usize = 3;
/// First row below the top chrome.
pub const BOARD_TOP: usize = 5;
/// Rows reserved below the board: status, border, footer.
const BOTTOM_CHROME: usize = 3;
/// Width of the coloured tier label block.
pub const LABEL_WIDTH: usize = 5;
/// Longest card text before truncation.
const CARD_MAX_TEXT: usize = 18;
const MAX_ROW_HEIGHT: usize = 3;
const DETAIL_MAX_WIDTH: usize = 72;
const DETAIL_MAX_HEIGHT: usize = 13;

/// An axis-aligned block of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.height && col >= self.col && col < self.col + self.width
    }

    /// First column to the right of the block.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.col + self.width
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Filter(FilterLabel),
    /// A card, keyed by entry name.
    Entry(String),
    /// Inside the open detail panel, away from the close button.
    DetailSurface,
    DetailClose,
    /// Outside the open detail panel.
    Backdrop,
    Nothing,
}

impl Hit {
    /// The event a left click on this target produces, if any.
    ///
    /// Clicking the close button or the backdrop dismisses the detail panel;
    /// clicks on the panel surface are swallowed.
    #[must_use]
    pub fn event(&self) -> Option<Event> {
        match self {
            Self::Filter(filter) => Some(Event::FilterChanged(*filter)),
            Self::Entry(name) => Some(Event::SelectionChanged(Some(name.clone()))),
            Self::DetailClose | Self::Backdrop => Some(Event::SelectionChanged(None)),
            Self::DetailSurface | Self::Nothing => None,
        }
    }
}

/// A filter chip in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSlot {
    pub filter: FilterLabel,
    pub rect: Rect,
}

/// A card on a tier row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    /// Entry name, the stable key of the card.
    pub name: String,
    /// Text drawn inside the card, possibly truncated.
    pub text: String,
    pub rect: Rect,
    pub is_cursor: bool,
}

/// The `+N` marker for cards that did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowSlot {
    pub hidden: usize,
    pub rect: Rect,
}

/// One tier row: label block plus cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRowLayout {
    pub tier: Tier,
    pub label: Rect,
    pub cards: Vec<CardSlot>,
    pub overflow: Option<OverflowSlot>,
    /// Whether the keyboard cursor is on this row.
    pub has_cursor: bool,
}

/// Geometry of the open detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub panel: Rect,
    pub close: Rect,
}

/// Complete screen geometry for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub chips: Vec<ChipSlot>,
    /// Tier rows that fit on screen, in `S..D` order.
    pub tiers: Vec<TierRowLayout>,
    pub detail: Option<DetailLayout>,
}

impl Layout {
    /// Computes the geometry for a board on a `rows` × `cols` pane.
    #[must_use]
    pub fn compute(board: &TierBoard, cursor: Cursor, detail_open: bool, rows: usize, cols: usize) -> Self {
        let chips = Self::place_chips(cols);

        let board_bottom = rows.saturating_sub(BOTTOM_CHROME);
        let available = board_bottom.saturating_sub(BOARD_TOP);
        let row_height = (available / Tier::ALL.len()).clamp(1, MAX_ROW_HEIGHT);

        let tiers = board
            .buckets()
            .iter()
            .enumerate()
            .map_while(|(index, bucket)| {
                let top = BOARD_TOP + index * row_height;
                if top + row_height > board_bottom {
                    return None;
                }
                let cursor_column = (cursor.tier == bucket.tier).then_some(cursor.column);
                let (cards, overflow) =
                    Self::place_row(&bucket.entries, cursor_column, top, row_height, cols);
                Some(TierRowLayout {
                    tier: bucket.tier,
                    label: Rect::new(top, 0, LABEL_WIDTH, row_height),
                    cards,
                    overflow,
                    has_cursor: cursor_column.is_some(),
                })
            })
            .collect();

        let detail = detail_open.then(|| Self::place_detail(rows, cols));

        Self {
            rows,
            cols,
            chips,
            tiers,
            detail,
        }
    }

    /// Row of the loading / failure notice.
    #[must_use]
    pub const fn status_row(&self) -> usize {
        self.rows.saturating_sub(BOTTOM_CHROME)
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Resolves a click position.
    ///
    /// While the detail panel is open it captures every click: the close
    /// button, the panel surface, or the backdrop around it. Nothing below the
    /// panel can be hit.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Hit {
        if let Some(detail) = &self.detail {
            if detail.close.contains(row, col) {
                return Hit::DetailClose;
            }
            if detail.panel.contains(row, col) {
                return Hit::DetailSurface;
            }
            return Hit::Backdrop;
        }

        if let Some(chip) = self.chips.iter().find(|chip| chip.rect.contains(row, col)) {
            return Hit::Filter(chip.filter);
        }

        self.tiers
            .iter()
            .flat_map(|tier| tier.cards.iter())
            .find(|card| card.rect.contains(row, col))
            .map_or(Hit::Nothing, |card| Hit::Entry(card.name.clone()))
    }

    fn place_chips(cols: usize) -> Vec<ChipSlot> {
        let mut col = 2;
        let mut chips = Vec::with_capacity(FilterLabel::ALL.len());
        for filter in FilterLabel::ALL {
            let width = filter.label().len() + 2;
            if col + width > cols {
                tracing::trace!(%filter, cols, "filter chip does not fit");
                break;
            }
            chips.push(ChipSlot {
                filter,
                rect: Rect::new(FILTER_ROW, col, width, 1),
            });
            col += width + 1;
        }
        chips
    }

    /// Lays out the cards of one row, wrapping over `height` lines.
    ///
    /// Cards are placed from the first entry. When the cursor sits on a card
    /// that would not be visible, placement starts at the cursor instead.
    fn place_row(
        entries: &[CatalogEntry],
        cursor_column: Option<usize>,
        top: usize,
        height: usize,
        cols: usize,
    ) -> (Vec<CardSlot>, Option<OverflowSlot>) {
        let placed = Self::place_cards(entries, 0, cursor_column, top, height, cols);
        match cursor_column {
            Some(column) if column < entries.len() && !placed.0.iter().any(|card| card.is_cursor) => {
                Self::place_cards(entries, column, cursor_column, top, height, cols)
            }
            _ => placed,
        }
    }

    fn place_cards(
        entries: &[CatalogEntry],
        start: usize,
        cursor_column: Option<usize>,
        top: usize,
        height: usize,
        cols: usize,
    ) -> (Vec<CardSlot>, Option<OverflowSlot>) {
        let left = LABEL_WIDTH + 1;
        let right = cols.saturating_sub(1);
        if right <= left + 2 {
            return (
                Vec::new(),
                (!entries.is_empty()).then(|| OverflowSlot {
                    hidden: entries.len(),
                    rect: Rect::new(top, left, 0, 1),
                }),
            );
        }
        let max_text = CARD_MAX_TEXT.min(right - left - 2);

        let mut cards: Vec<CardSlot> = Vec::new();
        let mut line = 0;
        let mut col = left;
        for (index, entry) in entries.iter().enumerate().skip(start) {
            let text = truncate(&entry.name, max_text);
            let width = text_width(&text) + 2;
            if col + width > right {
                line += 1;
                col = left;
                if line >= height {
                    break;
                }
            }
            cards.push(CardSlot {
                name: entry.name.clone(),
                text,
                rect: Rect::new(top + line, col, width, 1),
                is_cursor: cursor_column == Some(index),
            });
            col += width + 1;
        }

        if cards.len() == entries.len() {
            return (cards, None);
        }

        // Make room for the marker at the end of the last used line.
        loop {
            let hidden = entries.len() - cards.len();
            let marker_width = format!("+{hidden}").len() + 2;
            let (row, col) = cards
                .last()
                .map_or((top, left), |card| (card.rect.row, card.rect.right() + 1));
            // The cursor card outranks the marker, which is clipped instead.
            let cursor_is_last = cards.last().is_some_and(|card| card.is_cursor);
            if col + marker_width <= right || cards.is_empty() || cursor_is_last {
                let rect = Rect::new(row, col, marker_width.min(right.saturating_sub(col)), 1);
                return (cards, Some(OverflowSlot { hidden, rect }));
            }
            cards.pop();
        }
    }

    fn place_detail(rows: usize, cols: usize) -> DetailLayout {
        let width = cols.saturating_sub(4).min(DETAIL_MAX_WIDTH);
        let height = rows.saturating_sub(2).min(DETAIL_MAX_HEIGHT);
        let panel = Rect::new(
            rows.saturating_sub(height) / 2,
            cols.saturating_sub(width) / 2,
            width,
            height,
        );
        let close = Rect::new(panel.row, panel.right().saturating_sub(5), 3, 1);
        DetailLayout { panel, close }
    }
}
