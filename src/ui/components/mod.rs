//! Composable UI component renderers.
//!
//! Each component draws one part of the frame at positions taken from the
//! view model's [`Layout`](crate::ui::layout::Layout).
//!
//! # Components
//!
//! - [`header`]: Title and taxonomy reference
//! - [`filter_bar`]: Category chips
//! - [`tiers`]: Tier label blocks and cards
//! - [`status`]: Loading and failure notices
//! - [`detail`]: Detail panel for the selected entry
//! - [`footer`]: Key hints
//!
//! # Frame Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Taxonomy reference]
//! [Filter chips]
//! [Border]
//! [Tier rows S..D]
//! [Status line]
//! [Border]
//! [Footer]
//! ```
//!
//! The detail panel is drawn last, on top of everything else.

mod detail;
mod filter_bar;
mod footer;
mod header;
mod status;
mod tiers;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::BOARD_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use status::render_status;
use tiers::render_tier_rows;

/// Renders a horizontal border line at `row` (1-indexed).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a complete frame.
pub fn render_frame(vm: &UIViewModel, theme: &Theme) {
    let layout = &vm.layout;
    let cols = layout.cols;

    render_header(2, &vm.header, theme, cols);
    render_filter_bar(&layout.chips, vm.active_filter, theme);
    // Last row above the board, one-based.
    render_border(BOARD_TOP, &theme.colors.border, cols);

    render_tier_rows(&layout.tiers, theme);

    if let Some(status) = &vm.status {
        render_status(layout.status_row() + 1, status, theme, cols);
    }

    let footer_row = layout.footer_row() + 1;
    if footer_row > BOARD_TOP + 1 {
        render_border(footer_row - 1, &theme.colors.border, cols);
    }
    render_footer(footer_row, &vm.footer, theme, cols);

    if let (Some(geometry), Some(panel)) = (&layout.detail, &vm.detail) {
        render_detail(geometry, panel, theme);
    }
}
