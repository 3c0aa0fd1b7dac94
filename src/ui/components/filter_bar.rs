//! Filter bar renderer.
//!
//! Each chip occupies the rectangle computed by the layout, so what is drawn
//! is exactly what a click resolves to.

use crate::domain::FilterLabel;
use crate::ui::helpers::position_cursor;
use crate::ui::layout::ChipSlot;
use crate::ui::theme::Theme;

pub fn render_filter_bar(chips: &[ChipSlot], active: FilterLabel, theme: &Theme) {
    for chip in chips {
        position_cursor(chip.rect.row + 1, chip.rect.col + 1);
        if chip.filter == active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.chip_fg));
        }
        print!(" {} ", chip.filter.label());
        print!("{}", Theme::reset());
    }
}
