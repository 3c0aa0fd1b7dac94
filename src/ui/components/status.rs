//! Status line renderer for loading and failure notices.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) {
    let color = match status.kind {
        StatusKind::Info => &theme.colors.status_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("  {}", fit(&status.text, cols.saturating_sub(2)));
    print!("{}", Theme::reset());
}
