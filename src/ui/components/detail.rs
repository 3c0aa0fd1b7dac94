//! Detail panel renderer.
//!
//! Draws a bordered box over the board. The `[x]` close button sits on the top
//! border inside the rectangle the layout reserves for it.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::layout::DetailLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

const LABEL_COLUMN: usize = 14;

pub fn render_detail(geometry: &DetailLayout, panel: &DetailPanel, theme: &Theme) {
    let rect = geometry.panel;
    if rect.width < 6 || rect.height < 3 {
        return;
    }
    let inner = rect.width - 4;
    let border = Theme::fg(&theme.colors.detail_border);
    let background = theme
        .colors
        .detail_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    // Top border with close button.
    position_cursor(rect.row + 1, rect.col + 1);
    print!("{background}{border}\u{256d}");
    print!("{}", "\u{2500}".repeat(geometry.close.col.saturating_sub(rect.col + 1)));
    print!("{}[x]{}{border}", Theme::bold(), Theme::reset());
    print!("{background}");
    print!("{}", "\u{2500}".repeat(rect.right().saturating_sub(geometry.close.right() + 1)));
    print!("\u{256e}{}", Theme::reset());

    let body_lines = rect.height - 2;
    let mut lines: Vec<String> = Vec::with_capacity(body_lines);
    lines.push(String::new());

    let badge = panel.tier.map_or_else(String::new, |tier| {
        format!(
            "{}{}{} {tier} {} ",
            Theme::bold(),
            Theme::fg(&theme.colors.tier_label_fg),
            Theme::bg(theme.colors.tiers.for_tier(tier)),
            Theme::reset(),
        )
    });
    let badge_width = if panel.tier.is_some() { 4 } else { 0 };
    lines.push(format!(
        "{badge}{background}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        fit(&panel.title, inner.saturating_sub(badge_width)),
    ));
    lines.push(String::new());

    let value_width = inner.saturating_sub(LABEL_COLUMN);
    for field in &panel.fields {
        let color = if field.is_link {
            &theme.colors.link_fg
        } else {
            &theme.colors.text_normal
        };
        let underline = if field.is_link { Theme::underline() } else { "" };
        let value = fit(&field.value, value_width);
        let trimmed = value.trim_end();
        lines.push(format!(
            "{}{}{background}{underline}{}{trimmed}{}{background}{}",
            Theme::fg(&theme.colors.text_dim),
            fit(&format!("{}:", field.label), LABEL_COLUMN),
            Theme::fg(color),
            Theme::reset(),
            " ".repeat(value_width.saturating_sub(text_width(trimmed))),
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}{}",
        Theme::fg(&theme.colors.text_dim),
        fit(&panel.hints, inner)
    ));

    for offset in 0..body_lines {
        position_cursor(rect.row + 2 + offset, rect.col + 1);
        print!("{background}{border}\u{2502} {}", Theme::reset());
        print!("{background}");
        match lines.get(offset) {
            Some(line) if !line.is_empty() => print!("{line}"),
            _ => print!("{}", " ".repeat(inner)),
        }
        print!("{}{background}{border} \u{2502}{}", Theme::reset(), Theme::reset());
    }

    position_cursor(rect.row + rect.height, rect.col + 1);
    print!("{background}{border}\u{2570}");
    print!("{}", "\u{2500}".repeat(rect.width.saturating_sub(2)));
    print!("\u{256f}{}", Theme::reset());
}
