//! Tier rows renderer: coloured label blocks followed by wrapped cards.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::{CardSlot, OverflowSlot, TierRowLayout};
use crate::ui::theme::Theme;

pub fn render_tier_rows(rows: &[TierRowLayout], theme: &Theme) {
    for row in rows {
        render_label(row, theme);
        for card in &row.cards {
            render_card(card, theme);
        }
        if let Some(overflow) = &row.overflow {
            render_overflow(overflow, theme);
        }
    }
}

fn render_label(row: &TierRowLayout, theme: &Theme) {
    let label = row.label;
    let middle = label.row + label.height / 2;
    let text = row.tier.label();

    for line in label.row..label.row + label.height {
        position_cursor(line + 1, label.col + 1);
        print!("{}", Theme::bg(theme.colors.tiers.for_tier(row.tier)));
        print!("{}", Theme::fg(&theme.colors.tier_label_fg));
        if line == middle {
            print!("{}", Theme::bold());
            let left = label.width.saturating_sub(text.len()) / 2;
            print!(
                "{}{text}{}",
                " ".repeat(left),
                " ".repeat(label.width.saturating_sub(left + text.len()))
            );
        } else {
            print!("{}", " ".repeat(label.width));
        }
        print!("{}", Theme::reset());
    }

    if row.has_cursor {
        position_cursor(middle + 1, label.right() + 1);
        print!("{}", Theme::fg(&theme.colors.cursor_bg));
        print!("\u{258e}");
        print!("{}", Theme::reset());
    }
}

fn render_card(card: &CardSlot, theme: &Theme) {
    position_cursor(card.rect.row + 1, card.rect.col + 1);
    if card.is_cursor {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.cursor_fg));
        print!("{}", Theme::bg(&theme.colors.cursor_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.card_fg));
        print!("{}", Theme::bg(&theme.colors.border));
    }
    print!(" {} ", card.text);
    print!("{}", Theme::reset());
}

fn render_overflow(overflow: &OverflowSlot, theme: &Theme) {
    if overflow.rect.width == 0 {
        return;
    }
    position_cursor(overflow.rect.row + 1, overflow.rect.col + 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&format!(" +{} ", overflow.hidden), overflow.rect.width));
    print!("{}", Theme::reset());
}
