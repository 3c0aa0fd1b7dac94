//! Key bindings.
//!
//! Board view:
//! - `h`/`j`/`k`/`l` or arrows: move
//! - `Tab` / `Shift+Tab`: next / previous filter
//! - `1`–`5`: jump to a filter
//! - `Enter`: open details
//! - `t`: open the taxonomy reference
//! - `q`: close the plugin
//!
//! Detail panel:
//! - `v`: open the video review
//! - `b`: open the purchase link
//! - `t`: open the taxonomy reference
//! - `Esc` / `q`: close the panel

use super::Event;
use crate::domain::FilterLabel;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event.
///
/// Returns `None` for keys without a binding in the current view.
#[must_use]
pub fn map_key(key: &KeyWithModifier, detail_open: bool) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
        return None;
    }

    if detail_open {
        return match key.bare_key {
            BareKey::Esc | BareKey::Char('q') => Some(Event::Dismiss),
            BareKey::Char('v') => Some(Event::OpenVideo),
            BareKey::Char('b') => Some(Event::OpenPurchase),
            BareKey::Char('t') => Some(Event::OpenTaxonomy),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
        BareKey::Right | BareKey::Char('l') => Event::MoveRight,
        BareKey::Up | BareKey::Char('k') => Event::MoveUp,
        BareKey::Down | BareKey::Char('j') => Event::MoveDown,
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousFilter,
        BareKey::Tab => Event::NextFilter,
        BareKey::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            Event::FilterChanged(FilterLabel::ALL[index])
        }
        BareKey::Enter => Event::OpenCursor,
        BareKey::Char('t') => Event::OpenTaxonomy,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    #[test]
    fn vim_keys_and_arrows_move() {
        assert_eq!(map_key(&key(BareKey::Char('h')), false), Some(Event::MoveLeft));
        assert_eq!(map_key(&key(BareKey::Down), false), Some(Event::MoveDown));
        assert_eq!(map_key(&key(BareKey::Char('k')), false), Some(Event::MoveUp));
        assert_eq!(map_key(&key(BareKey::Right), false), Some(Event::MoveRight));
    }

    #[test]
    fn tab_cycles_filters() {
        assert_eq!(map_key(&key(BareKey::Tab), false), Some(Event::NextFilter));
        assert_eq!(
            map_key(&key(BareKey::Tab).with_shift_modifier(), false),
            Some(Event::PreviousFilter)
        );
    }

    #[test]
    fn digits_pick_filters() {
        assert_eq!(
            map_key(&key(BareKey::Char('1')), false),
            Some(Event::FilterChanged(FilterLabel::All))
        );
        assert_eq!(
            map_key(&key(BareKey::Char('5')), false),
            Some(Event::FilterChanged(FilterLabel::DevBoards))
        );
        assert_eq!(map_key(&key(BareKey::Char('6')), false), None);
    }

    #[test]
    fn q_closes_plugin_or_detail() {
        assert_eq!(map_key(&key(BareKey::Char('q')), false), Some(Event::CloseFocus));
        assert_eq!(map_key(&key(BareKey::Char('q')), true), Some(Event::Dismiss));
    }

    #[test]
    fn detail_keys() {
        assert_eq!(map_key(&key(BareKey::Esc), true), Some(Event::Dismiss));
        assert_eq!(map_key(&key(BareKey::Char('v')), true), Some(Event::OpenVideo));
        assert_eq!(map_key(&key(BareKey::Char('b')), true), Some(Event::OpenPurchase));
        assert_eq!(map_key(&key(BareKey::Char('j')), true), None);
        assert_eq!(map_key(&key(BareKey::Char('v')), false), None);
    }

    #[test]
    fn modified_keys_are_ignored() {
        assert_eq!(map_key(&key(BareKey::Char('j')).with_ctrl_modifier(), false), None);
    }
}
